//! Command facade over the catalogue, playback and playlists

use super::outcome::{FlagOutcome, NowPlaying, PauseOutcome, PlayOutcome, PlaylistView};
use super::playback::PlaybackController;
use super::registry::PlaylistRegistry;
use super::search::{SearchMode, SearchResults};
use crate::error::{PlayerError, Result};
use crate::model::{Catalogue, Playlist, Video};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One session's worth of player state
///
/// Every operation validates fully before mutating, so a rejected command
/// leaves the session exactly as it was.
pub struct VideoPlayer {
    catalogue: Catalogue,
    playback: PlaybackController,
    playlists: PlaylistRegistry,
    rng: StdRng,
}

impl VideoPlayer {
    /// Create a player with an OS-seeded random source
    pub fn new(catalogue: Catalogue) -> Self {
        Self::with_rng(catalogue, StdRng::from_os_rng())
    }

    /// Create a player whose random playback is reproducible
    pub fn with_seed(catalogue: Catalogue, seed: u64) -> Self {
        Self::with_rng(catalogue, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalogue: Catalogue, rng: StdRng) -> Self {
        log::debug!("Starting player with {} videos", catalogue.len());
        Self {
            catalogue,
            playback: PlaybackController::new(),
            playlists: PlaylistRegistry::new(),
            rng,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    pub fn number_of_videos(&self) -> usize {
        self.catalogue.len()
    }

    /// All videos sorted by title
    pub fn list_videos(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.catalogue.videos().collect();
        videos.sort_by(|a, b| a.title().cmp(b.title()));
        videos
    }

    pub fn play(&mut self, video_id: &str) -> Result<PlayOutcome> {
        self.playback.play(&self.catalogue, video_id)
    }

    pub fn stop(&mut self) -> Result<Video> {
        self.playback.stop(&self.catalogue)
    }

    pub fn pause(&mut self) -> Result<PauseOutcome> {
        self.playback.pause(&self.catalogue)
    }

    pub fn continue_video(&mut self) -> Result<Video> {
        self.playback.continue_playback(&self.catalogue)
    }

    pub fn play_random(&mut self) -> Result<PlayOutcome> {
        self.playback.play_random(&self.catalogue, &mut self.rng)
    }

    pub fn show_playing(&self) -> Result<NowPlaying> {
        let (video, playing) = self.playback.current(&self.catalogue)?;
        Ok(NowPlaying {
            video: video.clone(),
            paused: !playing,
        })
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists.create(name).map(|_| ())
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Video> {
        self.playlists.add_video_to(&self.catalogue, name, video_id)
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<Video> {
        self.playlists
            .remove_video_from(&self.catalogue, name, video_id)
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists.clear(name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists.delete(name).map(|_| ())
    }

    /// A playlist with its videos resolved against the catalogue
    pub fn show_playlist(&self, name: &str) -> Result<PlaylistView> {
        let playlist = self.playlists.get(name)?;
        let videos = playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.catalogue.get(id))
            .cloned()
            .collect();

        Ok(PlaylistView {
            name: playlist.name().to_string(),
            videos,
        })
    }

    /// Display names of all playlists, ordered case-insensitively
    pub fn show_all_playlists(&self) -> Vec<&str> {
        self.playlists
            .list_all()
            .into_iter()
            .map(Playlist::name)
            .collect()
    }

    /// Search unflagged videos
    ///
    /// Pass the results and the user's answer to
    /// [`VideoPlayer::select_result`] to play one of them.
    pub fn search(&self, term: &str, mode: SearchMode) -> Result<SearchResults> {
        SearchResults::collect(&self.catalogue, term, mode)
    }

    /// Play the result picked by a 1-based `token`
    ///
    /// Tokens that do not pick a result are a decline: `Ok(None)`, nothing
    /// changes.
    pub fn select_result(
        &mut self,
        results: &SearchResults,
        token: &str,
    ) -> Result<Option<PlayOutcome>> {
        match results.select(token) {
            Some(video) => self.play(video.id()).map(Some),
            None => {
                log::debug!("Search selection {:?} declined", token);
                Ok(None)
            }
        }
    }

    /// Flag a video, stopping it first if it is loaded
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<FlagOutcome> {
        let video = self
            .catalogue
            .get(video_id)
            .ok_or_else(|| PlayerError::NoSuchVideo {
                id: video_id.to_string(),
            })?;
        if video.is_flagged() {
            return Err(PlayerError::AlreadyFlagged {
                id: video_id.to_string(),
            });
        }

        let stopped = if self.playback.current_video_id() == Some(video_id) {
            Some(self.playback.stop(&self.catalogue)?)
        } else {
            None
        };

        let video = self
            .catalogue
            .get_mut(video_id)
            .ok_or_else(|| PlayerError::NoSuchVideo {
                id: video_id.to_string(),
            })?;
        video.flag(reason);
        log::info!("Flagged video {} {}", video_id, video.flag_reason_display());

        Ok(FlagOutcome {
            stopped,
            flagged: video.clone(),
        })
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, video_id: &str) -> Result<Video> {
        let video = self
            .catalogue
            .get_mut(video_id)
            .ok_or_else(|| PlayerError::NoSuchVideo {
                id: video_id.to_string(),
            })?;
        if !video.is_flagged() {
            return Err(PlayerError::NotFlagged {
                id: video_id.to_string(),
            });
        }

        video.unflag();
        log::info!("Allowed video {}", video_id);
        Ok(video.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlaybackState;

    fn player() -> VideoPlayer {
        let catalogue = [
            Video::new("dog", "Dog Video", ["#dog"]),
            Video::new("cat", "Cat Video", ["#cat"]),
            Video::new("bird", "Amazing Birds", ["#bird"]),
        ]
        .into_iter()
        .collect();
        VideoPlayer::with_seed(catalogue, 42)
    }

    #[test]
    fn test_list_videos_sorted_by_title() {
        let player = player();
        let titles: Vec<&str> = player.list_videos().into_iter().map(Video::title).collect();
        assert_eq!(titles, ["Amazing Birds", "Cat Video", "Dog Video"]);
        assert_eq!(player.number_of_videos(), 3);
    }

    #[test]
    fn test_search_and_select() {
        let mut player = player();
        let results = player.search("cat", SearchMode::Title).unwrap();
        assert_eq!(results.videos.len(), 1);

        for token in ["0", "99", "abc"] {
            assert_eq!(player.select_result(&results, token).unwrap(), None);
            assert_eq!(player.playback().state(), &PlaybackState::Idle);
        }

        let outcome = player.select_result(&results, "1").unwrap().unwrap();
        assert_eq!(outcome.playing.id(), "cat");
        assert_eq!(player.playback().current_video_id(), Some("cat"));
    }

    #[test]
    fn test_flag_stops_loaded_video() {
        let mut player = player();
        player.play("dog").unwrap();
        player.pause().unwrap();

        let outcome = player.flag_video("dog", Some("too loud")).unwrap();
        assert_eq!(outcome.stopped.as_ref().map(Video::id), Some("dog"));
        assert_eq!(outcome.flagged.flag_reason(), "too loud");
        assert_eq!(player.playback().state(), &PlaybackState::Idle);
    }

    #[test]
    fn test_flag_other_video_keeps_playing() {
        let mut player = player();
        player.play("dog").unwrap();

        let outcome = player.flag_video("cat", None).unwrap();
        assert!(outcome.stopped.is_none());
        assert!(player.playback().is_playing());
    }

    #[test]
    fn test_flag_preconditions() {
        let mut player = player();
        assert_eq!(
            player.flag_video("zzz", None).unwrap_err(),
            PlayerError::NoSuchVideo { id: "zzz".into() }
        );

        player.flag_video("cat", None).unwrap();
        assert_eq!(
            player.flag_video("cat", Some("again")).unwrap_err(),
            PlayerError::AlreadyFlagged { id: "cat".into() }
        );
        assert_eq!(
            player.catalogue().get("cat").unwrap().flag_reason(),
            crate::model::DEFAULT_FLAG_REASON
        );
    }

    #[test]
    fn test_allow_video() {
        let mut player = player();
        assert_eq!(
            player.allow_video("cat").unwrap_err(),
            PlayerError::NotFlagged { id: "cat".into() }
        );

        player.flag_video("cat", Some("x")).unwrap();
        assert!(player.play("cat").is_err());

        let video = player.allow_video("cat").unwrap();
        assert!(!video.is_flagged());
        assert!(player.play("cat").is_ok());
    }

    #[test]
    fn test_show_playing() {
        let mut player = player();
        assert_eq!(player.show_playing().unwrap_err(), PlayerError::NothingPlaying);

        player.play("bird").unwrap();
        assert!(!player.show_playing().unwrap().paused);

        player.pause().unwrap();
        let now = player.show_playing().unwrap();
        assert_eq!(now.video.id(), "bird");
        assert!(now.paused);
    }

    #[test]
    fn test_show_playlist() {
        let mut player = player();
        player.create_playlist("Pets").unwrap();
        player.add_to_playlist("pets", "dog").unwrap();
        player.add_to_playlist("PETS", "cat").unwrap();

        let view = player.show_playlist("pEtS").unwrap();
        assert_eq!(view.name, "Pets");
        let ids: Vec<&str> = view.videos.iter().map(Video::id).collect();
        assert_eq!(ids, ["dog", "cat"]);

        player.delete_playlist("pets").unwrap();
        assert!(player.show_playlist("pets").is_err());
        assert!(player.show_all_playlists().is_empty());
    }

    #[test]
    fn test_play_random_respects_flags() {
        let mut player = player();
        player.flag_video("dog", None).unwrap();
        player.flag_video("cat", None).unwrap();

        assert_eq!(player.play_random().unwrap().playing.id(), "bird");

        player.flag_video("bird", None).unwrap();
        assert_eq!(player.play_random().unwrap_err(), PlayerError::NoVideosAvailable);
        assert_eq!(player.playback().state(), &PlaybackState::Idle);
    }
}
