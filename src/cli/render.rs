//! Status line rendering
//!
//! Each function turns one operation's outcome into the lines shown to the
//! user. Wording is presentation only; the player never depends on it.

use crate::error::{PlayerError, Result};
use crate::model::Video;
use crate::player::{FlagOutcome, NowPlaying, PauseOutcome, PlayOutcome, PlaylistView, SearchResults};

const INDENT: &str = "    ";

pub fn number_of_videos(count: usize) -> Vec<String> {
    vec![format!("{} videos in the library", count)]
}

pub fn all_videos(videos: &[&Video]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(|v| format!("{INDENT}{v}")));
    lines
}

pub fn play(result: &Result<PlayOutcome>) -> Vec<String> {
    match result {
        Ok(outcome) => played(outcome),
        Err(e) => vec![format!("Cannot play video: {e}")],
    }
}

pub fn play_random(result: &Result<PlayOutcome>) -> Vec<String> {
    match result {
        Err(e @ PlayerError::NoVideosAvailable) => vec![e.to_string()],
        other => play(other),
    }
}

fn played(outcome: &PlayOutcome) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if let Some(stopped) = &outcome.stopped {
        lines.push(stopping(stopped));
    }
    lines.push(format!("Playing video: {}", outcome.playing.title()));
    lines
}

fn stopping(video: &Video) -> String {
    format!("Stopping video: {}", video.title())
}

pub fn stop(result: &Result<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![stopping(video)],
        Err(e) => vec![format!("Cannot stop video: {e}")],
    }
}

pub fn pause(result: &Result<PauseOutcome>) -> Vec<String> {
    match result {
        Ok(PauseOutcome::Paused(video)) => vec![format!("Pausing video: {}", video.title())],
        Ok(PauseOutcome::AlreadyPaused(video)) => {
            vec![format!("Video already paused: {}", video.title())]
        }
        Err(e) => vec![format!("Cannot pause video: {e}")],
    }
}

pub fn continue_video(result: &Result<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Continuing video: {}", video.title())],
        Err(e) => vec![format!("Cannot continue video: {e}")],
    }
}

pub fn show_playing(result: &Result<NowPlaying>) -> Vec<String> {
    match result {
        Ok(now) if now.paused => vec![format!("Currently playing: {} - PAUSED", now.video)],
        Ok(now) => vec![format!("Currently playing: {}", now.video)],
        Err(e) => vec![e.to_string()],
    }
}

pub fn create_playlist(name: &str, result: &Result<()>) -> Vec<String> {
    match result {
        Ok(()) => vec![format!("Successfully created new playlist: {name}")],
        Err(e) => vec![format!("Cannot create playlist: {e}")],
    }
}

pub fn add_to_playlist(name: &str, result: &Result<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Added video to {name}: {}", video.title())],
        Err(e) => vec![format!("Cannot add video to {name}: {e}")],
    }
}

pub fn remove_from_playlist(name: &str, result: &Result<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Removed video from {name}: {}", video.title())],
        Err(e) => vec![format!("Cannot remove video from {name}: {e}")],
    }
}

pub fn clear_playlist(name: &str, result: &Result<()>) -> Vec<String> {
    match result {
        Ok(()) => vec![format!("Successfully removed all videos from {name}")],
        Err(e) => vec![format!("Cannot clear playlist {name}: {e}")],
    }
}

pub fn delete_playlist(name: &str, result: &Result<()>) -> Vec<String> {
    match result {
        Ok(()) => vec![format!("Deleted playlist: {name}")],
        Err(e) => vec![format!("Cannot delete playlist {name}: {e}")],
    }
}

pub fn show_playlist(name: &str, result: &Result<PlaylistView>) -> Vec<String> {
    match result {
        Ok(view) => {
            let mut lines = vec![format!("Showing playlist: {name}")];
            if view.videos.is_empty() {
                lines.push(format!("{INDENT}No videos here yet"));
            }
            lines.extend(view.videos.iter().map(|v| format!("{INDENT}{v}")));
            lines
        }
        Err(e) => vec![format!("Cannot show playlist {name}: {e}")],
    }
}

pub fn all_playlists(names: &[&str]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }
    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().map(|n| format!("{INDENT}{n}")));
    lines
}

/// Numbered results plus the selection prompt
pub fn search_results(results: &SearchResults) -> Vec<String> {
    let mut lines = vec![format!("Here are the results for {}:", results.term)];
    lines.extend(
        results
            .videos
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{}) {v}", i + 1)),
    );
    lines.push(
        "Would you like to play any of the above? If yes, specify the number of the video."
            .to_string(),
    );
    lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
    lines
}

pub fn flag_video(result: &Result<FlagOutcome>) -> Vec<String> {
    match result {
        Ok(outcome) => {
            let mut lines = Vec::with_capacity(2);
            if let Some(stopped) = &outcome.stopped {
                lines.push(stopping(stopped));
            }
            lines.push(format!(
                "Successfully flagged video: {} {}",
                outcome.flagged.title(),
                outcome.flagged.flag_reason_display()
            ));
            lines
        }
        Err(e) => vec![format!("Cannot flag video: {e}")],
    }
}

pub fn allow_video(result: &Result<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Successfully removed flag from video: {}", video.title())],
        Err(e) => vec![format!("Cannot remove flag from video: {e}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> Video {
        Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"])
    }

    #[test]
    fn test_play_switch_lines() {
        let outcome = PlayOutcome {
            stopped: Some(Video::new("dogs", "Funny Dogs", ["#dog"])),
            playing: video(),
        };
        assert_eq!(
            play(&Ok(outcome)),
            ["Stopping video: Funny Dogs", "Playing video: Amazing Cats"]
        );
    }

    #[test]
    fn test_flagged_play_includes_reason() {
        let err = PlayerError::VideoFlagged {
            id: "x".into(),
            reason: "dont_like_cats".into(),
        };
        assert_eq!(
            play(&Err(err)),
            ["Cannot play video: Video is currently flagged (reason: dont_like_cats)"]
        );
    }

    #[test]
    fn test_play_random_without_videos() {
        assert_eq!(
            play_random(&Err(PlayerError::NoVideosAvailable)),
            ["No videos available"]
        );
    }

    #[test]
    fn test_show_playing_paused() {
        let now = NowPlaying {
            video: video(),
            paused: true,
        };
        assert_eq!(
            show_playing(&Ok(now)),
            ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
        );
        assert_eq!(
            show_playing(&Err(PlayerError::NothingPlaying)),
            ["No video is currently playing"]
        );
    }

    #[test]
    fn test_empty_playlist() {
        let view = PlaylistView {
            name: "My_Playlist".into(),
            videos: Vec::new(),
        };
        assert_eq!(
            show_playlist("my_playlist", &Ok(view)),
            ["Showing playlist: my_playlist", "    No videos here yet"]
        );
    }

    #[test]
    fn test_search_listing() {
        let results = SearchResults {
            term: "cat".into(),
            videos: vec![video()],
        };
        let lines = search_results(&results);
        assert_eq!(lines[0], "Here are the results for cat:");
        assert_eq!(lines[1], "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]");
        assert_eq!(lines.len(), 4);
    }
}
