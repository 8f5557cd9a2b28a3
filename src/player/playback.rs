//! Playback state machine
//!
//! The controller stores only the id of the loaded video and resolves it
//! against the catalogue on every call, so flag changes made between calls
//! are always seen.

use super::outcome::{PauseOutcome, PlayOutcome};
use crate::error::{PlayerError, Result};
use crate::model::{Catalogue, Video};
use rand::seq::IndexedRandom;
use rand::Rng;

/// What the player is doing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No video loaded
    #[default]
    Idle,

    /// Video loaded and playing
    Playing(String),

    /// Video loaded and paused
    Paused(String),
}

/// Owns the current playback state
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Id of the loaded video, playing or paused
    pub fn current_video_id(&self) -> Option<&str> {
        match &self.state {
            PlaybackState::Idle => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }

    /// Resolve the loaded video and whether it is playing
    pub fn current<'a>(&self, catalogue: &'a Catalogue) -> Result<(&'a Video, bool)> {
        let id = self.current_video_id().ok_or(PlayerError::NothingPlaying)?;
        let video = catalogue
            .get(id)
            .ok_or_else(|| PlayerError::NoSuchVideo { id: id.to_string() })?;
        Ok((video, self.is_playing()))
    }

    /// Start playing `id`, stopping whatever was loaded
    ///
    /// Playing the video that is already loaded restarts it.
    pub fn play(&mut self, catalogue: &Catalogue, id: &str) -> Result<PlayOutcome> {
        let video = catalogue
            .get(id)
            .ok_or_else(|| PlayerError::NoSuchVideo { id: id.to_string() })?;
        if video.is_flagged() {
            return Err(PlayerError::VideoFlagged {
                id: id.to_string(),
                reason: video.flag_reason().to_string(),
            });
        }

        let stopped = match self.state {
            PlaybackState::Idle => None,
            _ => Some(self.stop(catalogue)?),
        };

        log::debug!("Playing video {}", video.id());
        self.state = PlaybackState::Playing(video.id().to_string());

        Ok(PlayOutcome {
            stopped,
            playing: video.clone(),
        })
    }

    /// Stop the loaded video
    pub fn stop(&mut self, catalogue: &Catalogue) -> Result<Video> {
        let (video, _) = self.current(catalogue)?;
        log::debug!("Stopping video {}", video.id());
        self.state = PlaybackState::Idle;
        Ok(video.clone())
    }

    /// Pause the playing video
    pub fn pause(&mut self, catalogue: &Catalogue) -> Result<PauseOutcome> {
        let (video, playing) = self.current(catalogue)?;
        if !playing {
            return Ok(PauseOutcome::AlreadyPaused(video.clone()));
        }

        log::debug!("Pausing video {}", video.id());
        self.state = PlaybackState::Paused(video.id().to_string());
        Ok(PauseOutcome::Paused(video.clone()))
    }

    /// Resume the paused video
    pub fn continue_playback(&mut self, catalogue: &Catalogue) -> Result<Video> {
        let (video, playing) = self.current(catalogue)?;
        if playing {
            return Err(PlayerError::NotPaused {
                id: video.id().to_string(),
            });
        }

        log::debug!("Continuing video {}", video.id());
        self.state = PlaybackState::Playing(video.id().to_string());
        Ok(video.clone())
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random<R>(&mut self, catalogue: &Catalogue, rng: &mut R) -> Result<PlayOutcome>
    where
        R: Rng + ?Sized,
    {
        let allowed: Vec<&Video> = catalogue.allowed_videos().collect();
        let chosen = allowed.choose(rng).ok_or(PlayerError::NoVideosAvailable)?;
        let id = chosen.id().to_string();
        self.play(catalogue, &id)
    }
}
