//! Success data returned by player operations
//!
//! Videos are cloned snapshots taken when the operation ran, so an outcome
//! can be rendered after the player has moved on.

use crate::model::Video;

/// A video started playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Video that was stopped to make way, if one was loaded
    pub stopped: Option<Video>,

    pub playing: Video,
}

/// Result of a pause request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseOutcome {
    Paused(Video),

    /// The video was already paused; nothing changed
    AlreadyPaused(Video),
}

/// The currently loaded video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// A video was flagged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    /// Set when the flagged video was loaded and had to be stopped first
    pub stopped: Option<Video>,

    /// The video after flagging
    pub flagged: Video,
}

/// A playlist resolved against the catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    /// Display name as stored at creation
    pub name: String,

    /// Videos in playlist order
    pub videos: Vec<Video>,
}
