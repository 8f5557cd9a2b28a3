//! Error types for player operations
//!
//! Every variant is a reported outcome, never a fatal condition. The
//! `Display` text is the reason part of a status line; the presentation layer
//! supplies the operation prefix ("Cannot play video: ...").

use thiserror::Error;

/// Result type alias for player operations.
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Why a player operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// No catalogue video has this id.
    #[error("Video does not exist")]
    NoSuchVideo { id: String },

    /// No playlist matches this name (case-insensitively).
    #[error("Playlist does not exist")]
    NoSuchPlaylist { name: String },

    /// A playlist with the same key already exists.
    #[error("A playlist with the same name already exists")]
    AlreadyExists { name: String },

    #[error("Video is already flagged")]
    AlreadyFlagged { id: String },

    #[error("Video is not flagged")]
    NotFlagged { id: String },

    /// The target video is flagged, which blocks playback and playlist adds.
    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { id: String, reason: String },

    #[error("Video already added")]
    DuplicateInPlaylist { playlist: String, id: String },

    #[error("Video is not in playlist")]
    NotInPlaylist { playlist: String, id: String },

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused { id: String },

    /// Random playback found no unflagged video.
    #[error("No videos available")]
    NoVideosAvailable,

    #[error("No search results for {term}")]
    NoResults { term: String },
}
