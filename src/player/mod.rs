//! Video player core
//!
//! [`VideoPlayer`] is the entry point: it owns the catalogue, the playback
//! state machine and the playlist registry, checks every precondition, and
//! returns a typed outcome for the presentation layer to render.

mod facade;
mod outcome;
mod playback;
mod registry;
mod search;

pub use facade::VideoPlayer;
pub use outcome::{FlagOutcome, NowPlaying, PauseOutcome, PlayOutcome, PlaylistView};
pub use playback::{PlaybackController, PlaybackState};
pub use registry::PlaylistRegistry;
pub use search::{parse_selection, SearchMode, SearchResults};
