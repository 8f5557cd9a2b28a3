//! Data model for the video catalogue
//!
//! These types hold the catalogue's videos and the user's playlists. They do
//! no validation of their own beyond what their fields make impossible; the
//! player layer checks preconditions before mutating them.

mod catalogue;
mod playlist;
mod video;

pub use catalogue::Catalogue;
pub use playlist::{playlist_key, Playlist};
pub use video::{Video, DEFAULT_FLAG_REASON};
