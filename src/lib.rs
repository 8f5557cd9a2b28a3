//! Video Player - in-memory video catalogue manager
//!
//! This library tracks a fixed catalogue of videos and lets a single user
//! play them, flag them for moderation, and organise them into playlists
//! through a line-oriented command session.

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod player;

pub use cli::Session;
pub use config::SessionConfig;
pub use error::PlayerError;
pub use player::VideoPlayer;
