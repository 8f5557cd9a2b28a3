//! Line-oriented command interface
//!
//! Parses command lines, runs them against a [`VideoPlayer`], and renders
//! each outcome as human-readable status lines.
//!
//! [`VideoPlayer`]: crate::player::VideoPlayer

mod command;
mod render;
mod session;

pub use command::{Command, ParseError};
pub use session::Session;
