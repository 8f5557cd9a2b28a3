//! Catalogue provider
//!
//! Reads the line-based video list (`Title | id | #tag1 , #tag2`) that seeds
//! a session. The catalogue is loaded once and only its flag state changes
//! afterwards.

mod entry;
mod parser;

pub use parser::parse_catalogue;

use crate::model::Catalogue;
use anyhow::{Context, Result};
use std::path::Path;

/// Catalogue shipped with the binary, used when no file is given
pub const DEFAULT_CATALOGUE: &str = include_str!("../../data/videos.txt");

/// Load a catalogue file from disk
///
/// # Arguments
/// * `path` - Path to a video list in the `Title | id | tags` format
pub fn load_catalogue(path: &Path) -> Result<Catalogue> {
    log::info!("Loading video catalogue from {:?}", path);
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open video catalogue: {:?}", path))?;

    parse_catalogue(&contents)
        .with_context(|| format!("Failed to parse video catalogue: {:?}", path))
}

/// Parse the embedded default catalogue
pub fn default_catalogue() -> Result<Catalogue> {
    log::info!("Loading built-in video catalogue");
    parse_catalogue(DEFAULT_CATALOGUE).context("Failed to parse built-in video catalogue")
}
