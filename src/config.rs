//! Session configuration

use crate::catalogue::{default_catalogue, load_catalogue};
use crate::player::VideoPlayer;
use anyhow::Result;
use std::path::PathBuf;

/// Where a session gets its videos
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogueSource {
    /// The catalogue compiled into the binary
    #[default]
    BuiltIn,

    /// A catalogue file on disk
    File(PathBuf),
}

/// Configuration for a player session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub catalogue: CatalogueSource,

    /// Seed for PLAY_RANDOM (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration using the built-in catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Load videos from a file instead
    pub fn with_catalogue_file(mut self, path: PathBuf) -> Self {
        self.catalogue = CatalogueSource::File(path);
        self
    }

    /// Make random playback reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the catalogue and build a player
    pub fn build_player(&self) -> Result<VideoPlayer> {
        let catalogue = match &self.catalogue {
            CatalogueSource::BuiltIn => default_catalogue()?,
            CatalogueSource::File(path) => load_catalogue(path)?,
        };

        Ok(match self.seed {
            Some(seed) => VideoPlayer::with_seed(catalogue, seed),
            None => VideoPlayer::new(catalogue),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_built_in_catalogue() {
        let config = SessionConfig::new();
        assert_eq!(config.catalogue, CatalogueSource::BuiltIn);
        assert!(config.seed.is_none());

        let player = config.build_player().unwrap();
        assert_eq!(player.number_of_videos(), 5);
    }

    #[test]
    fn test_missing_catalogue_file() {
        let config = SessionConfig::new().with_catalogue_file(PathBuf::from("/nonexistent.txt"));
        assert!(config.build_player().is_err());
    }
}
