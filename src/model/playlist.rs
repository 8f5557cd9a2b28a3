use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};

/// Lookup key for a playlist name
///
/// Playlist identity is case-insensitive: "My List" and "my list" share a key.
pub fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}

/// A named, ordered, duplicate-free list of video ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Name as the user typed it at creation
    name: String,

    /// Video ids (ordered, no duplicates)
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_ids: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> String {
        playlist_key(&self.name)
    }

    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Append a video id
    ///
    /// The caller has already checked that the video exists and is not in
    /// the playlist.
    pub fn add_video(&mut self, video_id: impl Into<String>) {
        self.video_ids.push(video_id.into());
    }

    /// Remove a video id, failing with `NotInPlaylist` if it is absent
    pub fn remove_video(&mut self, video_id: &str) -> Result<()> {
        let position = self
            .video_ids
            .iter()
            .position(|id| id == video_id)
            .ok_or_else(|| PlayerError::NotInPlaylist {
                playlist: self.name.clone(),
                id: video_id.to_string(),
            })?;
        self.video_ids.remove(position);
        Ok(())
    }

    pub fn has_video(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Remove every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}
