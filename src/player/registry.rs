//! Named playlists
//!
//! Playlists are stored under their lower-cased name (see
//! [`playlist_key`]), so every lookup is case-insensitive while the name
//! typed at creation is kept for display.

use crate::error::{PlayerError, Result};
use crate::model::{playlist_key, Catalogue, Playlist, Video};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PlaylistRegistry {
    /// Playlists by lower-cased name
    playlists: HashMap<String, Playlist>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        let key = playlist_key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::AlreadyExists {
                name: name.to_string(),
            });
        }

        log::debug!("Creating playlist {:?}", name);
        Ok(&*self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name)))
    }

    /// Delete a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self
            .playlists
            .remove(&playlist_key(name))
            .ok_or_else(|| no_such_playlist(name))?;
        log::debug!("Deleted playlist {:?}", playlist.name());
        Ok(playlist)
    }

    pub fn get(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(&playlist_key(name))
            .ok_or_else(|| no_such_playlist(name))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&playlist_key(name))
            .ok_or_else(|| no_such_playlist(name))
    }

    /// All playlists ordered by key
    pub fn list_all(&self) -> Vec<&Playlist> {
        let mut keys: Vec<&String> = self.playlists.keys().collect();
        keys.sort();
        keys.into_iter().map(|k| &self.playlists[k]).collect()
    }

    /// Add a catalogue video to a playlist
    ///
    /// Checks run in order: playlist exists, video exists, video not already
    /// in the playlist, video not flagged. The playlist is only touched once
    /// all of them pass.
    pub fn add_video_to(
        &mut self,
        catalogue: &Catalogue,
        name: &str,
        video_id: &str,
    ) -> Result<Video> {
        let playlist = self.get_mut(name)?;
        let video = catalogue.get(video_id).ok_or_else(|| PlayerError::NoSuchVideo {
            id: video_id.to_string(),
        })?;
        if playlist.has_video(video_id) {
            return Err(PlayerError::DuplicateInPlaylist {
                playlist: playlist.name().to_string(),
                id: video_id.to_string(),
            });
        }
        if video.is_flagged() {
            return Err(PlayerError::VideoFlagged {
                id: video_id.to_string(),
                reason: video.flag_reason().to_string(),
            });
        }

        playlist.add_video(video_id);
        log::debug!("Added {} to playlist {:?}", video_id, playlist.name());
        Ok(video.clone())
    }

    /// Remove a video from a playlist
    ///
    /// Checks run in order: playlist exists, video exists, video in playlist.
    pub fn remove_video_from(
        &mut self,
        catalogue: &Catalogue,
        name: &str,
        video_id: &str,
    ) -> Result<Video> {
        let playlist = self.get_mut(name)?;
        let video = catalogue.get(video_id).ok_or_else(|| PlayerError::NoSuchVideo {
            id: video_id.to_string(),
        })?;

        playlist.remove_video(video_id)?;
        log::debug!("Removed {} from playlist {:?}", video_id, playlist.name());
        Ok(video.clone())
    }

    /// Empty a playlist, keeping it registered
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let playlist = self.get_mut(name)?;
        playlist.clear();
        log::debug!("Cleared playlist {:?}", playlist.name());
        Ok(())
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

fn no_such_playlist(name: &str) -> PlayerError {
    PlayerError::NoSuchPlaylist {
        name: name.to_string(),
    }
}
