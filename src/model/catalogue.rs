use super::Video;
use std::collections::HashMap;

/// Every video known to a session
///
/// Populated once from the catalogue provider. Iteration follows insertion
/// order, which is the order the provider listed the videos in.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    /// Videos in provider order
    videos: Vec<Video>,

    /// Position of each video in `videos`, by id
    index: HashMap<String, usize>,
}

impl Catalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the catalogue
    ///
    /// Returns `false` and leaves the catalogue untouched if the id is taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(video.id()) {
            return false;
        }
        self.index.insert(video.id().to_string(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Get a video by ID
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    /// Flag state is the only thing that changes after loading
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        let i = *self.index.get(id)?;
        self.videos.get_mut(i)
    }

    /// All videos in provider order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    /// Unflagged videos in provider order
    pub fn allowed_videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter().filter(|v| !v.is_flagged())
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl FromIterator<Video> for Catalogue {
    fn from_iter<T: IntoIterator<Item = Video>>(iter: T) -> Self {
        let mut catalogue = Catalogue::new();
        for video in iter {
            catalogue.add_video(video);
        }
        catalogue
    }
}
