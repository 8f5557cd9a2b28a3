//! One raw line of a catalogue file

use crate::model::Video;

/// Fields of a catalogue line before conversion to a [`Video`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub title: String,
    pub id: String,
    pub tags: Vec<String>,
}

impl CatalogueEntry {
    /// Split a `Title | id | #tag1 , #tag2` line
    ///
    /// Returns `None` when the title or id is missing. A missing tag field
    /// means the video has no tags.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split('|').map(str::trim);

        let title = fields.next().filter(|t| !t.is_empty())?;
        let id = fields.next().filter(|i| !i.is_empty())?;
        let tags = fields
            .next()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            title: title.to_string(),
            id: id.to_string(),
            tags,
        })
    }

    pub fn into_video(self) -> Video {
        Video::new(self.id, self.title, self.tags)
    }
}
