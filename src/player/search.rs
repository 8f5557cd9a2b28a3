//! Catalogue search and result selection

use crate::error::{PlayerError, Result};
use crate::model::{Catalogue, Video};

/// How a search term is matched against videos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring of the title
    Title,

    /// Exact, case-sensitive tag
    Tag,
}

impl SearchMode {
    fn matches(self, video: &Video, term: &str) -> bool {
        match self {
            SearchMode::Title => video.title().to_lowercase().contains(&term.to_lowercase()),
            SearchMode::Tag => video.has_tag(term),
        }
    }
}

/// Matches from one search, in catalogue order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub term: String,
    pub videos: Vec<Video>,
}

impl SearchResults {
    /// Search the unflagged part of the catalogue
    pub fn collect(catalogue: &Catalogue, term: &str, mode: SearchMode) -> Result<Self> {
        let videos: Vec<Video> = catalogue
            .allowed_videos()
            .filter(|v| mode.matches(v, term))
            .cloned()
            .collect();

        log::debug!("Search {:?} ({:?}) matched {} videos", term, mode, videos.len());
        if videos.is_empty() {
            return Err(PlayerError::NoResults {
                term: term.to_string(),
            });
        }

        Ok(Self {
            term: term.to_string(),
            videos,
        })
    }

    /// Result for a selection token, if it picks one
    pub fn select(&self, token: &str) -> Option<&Video> {
        parse_selection(token, self.videos.len()).map(|i| &self.videos[i])
    }
}

/// Turn a 1-based selection token into a 0-based index
///
/// Anything that is not all digits or falls outside `1..=count` is a decline.
pub fn parse_selection(token: &str, count: usize) -> Option<usize> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match token.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        [
            Video::new("dog", "Dog Video", ["#dog", "#animal"]),
            Video::new("cat", "Cat Video", ["#cat", "#animal"]),
            Video::new("cat2", "Another CAT clip", ["#cat"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_title_search_is_case_insensitive() {
        let results = SearchResults::collect(&catalogue(), "cat", SearchMode::Title).unwrap();
        let ids: Vec<&str> = results.videos.iter().map(Video::id).collect();
        assert_eq!(ids, ["cat", "cat2"]);
    }

    #[test]
    fn test_tag_search_is_exact() {
        let results = SearchResults::collect(&catalogue(), "#animal", SearchMode::Tag).unwrap();
        let ids: Vec<&str> = results.videos.iter().map(Video::id).collect();
        assert_eq!(ids, ["dog", "cat"]);

        let err = SearchResults::collect(&catalogue(), "#ANIMAL", SearchMode::Tag).unwrap_err();
        assert_eq!(err, PlayerError::NoResults { term: "#ANIMAL".into() });
    }

    #[test]
    fn test_search_skips_flagged() {
        let mut catalogue = catalogue();
        catalogue.get_mut("cat").unwrap().flag(None);

        let results = SearchResults::collect(&catalogue, "cat", SearchMode::Title).unwrap();
        assert_eq!(results.videos.len(), 1);
        assert_eq!(results.videos[0].id(), "cat2");
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 2), Some(0));
        assert_eq!(parse_selection("2\n", 2), Some(1));
        assert_eq!(parse_selection("0", 2), None);
        assert_eq!(parse_selection("3", 2), None);
        assert_eq!(parse_selection("99", 2), None);
        assert_eq!(parse_selection("abc", 2), None);
        assert_eq!(parse_selection("+1", 2), None);
        assert_eq!(parse_selection("-1", 2), None);
        assert_eq!(parse_selection("", 2), None);
        assert_eq!(parse_selection("99999999999999999999999", 2), None);
    }
}
