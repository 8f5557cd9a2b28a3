//! Catalogue text parser

use super::entry::CatalogueEntry;
use crate::model::Catalogue;
use anyhow::{bail, Result};

/// Parse a whole catalogue file
///
/// Blank lines are ignored and malformed lines are skipped with a warning.
/// A repeated video id is an error, since ids identify videos everywhere else.
pub fn parse_catalogue(contents: &str) -> Result<Catalogue> {
    let mut catalogue = Catalogue::new();

    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(entry) = CatalogueEntry::from_line(line) else {
            log::warn!("Skipping malformed catalogue line {}: {:?}", line_no + 1, line);
            continue;
        };

        let id = entry.id.clone();
        if !catalogue.add_video(entry.into_video()) {
            bail!("Duplicate video id {:?} on line {}", id, line_no + 1);
        }
    }

    if catalogue.is_empty() {
        log::warn!("Catalogue contains no videos");
    }
    log::info!("Parsed {} videos from catalogue", catalogue.len());
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_and_malformed() {
        let text = "\nFunny Dogs | dogs | #dog\n\nnot a video line\nAmazing Cats | cats | #cat\n";
        let catalogue = parse_catalogue(text).unwrap();

        assert_eq!(catalogue.len(), 2);
        let ids: Vec<&str> = catalogue.videos().map(|v| v.id()).collect();
        assert_eq!(ids, ["dogs", "cats"]);
    }

    #[test]
    fn test_blank_text_gives_empty_catalogue() {
        let catalogue = parse_catalogue("\n\n").unwrap();
        assert!(catalogue.is_empty());
    }

    #[test]
    fn test_duplicate_id_is_an_error() {
        let text = "A | same | #a\nB | same | #b\n";
        let err = parse_catalogue(text).unwrap_err();
        assert!(err.to_string().contains("Duplicate video id"));
    }
}
