use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason recorded when a video is flagged without one being supplied
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// A single video in the catalogue
///
/// Identity and metadata are fixed at construction. Only the moderation flag
/// changes during a session, through [`Video::flag`] and [`Video::unflag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier assigned by the catalogue provider
    id: String,

    /// Display title
    title: String,

    /// Tags in the order the provider listed them
    tags: Vec<String>,

    /// Why the video is flagged; `None` while it is allowed
    flag_reason: Option<String>,
}

impl Video {
    /// Create an unflagged video
    ///
    /// Tags are collected into storage owned by the video, so later changes to
    /// the caller's collection are never observed.
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            flag_reason: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_flagged(&self) -> bool {
        self.flag_reason.is_some()
    }

    /// Flag reason, or the empty string when the video is allowed
    pub fn flag_reason(&self) -> &str {
        self.flag_reason.as_deref().unwrap_or("")
    }

    /// `(reason: ...)` suffix used in moderation messages
    pub fn flag_reason_display(&self) -> String {
        format!("(reason: {})", self.flag_reason())
    }

    /// Whether `tag` is one of this video's tags (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Mark the video as flagged
    ///
    /// An empty or missing reason falls back to [`DEFAULT_FLAG_REASON`], which
    /// keeps the reason non-empty whenever the video is flagged. Callers check
    /// [`Video::is_flagged`] first; flagging twice overwrites the reason.
    pub fn flag(&mut self, reason: Option<&str>) {
        let reason = match reason {
            Some(r) if !r.trim().is_empty() => r.to_string(),
            _ => DEFAULT_FLAG_REASON.to_string(),
        };
        self.flag_reason = Some(reason);
    }

    /// Clear the flag and its reason
    pub fn unflag(&mut self) {
        self.flag_reason = None;
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;
        if self.is_flagged() {
            write!(f, " - FLAGGED {}", self.flag_reason_display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_video() -> Video {
        Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"])
    }

    #[test]
    fn test_new_video_is_unflagged() {
        let video = cat_video();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), "");
    }

    #[test]
    fn test_tags_are_copied() {
        let mut tags = vec!["#cat".to_string()];
        let video = Video::new("id", "Title", tags.clone());
        tags.push("#dog".to_string());

        assert_eq!(video.tags(), &["#cat".to_string()]);
    }

    #[test]
    fn test_flag_and_unflag() {
        let mut video = cat_video();

        video.flag(Some("dont_like_cats"));
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), "dont_like_cats");

        video.unflag();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), "");
    }

    #[test]
    fn test_flag_without_reason_uses_default() {
        let mut video = cat_video();
        video.flag(None);
        assert_eq!(video.flag_reason(), DEFAULT_FLAG_REASON);

        let mut blank = cat_video();
        blank.flag(Some("  "));
        assert_eq!(blank.flag_reason(), DEFAULT_FLAG_REASON);
    }

    #[test]
    fn test_flag_reason_stored_as_given() {
        let mut video = cat_video();
        video.flag(Some("  spam  "));
        assert_eq!(video.flag_reason(), "  spam  ");
    }

    #[test]
    fn test_display() {
        let mut video = cat_video();
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );

        video.flag(Some("dont_like_cats"));
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", Vec::<String>::new());
        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let video = cat_video();
        assert!(video.has_tag("#cat"));
        assert!(!video.has_tag("#CAT"));
        assert!(!video.has_tag("cat"));
    }
}
