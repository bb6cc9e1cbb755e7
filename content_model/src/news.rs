//! News feed records.

use serde::{Deserialize, Serialize};

use crate::defaults::NEWS_PLACEHOLDER_IMAGE;

/// A published news post. Ids are unique within the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    /// Free-text date as entered by the editor, e.g. "15 декабря 2025".
    pub date: String,
    pub preview: String,
    pub image: String,
}

/// A news post before it is given an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    pub date: String,
    pub preview: String,
    pub image: String,
}

impl NewsDraft {
    /// Create a draft with an empty preview and the placeholder picture.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            preview: String::new(),
            image: NEWS_PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = preview.into();
        self
    }

    /// Set the picture. An empty value keeps the placeholder.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        if !image.is_empty() {
            self.image = image;
        }
        self
    }

    /// Attach an id, producing the stored record.
    pub fn into_item(self, id: u64) -> NewsItem {
        NewsItem {
            id,
            title: self.title,
            date: self.date,
            preview: self.preview,
            image: self.image,
        }
    }
}

/// The id the next post should get: one past the largest id, or 1 for an empty feed.
/// None once the largest id is `u64::MAX`.
pub fn next_news_id(news: &[NewsItem]) -> Option<u64> {
    match news.iter().map(|n| n.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_builder() {
        let draft = NewsDraft::new("Patch 0.2", "1 января 2026")
            .with_preview("Balance changes")
            .with_image("");

        assert_eq!(draft.image, NEWS_PLACEHOLDER_IMAGE);
        assert_eq!(draft.preview, "Balance changes");

        let item = draft.with_image("https://example.com/a.png").into_item(4);
        assert_eq!(item.id, 4);
        assert_eq!(item.image, "https://example.com/a.png");
    }

    #[test]
    fn test_next_news_id() {
        assert_eq!(next_news_id(&[]), Some(1));

        let feed = vec![
            NewsDraft::new("B", "").into_item(2),
            NewsDraft::new("Z", "").into_item(7),
            NewsDraft::new("A", "").into_item(1),
        ];
        assert_eq!(next_news_id(&feed), Some(8));
    }

    #[test]
    fn test_next_news_id_at_max() {
        let feed = vec![NewsDraft::new("Last", "").into_item(u64::MAX)];
        assert_eq!(next_news_id(&feed), None);
    }
}
