//! Shared test utilities for the simple-blog test suite.
//!
//! Provides a terse builder for [`ContentItem`] fixtures so collection and
//! rendering tests can state their content sets inline:
//!
//! ```rust
//! use crate::test_helpers::item;
//!
//! let items = vec![
//!     item("/posts/a/", "A").with_tags(&["posts", "rust"]),
//!     item("/posts/b/", "B").with_tags(&["posts"]).featured().dated(2026, 2, 1),
//!     item("/posts/c/", "C").with_tags(&["posts"]).unpublished(),
//! ];
//! ```
//!
//! Items created this way are in "ingestion order" by construction — the
//! vector's order is the content set's order.

use chrono::NaiveDate;

use crate::types::ContentItem;

/// A content item with the given URL and title; no tags, not featured,
/// default-published, undated. Source path is derived from the URL.
pub fn item(url: &str, title: &str) -> ContentItem {
    ContentItem {
        url: url.to_string(),
        title: title.to_string(),
        tags: Vec::new(),
        featured: false,
        published: None,
        date: None,
        body: String::new(),
        source_path: format!("{}.md", url.trim_matches('/')),
    }
}

impl ContentItem {
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.published = Some(false);
        self
    }

    pub fn dated(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }
}
