//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → generate)
//! and must be identical across both modules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One unit of site content: a post, a gift entry, or a standalone page.
///
/// Items are produced once per build by the scan stage and never mutated
/// afterwards — the collection builders only read and re-derive views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Canonical URL path (e.g. `/posts/hello-world/`). Unique per item.
    pub url: String,
    /// Display title from front matter, or the slug as fallback.
    pub title: String,
    /// Tags in front-matter order. Section membership is tag membership:
    /// an item tagged `posts` belongs to the posts section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Marks the item for promotional display in featured strips.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    /// `None` means default-published: absent from front matter counts as
    /// published in every build mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Publication date from front matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Raw markdown body (front matter stripped). Rendered at generate time.
    pub body: String,
    /// Source file path relative to the content root.
    pub source_path: String,
}

/// Build mode, passed explicitly into the collection builders.
///
/// Development builds include unpublished items in scoped collections so
/// drafts can be previewed locally; production builds exclude them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildEnv {
    Development,
    Production,
}

impl BuildEnv {
    pub fn is_development(self) -> bool {
        matches!(self, BuildEnv::Development)
    }
}

/// Manifest output from the scan stage, consumed by the generate stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// All content items in ingestion order: date ascending, then source
    /// filename. Oldest first — list collections reverse this.
    pub items: Vec<ContentItem>,
    pub env: BuildEnv,
    pub config: crate::config::SiteConfig,
}
