//! Tag filtering and collection derivation.
//!
//! Every user-facing listing on the site is a derived view over the single
//! content set produced by the scan stage: the site-wide tag cloud, per-section
//! tag lists, section listings (newest first), and featured strips. All
//! builders here are pure functions over a slice of [`ContentItem`] — nothing
//! mutates the content set, and every view is re-derived on each build.
//!
//! ## Reserved tags
//!
//! Some tag names are structural rather than descriptive: section markers and
//! navigation pseudo-tags. These never appear in derived tag lists. The two
//! scopes carry distinct reserved sets (the post scope reserves its
//! singular/plural aliases, the gift scope reserves its own section marker),
//! so [`filter_tags`] takes the set as an explicit parameter rather than
//! hard-coding one list.
//!
//! ## Build mode
//!
//! Whether unpublished items appear in scoped collections depends on the
//! [`BuildEnv`] passed in by the caller. There is no ambient environment
//! lookup: development vs production is an explicit argument.

use crate::types::{BuildEnv, ContentItem};

/// Tags never shown in post-scope tag lists: the navigation pseudo-tags plus
/// the post section's singular/plural marker aliases.
pub const POST_RESERVED_TAGS: &[&str] = &["all", "nav", "post", "posts"];

/// Tags never shown in the site-wide tag list or gift-scope tag lists.
/// Includes both section markers; kept separate from [`POST_RESERVED_TAGS`]
/// on purpose — the two scopes reserve different structural names.
pub const SITE_RESERVED_TAGS: &[&str] = &["all", "nav", "posts", "pokloni"];

/// Remove reserved names from a tag sequence.
///
/// Order of surviving tags is preserved and duplicates are NOT collapsed —
/// deduplication is the tag-list builders' job, not the filter's. Empty input
/// yields empty output.
pub fn filter_tags(tags: &[String], reserved: &[&str]) -> Vec<String> {
    tags.iter()
        .filter(|tag| !reserved.contains(&tag.as_str()))
        .cloned()
        .collect()
}

/// Whether an item is visible in scoped collections for the given build mode.
///
/// Included when building for development, when explicitly published, or when
/// `published` is absent (default-published).
pub fn is_included(item: &ContentItem, env: BuildEnv) -> bool {
    env.is_development() || item.published.unwrap_or(true)
}

/// All items carrying `scope_tag`, in ingestion order, respecting the
/// published/env rule.
fn filtered_by_tag<'a>(
    items: &'a [ContentItem],
    scope_tag: &str,
    env: BuildEnv,
) -> Vec<&'a ContentItem> {
    items
        .iter()
        .filter(|item| item.tags.iter().any(|t| t == scope_tag))
        .filter(|item| is_included(item, env))
        .collect()
}

/// Union of the items' tags, first occurrence wins, duplicates collapse.
fn union_tags<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut tags: Vec<String> = Vec::new();
    for item in items {
        for tag in &item.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Site-wide tag list: every distinct tag across the whole content set,
/// minus the reserved names.
///
/// Runs over the full set — the published/env rule applies to scoped
/// collections, not to the global tag aggregate.
pub fn build_tag_list(items: &[ContentItem]) -> Vec<String> {
    filter_tags(&union_tags(items), SITE_RESERVED_TAGS)
}

/// Tag list restricted to items carrying `scope_tag`, filtered through the
/// scope's own reserved set.
pub fn build_scoped_tag_list(
    items: &[ContentItem],
    scope_tag: &str,
    reserved: &[&str],
    env: BuildEnv,
) -> Vec<String> {
    let scoped = filtered_by_tag(items, scope_tag, env);
    filter_tags(&union_tags(scoped), reserved)
}

/// Section listing: items tagged `scope_tag`, newest-ingested first.
pub fn build_list<'a>(
    items: &'a [ContentItem],
    scope_tag: &str,
    env: BuildEnv,
) -> Vec<&'a ContentItem> {
    let mut list = filtered_by_tag(items, scope_tag, env);
    list.reverse();
    list
}

/// Featured strip: the subset of [`build_list`] with `featured` set,
/// newest-ingested first.
pub fn build_featured<'a>(
    items: &'a [ContentItem],
    scope_tag: &str,
    env: BuildEnv,
) -> Vec<&'a ContentItem> {
    let mut featured: Vec<&ContentItem> = filtered_by_tag(items, scope_tag, env)
        .into_iter()
        .filter(|item| item.featured)
        .collect();
    featured.reverse();
    featured
}
