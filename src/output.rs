//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric: the primary display for every item is its
//! title and positional index, with source paths as indented context lines.
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Content (4 items)
//! 001 Old Post
//!     Source: posts/old.md
//!     Tags: posts, rust
//! ...
//!
//! Sections
//!     posts: 2 items (1 featured)
//!     pokloni: 1 item (1 featured)
//!
//! Tags
//!     cooking, handmade, rust
//! ```
//!
//! ## Generate
//!
//! ```text
//! Generated 4 item pages, 3 tag pages, 2 section pages
//! Copied 5 passthrough files
//! ```

use crate::collections::{build_featured, build_list, build_tag_list};
use crate::generate::GenerateStats;
use crate::types::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    let items = &manifest.items;

    lines.push(format!("Content ({} items)", items.len()));
    for (idx, item) in items.iter().enumerate() {
        lines.push(format!("{} {}", format_index(idx + 1), item.title));
        lines.push(format!("    Source: {}", item.source_path));
        if !item.tags.is_empty() {
            lines.push(format!("    Tags: {}", item.tags.join(", ")));
        }
        if item.published == Some(false) {
            lines.push("    Unpublished".to_string());
        }
    }

    lines.push(String::new());
    lines.push("Sections".to_string());
    for scope_tag in [
        manifest.config.sections.posts.as_str(),
        manifest.config.sections.gifts.as_str(),
    ] {
        let list = build_list(items, scope_tag, manifest.env);
        let featured = build_featured(items, scope_tag, manifest.env);
        lines.push(format!(
            "    {}: {} items ({} featured)",
            scope_tag,
            list.len(),
            featured.len()
        ));
    }

    let tags = build_tag_list(items);
    if !tags.is_empty() {
        lines.push(String::new());
        lines.push("Tags".to_string());
        lines.push(format!("    {}", tags.join(", ")));
    }

    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

pub fn format_generate_output(stats: &GenerateStats) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {} item pages, {} tag pages, {} section pages",
        stats.item_pages, stats.tag_pages, stats.section_pages
    )];
    if stats.files_copied > 0 {
        lines.push(format!("Copied {} passthrough files", stats.files_copied));
    }
    lines
}

pub fn print_generate_output(stats: &GenerateStats) {
    for line in format_generate_output(stats) {
        println!("{line}");
    }
}
