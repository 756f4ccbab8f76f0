//! Content ingestion and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content directory, parses every
//! markdown file into a [`ContentItem`], and produces the [`Manifest`] that
//! the generate stage consumes.
//!
//! ## Content Structure
//!
//! ```text
//! content/
//! ├── config.toml                  # Site configuration (optional)
//! ├── static/                      # Passthrough assets (see config)
//! ├── posts/
//! │   ├── 2026-01-05-hello.md      # Blog post
//! │   └── 2026-02-11-rust-tips.md
//! ├── gifts/
//! │   └── handmade-mug.md          # Gift entry
//! └── about.md                     # Standalone page
//! ```
//!
//! ## Front Matter
//!
//! Each markdown file may start with a YAML block between `---` fences:
//!
//! ```text
//! ---
//! title: Hello World
//! date: 2026-01-05
//! tags: [posts, rust]
//! featured: true
//! published: false
//! ---
//! ```
//!
//! Every field is optional. A missing `title` falls back to the first
//! `# heading` in the body, then to the slug. Missing `tags` means the item
//! belongs to no section. Missing `published` means default-published.
//!
//! ## Ordering
//!
//! Items are sorted oldest first: by date ascending, undated items last,
//! ties broken by source path. This ingestion order is what the list
//! collections reverse to get newest-first.

use crate::config;
use crate::types::{BuildEnv, ContentItem, Manifest};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Front matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Unterminated front matter in {0}")]
    UnterminatedFrontMatter(PathBuf),
    #[error("Duplicate URL {0} (from {1})")]
    DuplicateUrl(String, PathBuf),
}

/// YAML front matter fields. All optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    title: Option<String>,
    date: Option<NaiveDate>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    featured: bool,
    published: Option<bool>,
}

pub fn scan(root: &Path, env: BuildEnv) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let items = scan_items(root)?;
    Ok(Manifest { items, env, config })
}

/// Walk the content root and parse every markdown file into a `ContentItem`,
/// sorted into ingestion order.
fn scan_items(root: &Path) -> Result<Vec<ContentItem>, ScanError> {
    let mut items = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| ScanError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false)
        {
            continue;
        }
        items.push(parse_item(root, path)?);
    }

    // Ingestion order: oldest first, undated last, path as tiebreak
    items.sort_by(|a, b| {
        (a.date.is_none(), a.date, &a.source_path).cmp(&(b.date.is_none(), b.date, &b.source_path))
    });

    // URLs must be unique — collection derivation keys on them
    let mut seen: Vec<&str> = Vec::new();
    for item in &items {
        if seen.contains(&item.url.as_str()) {
            return Err(ScanError::DuplicateUrl(
                item.url.clone(),
                PathBuf::from(&item.source_path),
            ));
        }
        seen.push(&item.url);
    }

    Ok(items)
}

/// Skip dotfiles and underscore-prefixed entries (drafts folders, editor
/// droppings) anywhere in the tree.
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.') || s.starts_with('_'))
        .unwrap_or(false)
}

fn parse_item(root: &Path, path: &Path) -> Result<ContentItem, ScanError> {
    let raw = fs::read_to_string(path)?;
    let (front, body) = split_front_matter(&raw, path)?;

    let source_path = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");

    let slug = source_path.trim_end_matches(".md").to_string();
    let url = format!("/{}/", slug.trim_start_matches('/'));

    let title = front
        .title
        .or_else(|| heading_title(body))
        .unwrap_or_else(|| slug_title(&slug));

    Ok(ContentItem {
        url,
        title,
        tags: front.tags,
        featured: front.featured,
        published: front.published,
        date: front.date,
        body: body.to_string(),
        source_path,
    })
}

/// Split a raw file into parsed front matter and the remaining body.
///
/// Files without a leading `---` fence have no front matter; all fields take
/// their defaults.
fn split_front_matter<'a>(raw: &'a str, path: &Path) -> Result<(FrontMatter, &'a str), ScanError> {
    let Some(rest) = raw.strip_prefix("---\n").or_else(|| raw.strip_prefix("---\r\n")) else {
        return Ok((FrontMatter::default(), raw));
    };
    let Some(end) = rest.find("\n---").map(|i| (i, &rest[i + 4..])) else {
        return Err(ScanError::UnterminatedFrontMatter(path.to_path_buf()));
    };
    let (yaml_len, after) = end;
    let body = after.strip_prefix('\r').unwrap_or(after);
    let body = body.strip_prefix('\n').unwrap_or(body);

    let front: FrontMatter =
        serde_yaml::from_str(&rest[..yaml_len]).map_err(|source| ScanError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((front, body))
}

/// First `# heading` line of the body, if any.
fn heading_title(body: &str) -> Option<String> {
    body.lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
}

/// Last path segment of the slug with dashes converted to spaces.
fn slug_title(slug: &str) -> String {
    slug.rsplit('/')
        .next()
        .unwrap_or(slug)
        .replace('-', " ")
}
