//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and generates the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): featured strips for both sections plus
//!   the site-wide tag cloud
//! - **Section pages** (`/{section}/index.html`): full listing, newest first,
//!   with the section's own tag list
//! - **Tag pages** (`/tags/{tag}/index.html`): every item carrying the tag
//! - **Item pages** (`/{url}/index.html`): rendered markdown body with a
//!   related-content section
//! - **404 page** (`/404.html`)
//!
//! ## Transforms
//!
//! In production builds (with `build.minify` enabled) every generated HTML
//! document is minified: comments stripped, whitespace collapsed. Development
//! output is left readable.
//!
//! ## Passthrough Copy
//!
//! Config-declared `[passthrough]` mappings are copied verbatim from the
//! content root into the output directory — single files or whole
//! directories.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::collections::{
    self, SITE_RESERVED_TAGS, POST_RESERVED_TAGS, build_featured, build_list,
    build_scoped_tag_list, build_tag_list,
};
use crate::filters;
use crate::related::{self, render_related};
use crate::types::{BuildEnv, ContentItem, Manifest};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Passthrough source not found: {0}")]
    PassthroughMissing(String),
}

/// Counts reported after generation.
#[derive(Debug, Default)]
pub struct GenerateStats {
    pub item_pages: usize,
    pub tag_pages: usize,
    pub section_pages: usize,
    pub files_copied: usize,
}

const CSS: &str = include_str!("../static/style.css");

pub fn generate(
    manifest_path: &Path,
    source: &Path,
    output_dir: &Path,
) -> Result<GenerateStats, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_from_manifest(&manifest, source, output_dir)
}

pub fn generate_from_manifest(
    manifest: &Manifest,
    source: &Path,
    output_dir: &Path,
) -> Result<GenerateStats, GenerateError> {
    let mut stats = GenerateStats::default();
    let env = manifest.env;
    let config = &manifest.config;
    let items = &manifest.items;

    fs::create_dir_all(output_dir)?;

    let write_page = |rel: &Path, markup: Markup| -> Result<(), GenerateError> {
        let html = transform(markup.into_string(), manifest);
        let path = output_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html)?;
        Ok(())
    };

    write_page(Path::new("index.html"), render_index(manifest))?;
    write_page(Path::new("404.html"), render_not_found(config))?;

    // Section pages
    let sections = [
        (config.sections.posts.as_str(), POST_RESERVED_TAGS),
        (config.sections.gifts.as_str(), SITE_RESERVED_TAGS),
    ];
    for (scope_tag, reserved) in sections {
        let page = render_section_page(manifest, scope_tag, reserved);
        write_page(&Path::new(scope_tag).join("index.html"), page)?;
        stats.section_pages += 1;
    }

    // Tag pages over the site-wide tag list
    for tag in build_tag_list(items) {
        let page = render_tag_page(manifest, &tag);
        write_page(&Path::new("tags").join(&tag).join("index.html"), page)?;
        stats.tag_pages += 1;
    }

    // Item pages, one per included item
    for item in items.iter().filter(|i| collections::is_included(i, env)) {
        let page = render_item_page(manifest, item);
        write_page(&Path::new(item.url.trim_matches('/')).join("index.html"), page)?;
        stats.item_pages += 1;
    }

    // Passthrough copies
    for (src, dst) in &config.passthrough {
        let from = source.join(src);
        let to = output_dir.join(dst);
        if !from.exists() {
            return Err(GenerateError::PassthroughMissing(src.clone()));
        }
        if from.is_dir() {
            stats.files_copied += copy_dir_recursive(&from, &to)?;
        } else {
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&from, &to)?;
            stats.files_copied += 1;
        }
    }

    Ok(stats)
}

/// Apply the production HTML transform: minify when building for production
/// with `build.minify` enabled, otherwise pass through untouched.
fn transform(html: String, manifest: &Manifest) -> Vec<u8> {
    if manifest.env == BuildEnv::Production && manifest.config.build.minify {
        let mut cfg = minify_html::Cfg::new();
        cfg.keep_closing_tags = true;
        cfg.keep_html_and_head_opening_tags = true;
        cfg.keep_comments = false;
        cfg.minify_css = true;
        minify_html::minify(html.as_bytes(), &cfg)
    } else {
        html.into_bytes()
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, description: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header with home link and section navigation
fn site_header(config: &crate::config::SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (config.title) }
            nav.site-nav {
                a href={ "/" (config.sections.posts) "/" } { "Posts" }
                a href={ "/" (config.sections.gifts) "/" } { "Gifts" }
            }
        }
    }
}

/// Renders a tag cloud as links to tag pages
fn render_tag_cloud(tags: &[String]) -> Markup {
    html! {
        ul.tag-cloud {
            @for tag in tags {
                li {
                    a href={ "/tags/" (tag) "/" } { (tag) }
                }
            }
        }
    }
}

/// Renders a listing of items, newest first, with dated bylines
fn render_item_list(items: &[&ContentItem]) -> Markup {
    html! {
        ul.item-list {
            @for item in items {
                li {
                    a href=(item.url) { (item.title) }
                    @if let Some(date) = item.date {
                        " "
                        time datetime=(date) { (filters::readable_date(date)) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index page: featured strips for both sections plus the
/// site-wide tag cloud.
fn render_index(manifest: &Manifest) -> Markup {
    let config = &manifest.config;
    let items = &manifest.items;

    let featured_posts = build_featured(items, &config.sections.posts, manifest.env);
    let featured_gifts = build_featured(items, &config.sections.gifts, manifest.env);
    let tags = build_tag_list(items);

    let content = html! {
        (site_header(config))
        main.index-page {
            @if !config.description.is_empty() {
                p.site-description { (config.description) }
            }
            @if !featured_posts.is_empty() {
                section.featured {
                    h2 { "Featured posts" }
                    (render_item_list(&featured_posts))
                }
            }
            @if !featured_gifts.is_empty() {
                section.featured {
                    h2 { "Featured gifts" }
                    (render_item_list(&featured_gifts))
                }
            }
            @if !tags.is_empty() {
                section.tags {
                    h2 { "Tags" }
                    (render_tag_cloud(&tags))
                }
            }
        }
    };

    base_document(&config.title, &config.description, content)
}

/// Renders a section page: full listing newest first, plus the section's
/// own tag list under its scope-specific reserved set.
fn render_section_page(manifest: &Manifest, scope_tag: &str, reserved: &[&str]) -> Markup {
    let config = &manifest.config;
    let list = build_list(&manifest.items, scope_tag, manifest.env);
    let tags = build_scoped_tag_list(&manifest.items, scope_tag, reserved, manifest.env);

    let content = html! {
        (site_header(config))
        main.section-page {
            h1 { (scope_tag) }
            (render_item_list(&list))
            @if !tags.is_empty() {
                section.tags {
                    h2 { "Tags" }
                    (render_tag_cloud(&tags))
                }
            }
        }
    };

    let title = format!("{} - {}", scope_tag, config.title);
    base_document(&title, "", content)
}

/// Renders a tag page: every item carrying the tag, newest first.
fn render_tag_page(manifest: &Manifest, tag: &str) -> Markup {
    let config = &manifest.config;
    let list = build_list(&manifest.items, tag, manifest.env);

    let content = html! {
        (site_header(config))
        main.tag-page {
            h1 { "Tagged " (tag) }
            (render_item_list(&list))
        }
    };

    let title = format!("{} - {}", tag, config.title);
    base_document(&title, "", content)
}

/// Renders an item page: title, byline, markdown body, related content.
fn render_item_page(manifest: &Manifest, item: &ContentItem) -> Markup {
    let config = &manifest.config;

    // Convert markdown to HTML
    let parser = Parser::new(&item.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    // Related content comes from the item's own section listing
    let related_section = section_of(item, config).map(|scope_tag| {
        let list = build_list(&manifest.items, scope_tag, manifest.env);
        render_related(&list, "Related", &item.url, related::DEFAULT_CLASS)
    });

    let content = html! {
        (site_header(config))
        main.item-page {
            article {
                header {
                    h1 { (item.title) }
                    @if let Some(date) = item.date {
                        p.byline {
                            time datetime=(date) { (filters::date_pretty(date)) }
                        }
                    }
                }
                div.item-body { (PreEscaped(body_html)) }
            }
            @if let Some(related) = related_section {
                (related)
            }
        }
    };

    let title = format!("{} - {}", item.title, config.title);
    base_document(&title, "", content)
}

/// Renders the 404 page
fn render_not_found(config: &crate::config::SiteConfig) -> Markup {
    let content = html! {
        (site_header(config))
        main.not-found {
            h1 { "404" }
            p { "Nothing lives at this address." }
            p { a href="/" { "Back to the index" } }
        }
    };
    base_document(&format!("Not found - {}", config.title), "", content)
}

/// Which configured section an item belongs to, posts scope first.
fn section_of<'a>(item: &ContentItem, config: &'a crate::config::SiteConfig) -> Option<&'a str> {
    if item.tags.iter().any(|t| *t == config.sections.posts) {
        Some(&config.sections.posts)
    } else if item.tags.iter().any(|t| *t == config.sections.gifts) {
        Some(&config.sections.gifts)
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::test_helpers::item;

    fn manifest(items: Vec<ContentItem>, env: BuildEnv) -> Manifest {
        Manifest {
            items,
            env,
            config: SiteConfig::default(),
        }
    }

    fn sample_manifest() -> Manifest {
        manifest(
            vec![
                item("/posts/old/", "Old Post").with_tags(&["posts", "rust"]),
                item("/posts/new/", "New Post")
                    .with_tags(&["posts", "cooking"])
                    .featured()
                    .dated(2026, 2, 11),
                item("/gifts/mug/", "Handmade Mug")
                    .with_tags(&["pokloni", "handmade"])
                    .featured(),
                item("/about/", "About"),
            ],
            BuildEnv::Production,
        )
    }

    #[test]
    fn index_shows_featured_and_tags() {
        let html = render_index(&sample_manifest()).into_string();
        assert!(html.contains("New Post"));
        assert!(html.contains("Handmade Mug"));
        // Non-featured items stay off the index strips
        assert!(!html.contains("Old Post"));
        // Tag cloud links to non-reserved tags only — section markers stay out
        assert!(html.contains("/tags/rust/"));
        assert!(!html.contains("/tags/posts/"));
        assert!(!html.contains("/tags/pokloni/"));
    }

    #[test]
    fn section_page_lists_newest_first() {
        let m = sample_manifest();
        let html = render_section_page(&m, "posts", POST_RESERVED_TAGS).into_string();
        let new_pos = html.find("New Post").unwrap();
        let old_pos = html.find("Old Post").unwrap();
        assert!(new_pos < old_pos);
        // Gift items do not leak into the posts section
        assert!(!html.contains("Handmade Mug"));
    }

    #[test]
    fn section_page_tag_list_uses_scope_reserved_set() {
        let m = sample_manifest();
        let html = render_section_page(&m, "pokloni", SITE_RESERVED_TAGS).into_string();
        assert!(html.contains("/tags/handmade/"));
        assert!(!html.contains("/tags/pokloni/"));
    }

    #[test]
    fn tag_page_lists_carriers_only() {
        let m = sample_manifest();
        let html = render_tag_page(&m, "rust").into_string();
        assert!(html.contains("Old Post"));
        assert!(!html.contains("New Post"));
    }

    #[test]
    fn item_page_renders_markdown_and_related() {
        let mut m = sample_manifest();
        m.items[0].body = "This is **bold**.".to_string();
        let html = render_item_page(&m, &m.items[0]).into_string();
        assert!(html.contains("<strong>bold</strong>"));
        // Related section links the other post, not the page itself
        assert!(html.contains(r#"href="/posts/new/""#));
        assert!(!html.contains(r#"<li><a href="/posts/old/""#));
    }

    #[test]
    fn item_page_without_section_has_no_related_list() {
        let m = sample_manifest();
        let about = m.items.iter().find(|i| i.url == "/about/").unwrap();
        let html = render_item_page(&m, about).into_string();
        assert!(!html.contains(r#"class="related""#));
    }

    #[test]
    fn item_page_shows_pretty_date() {
        let m = sample_manifest();
        let new = m.items.iter().find(|i| i.url == "/posts/new/").unwrap();
        let html = render_item_page(&m, new).into_string();
        assert!(html.contains("11 February 2026"));
    }

    #[test]
    fn transform_minifies_production_output() {
        let m = sample_manifest();
        let html = "<html>\n  <body>\n    <!-- note -->\n    <p>Hello</p>\n  </body>\n</html>"
            .to_string();
        let out = transform(html.clone(), &m);
        let out_str = String::from_utf8_lossy(&out);
        assert!(!out_str.contains("<!--"));
        assert!(!out_str.contains("\n  "));
        assert!(out_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn transform_passes_through_in_development() {
        let m = manifest(vec![], BuildEnv::Development);
        let html = "<p>\n  spaced\n</p>".to_string();
        let out = transform(html.clone(), &m);
        assert_eq!(out, html.into_bytes());
    }

    #[test]
    fn transform_respects_minify_toggle() {
        let mut m = manifest(vec![], BuildEnv::Production);
        m.config.build.minify = false;
        let html = "<p>\n  spaced\n</p>".to_string();
        let out = transform(html.clone(), &m);
        assert_eq!(out, html.into_bytes());
    }

    #[test]
    fn generate_writes_expected_tree() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("content");
        let output = tmp.path().join("dist");
        fs::create_dir_all(&source).unwrap();

        let m = sample_manifest();
        let stats = generate_from_manifest(&m, &source, &output).unwrap();

        assert!(output.join("index.html").exists());
        assert!(output.join("404.html").exists());
        assert!(output.join("posts/index.html").exists());
        assert!(output.join("pokloni/index.html").exists());
        assert!(output.join("tags/rust/index.html").exists());
        assert!(output.join("posts/new/index.html").exists());
        assert!(output.join("gifts/mug/index.html").exists());
        assert_eq!(stats.section_pages, 2);
        assert_eq!(stats.item_pages, 4);
    }

    #[test]
    fn generate_skips_unpublished_item_pages_in_production() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("content");
        let output = tmp.path().join("dist");
        fs::create_dir_all(&source).unwrap();

        let m = manifest(
            vec![
                item("/posts/live/", "Live").with_tags(&["posts"]),
                item("/posts/draft/", "Draft").with_tags(&["posts"]).unpublished(),
            ],
            BuildEnv::Production,
        );
        generate_from_manifest(&m, &source, &output).unwrap();
        assert!(output.join("posts/live/index.html").exists());
        assert!(!output.join("posts/draft/index.html").exists());
    }

    #[test]
    fn passthrough_copies_files_and_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("content");
        let output = tmp.path().join("dist");
        fs::create_dir_all(source.join("static/img")).unwrap();
        fs::write(source.join("static/img/a.png"), b"png").unwrap();
        fs::write(source.join("favicon.ico"), b"ico").unwrap();

        let mut m = manifest(vec![], BuildEnv::Development);
        m.config
            .passthrough
            .insert("static/img".into(), "static/img".into());
        m.config
            .passthrough
            .insert("favicon.ico".into(), "favicon.ico".into());

        let stats = generate_from_manifest(&m, &source, &output).unwrap();
        assert!(output.join("static/img/a.png").exists());
        assert!(output.join("favicon.ico").exists());
        assert_eq!(stats.files_copied, 2);
    }

    #[test]
    fn passthrough_missing_source_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("content");
        let output = tmp.path().join("dist");
        fs::create_dir_all(&source).unwrap();

        let mut m = manifest(vec![], BuildEnv::Development);
        m.config.passthrough.insert("nope".into(), "nope".into());

        let err = generate_from_manifest(&m, &source, &output).unwrap_err();
        assert!(matches!(err, GenerateError::PassthroughMissing(_)));
    }
}
