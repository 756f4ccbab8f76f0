//! # Simple Blog
//!
//! A minimal static site generator for tag-organized blogs. Your content
//! directory is the data source: markdown files with YAML front matter become
//! pages, tags partition them into sections, and every listing on the site is
//! a derived view over one immutable content set.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content is processed through two independent stages with a JSON manifest
//! between them:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The separation exists for two reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: generation is a pure function from manifest to HTML, so
//!   unit tests can exercise every page renderer and collection builder
//!   without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory, parses front matter, produces the manifest |
//! | [`collections`] | Derived views: tag filtering, tag lists, section listings, featured strips |
//! | [`related`] | Related-content block for item pages |
//! | [`generate`] | Stage 2 — renders the final HTML site from the manifest using Maud |
//! | [`filters`] | Date display formatting for templates |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Shared types serialized between stages (`ContentItem`, `Manifest`) |
//! | [`output`] | CLI output formatting for pipeline results |
//!
//! # Design Decisions
//!
//! ## Tags Are the Only Taxonomy
//!
//! There are no categories, directories-as-sections, or front-matter `section`
//! keys. An item belongs to the posts section because its tags include the
//! posts scope tag; the gifts section works the same way. Everything a reader
//! can browse — section listings, featured strips, tag pages — is derived
//! from tag membership plus ingestion order, recomputed from scratch every
//! build. No persistent state crosses builds.
//!
//! ## Reserved Tags
//!
//! Structural tag names (section markers, navigation pseudo-tags) are
//! excluded from user-facing tag lists. The post scope and the site-wide
//! scope carry distinct exclusion lists — see [`collections`] for why they
//! are deliberately not unified.
//!
//! ## Explicit Build Mode
//!
//! Whether unpublished items appear in listings depends on a
//! [`types::BuildEnv`] value passed explicitly through the pipeline, never on
//! ambient process environment. Development builds show drafts; production
//! builds drop them, and their pages are not generated at all.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template engine:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Production Transform
//!
//! Generated HTML is minified (comments stripped, whitespace collapsed) only
//! in production builds, and only when `build.minify` is enabled. Development
//! output stays readable for view-source debugging.

pub mod collections;
pub mod config;
pub mod filters;
pub mod generate;
pub mod output;
pub mod related;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
