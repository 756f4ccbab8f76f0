//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//! Configuration is sparse: stock defaults are overridden by whatever keys
//! the user's file provides, and unknown keys are rejected to catch typos
//! early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Blog"            # Site title (page <title> suffix, index header)
//! description = ""          # Site description (meta tag)
//!
//! [sections]
//! posts = "posts"           # Scope tag for the blog section
//! gifts = "pokloni"         # Scope tag for the gifts section
//!
//! [build]
//! minify = true             # Minify HTML in production builds
//!
//! [passthrough]             # Verbatim file/directory copies into the output
//! # "static/img" = "static/img"
//! # "admin/config.yml" = "admin/config.yml"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in page titles and the index header.
    #[serde(default = "default_title")]
    pub title: String,
    /// Site description for the meta tag. Empty omits the tag.
    pub description: String,
    /// Scope tags partitioning content into sections.
    pub sections: SectionsConfig,
    /// Build output settings.
    pub build: BuildConfig,
    /// Source → destination copies applied verbatim to the output directory.
    /// Paths are relative to the content root and output root respectively.
    pub passthrough: BTreeMap<String, String>,
}

fn default_title() -> String {
    "Blog".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            sections: SectionsConfig::default(),
            build: BuildConfig::default(),
            passthrough: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.posts.is_empty() || self.sections.gifts.is_empty() {
            return Err(ConfigError::Validation(
                "section scope tags must not be empty".into(),
            ));
        }
        if self.sections.posts == self.sections.gifts {
            return Err(ConfigError::Validation(
                "sections.posts and sections.gifts must differ".into(),
            ));
        }
        for (src, dst) in &self.passthrough {
            if src.is_empty() || dst.is_empty() {
                return Err(ConfigError::Validation(
                    "passthrough entries must not be empty".into(),
                ));
            }
            if escapes_root(src) || escapes_root(dst) {
                return Err(ConfigError::Validation(format!(
                    "passthrough path must stay inside the site tree: {src} -> {dst}"
                )));
            }
        }
        Ok(())
    }
}

/// Reject absolute paths and parent-directory traversal.
fn escapes_root(path: &str) -> bool {
    let p = Path::new(path);
    p.is_absolute() || p.components().any(|c| matches!(c, std::path::Component::ParentDir))
}

/// Scope tags partitioning content into named sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsConfig {
    /// Scope tag for the blog section.
    pub posts: String,
    /// Scope tag for the gifts section.
    pub gifts: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            posts: "posts".to_string(),
            gifts: "pokloni".to_string(),
        }
    }
}

/// Build output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Minify generated HTML in production builds.
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { minify: true }
    }
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml` with all options at their defaults.
pub fn stock_config_toml() -> String {
    r#"# simple-blog site configuration
# All options are optional - defaults shown below.

# Site title, shown in page titles and the index header
title = "Blog"

# Site description for the meta tag (empty omits the tag)
description = ""

[sections]
# Scope tags partitioning content into sections. An item belongs to a
# section when its tags include the section's scope tag.
posts = "posts"
gifts = "pokloni"

[build]
# Minify generated HTML in production builds
minify = true

[passthrough]
# Source -> destination copies applied verbatim to the output directory.
# Paths are relative to the content root / output root.
# "static/img" = "static/img"
# "admin/config.yml" = "admin/config.yml"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sections.posts, "posts");
        assert_eq!(config.sections.gifts, "pokloni");
        assert!(config.build.minify);
    }

    #[test]
    fn sparse_override() {
        let config: SiteConfig = toml::from_str(
            r#"
            title = "My Site"
            [build]
            minify = false
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "My Site");
        assert!(!config.build.minify);
        // Untouched sections keep their defaults
        assert_eq!(config.sections.posts, "posts");
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("titel = \"typo\"");
        assert!(result.is_err());
    }

    #[test]
    fn passthrough_entries_parse() {
        let config: SiteConfig = toml::from_str(
            r#"
            [passthrough]
            "static/img" = "static/img"
            "favicon.ico" = "favicon.ico"
            "#,
        )
        .unwrap();
        assert_eq!(config.passthrough.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn passthrough_traversal_rejected() {
        let config: SiteConfig = toml::from_str(
            r#"
            [passthrough]
            "../secrets" = "secrets"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn identical_section_tags_rejected() {
        let config: SiteConfig = toml::from_str(
            r#"
            [sections]
            posts = "same"
            gifts = "same"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn stock_config_round_trips() {
        let config: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.title, SiteConfig::default().title);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Blog");
    }

    #[test]
    fn load_reads_config_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "title = \"Loaded\"").unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Loaded");
    }
}
