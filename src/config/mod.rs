// SPDX-License-Identifier: MPL-2.0
//! This module holds [`DisplayConfig`], the value object that drives a
//! single render, along with loading and saving it as TOML.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `FLOATING_IMAGE_LINK_CONFIG` environment variable
//! 3. Falls back to `<config dir>/FloatingImageLink/link.toml`
//!
//! # Examples
//!
//! ```no_run
//! use floating_image_link::config::{self, DisplayConfig};
//!
//! let mut config = DisplayConfig::new("/images/promo.png");
//! config.alt = "Open the special promotion".to_string();
//! config.new_tab = true;
//!
//! let path = std::env::temp_dir().join("link.toml");
//! config::save_to_path(&config, &path).expect("Failed to save config");
//! let loaded = config::load_from_path(&path).expect("Failed to load config");
//! assert_eq!(loaded, config);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::CssLength;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "FloatingImageLink";
const CONFIG_FILE: &str = "link.toml";

/// Environment variable pointing at an explicit config file.
pub const ENV_CONFIG_PATH: &str = "FLOATING_IMAGE_LINK_CONFIG";

/// Parameters controlling appearance and behavior of the rendered link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Image resource. An empty value renders as a broken image.
    pub src: String,

    #[serde(default = "default_href")]
    pub href: String,

    #[serde(default = "default_alt")]
    pub alt: String,

    /// Image width below the breakpoint, as a CSS length expression.
    #[serde(default = "default_img_width", alias = "imgWidth")]
    pub img_width: String,

    #[serde(default = "default_top")]
    pub top: String,

    #[serde(default = "default_right")]
    pub right: String,

    /// Open the target in a new, isolated browsing context.
    #[serde(default = "default_new_tab", alias = "newTab")]
    pub new_tab: bool,
}

fn default_href() -> String {
    DEFAULT_HREF.to_string()
}

fn default_alt() -> String {
    DEFAULT_ALT.to_string()
}

fn default_img_width() -> String {
    DEFAULT_IMG_WIDTH.to_string()
}

fn default_top() -> String {
    DEFAULT_TOP.to_string()
}

fn default_right() -> String {
    DEFAULT_RIGHT.to_string()
}

fn default_new_tab() -> bool {
    DEFAULT_NEW_TAB
}

impl DisplayConfig {
    /// Creates a config for `src` with every other field at its default.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            href: default_href(),
            alt: default_alt(),
            img_width: default_img_width(),
            top: default_top(),
            right: default_right(),
            new_tab: default_new_tab(),
        }
    }

    /// Checks every length field, reporting the first one that would be
    /// replaced by its default at render time.
    pub fn validate(&self) -> Result<()> {
        CssLength::parse("img_width", &self.img_width)?;
        CssLength::parse("top", &self.top)?;
        CssLength::parse("right", &self.right)?;
        Ok(())
    }
}

/// Resolves the config file location from the environment or the
/// platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(ENV_CONFIG_PATH) {
        if !explicit.is_empty() {
            return Some(PathBuf::from(explicit));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the config from the default location, if a file exists there.
pub fn load() -> Result<Option<DisplayConfig>> {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path).map(Some),
        _ => Ok(None),
    }
}

pub fn load_from_path(path: &Path) -> Result<DisplayConfig> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded display config");
    Ok(config)
}

pub fn save_to_path(config: &DisplayConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved display config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn new_fills_every_default() {
        let config = DisplayConfig::new("/img.png");
        assert_eq!(config.src, "/img.png");
        assert_eq!(config.href, DEFAULT_HREF);
        assert_eq!(config.alt, "");
        assert_eq!(config.img_width, DEFAULT_IMG_WIDTH);
        assert_eq!(config.top, DEFAULT_TOP);
        assert_eq!(config.right, DEFAULT_RIGHT);
        assert!(!config.new_tab);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config: DisplayConfig = toml::from_str(r#"src = "/img.png""#).unwrap();
        assert_eq!(config, DisplayConfig::new("/img.png"));
    }

    #[test]
    fn camel_case_aliases_are_accepted() {
        let config: DisplayConfig = toml::from_str(
            r#"
            src = "/img.png"
            imgWidth = "50vw"
            newTab = true
            "#,
        )
        .unwrap();
        assert_eq!(config.img_width, "50vw");
        assert!(config.new_tab);
    }

    #[test]
    fn missing_src_is_a_config_error() {
        let result = toml::from_str::<DisplayConfig>(r#"href = "/promo""#);
        assert!(result.is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut config = DisplayConfig::new("/img.png");
        config.href = "/promo".to_string();
        config.alt = "Promo".to_string();
        config.new_tab = true;
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("link.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("link.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let err = load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn validate_reports_offending_field() {
        let mut config = DisplayConfig::new("/img.png");
        config.right = "1rem}".to_string();
        match config.validate() {
            Err(Error::InvalidLength { field, .. }) => assert_eq!(field, "right"),
            other => panic!("expected InvalidLength, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(DisplayConfig::new("/img.png").validate().is_ok());
    }
}
