//! Runtime configuration, read from a `folio.toml` file.
//!
//! ```toml
//! [window]
//! width = 1100
//! height = 800
//!
//! [reveal]
//! anticipate_px = 0
//! transition_ms = 500
//!
//! [content]
//! catalog = "my-catalog.toml"
//! assets_dir = "assets"
//!
//! [contact]
//! acknowledgment = "Message sent! (Demo)"
//! ```
//!
//! Every key is optional. Relative paths are resolved against the
//! directory holding the config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::core::catalog::ContentCatalog;
use crate::core::contact::DEFAULT_ACKNOWLEDGMENT;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// How far below the viewport a block counts as intersecting.
    pub anticipate_px: f32,
    pub transition_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            anticipate_px: 0.0,
            transition_ms: 500,
        }
    }
}

impl RevealConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Replaces the built-in catalog when set.
    pub catalog: Option<PathBuf>,
    pub assets_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub acknowledgment: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub reveal: RevealConfig,
    pub content: ContentConfig,
    pub contact: ContactConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("failed to parse config")
    }

    /// Reads a config file; relative paths inside it are anchored to the
    /// file's directory.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::from_toml_str(&source)
            .with_context(|| format!("in config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.anchor_paths(base);
        }
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// in the working directory is used when present, else defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load_from_path(fallback)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn anchor_paths(&mut self, base: &Path) {
        if let Some(catalog) = &self.content.catalog {
            if catalog.is_relative() {
                self.content.catalog = Some(base.join(catalog));
            }
        }
        if self.content.assets_dir.is_relative() {
            self.content.assets_dir = base.join(&self.content.assets_dir);
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> anyhow::Result<ContentCatalog> {
        match &self.content.catalog {
            Some(path) => ContentCatalog::load(path),
            None => ContentCatalog::builtin(),
        }
    }
}
