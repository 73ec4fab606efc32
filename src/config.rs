//! Workspace configuration.
//!
//! Handles loading and validating `adsflow.toml`. Config files are sparse —
//! override just the values you want:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [images]
//! quality = 90              # JPEG quality (1-100)
//!
//! [source]
//! kind = "sample"           # "sample" (demo feed) or "directory"
//! # directory = "inbox"     # Folder to watch (kind = "directory" only)
//! # seed = 42               # Fix the demo feed for reproducible runs
//! ```
//!
//! Unknown keys are rejected to catch typos early. The crop canvases are
//! not configurable: every placement uses the fixed 1080×1080 and
//! 1080×1920 specs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
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

/// Workspace configuration loaded from `adsflow.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// JPEG output settings.
    pub images: ImagesConfig,
    /// Where new photos come from.
    pub source: SourceConfig,
}

/// JPEG output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Encoding quality (1-100).
    pub quality: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self { quality: 90 }
    }
}

/// Photo source selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Folder to watch when `kind = "directory"`.
    pub directory: Option<PathBuf>,
    /// Fixed seed for the demo feed (reproducible runs).
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Sample,
    Directory,
}

impl AppConfig {
    /// Load config from `path`, or defaults if no file exists.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.quality == 0 || self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 1-100".into(),
            ));
        }
        if self.source.kind == SourceKind::Directory && self.source.directory.is_none() {
            return Err(ConfigError::Validation(
                "source.directory is required when source.kind = \"directory\"".into(),
            ));
        }
        Ok(())
    }
}

/// A stock `adsflow.toml` with every option documented.
pub fn stock_config_toml() -> String {
    r#"# adsflow configuration
# All options are optional - defaults shown below.

[images]
# JPEG quality for the generated crops (1-100)
quality = 90

[source]
# Where `adsflow sync` pulls new photos from:
#   "sample"    - built-in demo feed (stands in for a channel webhook)
#   "directory" - image files dropped into a local folder
kind = "sample"

# Folder to watch. Required when kind = "directory".
# directory = "inbox"

# Fix the demo feed's randomness for reproducible runs.
# seed = 42
"#
    .to_string()
}
