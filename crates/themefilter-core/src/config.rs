//! Configuration types for themefilter.
//!
//! [`Config::load`] layers an optional `config.toml` over the built-in
//! defaults. Without an explicit path it looks for
//! `~/.config/themefilter/config.toml` and silently skips it if absent.
//! [`Config::defaults`] returns the defaults without touching the filesystem
//! (useful in tests).
//!
//! A config file may replace the built-in taxonomy table:
//!
//! ```toml
//! [[taxonomy]]
//! name  = "color"
//! terms = ["blue", "red"]
//! ```

use crate::error::ConfigError;
use crate::types::Taxonomy;
use crate::vocabulary::Vocabulary;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
separator = ","
json      = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    /// Replacement vocabulary. Empty means "use the built-in table".
    #[serde(default, rename = "taxonomy")]
    pub taxonomies: Vec<Taxonomy>,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Join string for sorted filter terms.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Print JSON instead of plain lines.
    #[serde(default)]
    pub json: bool,
}

fn default_separator() -> String { ",".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            json: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` (or the default location when `None`) layered on top of
    /// the built-in defaults. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");

        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()?;

        Ok(cfg)
    }

    /// Parse a TOML string layered on top of the built-in defaults.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The configured vocabulary, or the built-in one if none is configured.
    pub fn vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        if self.taxonomies.is_empty() {
            return Ok(Vocabulary::builtin());
        }
        Ok(Vocabulary::new(self.taxonomies.clone())?)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("themefilter")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
