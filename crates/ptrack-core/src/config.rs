//! Configuration types for ptrack.
//!
//! [`Config::load`] layers `~/.config/ptrack/config.toml` (if present) over
//! the embedded defaults. [`Config::load_from`] does the same for an
//! explicit path, which must exist. [`Config::defaults`] returns the
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalizer]
strict_timestamps = false
infer_levels      = false

[output]
pretty = true

[carriers.aliases]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub carriers: CarriersConfig,
}

/// `[normalizer]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizerConfig {
    /// Null out event times that do not parse as dates.
    #[serde(default)]
    pub strict_timestamps: bool,
    /// Infer missing event levels from their labels.
    #[serde(default)]
    pub infer_levels: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// `[carriers]` section. `aliases` maps extra carrier spellings to
/// canonical names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarriersConfig {
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ptrack/config.toml`, layered on top of the
    /// built-in defaults. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let path = config_path();
        tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");
        Self::layered(&path, false)
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            });
        }
        Self::layered(path, true)
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

    fn layered(path: &Path, required: bool) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
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
        .join("ptrack")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
