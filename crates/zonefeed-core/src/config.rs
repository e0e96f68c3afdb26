//! Configuration types for zonefeed.
//!
//! [`Config::load`] layers an optional `zonefeed.toml` and `ZONEFEED__*`
//! environment variables over the embedded defaults. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[providers]
europark  = 11
parkimine = 10
snabb     = 12

[output]
pretty = true
indent = 2
"#;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "zonefeed.toml";

const ENV_PREFIX: &str = "ZONEFEED";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[providers]` section: the fixed id stamped into each record's `provider`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_europark")]
    pub europark: u32,
    #[serde(default = "default_parkimine")]
    pub parkimine: u32,
    #[serde(default = "default_snabb")]
    pub snabb: u32,
}

fn default_europark() -> u32 { 11 }
fn default_parkimine() -> u32 { 10 }
fn default_snabb() -> u32 { 12 }

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            europark: default_europark(),
            parkimine: default_parkimine(),
            snabb: default_snabb(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_pretty() -> bool { true }
fn default_indent() -> usize { 2 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then `path` (or `./zonefeed.toml` if it
    /// exists), then `ZONEFEED__SECTION__KEY` environment variables.
    ///
    /// An explicitly given `path` must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        tracing::debug!(path = %file.display(), required, "loading config");

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(file.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
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
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
