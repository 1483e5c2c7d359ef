//! Configuration loader for the pdx toolchain.
//!
//! `defaults/pdx.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. User files and
//! command-line overrides are layered on top via [`Loader`] before
//! deserializing into [`PdxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::pdx::formats::Format;
use crate::pdx::input::PathFilter;
use crate::pdx::parser::Dialect;

const DEFAULT_TOML: &str = include_str!("../../defaults/pdx.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PdxConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub dialect: Dialect,
}

/// Rendering of parsed entities.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Format,
    pub label_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
}

/// Which files under the given paths are parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub patterns: Vec<String>,
}

impl InputConfig {
    /// Compile the configured patterns
    pub fn path_filter(&self) -> Result<PathFilter, regex::Error> {
        PathFilter::new(&self.patterns)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PdxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PdxConfig, ConfigError> {
    Loader::new().build()
}
