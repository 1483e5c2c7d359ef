//! Output format implementations for parsed entities
//!
//! - `script` re-emits Paradox script text
//! - `treeviz` draws the entity tree
//! - `json` and `yaml` serialize through serde

pub mod registry;
pub mod script;
pub mod serialized;
pub mod treeviz;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::pdx::ast::Entity;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use script::{to_script_str, ScriptFormatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

/// Built-in output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Script,
    #[default]
    Treeviz,
    Json,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Script, Format::Treeviz, Format::Json, Format::Yaml];

    /// Registry name of the format
    pub fn name(self) -> &'static str {
        match self {
            Format::Script => "script",
            Format::Treeviz => "treeviz",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError::FormatNotFound(s.to_string()))
    }
}

/// Serialize entities with one of the built-in formats
pub fn serialize(entities: &[Entity], format: Format) -> Result<String, FormatError> {
    FormatRegistry::with_defaults().serialize(entities, format.name())
}
