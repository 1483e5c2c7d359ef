//! Errors surfaced by the file-level entry points, configuration and
//! rendering

use config::ConfigError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::pdx::formats::FormatError;
use crate::pdx::parser::ParseError;

/// Any failure outside of the pure string parser
#[derive(Debug)]
pub enum PdxError {
    /// The file could not be read
    Io { path: PathBuf, source: io::Error },
    /// The file was read but does not parse
    Parse { path: PathBuf, source: ParseError },
    /// Configuration could not be loaded or deserialized
    Config(ConfigError),
    /// Parsed entities could not be rendered in the requested format
    Format(FormatError),
}

impl fmt::Display for PdxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdxError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            PdxError::Parse { path, source } => write!(f, "{}: {}", path.display(), source),
            PdxError::Config(err) => write!(f, "configuration error: {}", err),
            PdxError::Format(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl std::error::Error for PdxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PdxError::Io { source, .. } => Some(source),
            PdxError::Parse { source, .. } => Some(source),
            PdxError::Config(err) => Some(err),
            PdxError::Format(err) => Some(err),
        }
    }
}

impl From<ConfigError> for PdxError {
    fn from(err: ConfigError) -> Self {
        PdxError::Config(err)
    }
}

impl From<FormatError> for PdxError {
    fn from(err: FormatError) -> Self {
        PdxError::Format(err)
    }
}
