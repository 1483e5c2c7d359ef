//! JSON and YAML formatters
//!
//! Both serialize the entity list through serde. Entities are tagged with a
//! `kind` field; block properties come out as a map in source order, list
//! values (folded enumerations) as sequences.

use super::registry::{FormatError, Formatter};
use crate::pdx::ast::Entity;

/// Formatter for pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, entities: &[Entity]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(entities)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Entities as JSON"
    }
}

/// Formatter for YAML
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, entities: &[Entity]) -> Result<String, FormatError> {
        serde_yaml::to_string(entities)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Entities as YAML"
    }
}
