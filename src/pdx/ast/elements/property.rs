//! Property token: `name = value`

use serde::Serialize;

use super::super::traits::AstNode;

/// A single scalar assignment
///
/// Numbers and quoted strings are kept as their literal text (quotes
/// stripped); nothing is converted to a numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyToken {
    name: String,
    value: String,
}

impl PropertyToken {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl AstNode for PropertyToken {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &'static str {
        "Property"
    }

    fn display_label(&self) -> String {
        format!("{} = {}", self.name, self.value)
    }
}
