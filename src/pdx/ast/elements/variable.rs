//! Variable token: `@name = number`

use serde::Serialize;

use super::super::traits::AstNode;

/// A numeric binding declared at the top level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableToken {
    /// Name without the `@` sigil
    name: String,
    value: String,
}

impl VariableToken {
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
}

impl AstNode for VariableToken {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &'static str {
        "Variable"
    }

    fn display_label(&self) -> String {
        format!("@{} = {}", self.name, self.value)
    }
}
