//! Namespace token: `namespace = name`

use serde::Serialize;

use super::super::traits::AstNode;

/// The optional namespace header of a script document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceToken {
    name: String,
}

impl NamespaceToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AstNode for NamespaceToken {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &'static str {
        "Namespace"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}
