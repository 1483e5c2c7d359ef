//! Entity - the closed sum over all token kinds
//!
//! The entry points return an ordered list of entities. Consumers match on
//! the variant (or use the `as_*` accessors) instead of probing types at run
//! time.

use serde::Serialize;
use std::fmt;

use super::super::traits::AstNode;
use super::block::BlockToken;
use super::enumeration::EnumerationToken;
use super::namespace::NamespaceToken;
use super::property::PropertyToken;
use super::variable::VariableToken;

/// A parsed top-level entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Namespace(NamespaceToken),
    Variable(VariableToken),
    Property(PropertyToken),
    Enumeration(EnumerationToken),
    Block(BlockToken),
}

/// Discriminant of [`Entity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Namespace,
    Variable,
    Property,
    Enumeration,
    Block,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Namespace => "Namespace",
            EntityKind::Variable => "Variable",
            EntityKind::Property => "Property",
            EntityKind::Enumeration => "Enumeration",
            EntityKind::Block => "Block",
        };
        f.write_str(label)
    }
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Namespace(_) => EntityKind::Namespace,
            Entity::Variable(_) => EntityKind::Variable,
            Entity::Property(_) => EntityKind::Property,
            Entity::Enumeration(_) => EntityKind::Enumeration,
            Entity::Block(_) => EntityKind::Block,
        }
    }

    pub fn name(&self) -> &str {
        self.as_node().name()
    }

    pub fn as_block(&self) -> Option<&BlockToken> {
        match self {
            Entity::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyToken> {
        match self {
            Entity::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_enumeration(&self) -> Option<&EnumerationToken> {
        match self {
            Entity::Enumeration(enumeration) => Some(enumeration),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableToken> {
        match self {
            Entity::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&NamespaceToken> {
        match self {
            Entity::Namespace(namespace) => Some(namespace),
            _ => None,
        }
    }

    fn as_node(&self) -> &dyn AstNode {
        match self {
            Entity::Namespace(namespace) => namespace,
            Entity::Variable(variable) => variable,
            Entity::Property(property) => property,
            Entity::Enumeration(enumeration) => enumeration,
            Entity::Block(block) => block,
        }
    }
}

impl AstNode for Entity {
    fn name(&self) -> &str {
        self.as_node().name()
    }

    fn node_type(&self) -> &'static str {
        self.as_node().node_type()
    }

    fn display_label(&self) -> String {
        self.as_node().display_label()
    }
}

impl From<BlockToken> for Entity {
    fn from(block: BlockToken) -> Self {
        Entity::Block(block)
    }
}

impl From<PropertyToken> for Entity {
    fn from(property: PropertyToken) -> Self {
        Entity::Property(property)
    }
}

impl From<EnumerationToken> for Entity {
    fn from(enumeration: EnumerationToken) -> Self {
        Entity::Enumeration(enumeration)
    }
}

impl From<VariableToken> for Entity {
    fn from(variable: VariableToken) -> Self {
        Entity::Variable(variable)
    }
}

impl From<NamespaceToken> for Entity {
    fn from(namespace: NamespaceToken) -> Self {
        Entity::Namespace(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_accessors() {
        let entity = Entity::from(VariableToken::new("x", "5"));
        assert_eq!(entity.kind(), EntityKind::Variable);
        assert_eq!(entity.name(), "x");
        assert_eq!(entity.as_variable().map(VariableToken::value), Some("5"));
        assert!(entity.as_block().is_none());
        assert_eq!(entity.node_type(), "Variable");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let entity = Entity::from(PropertyToken::new("bar", "1"));
        let json = serde_json::to_string(&entity).unwrap();
        assert_eq!(json, r#"{"kind":"property","name":"bar","value":"1"}"#);
    }
}
