//! Block token: `name = { ... }`

use serde::Serialize;
use std::collections::HashMap;

use super::super::traits::AstNode;
use super::properties::{Properties, PropertyValue};

/// A named, recursively nested block
///
/// Property and enumeration children are folded into [`Properties`]; block
/// children are kept in source order, duplicates included. The `includes`
/// view over the children is derived and resolves duplicate names to the
/// last occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockToken {
    name: String,
    properties: Properties,
    children: Vec<BlockToken>,
}

impl BlockToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Shorthand for `properties().get(name)`
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Child blocks in source order
    pub fn children(&self) -> &[BlockToken] {
        &self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BlockToken> {
        self.children.iter()
    }

    /// Number of child blocks
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child blocks by name, last one wins on duplicates
    pub fn includes(&self) -> HashMap<&str, &BlockToken> {
        self.children
            .iter()
            .map(|child| (child.name(), child))
            .collect()
    }

    /// Last child block called `name`
    pub fn include(&self, name: &str) -> Option<&BlockToken> {
        self.children.iter().rev().find(|child| child.name == name)
    }

    pub(crate) fn set_property(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.insert(name, value);
    }

    pub(crate) fn push_child(&mut self, child: BlockToken) {
        self.children.push(child);
    }
}

impl<'a> IntoIterator for &'a BlockToken {
    type Item = &'a BlockToken;
    type IntoIter = std::slice::Iter<'a, BlockToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl AstNode for BlockToken {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &'static str {
        "Block"
    }

    fn display_label(&self) -> String {
        format!(
            "{} ({} properties, {} blocks)",
            self.name,
            self.properties.len(),
            self.children.len()
        )
    }
}
