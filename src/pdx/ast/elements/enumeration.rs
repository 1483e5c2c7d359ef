//! Enumeration token: `name = { a b "c" }`

use serde::Serialize;

use super::super::traits::AstNode;

/// A flat, ordered list of bare words and quoted strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationToken {
    name: String,
    values: Vec<String>,
}

impl EnumerationToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in source order, duplicates retained
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub(crate) fn into_parts(self) -> (String, Vec<String>) {
        (self.name, self.values)
    }
}

impl<'a> IntoIterator for &'a EnumerationToken {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl AstNode for EnumerationToken {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &'static str {
        "Enumeration"
    }

    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.values.join(", "))
    }
}
