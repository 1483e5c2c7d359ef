//! Treeviz formatter for parsed entities
//!
//! One line per node, drawn with box characters. Block properties are listed
//! before the nested blocks.

use super::registry::{FormatError, Formatter};
use crate::pdx::ast::{AstNode, BlockToken, Entity, PropertyValue};

pub(crate) const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Render entities as a tree, labels cut at `label_width` characters
pub fn to_treeviz_str(entities: &[Entity], label_width: usize) -> String {
    let mut result = String::new();
    for (i, entity) in entities.iter().enumerate() {
        let is_last = i == entities.len() - 1;
        append_line(
            &mut result,
            "",
            is_last,
            entity.node_type(),
            &truncate(&entity.display_label(), label_width),
        );
        if let Entity::Block(block) = entity {
            append_block_body(&mut result, block, &child_prefix("", is_last), label_width);
        }
    }
    result
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_line(result: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}: {}\n", prefix, connector, node_type, label));
}

fn append_block_body(result: &mut String, block: &BlockToken, prefix: &str, label_width: usize) {
    let total = block.properties().len() + block.len();
    let mut index = 0;

    for (name, value) in block.properties().iter() {
        index += 1;
        let (node_type, label) = match value {
            PropertyValue::Scalar(value) => ("Property", format!("{} = {}", name, value)),
            PropertyValue::List(values) => {
                ("Enumeration", format!("{} [{}]", name, values.join(", ")))
            }
        };
        append_line(
            result,
            prefix,
            index == total,
            node_type,
            &truncate(&label, label_width),
        );
    }

    for child in block.iter() {
        index += 1;
        let is_last = index == total;
        append_line(
            result,
            prefix,
            is_last,
            child.node_type(),
            &truncate(&child.display_label(), label_width),
        );
        append_block_body(result, child, &child_prefix(prefix, is_last), label_width);
    }
}

/// Formatter for the treeviz format
pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        Self { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, entities: &[Entity]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(entities, self.label_width))
    }

    fn description(&self) -> &str {
        "Box-drawing tree of entities"
    }
}
