//! Script formatter: entities back to Paradox script text
//!
//! Output re-parses to an equal tree under the dialect that produced the
//! entities. Relational operators were dropped by the parser and come back
//! as `=`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::registry::{FormatError, Formatter};
use crate::pdx::ast::{BlockToken, Entity, PropertyValue};

const INDENT: &str = "    ";

/// Text that lexes back as a single bare word
static BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-:.]+$").expect("valid regex"));

/// Property values may also be variable references
static VARIABLE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[A-Za-z0-9_]+$").expect("valid regex"));

/// Quote `text` unless it lexes back as a single bare word
fn quote_if_needed(text: &str) -> String {
    if BARE.is_match(text) {
        text.to_string()
    } else {
        format!("\"{}\"", text)
    }
}

/// Like [`quote_if_needed`], but `@name` stays bare
fn quote_value(text: &str) -> String {
    if VARIABLE_REF.is_match(text) {
        text.to_string()
    } else {
        quote_if_needed(text)
    }
}

fn write_list(out: &mut String, name: &str, values: &[String]) {
    out.push_str(name);
    out.push_str(" = {");
    for value in values {
        out.push(' ');
        out.push_str(&quote_if_needed(value));
    }
    out.push_str(" }\n");
}

fn write_block(out: &mut String, block: &BlockToken, depth: usize) {
    let indent = INDENT.repeat(depth);
    out.push_str(&indent);
    out.push_str(&quote_if_needed(block.name()));
    if block.properties().is_empty() && block.is_empty() {
        out.push_str(" = { }\n");
        return;
    }
    out.push_str(" = {\n");

    let inner = INDENT.repeat(depth + 1);
    for (name, value) in block.properties().iter() {
        out.push_str(&inner);
        match value {
            PropertyValue::Scalar(value) => {
                out.push_str(&format!("{} = {}\n", name, quote_value(value)))
            }
            PropertyValue::List(values) => write_list(out, name, values),
        }
    }
    for child in block.iter() {
        write_block(out, child, depth + 1);
    }

    out.push_str(&indent);
    out.push_str("}\n");
}

/// Render entities as script text
pub fn to_script_str(entities: &[Entity]) -> String {
    let mut out = String::new();
    for entity in entities {
        match entity {
            Entity::Namespace(namespace) => {
                out.push_str(&format!("namespace = {}\n", namespace.name()))
            }
            Entity::Variable(variable) => {
                out.push_str(&format!("@{} = {}\n", variable.name(), variable.value()))
            }
            Entity::Property(property) => out.push_str(&format!(
                "{} = {}\n",
                property.name(),
                quote_value(property.value())
            )),
            Entity::Enumeration(enumeration) => {
                write_list(&mut out, enumeration.name(), enumeration.values())
            }
            Entity::Block(block) => write_block(&mut out, block, 0),
        }
    }
    out
}

/// Formatter for the script format
pub struct ScriptFormatter;

impl Formatter for ScriptFormatter {
    fn name(&self) -> &str {
        "script"
    }

    fn serialize(&self, entities: &[Entity]) -> Result<String, FormatError> {
        Ok(to_script_str(entities))
    }

    fn description(&self) -> &str {
        "Paradox script text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdx::parser::{parse, parse_settings};

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("yes"), "yes");
        assert_eq!(quote_if_needed("-1.5"), "-1.5");
        assert_eq!(quote_if_needed("@cost"), "\"@cost\"");
        assert_eq!(quote_value("@cost"), "@cost");
        assert_eq!(quote_value("two words"), "\"two words\"");
        assert_eq!(quote_if_needed("two words"), "\"two words\"");
        assert_eq!(quote_if_needed(""), "\"\"");
        assert_eq!(quote_if_needed("a=b"), "\"a=b\"");
    }

    #[test]
    fn test_script_layout() {
        let source = "namespace = ns\n@cost = 10\nev.1 = { title = \"Hello there\" trigger = { tags = { a b } has = { } } }";
        let rendered = to_script_str(&parse(source).unwrap());
        let expected = "\
namespace = ns
@cost = 10
ev.1 = {
    title = \"Hello there\"
    trigger = {
        tags = { a b }
        has = { }
    }
}
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_relational_operator_becomes_assign() {
        let rendered = to_script_str(&parse("foo = { age > 16 }").unwrap());
        assert_eq!(rendered, "foo = {\n    age = 16\n}\n");
    }

    #[test]
    fn test_rendered_settings_reparse_equal() {
        let source = "a = 1 list = { \"x y\" z } b = { c = @v d = { } }";
        let entities = parse_settings(source).unwrap();
        let reparsed = parse_settings(&to_script_str(&entities)).unwrap();
        assert_eq!(reparsed, entities);
    }

    #[test]
    fn test_sigil_text_outside_values_stays_quoted() {
        let source = "list = { \"@a\" b } \"@x\" = { a = 1 v = \"@y\" }";
        let entities = parse_settings(source).unwrap();
        let rendered = to_script_str(&entities);
        assert_eq!(
            rendered,
            "list = { \"@a\" b }\n\"@x\" = {\n    a = 1\n    v = @y\n}\n"
        );
        assert_eq!(parse_settings(&rendered).unwrap(), entities);
    }
}
