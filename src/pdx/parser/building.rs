//! Tree building
//!
//! Converts the match tree (with spans) into the typed tokens of
//! [`crate::pdx::ast`]. Quoted lexemes lose their surrounding quotes here,
//! relational operators are already gone, and block bodies are folded into a
//! property map plus an ordered child list.

use log::trace;

use super::intermediate_ast::{
    BlockMatch, BodyMatch, DocumentMatch, EntityMatch, EnumerationMatch, Lexeme, NamespaceMatch,
    PropertyMatch, VariableMatch,
};
use crate::pdx::ast::{
    BlockToken, Entity, EnumerationToken, NamespaceToken, PropertyToken, PropertyValue,
    VariableToken,
};

/// Convert a matched document into its top-level entities, in source order
pub(crate) fn build_document(document: DocumentMatch) -> Vec<Entity> {
    document.entities.into_iter().map(build_entity).collect()
}

/// Dispatch a top-level match to its builder
pub(crate) fn build_entity(matched: EntityMatch) -> Entity {
    match matched {
        EntityMatch::Namespace(m) => Entity::Namespace(build_namespace(m)),
        EntityMatch::Variable(m) => Entity::Variable(build_variable(m)),
        EntityMatch::Property(m) => Entity::Property(build_property(m)),
        EntityMatch::Enumeration(m) => Entity::Enumeration(build_enumeration(m)),
        EntityMatch::Block(m) => Entity::Block(build_block(m)),
    }
}

pub(crate) fn build_namespace(matched: NamespaceMatch) -> NamespaceToken {
    NamespaceToken::new(stringify(matched.name.0))
}

pub(crate) fn build_variable(matched: VariableMatch) -> VariableToken {
    let (name, span) = matched.name;
    trace!("variable @{} at {:?}", name, span);
    VariableToken::new(name, stringify(matched.value.0))
}

pub(crate) fn build_property(matched: PropertyMatch) -> PropertyToken {
    PropertyToken::new(stringify(matched.name.0), stringify(matched.value.0))
}

pub(crate) fn build_enumeration(matched: EnumerationMatch) -> EnumerationToken {
    let mut enumeration = EnumerationToken::new(stringify(matched.name.0));
    for (item, _) in matched.items {
        enumeration.push(stringify(item));
    }
    enumeration
}

/// Fold a block body: properties and enumerations go into the property map
/// (a later entry with the same name replaces the earlier value), nested
/// blocks are appended to the children in source order.
pub(crate) fn build_block(matched: BlockMatch) -> BlockToken {
    let (name, span) = matched.name;
    let mut block = BlockToken::new(stringify(name));
    trace!(
        "block {} at {:?} with {} body entities",
        block.name(),
        span,
        matched.body.len()
    );

    for entity in matched.body {
        match entity {
            BodyMatch::Property(m) => {
                let (name, value) = build_property(m).into_parts();
                block.set_property(name, PropertyValue::Scalar(value));
            }
            BodyMatch::Enumeration(m) => {
                let (name, values) = build_enumeration(m).into_parts();
                block.set_property(name, PropertyValue::List(values));
            }
            BodyMatch::Block(m) => block.push_child(build_block(m)),
        }
    }
    block
}

/// Text of a lexeme as it appears in the tree
///
/// Quoted strings lose their delimiters (escapes are left as written),
/// variable references keep their `@` sigil.
fn stringify(lexeme: Lexeme) -> String {
    match lexeme {
        Lexeme::Word(text) | Lexeme::Number(text) => text,
        Lexeme::Quoted(raw) => strip_quotes(&raw).to_string(),
        Lexeme::VariableRef(name) => format!("@{}", name),
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> (Lexeme, std::ops::Range<usize>) {
        (Lexeme::Word(text.to_string()), 0..0)
    }

    fn property(name: &str, value: Lexeme) -> BodyMatch {
        BodyMatch::Property(PropertyMatch {
            name: word(name),
            value: (value, 0..0),
        })
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(Lexeme::Quoted("\"a b\"".into())), "a b");
        assert_eq!(stringify(Lexeme::Quoted("\"\"".into())), "");
        assert_eq!(
            stringify(Lexeme::Quoted(r#""say \"hi\"""#.into())),
            r#"say \"hi\""#
        );
        assert_eq!(stringify(Lexeme::VariableRef("cost".into())), "@cost");
        assert_eq!(stringify(Lexeme::Number("-1.5".into())), "-1.5");
    }

    #[test]
    fn test_block_folds_properties_last_write_wins() {
        let block = build_block(BlockMatch {
            name: word("country"),
            body: vec![
                property("tag", Lexeme::Word("AAA".into())),
                property("size", Lexeme::Number("1".into())),
                property("tag", Lexeme::Word("BBB".into())),
            ],
        });
        assert_eq!(block.properties().len(), 2);
        assert_eq!(block.property("tag").unwrap(), "BBB");
        let keys: Vec<&str> = block.properties().keys().collect();
        assert_eq!(keys, vec!["tag", "size"]);
    }

    #[test]
    fn test_enumeration_and_property_share_a_name() {
        let block = build_block(BlockMatch {
            name: word("b"),
            body: vec![
                property("x", Lexeme::Number("1".into())),
                BodyMatch::Enumeration(EnumerationMatch {
                    name: word("x"),
                    items: vec![word("a"), word("b")],
                }),
            ],
        });
        assert_eq!(
            block.property("x").unwrap().as_list(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_children_keep_order_and_duplicates() {
        let child = |name: &str| {
            BodyMatch::Block(BlockMatch {
                name: word(name),
                body: Vec::new(),
            })
        };
        let block = build_block(BlockMatch {
            name: word("root"),
            body: vec![child("a"), child("b"), child("a")],
        });
        let names: Vec<&str> = block.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_quoted_block_name_is_unquoted() {
        let block = build_block(BlockMatch {
            name: (Lexeme::Quoted("\"my block\"".into()), 0..10),
            body: Vec::new(),
        });
        assert_eq!(block.name(), "my block");
    }
}
