//! Top-level rules of the two dialects
//!
//! Script files hold an optional leading namespace declaration followed by
//! blocks and variables. Settings files hold any sequence of variables,
//! properties, enumerations and blocks. Both rules must consume the entire
//! token stream.

use chumsky::prelude::*;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::grammar::{
    block, body_entity, enumeration, namespace, property, variable, ParserError,
};
use super::intermediate_ast::{DocumentMatch, EntityMatch};
use crate::pdx::lexer::Token;

/// Which top-level rule to apply to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Event and definition files: `namespace`, blocks and variables
    #[default]
    Script,
    /// Configuration files: anything goes at the top level
    Settings,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Script => write!(f, "script"),
            Dialect::Settings => write!(f, "settings"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "script" => Ok(Dialect::Script),
            "settings" => Ok(Dialect::Settings),
            other => Err(format!(
                "unknown dialect '{}', expected 'script' or 'settings'",
                other
            )),
        }
    }
}

/// `namespace? (block | variable)*`
pub(crate) fn script_document() -> impl Parser<Token, DocumentMatch, Error = ParserError> + Clone
{
    let entity = choice((
        variable().map(EntityMatch::Variable),
        block(body_entity()).map(EntityMatch::Block),
    ));

    namespace()
        .map(EntityMatch::Namespace)
        .or_not()
        .then(entity.repeated())
        .then_ignore(end())
        .map(|(namespace, entities)| DocumentMatch {
            entities: namespace.into_iter().chain(entities).collect(),
        })
}

/// `(variable | property | enumeration | block)*`
pub(crate) fn settings_document(
) -> impl Parser<Token, DocumentMatch, Error = ParserError> + Clone {
    choice((
        variable().map(EntityMatch::Variable),
        property().map(EntityMatch::Property),
        enumeration().map(EntityMatch::Enumeration),
        block(body_entity()).map(EntityMatch::Block),
    ))
    .repeated()
    .then_ignore(end())
    .map(|entities| DocumentMatch { entities })
}

/// Build the top-level rule for `dialect`
pub(crate) fn document(dialect: Dialect) -> BoxedParser<'static, Token, DocumentMatch, ParserError> {
    match dialect {
        Dialect::Script => script_document().boxed(),
        Dialect::Settings => settings_document().boxed(),
    }
}
