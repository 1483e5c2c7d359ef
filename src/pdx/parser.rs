//! Parser module for Paradox script
//!
//! This module turns source text into the typed token tree of
//! [`crate::pdx::ast`] in three steps: the logos lexer produces spanned
//! tokens, the chumsky grammar matches them against the dialect's top-level
//! rule (see [`document`]) producing a match tree, and the tree builder (see
//! [`building`]) converts that into [`Entity`] values.
//!
//! ## Testing
//!
//! Structural checks use the fluent assertions of the
//! [testing module](crate::pdx::testing).

pub mod api;
pub(crate) mod building;
pub mod document;
pub mod error;
pub(crate) mod grammar;
pub(crate) mod intermediate_ast;
#[cfg(test)]
mod tests;

pub use crate::pdx::ast::{
    AstNode, BlockToken, Entity, EntityKind, EnumerationToken, NamespaceToken, Position,
    Properties, PropertyToken, PropertyValue, SourceLocation, Span, VariableToken,
};

pub use api::{parse, parse_file, parse_file_with, parse_settings, parse_settings_file, parse_with};
pub use document::Dialect;
pub use error::ParseError;
