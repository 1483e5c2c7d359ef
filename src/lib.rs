//! # pdx
//!
//! A parser for Paradox-style declarative script.
//!
//! Two dialects share one lexer and one set of productions:
//!
//! - [`parse`] reads script files (events, definitions): an optional
//!   `namespace = ...` declaration followed by blocks and `@variables`.
//! - [`parse_settings`] reads settings files and mod descriptors, where
//!   properties and enumerations may also appear at the top level.
//!
//! Both return the top-level [`Entity`] values in source order or a
//! [`ParseError`] pointing at the furthest place the grammar got before the input
//! stopped matching.
//!
//! ## Testing
//!
//! For structural assertions on parsed trees see the
//! [testing module](pdx::testing).

pub mod pdx;

pub use pdx::ast::{
    BlockToken, Entity, EntityKind, EnumerationToken, NamespaceToken, Properties, PropertyToken,
    PropertyValue, VariableToken,
};
pub use pdx::error::PdxError;
pub use pdx::parser::{
    parse, parse_file, parse_settings, parse_settings_file, parse_with, Dialect, ParseError,
};
