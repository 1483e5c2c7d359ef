//! Token tree definitions for Paradox script
//!
//! This module provides the typed tree produced by the parser, along with
//! utilities for tracking source positions.
//!
//! ## Modules
//!
//! - `elements` - Token types (namespace, variable, property, enumeration, block)
//! - `traits` - Uniform access to names and labels
//! - `span` - Position and Span types for source code locations
//! - `position` - Source location utilities for converting byte offsets

pub mod elements;
pub mod position;
pub mod span;
pub mod traits;

pub use elements::{
    BlockToken, Entity, EntityKind, EnumerationToken, NamespaceToken, Properties, PropertyToken,
    PropertyValue, VariableToken,
};
pub use position::SourceLocation;
pub use span::{Position, Span};
pub use traits::AstNode;
