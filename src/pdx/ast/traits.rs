//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to token information across all token types.

/// Common interface for all tokens in the tree
pub trait AstNode {
    /// Identifier before the `=`
    fn name(&self) -> &str;
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}
