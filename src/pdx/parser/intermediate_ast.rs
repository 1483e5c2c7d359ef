//! Match tree produced by the grammar
//!
//! These structures record which production matched and the raw lexemes it
//! consumed, together with their byte ranges. They are purely syntactic: the
//! tree builder turns them into the typed tokens of [`crate::pdx::ast`].
//! Block bodies use their own enum so that a namespace or a variable can
//! never appear nested.

use std::ops::Range;

/// A value paired with its byte range in the source
pub(crate) type Spanned<T> = (T, Range<usize>);

/// A value-carrying lexeme as the grammar saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lexeme {
    Word(String),
    Number(String),
    /// Raw literal with its surrounding quotes
    Quoted(String),
    /// `@name`, without the sigil
    VariableRef(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NamespaceMatch {
    pub(crate) name: Spanned<Lexeme>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VariableMatch {
    /// Name without the `@` sigil
    pub(crate) name: Spanned<String>,
    pub(crate) value: Spanned<Lexeme>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PropertyMatch {
    pub(crate) name: Spanned<Lexeme>,
    pub(crate) value: Spanned<Lexeme>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EnumerationMatch {
    pub(crate) name: Spanned<Lexeme>,
    pub(crate) items: Vec<Spanned<Lexeme>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BlockMatch {
    pub(crate) name: Spanned<Lexeme>,
    pub(crate) body: Vec<BodyMatch>,
}

/// One entity inside a `{ ... }` block body
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BodyMatch {
    Property(PropertyMatch),
    Enumeration(EnumerationMatch),
    Block(BlockMatch),
}

/// One top-level entity
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EntityMatch {
    Namespace(NamespaceMatch),
    Variable(VariableMatch),
    Property(PropertyMatch),
    Enumeration(EnumerationMatch),
    Block(BlockMatch),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DocumentMatch {
    pub(crate) entities: Vec<EntityMatch>,
}
