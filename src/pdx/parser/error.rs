//! Parse error reported by both dialects
//!
//! Every failure of the core, lexical or grammatical, ends up as a
//! [`ParseError`]: where in the input matching could not proceed, the source
//! line for context, what was found there and what would have been accepted.

use chumsky::error::{Simple, SimpleReason};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

use crate::pdx::ast::{SourceLocation, Span};
use crate::pdx::lexer::Token;

/// A parse error for a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub column: usize,
    /// Byte offset into the source
    pub offset: usize,
    /// Zero-based extent of the offending lexeme
    pub span: Span,
    /// The offending source line
    pub snippet: String,
    /// Description of what was found, `None` at end of input
    pub found: Option<String>,
    /// Constructs that would have been accepted at this position
    pub expected: Vec<String>,
}

impl ParseError {
    /// Create an error located at the start of `span`
    pub(crate) fn new(source: &str, span: Range<usize>, message: impl Into<String>) -> Self {
        let location = SourceLocation::new(source);
        let position = location.byte_to_position(span.start);
        Self {
            message: message.into(),
            line: position.line + 1,
            column: position.column + 1,
            offset: span.start.min(source.len()),
            span: location.range_to_span(&span),
            snippet: location
                .line_text(position.line)
                .unwrap_or_default()
                .to_string(),
            found: None,
            expected: Vec::new(),
        }
    }

    /// Convert a grammar error into a located parse error
    pub(crate) fn from_grammar(source: &str, error: Simple<Token>) -> Self {
        let found = error.found().map(|token| token.to_string());
        let mut expected: BTreeSet<String> = error
            .expected()
            .map(|token| match token {
                Some(token) => token.to_string(),
                None => "end of input".to_string(),
            })
            .collect();
        if let Some(label) = error.label() {
            expected.insert(label.to_string());
        }

        let message = match error.reason() {
            SimpleReason::Unclosed { delimiter, .. } => {
                format!("unclosed delimiter {}", delimiter)
            }
            SimpleReason::Custom(message) => message.clone(),
            SimpleReason::Unexpected => match &found {
                Some(found) => format!("unexpected {}", found),
                None => "unexpected end of input".to_string(),
            },
        };

        let mut parse_error = Self::new(source, error.span(), message);
        parse_error.found = found;
        parse_error.expected = expected.into_iter().collect();
        parse_error
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at {}:{}: {}",
            self.line, self.column, self.message
        )?;
        if !self.expected.is_empty() {
            write!(f, ", expected {}", self.expected.join(" or "))?;
        }
        if !self.snippet.is_empty() {
            let caret_pad = " ".repeat(self.column.saturating_sub(1));
            write!(f, "\n  | {}\n  | {}^", self.snippet, caret_pad)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
