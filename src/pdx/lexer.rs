//! Lexer module for Paradox script
//!
//! This module contains the tokenization logic, split into the token
//! definitions (pure patterns, see [`tokens`]) and the span-collecting driver
//! (see [`lexer_impl`]). The same lexer serves both the script and the
//! settings dialect; the dialects only differ in their top-level grammar rule.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans, TokenSpan};
pub use tokens::Token;
