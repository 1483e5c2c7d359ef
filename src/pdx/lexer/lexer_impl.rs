//! Implementation of the script lexer
//!
//! This module provides convenience functions for tokenizing script text.
//! The actual tokenization is handled entirely by logos; this layer only
//! collects spans and turns unrecognized input into a [`ParseError`].

use crate::pdx::lexer::tokens::Token;
use crate::pdx::parser::error::ParseError;
use logos::Logos;

/// Type alias for token with its byte range in the source
pub type TokenSpan = (Token, logos::Span);

/// Tokenize a string and collect tokens with their spans
///
/// Fails on the first character sequence that matches no token.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<TokenSpan>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                return Err(ParseError::new(
                    source,
                    span.clone(),
                    format!("unexpected character {:?}", lexer.slice()),
                ));
            }
        }
    }

    Ok(tokens)
}

/// Tokenize a string and collect all tokens, dropping spans
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("foo = { bar = 1 }").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("foo".into()),
                Token::Assign,
                Token::OpenBrace,
                Token::Identifier("bar".into()),
                Token::Assign,
                Token::Number("1".into()),
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_tokenize_with_spans() {
        let tokens = tokenize_with_spans("@x = 5").unwrap();
        assert_eq!(
            tokens,
            vec![
                (Token::VariableRef("x".into()), 0..2),
                (Token::Assign, 3..4),
                (Token::Number("5".into()), 5..6),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_comment_only() {
        assert_eq!(tokenize("# nothing here\n# at all").unwrap(), vec![]);
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let tokens = tokenize("\u{feff}foo = bar").unwrap();
        assert_eq!(tokens[0], Token::Identifier("foo".into()));
    }

    #[test]
    fn test_unknown_character_reports_position() {
        let err = tokenize("foo = {\n  bar = $\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 9);
        assert!(err.message.contains("unexpected character"));
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let err = tokenize("name = \"oops").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 8);
    }
}
