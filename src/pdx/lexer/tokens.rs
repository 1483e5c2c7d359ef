//! Token definitions for Paradox script
//!
//! This module defines all the tokens that can be produced by the script lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//! Whitespace and `#` line comments are skipped and never reach the parser.
use logos::Logos;
use std::fmt;

/// All possible tokens in Paradox script
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f\x{FEFF}]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    // Brackets
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Assignment and relational operators. The parser accepts the relational
    // ones wherever `=` may be replaced, then drops the operator.
    #[token("=")]
    Assign,
    #[token(">=")]
    GreaterEqual,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,

    // Numbers win ties against identifiers ("5"), a longer identifier match
    // still wins ("10abc", "1.2.3")
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_owned(), priority = 3)]
    Number(String),

    #[regex(r"[A-Za-z0-9_\-:.]+", |lex| lex.slice().to_owned(), priority = 2)]
    Identifier(String),

    /// Raw literal, surrounding quotes included
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#, |lex| lex.slice().to_owned())]
    Quoted(String),

    /// `@name`, stored without the sigil
    #[regex(r"@[A-Za-z0-9_]+", |lex| lex.slice()[1..].to_owned())]
    VariableRef(String),
}

impl Token {
    /// Check if this token may stand in for `=`
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::GreaterEqual
                | Token::LessEqual
                | Token::Greater
                | Token::Less
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenBrace => write!(f, "'{{'"),
            Token::CloseBrace => write!(f, "'}}'"),
            Token::Assign => write!(f, "'='"),
            Token::GreaterEqual => write!(f, "'>='"),
            Token::LessEqual => write!(f, "'<='"),
            Token::Greater => write!(f, "'>'"),
            Token::Less => write!(f, "'<'"),
            Token::Number(text) => write!(f, "number {}", text),
            Token::Identifier(text) => write!(f, "identifier {}", text),
            Token::Quoted(raw) => write!(f, "string {}", raw),
            Token::VariableRef(name) => write!(f, "variable @{}", name),
        }
    }
}
