//! Productions shared by both dialects
//!
//! Every production here works on the logos token stream and yields the
//! syntactic match tree of [`super::intermediate_ast`]. The two dialects only
//! differ in their top-level rule (see [`super::document`]).
//!
//! Ordering matters: inside a block body a `{` after the operator is first
//! tried as a flat enumeration body and only then as a nested block body.
//! chumsky alternatives rewind on failure, so a body that turns out to
//! contain an assignment falls through to the block production.

use chumsky::prelude::*;
use std::ops::Range;

use super::intermediate_ast::{
    BlockMatch, BodyMatch, EnumerationMatch, Lexeme, NamespaceMatch, PropertyMatch, Spanned,
    VariableMatch,
};
use crate::pdx::lexer::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Helper: accept a single token if `accept` turns it into a lexeme
fn lexeme<F>(
    label: &'static str,
    accept: F,
) -> impl Parser<Token, Spanned<Lexeme>, Error = ParserError> + Clone
where
    F: Fn(Token) -> Result<Lexeme, Token> + Clone,
{
    filter_map(move |span: Range<usize>, token: Token| match accept(token) {
        Ok(lexeme) => Ok((lexeme, span)),
        Err(token) => Err(Simple::expected_input_found(span, Vec::new(), Some(token))),
    })
    .labelled(label)
}

/// Bare word: identifier or number
pub(crate) fn word() -> impl Parser<Token, Spanned<Lexeme>, Error = ParserError> + Clone {
    lexeme("identifier", |token| match token {
        Token::Identifier(text) => Ok(Lexeme::Word(text)),
        Token::Number(text) => Ok(Lexeme::Number(text)),
        other => Err(other),
    })
}

fn number() -> impl Parser<Token, Spanned<Lexeme>, Error = ParserError> + Clone {
    lexeme("number", |token| match token {
        Token::Number(text) => Ok(Lexeme::Number(text)),
        other => Err(other),
    })
}

/// Right-hand side of a property
fn scalar() -> impl Parser<Token, Spanned<Lexeme>, Error = ParserError> + Clone {
    lexeme("value", |token| match token {
        Token::Number(text) => Ok(Lexeme::Number(text)),
        Token::Quoted(raw) => Ok(Lexeme::Quoted(raw)),
        Token::Identifier(text) => Ok(Lexeme::Word(text)),
        Token::VariableRef(name) => Ok(Lexeme::VariableRef(name)),
        other => Err(other),
    })
}

fn enumeration_item() -> impl Parser<Token, Spanned<Lexeme>, Error = ParserError> + Clone {
    lexeme("enumeration item", |token| match token {
        Token::Identifier(text) => Ok(Lexeme::Word(text)),
        Token::Number(text) => Ok(Lexeme::Number(text)),
        Token::Quoted(raw) => Ok(Lexeme::Quoted(raw)),
        other => Err(other),
    })
}

fn block_name() -> impl Parser<Token, Spanned<Lexeme>, Error = ParserError> + Clone {
    lexeme("block name", |token| match token {
        Token::Quoted(raw) => Ok(Lexeme::Quoted(raw)),
        Token::Identifier(text) => Ok(Lexeme::Word(text)),
        Token::Number(text) => Ok(Lexeme::Number(text)),
        other => Err(other),
    })
}

fn variable_name() -> impl Parser<Token, Spanned<String>, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: Token| match token {
        Token::VariableRef(name) => Ok((name, span)),
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("variable")
}

/// Strict `=`
fn assign() -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Assign).ignored()
}

/// `=` or one of the relational operators; which one is not kept
fn operator() -> impl Parser<Token, (), Error = ParserError> + Clone {
    filter(Token::is_operator).ignored().labelled("assignment")
}

fn braced<P, O>(inner: P) -> impl Parser<Token, O, Error = ParserError> + Clone
where
    P: Parser<Token, O, Error = ParserError> + Clone,
{
    inner.delimited_by(just(Token::OpenBrace), just(Token::CloseBrace))
}

/// `namespace = word`
pub(crate) fn namespace() -> impl Parser<Token, NamespaceMatch, Error = ParserError> + Clone {
    filter(|token: &Token| matches!(token, Token::Identifier(text) if text == "namespace"))
        .ignore_then(assign())
        .ignore_then(word())
        .map(|name| NamespaceMatch { name })
}

/// `@identifier = number`
pub(crate) fn variable() -> impl Parser<Token, VariableMatch, Error = ParserError> + Clone {
    variable_name()
        .then_ignore(assign())
        .then(number())
        .map(|(name, value)| VariableMatch { name, value })
}

/// `word (= | cmp) (number | quoted | word | @identifier)`
pub(crate) fn property() -> impl Parser<Token, PropertyMatch, Error = ParserError> + Clone {
    word()
        .then_ignore(operator())
        .then(scalar())
        .map(|(name, value)| PropertyMatch { name, value })
}

/// `word = { (word | quoted)+ }`
pub(crate) fn enumeration() -> impl Parser<Token, EnumerationMatch, Error = ParserError> + Clone
{
    word()
        .then_ignore(assign())
        .then(braced(enumeration_item().repeated().at_least(1)))
        .map(|(name, items)| EnumerationMatch { name, items })
}

/// `(quoted | word) (= | cmp) { body* }`
pub(crate) fn block<P>(body: P) -> impl Parser<Token, BlockMatch, Error = ParserError> + Clone
where
    P: Parser<Token, BodyMatch, Error = ParserError> + Clone,
{
    block_name()
        .then_ignore(operator())
        .then(braced(body.repeated()))
        .map(|(name, body)| BlockMatch { name, body })
}

/// Any entity allowed inside a block body: property, enumeration, block
pub(crate) fn body_entity() -> impl Parser<Token, BodyMatch, Error = ParserError> + Clone {
    recursive(|body| {
        choice((
            property().map(BodyMatch::Property),
            enumeration().map(BodyMatch::Enumeration),
            block(body).map(BodyMatch::Block),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdx::lexer::tokenize_with_spans;

    fn run<P, O>(parser: P, source: &str) -> Result<O, Vec<ParserError>>
    where
        P: Parser<Token, O, Error = ParserError>,
    {
        let tokens = tokenize_with_spans(source).unwrap();
        let eoi = source.len();
        parser
            .then_ignore(end())
            .parse(chumsky::Stream::from_iter(eoi..eoi + 1, tokens.into_iter()))
    }

    fn word_of(lexeme: &Spanned<Lexeme>) -> &str {
        match &lexeme.0 {
            Lexeme::Word(text) | Lexeme::Number(text) => text,
            Lexeme::Quoted(raw) => raw,
            Lexeme::VariableRef(name) => name,
        }
    }

    #[test]
    fn test_property_accepts_every_operator() {
        for source in ["a = 1", "a > 1", "a < 1", "a >= 1", "a <= 1"] {
            let matched = run(property(), source).unwrap();
            assert_eq!(word_of(&matched.name), "a");
            assert_eq!(matched.value.0, Lexeme::Number("1".into()));
        }
    }

    #[test]
    fn test_property_value_kinds() {
        assert_eq!(
            run(property(), "a = \"x y\"").unwrap().value.0,
            Lexeme::Quoted("\"x y\"".into())
        );
        assert_eq!(
            run(property(), "a = yes").unwrap().value.0,
            Lexeme::Word("yes".into())
        );
        assert_eq!(
            run(property(), "a = @cost").unwrap().value.0,
            Lexeme::VariableRef("cost".into())
        );
    }

    #[test]
    fn test_property_requires_value() {
        assert!(run(property(), "a =").is_err());
        assert!(run(property(), "a = {").is_err());
    }

    #[test]
    fn test_variable_requires_assign_and_number() {
        let matched = run(variable(), "@x = -2.5").unwrap();
        assert_eq!(matched.name.0, "x");
        assert_eq!(matched.value.0, Lexeme::Number("-2.5".into()));
        assert!(run(variable(), "@x > 1").is_err());
        assert!(run(variable(), "@x = abc").is_err());
    }

    #[test]
    fn test_namespace() {
        let matched = run(namespace(), "namespace = my_events").unwrap();
        assert_eq!(word_of(&matched.name), "my_events");
        assert!(run(namespace(), "namespace = 12").is_err());
        assert!(run(namespace(), "other = x").is_err());
    }

    #[test]
    fn test_enumeration_needs_items_and_assign() {
        let matched = run(enumeration(), "list = { a \"b\" 3 }").unwrap();
        let items: Vec<&str> = matched.items.iter().map(word_of).collect();
        assert_eq!(items, vec!["a", "\"b\"", "3"]);
        assert!(run(enumeration(), "list = { }").is_err());
        assert!(run(enumeration(), "list > { a }").is_err());
        assert!(run(enumeration(), "list = { a = b }").is_err());
    }

    #[test]
    fn test_body_prefers_enumeration_for_flat_words() {
        let matched = run(body_entity(), "foo = { a b c }").unwrap();
        assert!(matches!(matched, BodyMatch::Enumeration(_)));
    }

    #[test]
    fn test_body_falls_through_to_block() {
        let matched = run(body_entity(), "foo = { a = b }").unwrap();
        match matched {
            BodyMatch::Block(block) => assert_eq!(block.body.len(), 1),
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_is_a_block() {
        let matched = run(body_entity(), "foo = { }").unwrap();
        assert!(matches!(matched, BodyMatch::Block(ref block) if block.body.is_empty()));
    }

    #[test]
    fn test_block_with_comparison_and_quoted_name() {
        let matched = run(body_entity(), "\"my block\" > { x = 1 }").unwrap();
        match matched {
            BodyMatch::Block(block) => {
                assert_eq!(block.name.0, Lexeme::Quoted("\"my block\"".into()))
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_word_and_assignment_body_is_rejected() {
        assert!(run(body_entity(), "foo = { a b = c }").is_err());
    }
}
