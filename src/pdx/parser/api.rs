//! Public API for the parser.

use chumsky::prelude::*;
use log::debug;
use std::fs;
use std::path::Path;

use crate::pdx::ast::Entity;
use crate::pdx::error::PdxError;
use crate::pdx::lexer::tokenize_with_spans;
use crate::pdx::parser::building::build_document;
use crate::pdx::parser::document::{document, Dialect};
use crate::pdx::parser::error::ParseError;

/// Parse a script file (events, definitions): optional leading namespace,
/// then blocks and variables
pub fn parse(source: &str) -> Result<Vec<Entity>, ParseError> {
    parse_with(source, Dialect::Script)
}

/// Parse a settings file: variables, properties, enumerations and blocks in
/// any order at the top level
pub fn parse_settings(source: &str) -> Result<Vec<Entity>, ParseError> {
    parse_with(source, Dialect::Settings)
}

/// Parse `source` with the top-level rule of `dialect`
///
/// The whole input must match; on failure the furthest grammar error is
/// reported and no partial tree is returned.
pub fn parse_with(source: &str, dialect: Dialect) -> Result<Vec<Entity>, ParseError> {
    let tokens = tokenize_with_spans(source)?;
    debug!("lexed {} tokens ({} dialect)", tokens.len(), dialect);

    let eoi = source.len();
    let stream = chumsky::Stream::from_iter(eoi..eoi + 1, tokens.into_iter());
    let matched = document(dialect)
        .parse(stream)
        .map_err(|errors| first_error(source, errors))?;

    let entities = build_document(matched);
    debug!("built {} top-level entities", entities.len());
    Ok(entities)
}

/// Read a UTF-8 file and parse it as script
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Entity>, PdxError> {
    parse_file_with(path.as_ref(), Dialect::Script)
}

/// Read a UTF-8 file and parse it as settings
pub fn parse_settings_file(path: impl AsRef<Path>) -> Result<Vec<Entity>, PdxError> {
    parse_file_with(path.as_ref(), Dialect::Settings)
}

/// Read a UTF-8 file and parse it with `dialect`
pub fn parse_file_with(path: &Path, dialect: Dialect) -> Result<Vec<Entity>, PdxError> {
    let source = fs::read_to_string(path).map_err(|source| PdxError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", source.len(), path.display());
    parse_with(&source, dialect).map_err(|source| PdxError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn first_error(source: &str, errors: Vec<Simple<crate::pdx::lexer::Token>>) -> ParseError {
    errors
        .into_iter()
        .max_by_key(|error| error.span().start)
        .map(|error| ParseError::from_grammar(source, error))
        .unwrap_or_else(|| ParseError::new(source, 0..0, "input does not match the grammar"))
}
