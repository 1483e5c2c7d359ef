//! Main module for pdx library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod input;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod testing;
