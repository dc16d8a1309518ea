//! Front-end for Go source files.
//!
//! # Architecture
//!
//! Only `type` declarations are of interest, so there is no syntax tree: the
//! parser walks a flat token stream and produces [`TypeDecl`]s directly.
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only for names and tags
//! - Newlines are significant tokens; they end struct fields and grouped specs
//! - Every other top-level construct is stepped over by delimiter balancing
//!
//! # Recovery
//!
//! 1. Garbage characters are reported and consumed
//! 2. An unexpected token inside a `type` declaration is reported, then the
//!    rest of its line is skipped
//! 3. A missing closing delimiter is reported at the point the parser gave up,
//!    with the opening delimiter as related location
//!
//! Exceeding the recursion limit aborts parsing with an error.
//!
//! [`TypeDecl`]: goflow_core::TypeDecl

pub mod lexer;
pub mod token;

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use core::{DEFAULT_RECURSION_LIMIT, ParseResult, Parser};
pub use lexer::{Token, lex, token_text};
pub use token::TokenKind;

use crate::Error;

/// Main entry point. Returns Err only when the recursion limit is hit.
pub fn parse(source: &str) -> Result<ParseResult, Error> {
    Parser::new(source, lex(source)).parse()
}

/// Parse with a custom nesting limit for type expressions.
pub fn parse_with_recursion_limit(source: &str, limit: u32) -> Result<ParseResult, Error> {
    Parser::new(source, lex(source))
        .with_recursion_limit(limit)
        .parse()
}
