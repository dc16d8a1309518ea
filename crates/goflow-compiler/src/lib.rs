//! goflow compiler: Go declaration front-end and Flow type translator.
//!
//! This crate provides the translation pipeline for one Go source file:
//! - `parser` - lexer and `type` declaration parser
//! - `translate` - type resolution, field translation and Flow emission
//! - `diagnostics` - error and warning reporting
//! - `translation` - high-level Translation facade running both passes

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;
pub mod translate;
pub mod translation;

#[cfg(test)]
mod translation_tests;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use translate::{Config, Emitter, TagInfo, parse_tag};
pub use translation::{Translation, translate_decls};

/// Errors that can occur while translating a source file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Recursion limit hit (type expression nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("parsing failed with {} errors", .0.error_count())]
    ParseFailed(Diagnostics),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
