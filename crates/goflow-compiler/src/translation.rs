//! Translation facade: parse one Go source, collect its names, emit Flow.

use goflow_core::{SymbolTable, TypeDecl};

use crate::diagnostics::Diagnostics;
use crate::parser::{self, ParseResult};
use crate::translate::{Config, Emitter};
use crate::{Error, Result};

/// The result of translating one source unit.
///
/// Holds the parsed declarations alongside the emitted text so callers can
/// inspect either. Warnings found during emission are kept in `diagnostics`.
#[derive(Debug)]
pub struct Translation {
    decls: Vec<TypeDecl>,
    symbols: SymbolTable,
    output: String,
    diagnostics: Diagnostics,
}

impl Translation {
    /// Translate Go source with the default configuration.
    pub fn from_source(source: &str) -> Result<Self> {
        Self::with_config(source, &Config::default())
    }

    /// Translate Go source.
    ///
    /// Fails with [`Error::ParseFailed`] if the front-end reports any error.
    pub fn with_config(source: &str, config: &Config) -> Result<Self> {
        let ParseResult { decls, diagnostics } = parser::parse(source)?;
        if diagnostics.has_errors() {
            return Err(Error::ParseFailed(diagnostics));
        }
        tracing::debug!(decls = decls.len(), "parsed source");
        Ok(Self::from_decls(decls, config))
    }

    /// Translate declarations produced by some other front-end.
    pub fn from_decls(decls: Vec<TypeDecl>, config: &Config) -> Self {
        let symbols = SymbolTable::collect(&decls);
        let (output, diagnostics) = Emitter::new(&symbols, config.clone()).emit(&decls);
        Self {
            decls,
            symbols,
            output,
            diagnostics,
        }
    }

    pub fn decls(&self) -> &[TypeDecl] {
        &self.decls
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Translate and return the Flow text, panicking on any diagnostic.
    #[cfg(test)]
    pub fn expect_valid(source: &str) -> String {
        let translation = Self::from_source(source).expect("source should parse");
        assert!(
            translation.diagnostics.is_empty(),
            "unexpected diagnostics:\n{}",
            translation.diagnostics.printer().render()
        );
        translation.output
    }

    /// Translate a source that must fail to parse, returning its diagnostics.
    #[cfg(test)]
    pub fn expect_invalid(source: &str) -> String {
        match Self::from_source(source) {
            Err(Error::ParseFailed(diagnostics)) => diagnostics.printer().render(),
            other => panic!("expected parse failure, got {other:?}"),
        }
    }
}

/// Run both passes over an existing declaration batch.
pub fn translate_decls(decls: &[TypeDecl], config: &Config) -> (String, Diagnostics) {
    let symbols = SymbolTable::collect(decls);
    Emitter::new(&symbols, config.clone()).emit(decls)
}
