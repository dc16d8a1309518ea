//! Core emitter struct and main emit logic.

use goflow_core::{PrimitiveTable, SymbolTable, TypeDecl};

use super::Config;
use crate::Diagnostics;

/// Flow emitter over one declaration batch.
pub struct Emitter<'a> {
    pub(super) symbols: &'a SymbolTable,
    pub(super) primitives: &'static PrimitiveTable,
    pub(super) config: Config,
    /// Unresolved and unsupported type warnings
    pub(super) diagnostics: Diagnostics,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    /// `symbols` must already hold every name declared in the batch.
    pub fn new(symbols: &'a SymbolTable, config: Config) -> Self {
        Self {
            symbols,
            primitives: PrimitiveTable::global(),
            config,
            diagnostics: Diagnostics::new(),
            output: String::new(),
        }
    }

    /// Emit every declaration in order, returning the text and warnings.
    pub fn emit(mut self, decls: &[TypeDecl]) -> (String, Diagnostics) {
        for decl in decls {
            let block = self.emit_decl(decl);
            self.output.push_str(&block);
        }

        tracing::debug!(
            decls = decls.len(),
            bytes = self.output.len(),
            warnings = self.diagnostics.warning_count(),
            "emitted flow types"
        );
        (self.output, self.diagnostics)
    }
}
