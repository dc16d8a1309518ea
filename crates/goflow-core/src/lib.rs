#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for goflow.
//!
//! Three layers:
//! - **Declarations** (`TypeDecl`, `FieldDecl`, `TypeExpr`): the abstract
//!   declaration list a Go front-end produces for one source unit
//! - **Symbols** (`SymbolTable`): names declared in the current batch
//! - **Primitives** (`PrimitiveTable`): fixed Go → Flow primitive mapping

mod decl;
mod primitives;
mod symbols;

#[cfg(test)]
mod primitives_tests;

pub use decl::{DeclKind, FieldDecl, TypeDecl, TypeExpr, is_exported};
pub use primitives::{FlowPrimitive, MISSING_TYPE_DEF, PrimitiveTable, UNKNOWN_EXPR_TYPE};
pub use symbols::SymbolTable;

/// Byte range into a Go source file.
pub type Span = rowan::TextRange;
