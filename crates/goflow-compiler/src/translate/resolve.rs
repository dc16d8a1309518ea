//! Type expression resolution.

use goflow_core::{MISSING_TYPE_DEF, Span, TypeExpr, UNKNOWN_EXPR_TYPE};

use super::Emitter;
use crate::DiagnosticKind;

impl Emitter<'_> {
    /// Render a Go type expression as a Flow type expression.
    ///
    /// Names found in neither the primitive table nor the batch become
    /// [`MISSING_TYPE_DEF`]; expressions with no Flow shape become
    /// [`UNKNOWN_EXPR_TYPE`]. Both are reported as warnings at `span`.
    pub fn resolve_type(&mut self, expr: &TypeExpr, span: Span) -> String {
        match expr {
            // Nullability is decided by the caller
            TypeExpr::Pointer(inner) => self.resolve_type(inner, span),
            TypeExpr::Slice(inner) => format!("Array<{}>", self.resolve_type(inner, span)),
            TypeExpr::Map(key, value) => {
                let key = self.resolve_type(key, span);
                let value = self.resolve_type(value, span);
                format!("{{[{key}]: {value}}}")
            }
            TypeExpr::Qualified(ns, name) => {
                let qualified = format!("{ns}.{name}");
                match self.primitives.lookup(&qualified) {
                    Some(prim) => prim.as_str().to_string(),
                    None => qualified,
                }
            }
            TypeExpr::Named(name) | TypeExpr::Primitive(name) => self.resolve_name(expr, name, span),
            TypeExpr::Unsupported(description) => {
                self.diagnostics
                    .report(DiagnosticKind::UnsupportedTypeExpr, span)
                    .message(description.as_str())
                    .emit();
                UNKNOWN_EXPR_TYPE.to_string()
            }
        }
    }

    fn resolve_name(&mut self, expr: &TypeExpr, name: &str, span: Span) -> String {
        if let Some(prim) = self.primitives.lookup(name) {
            return prim.as_str().to_string();
        }
        if matches!(expr, TypeExpr::Named(_)) && self.symbols.contains(name) {
            return name.to_string();
        }

        tracing::trace!(name, "unresolved type name");
        self.diagnostics
            .report(DiagnosticKind::UnresolvedType, span)
            .message(name)
            .emit();
        MISSING_TYPE_DEF.to_string()
    }
}
