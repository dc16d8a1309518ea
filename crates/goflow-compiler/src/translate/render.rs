//! Output rendering methods.

use goflow_core::{DeclKind, FieldDecl, TypeDecl};

use super::Emitter;
use super::tag::parse_tag;

impl Emitter<'_> {
    /// Render one declaration as a Flow block followed by a blank line.
    ///
    /// Unexported and unsupported declarations render as nothing.
    pub fn emit_decl(&mut self, decl: &TypeDecl) -> String {
        if !decl.exported {
            return String::new();
        }

        let head = self.decl_head(&decl.name);
        match &decl.kind {
            DeclKind::AliasOf(ty) => {
                let ty = self.resolve_type(ty, decl.span);
                format!("{head} = {ty};\n\n")
            }
            DeclKind::ArrayAliasOf(elem) => {
                let elem = self.resolve_type(elem, decl.span);
                format!("{head} = Array<{elem}>;\n\n")
            }
            DeclKind::MapAliasOf(key, value) => {
                let key = self.resolve_type(key, decl.span);
                let value = self.resolve_type(value, decl.span);
                format!("{head} = {{[{key}]: {value}}};\n\n")
            }
            DeclKind::Struct(fields) => {
                let mut block = format!("{head} {{\n");
                for field in fields {
                    if let Some(line) = self.translate_field(field) {
                        block.push_str(&line);
                    }
                }
                block.push_str("}\n\n");
                block
            }
            DeclKind::Unsupported => {
                tracing::debug!(name = %decl.name, "skipping unsupported declaration");
                String::new()
            }
        }
    }

    /// Render one struct field as an indented Flow object property line.
    ///
    /// Fields without a JSON name yield `None`.
    pub fn translate_field(&mut self, field: &FieldDecl) -> Option<String> {
        let tag = parse_tag(&field.raw_tag);
        if tag.is_dropped() {
            return None;
        }

        let ty = self.resolve_type(&field.ty, field.span);
        let property = if tag.optional {
            format!("{}?: {ty}", tag.name)
        } else if field.is_pointer {
            format!("{}: ?{ty}", tag.name)
        } else {
            format!("{}: {ty}", tag.name)
        };
        Some(format!("  {property},\n"))
    }

    fn decl_head(&self, name: &str) -> String {
        if self.config.export {
            format!("export type {name}")
        } else {
            format!("type {name}")
        }
    }
}
