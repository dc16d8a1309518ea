
use std::fmt::Write;

use goflow_core::{DeclKind, TypeDecl};

use super::{ParseResult, parse};

/// Parse a source that must be free of errors and dump its declarations.
fn dump_valid(source: &str) -> String {
    let result = parse(source).expect("recursion limit not hit");
    assert!(
        !result.diagnostics.has_errors(),
        "unexpected errors:\n{}",
        result.diagnostics.printer().render()
    );
    dump_decls(&result.decls)
}

/// Parse a source that must report errors and dump the diagnostics.
fn dump_invalid(source: &str) -> String {
    let ParseResult { diagnostics, .. } = parse(source).expect("recursion limit not hit");
    assert!(diagnostics.has_errors(), "expected errors for:\n{source}");
    diagnostics.printer().render()
}

fn dump_decls(decls: &[TypeDecl]) -> String {
    let mut out = String::new();
    for decl in decls {
        match &decl.kind {
            DeclKind::AliasOf(ty) => writeln!(out, "{} alias {ty}", decl.name),
            DeclKind::ArrayAliasOf(ty) => writeln!(out, "{} array {ty}", decl.name),
            DeclKind::MapAliasOf(key, value) => {
                writeln!(out, "{} map {key} {value}", decl.name)
            }
            DeclKind::Unsupported => writeln!(out, "{} unsupported", decl.name),
            DeclKind::Struct(fields) => {
                writeln!(out, "{} struct", decl.name).unwrap();
                for field in fields {
                    write!(out, "  {}", field.ty).unwrap();
                    if !field.raw_tag.is_empty() {
                        write!(out, " `{}`", field.raw_tag).unwrap();
                    }
                    out.push('\n');
                }
                Ok(())
            }
        }
        .unwrap();
    }
    out
}
