//! Grammar for Go `type` declarations.
//!
//! Top level: only `type` declarations are parsed; every other declaration is
//! stepped over token by token, skipping delimited groups (function bodies,
//! import lists, composite literals) as a whole.

use goflow_core::{DeclKind, FieldDecl, TypeDecl, TypeExpr};
use rowan::TextRange;

use super::core::Parser;
use super::lexer::{string_value, token_text};
use super::token::TokenKind::{self, *};
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub(super) fn parse_file(&mut self) {
        while !self.should_stop() {
            match self.current() {
                Some(KwType) => self.parse_type_decl(),
                Some(kind) if kind.closing().is_some() => self.skip_group(),
                Some(kind) if kind.is_closing() => self.error_and_bump("without matching opener"),
                Some(Garbage) => self.error_and_bump(""),
                Some(_) => {
                    self.bump();
                }
                None => break,
            }
        }
    }

    /// `type Spec` or `type ( Spec; Spec; ... )`
    fn parse_type_decl(&mut self) {
        self.bump();

        let Some(open) = self.eat(ParenOpen) else {
            self.parse_type_spec();
            return;
        };

        loop {
            self.eat_terminators();
            match self.current() {
                Some(ParenClose) => {
                    self.bump();
                    return;
                }
                None => {
                    self.report_unclosed(open);
                    return;
                }
                Some(Ident) => self.parse_type_spec(),
                Some(_) => {
                    self.error_and_bump("in type declaration");
                    self.skip_line();
                }
            }
            if self.has_fatal_error() {
                return;
            }
        }
    }

    /// `Name [TypeParams] [=] Type`
    fn parse_type_spec(&mut self) {
        let Some(name_token) = self.eat(Ident) else {
            let span = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::ExpectedTypeName, span)
                .emit();
            self.skip_line();
            return;
        };
        let name = token_text(self.source, &name_token).to_string();

        let generic = self.currently_is(BracketOpen) && self.starts_type_params();
        if generic {
            self.skip_group();
        }
        self.eat(Equals);
        let parenthesized = self.currently_is(ParenOpen);

        let kind = if self.eat(KwStruct).is_some() {
            match self.parse_struct_body() {
                Some(fields) => DeclKind::Struct(fields),
                None => return,
            }
        } else {
            match self.parse_type() {
                Some(expr) => classify(expr),
                None => {
                    self.skip_line();
                    return;
                }
            }
        };
        let kind = if generic || parenthesized {
            DeclKind::Unsupported
        } else {
            kind
        };

        let span = TextRange::new(name_token.span.start(), self.last_end());
        tracing::debug!(name = %name, ?span, "parsed type declaration");
        self.decls.push(TypeDecl::new(name, kind).with_span(span));

        self.finish_line("after type declaration");
    }

    /// `[T any]` after a declared name, as opposed to an array length `[N]`.
    fn starts_type_params(&mut self) -> bool {
        self.peek_nth(1) == Some(Ident)
            && !matches!(self.peek_nth(2), Some(BracketClose | Dot | Operator))
    }

    /// `{ FieldDecl; ... }`, positioned after the `struct` keyword.
    fn parse_struct_body(&mut self) -> Option<Vec<FieldDecl>> {
        let Some(open) = self.eat(BraceOpen) else {
            self.expected("`{` after `struct`");
            return None;
        };

        let mut fields = Vec::new();
        loop {
            self.eat_terminators();
            match self.current() {
                Some(BraceClose) => {
                    self.bump();
                    return Some(fields);
                }
                None => {
                    self.report_unclosed(open);
                    return Some(fields);
                }
                _ => {}
            }
            if self.has_fatal_error() {
                return Some(fields);
            }

            match self.parse_field() {
                Some(field) => {
                    fields.push(field);
                    self.finish_line("after struct field");
                }
                None => self.skip_line(),
            }
        }
    }

    /// `Name1, Name2 Type [Tag]` or embedded `[*]TypeName [Tag]`.
    fn parse_field(&mut self) -> Option<FieldDecl> {
        let start = self.current_span().start();

        let ty = match self.current() {
            Some(Star) => self.parse_type()?,
            Some(Ident) => match self.peek_nth(1) {
                Some(Comma) => {
                    self.parse_field_names()?;
                    self.parse_type()?
                }
                // Embedded `pkg.T` or `T`
                Some(Dot) | None => self.parse_type()?,
                Some(kind) if kind.is_terminator() || kind.is_string() || kind == BraceClose => {
                    self.parse_type()?
                }
                Some(_) => {
                    self.bump();
                    self.parse_type()?
                }
            },
            _ => {
                self.error_and_bump("in struct body");
                self.skip_line();
                return None;
            }
        };

        let raw_tag = match self.current() {
            Some(kind) if kind.is_string() => {
                let token = self.bump()?;
                string_value(token_text(self.source, &token))
            }
            _ => String::new(),
        };

        let span = TextRange::new(start, self.last_end());
        Some(FieldDecl::new(raw_tag, ty).with_span(span))
    }

    fn parse_field_names(&mut self) -> Option<()> {
        self.bump();
        while self.eat(Comma).is_some() {
            self.eat_newlines();
            if self.eat(Ident).is_none() {
                self.expected("field name");
                return None;
            }
        }
        Some(())
    }

    pub(super) fn parse_type(&mut self) -> Option<TypeExpr> {
        if !self.enter_recursion() {
            return None;
        }
        let ty = self.parse_type_inner();
        self.exit_recursion();
        ty
    }

    fn parse_type_inner(&mut self) -> Option<TypeExpr> {
        match self.current() {
            Some(Star) => {
                self.bump();
                Some(TypeExpr::pointer(self.parse_type()?))
            }
            Some(BracketOpen) => self.parse_array_type(),
            Some(Ellipsis) => {
                self.bump();
                Some(TypeExpr::slice(self.parse_type()?))
            }
            Some(KwMap) => self.parse_map_type(),
            Some(Ident) => self.parse_type_name(),
            Some(ParenOpen) => {
                let open = self.bump()?;
                let inner = self.parse_type()?;
                self.expect_closing(open).then_some(inner)
            }
            Some(KwStruct) => {
                self.bump();
                self.parse_struct_body()?;
                Some(TypeExpr::unsupported("struct{...}"))
            }
            Some(KwInterface) => {
                self.bump();
                if !self.currently_is(BraceOpen) {
                    self.expected("`{` after `interface`");
                    return None;
                }
                self.skip_group();
                Some(TypeExpr::unsupported("interface{...}"))
            }
            Some(KwFunc) => {
                self.bump();
                self.parse_func_signature()?;
                Some(TypeExpr::unsupported("func(...)"))
            }
            Some(KwChan) => {
                self.bump();
                self.eat(Arrow);
                let inner = self.parse_type()?;
                Some(TypeExpr::unsupported(format!("chan {inner}")))
            }
            Some(Arrow) => {
                self.bump();
                if self.eat(KwChan).is_none() {
                    self.expected("`chan` after `<-`");
                    return None;
                }
                let inner = self.parse_type()?;
                Some(TypeExpr::unsupported(format!("<-chan {inner}")))
            }
            Some(Garbage) => {
                self.error_and_bump("");
                None
            }
            _ => {
                let span = self.current_span();
                let found = self.current().map_or("end of file", TokenKind::describe);
                self.diagnostics
                    .report(DiagnosticKind::ExpectedType, span)
                    .message(format!("found {found}"))
                    .emit();
                None
            }
        }
    }

    /// `[]T` or `[N]T`; both become slices.
    fn parse_array_type(&mut self) -> Option<TypeExpr> {
        let open = self.bump()?;

        loop {
            match self.current() {
                Some(BracketClose) => {
                    self.bump();
                    break;
                }
                Some(kind) if kind.is_closing() || kind.is_terminator() => {
                    self.report_unclosed(open);
                    return None;
                }
                Some(kind) if kind.closing().is_some() => self.skip_group(),
                Some(_) => {
                    self.bump();
                }
                None => {
                    self.report_unclosed(open);
                    return None;
                }
            }
        }

        Some(TypeExpr::slice(self.parse_type()?))
    }

    /// `map[K]V`
    fn parse_map_type(&mut self) -> Option<TypeExpr> {
        self.bump();
        let Some(open) = self.eat(BracketOpen) else {
            self.expected("`[` after `map`");
            return None;
        };
        let key = self.parse_type()?;
        if !self.expect_closing(open) {
            return None;
        }
        let value = self.parse_type()?;
        Some(TypeExpr::map(key, value))
    }

    /// `T`, `pkg.T`, or a generic instantiation `T[Args]`.
    fn parse_type_name(&mut self) -> Option<TypeExpr> {
        let first = self.bump()?;
        let first = token_text(self.source, &first);

        let expr = if self.eat(Dot).is_some() {
            let Some(second) = self.eat(Ident) else {
                let span = self.current_span();
                self.diagnostics
                    .report(DiagnosticKind::ExpectedTypeName, span)
                    .message(format!("after `{first}.`"))
                    .emit();
                return None;
            };
            TypeExpr::qualified(first, token_text(self.source, &second))
        } else {
            TypeExpr::named(first)
        };

        if self.currently_is(BracketOpen) {
            self.skip_group();
            return Some(TypeExpr::unsupported(format!("{expr}[...]")));
        }
        Some(expr)
    }

    /// `(Params) [Result]`, positioned after `func`.
    fn parse_func_signature(&mut self) -> Option<()> {
        if !self.currently_is(ParenOpen) {
            self.expected("`(` after `func`");
            return None;
        }
        self.skip_group();

        match self.current() {
            Some(ParenOpen) => self.skip_group(),
            Some(kind) if starts_type(kind) => {
                self.parse_type()?;
            }
            _ => {}
        }
        Some(())
    }

    /// Anything left on the line is unexpected.
    fn finish_line(&mut self, context: &str) {
        match self.current() {
            None => {}
            Some(kind) if kind.is_terminator() || kind.is_closing() => {}
            Some(_) => {
                self.error_and_bump(context);
                self.skip_line();
            }
        }
    }

    fn expected(&mut self, what: &str) {
        let span = self.current_span();
        let found = self.current().map_or("end of file", TokenKind::describe);
        self.diagnostics
            .report(DiagnosticKind::UnexpectedToken, span)
            .message(format!("{found}, expected {what}"))
            .emit();
    }
}

fn starts_type(kind: TokenKind) -> bool {
    matches!(
        kind,
        Star | BracketOpen | KwMap | Ident | KwStruct | KwInterface | KwFunc | KwChan | Arrow
    )
}

/// Map a declared type expression onto a declaration shape.
///
/// Only a bare name, a slice or a map has an alias form. A pointer, a
/// qualified name or anything unsupported at the top is not declared.
fn classify(expr: TypeExpr) -> DeclKind {
    match expr {
        TypeExpr::Named(_) | TypeExpr::Primitive(_) => DeclKind::AliasOf(expr),
        TypeExpr::Slice(inner) => DeclKind::ArrayAliasOf(*inner),
        TypeExpr::Map(key, value) => DeclKind::MapAliasOf(*key, *value),
        TypeExpr::Pointer(_) | TypeExpr::Qualified(..) | TypeExpr::Unsupported(_) => {
            DeclKind::Unsupported
        }
    }
}
