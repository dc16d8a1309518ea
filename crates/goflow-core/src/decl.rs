//! Go type declarations as produced by a front-end.
//!
//! These types mirror only the parts of Go's declaration syntax that matter
//! for translation: declaration names, the shape of the declared type,
//! struct field tags and pointer-ness. Spans are carried for diagnostics and
//! are empty when declarations are built by hand.

use std::fmt;

use serde::Serialize;

use crate::Span;

/// A Go type expression.
///
/// Structurally finite: named references are never expanded inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    /// A name the front-end already knows to be a predeclared Go type.
    Primitive(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`, `[N]T` and `...T`
    Slice(Box<TypeExpr>),
    /// `map[K]V`
    Map(Box<TypeExpr>, Box<TypeExpr>),
    /// A bare identifier: a predeclared type, a sibling declaration, or unknown.
    Named(String),
    /// `pkg.T`
    Qualified(String, String),
    /// Any other Go type expression (`interface{}`, `func(...)`, `chan T`,
    /// inline `struct{...}`, generic instantiations). Holds a short
    /// description used in diagnostics.
    Unsupported(String),
}

impl TypeExpr {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified(namespace.into(), name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(inner: TypeExpr) -> Self {
        Self::Slice(Box::new(inner))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn unsupported(description: impl Into<String>) -> Self {
        Self::Unsupported(description.into())
    }

    /// Whether the outermost constructor is a pointer.
    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }
}

/// Renders the expression back in Go syntax, for diagnostics.
impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(name) | Self::Named(name) => f.write_str(name),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Slice(inner) => write!(f, "[]{inner}"),
            Self::Map(key, value) => write!(f, "map[{key}]{value}"),
            Self::Qualified(ns, name) => write!(f, "{ns}.{name}"),
            Self::Unsupported(description) => f.write_str(description),
        }
    }
}

/// One field line of a struct declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDecl {
    /// Tag text without its surrounding quotes; empty when the field has none.
    pub raw_tag: String,
    pub is_pointer: bool,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(skip)]
    pub span: Span,
}

impl FieldDecl {
    /// Create a field, deriving `is_pointer` from the outermost type constructor.
    pub fn new(raw_tag: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            raw_tag: raw_tag.into(),
            is_pointer: ty.is_pointer(),
            ty,
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// The shape of a declared type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// `type Name T`
    AliasOf(TypeExpr),
    /// `type Name []T`
    ArrayAliasOf(TypeExpr),
    /// `type Name map[K]V`
    MapAliasOf(TypeExpr, TypeExpr),
    /// `type Name struct { ... }`
    Struct(Vec<FieldDecl>),
    /// Not representable as a Flow type (interfaces, funcs, generics).
    Unsupported,
}

/// A top-level `type` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDecl {
    pub name: String,
    pub exported: bool,
    pub kind: DeclKind,
    #[serde(skip)]
    pub span: Span,
}

impl TypeDecl {
    /// Create a declaration; exportedness follows Go's capitalization rule.
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        let name = name.into();
        Self {
            exported: is_exported(&name),
            name,
            kind,
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Go exports an identifier iff its first character is an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
