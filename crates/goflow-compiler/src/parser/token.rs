//! Token kinds for Go source.
//!
//! Only the part of Go's lexical grammar that `type` declarations need is
//! distinguished. Everything else is lexed coarsely so function bodies and
//! other declarations can be skipped without spurious errors.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("*")]
    Star,

    #[token("...")]
    Ellipsis,

    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Equals,

    #[token("<-")]
    Arrow,

    /// Operators that never appear in type syntax.
    #[regex(r"[+\-/%&|^<>!:~]")]
    Operator,

    #[token("package")]
    KwPackage,

    #[token("import")]
    KwImport,

    #[token("type")]
    KwType,

    #[token("struct")]
    KwStruct,

    #[token("map")]
    KwMap,

    #[token("interface")]
    KwInterface,

    #[token("func")]
    KwFunc,

    #[token("chan")]
    KwChan,

    /// Defined after keywords so they take precedence.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,

    /// Integer, float, hex and imaginary literals, lexed loosely.
    #[regex(r"[0-9][0-9a-zA-Z_]*(?:\.[0-9a-zA-Z_]*)?")]
    Number,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    StringLit,

    #[regex(r"`[^`]*`")]
    RawStringLit,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    RuneLit,

    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    /// Significant: terminates struct fields and grouped specs.
    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
}

use TokenKind::*;

impl TokenKind {
    /// Tokens the parser never looks at. Newlines are not trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_string(self) -> bool {
        matches!(self, StringLit | RawStringLit)
    }

    /// Tokens ending a struct field or a grouped type declaration.
    #[inline]
    pub fn is_terminator(self) -> bool {
        matches!(self, Newline | Semicolon)
    }

    /// The closing token matching an opening delimiter.
    pub fn closing(self) -> Option<TokenKind> {
        match self {
            ParenOpen => Some(ParenClose),
            BracketOpen => Some(BracketClose),
            BraceOpen => Some(BraceClose),
            _ => None,
        }
    }

    #[inline]
    pub fn is_closing(self) -> bool {
        matches!(self, ParenClose | BracketClose | BraceClose)
    }

    /// Human-readable name for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Star => "`*`",
            Ellipsis => "`...`",
            Dot => "`.`",
            Comma => "`,`",
            Semicolon => "`;`",
            Equals => "`=`",
            Arrow => "`<-`",
            Operator => "operator",
            KwPackage => "`package`",
            KwImport => "`import`",
            KwType => "`type`",
            KwStruct => "`struct`",
            KwMap => "`map`",
            KwInterface => "`interface`",
            KwFunc => "`func`",
            KwChan => "`chan`",
            Ident => "identifier",
            Number => "number",
            StringLit | RawStringLit => "string",
            RuneLit => "rune literal",
            Whitespace => "whitespace",
            Newline => "newline",
            LineComment | BlockComment => "comment",
            Garbage => "invalid characters",
        }
    }
}
