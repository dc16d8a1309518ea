//! Parser state and low-level token operations.

use goflow_core::TypeDecl;
use rowan::{TextRange, TextSize};

use super::lexer::{Token, token_text};
use super::token::TokenKind;
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Default nesting limit for type expressions.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

#[derive(Debug)]
pub struct ParseResult {
    pub decls: Vec<TypeDecl>,
    pub diagnostics: Diagnostics,
}

/// Trivia tokens are skipped on every lookahead; newlines are kept.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) decls: Vec<TypeDecl>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    recursion_limit: u32,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            decls: Vec::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            fatal_error: None,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        self.parse_file();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        Ok(ParseResult {
            decls: self.decls,
            diagnostics: self.diagnostics,
        })
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    /// Current non-trivia token kind, `None` at end of input.
    pub(super) fn current(&mut self) -> Option<TokenKind> {
        self.skip_trivia();
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn currently_is(&mut self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> Option<TokenKind> {
        self.skip_trivia();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    /// End offset of the last consumed token.
    pub(super) fn last_end(&self) -> TextSize {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map_or(TextSize::from(0), |t| t.span.end())
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&mut self) -> bool {
        self.current().is_none()
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    /// Consume the current token, returning it.
    pub(super) fn bump(&mut self) -> Option<Token> {
        self.skip_trivia();
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it has the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.currently_is(kind) {
            return self.bump();
        }
        None
    }

    pub(super) fn eat_newlines(&mut self) {
        while self.current() == Some(TokenKind::Newline) {
            self.pos += 1;
        }
    }

    pub(super) fn eat_terminators(&mut self) {
        while self.current().is_some_and(TokenKind::is_terminator) {
            self.pos += 1;
        }
    }

    /// Expect the closing token of a delimiter opened at `open`.
    pub(super) fn expect_closing(&mut self, open: Token) -> bool {
        let Some(close) = open.kind.closing() else {
            return false;
        };
        self.eat_newlines();
        if self.eat(close).is_some() {
            return true;
        }
        self.report_unclosed(open);
        false
    }

    pub(super) fn report_unclosed(&mut self, open: Token) {
        let kind = match open.kind {
            TokenKind::ParenOpen => DiagnosticKind::UnclosedParen,
            TokenKind::BracketOpen => DiagnosticKind::UnclosedBracket,
            _ => DiagnosticKind::UnclosedBrace,
        };
        let at = self.current_span();
        let found = self.current().map_or("end of file", TokenKind::describe);
        self.diagnostics
            .report(kind, at)
            .message(format!("found {found}"))
            .related_to("opened here", open.span)
            .emit();
    }

    /// Report the current token as unexpected and consume it.
    pub(super) fn error_and_bump(&mut self, context: &str) {
        let span = self.current_span();
        match self.current() {
            Some(TokenKind::Garbage) => {
                let text = self.current_text();
                self.diagnostics
                    .report(DiagnosticKind::InvalidCharacter, span)
                    .message(format!("`{text}`"))
                    .emit();
            }
            Some(kind) => {
                self.diagnostics
                    .report(DiagnosticKind::UnexpectedToken, span)
                    .message(format!("{} {context}", kind.describe()))
                    .emit();
            }
            None => return,
        }
        self.pos += 1;
    }

    /// Skip a balanced delimiter group starting at the current opening token.
    ///
    /// Garbage inside the group is reported; everything else is ignored.
    pub(super) fn skip_group(&mut self) {
        let Some(open) = self.bump() else { return };
        let mut stack = vec![open];

        while let Some(top) = stack.last().copied() {
            let Some(token) = self.bump() else {
                self.report_unclosed(top);
                return;
            };
            match token.kind {
                TokenKind::ParenOpen | TokenKind::BracketOpen | TokenKind::BraceOpen => {
                    stack.push(token);
                }
                kind if kind.is_closing() => {
                    if top.kind.closing() != Some(kind) {
                        // Leave the closer for an enclosing group.
                        self.pos -= 1;
                        self.report_unclosed(top);
                    }
                    stack.pop();
                }
                TokenKind::Garbage => {
                    let text = token_text(self.source, &token);
                    self.diagnostics
                        .report(DiagnosticKind::InvalidCharacter, token.span)
                        .message(format!("`{text}`"))
                        .emit();
                }
                _ => {}
            }
        }
    }

    /// Skip to the end of the current line, stepping over nested groups.
    pub(super) fn skip_line(&mut self) {
        while let Some(kind) = self.current() {
            match kind {
                TokenKind::Newline | TokenKind::Semicolon => return,
                k if k.is_closing() => return,
                k if k.closing().is_some() => self.skip_group(),
                _ => self.pos += 1,
            }
        }
    }

    /// Enter one level of type nesting. Returns `false` once the limit is hit.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
