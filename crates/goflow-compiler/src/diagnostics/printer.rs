//! Diagnostics rendering.
//!
//! Without source text every message is one line, prefixed with the file
//! path when one is known. With source text each message becomes an
//! annotated snippet, and a known path adds a `path: N errors, M warnings`
//! header so warnings from several files stay apart on stderr.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        if self.diagnostics.is_empty() {
            return String::new();
        }

        let Some(source) = self.source else {
            return self.lines();
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        let snippets: Vec<String> = self
            .diagnostics
            .iter()
            .map(|diag| self.snippet(&renderer, diag, source))
            .collect();

        let mut out = String::new();
        if let Some(path) = self.path {
            out.push_str(&format!("{path}: {}\n", self.diagnostics.summary()));
        }
        out.push_str(&snippets.join("\n"));
        out
    }

    fn lines(&self) -> String {
        let lines: Vec<String> = self
            .diagnostics
            .iter()
            .map(|diag| match self.path {
                Some(path) => format!("{path}: {diag}"),
                None => diag.to_string(),
            })
            .collect();
        lines.join("\n")
    }

    fn snippet(&self, renderer: &Renderer, diag: &DiagnosticMessage, source: &str) -> String {
        let limit = source.len();

        // The title carries the full message, the caret only names the kind.
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(clamp(diag.range, limit))
                .label(diag.kind.fallback_message()),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(clamp(related.range, limit))
                    .label(&related.message),
            );
        }

        let title = level(diag.severity()).primary_title(&diag.message);
        let report: Vec<Group> = vec![title.element(snippet)];
        renderer.render(&report)
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Byte range for a snippet; empty ranges widen to one byte so the caret shows.
fn clamp(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start = usize::from(range.start()).min(limit);
    let end = usize::from(range.end()).min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
