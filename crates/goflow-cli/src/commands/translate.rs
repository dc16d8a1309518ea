//! The `goflow` command: translate Go sources into Flow types.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use goflow_compiler::{Config, Diagnostics, Error, Translation};
use goflow_core::{SymbolTable, TypeDecl};
use serde::Serialize;

use super::input::{Input, InputError, SourceFile, load_sources};

pub struct TranslateArgs {
    pub input: Option<Input>,
    pub output: Option<PathBuf>,
    pub export: bool,
    pub strict: bool,
    pub dump: bool,
    pub color: bool,
}

/// Flow text and rendered warnings for the files translated so far.
#[derive(Debug, Default)]
pub struct Report {
    pub output: String,
    /// Rendered warnings, empty when there are none.
    pub warnings: String,
}

/// A run that stopped at a failing file.
///
/// `report` still holds what the files before it produced.
#[derive(Debug)]
pub struct Failure {
    pub report: Report,
    pub error: TranslateError,
}

impl From<TranslateError> for Failure {
    fn from(error: TranslateError) -> Self {
        Self {
            report: Report::default(),
            error,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to parse '{path}'")]
    Parse { path: String, rendered: String },

    #[error("'{path}': {source}")]
    Compile { path: String, source: Error },

    #[error("warnings in '{path}' treated as errors")]
    Strict { path: String, rendered: String },

    #[error("failed to serialize declarations: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslateError {
    /// Diagnostics to show before the error line, if any.
    pub fn rendered(&self) -> Option<&str> {
        match self {
            Self::Parse { rendered, .. } | Self::Strict { rendered, .. } => Some(rendered),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct DumpEntry {
    path: String,
    symbols: SymbolTable,
    decls: Vec<TypeDecl>,
}

pub fn run(args: TranslateArgs) {
    let Some(input) = &args.input else {
        eprintln!("Please specify a .go file to consume (goflow <PATH>, -f <FILE> or -d <DIR>)");
        return;
    };

    match execute(input, &args) {
        Ok(report) => write_report(&report, &args),
        Err(Failure { report, error }) => {
            if !report.output.is_empty() || !report.warnings.is_empty() {
                write_report(&report, &args);
            }
            if let Some(rendered) = error.rendered() {
                eprintln!("{rendered}");
            }
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn write_report(report: &Report, args: &TranslateArgs) {
    if let Some(ref path) = args.output {
        fs::write(path, &report.output).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        });
    } else if let Err(e) = io::stdout().write_all(report.output.as_bytes()) {
        eprintln!("error: failed to write output: {e}");
        std::process::exit(1);
    }

    if !report.warnings.is_empty() {
        eprint!("{}", report.warnings);
    }
}

/// Translate every source of `input`, stopping at the first failing file.
pub fn execute(input: &Input, args: &TranslateArgs) -> Result<Report, Failure> {
    let sources = load_sources(input).map_err(TranslateError::from)?;
    translate_sources(&sources, args)
}

/// Translate each source on its own and concatenate the results in order.
///
/// On failure the report keeps the output of every file before the failing
/// one; the failing file contributes nothing.
pub fn translate_sources(
    sources: &[SourceFile],
    args: &TranslateArgs,
) -> Result<Report, Failure> {
    let config = Config::new().export(args.export);
    let mut report = Report::default();
    let mut dump = Vec::new();
    let mut failed = None;

    for source in sources {
        let path = source.path.display().to_string();
        tracing::debug!(path = %path, "translating");

        let translation = match translate_source(source, &path, &config, args) {
            Ok(translation) => translation,
            Err(error) => {
                tracing::debug!(path = %path, "translation failed");
                failed = Some(error);
                break;
            }
        };

        let diagnostics = translation.diagnostics();
        if !diagnostics.is_empty() {
            report
                .warnings
                .push_str(&render(diagnostics, source, &path, args.color));
            report.warnings.push('\n');
        }

        if args.dump {
            dump.push(DumpEntry {
                path,
                symbols: translation.symbols().clone(),
                decls: translation.decls().to_vec(),
            });
        } else {
            report.output.push_str(translation.output());
        }
    }

    if args.dump && (failed.is_none() || !dump.is_empty()) {
        match serde_json::to_string_pretty(&dump) {
            Ok(json) => {
                report.output = json;
                report.output.push('\n');
            }
            Err(err) => {
                failed.get_or_insert(err.into());
            }
        }
    }

    match failed {
        None => Ok(report),
        Some(error) => Err(Failure { report, error }),
    }
}

/// Translate one file, applying `--strict` to its warnings.
fn translate_source(
    source: &SourceFile,
    path: &str,
    config: &Config,
    args: &TranslateArgs,
) -> Result<Translation, TranslateError> {
    let translation =
        Translation::with_config(&source.content, config).map_err(|err| match err {
            Error::ParseFailed(diagnostics) => TranslateError::Parse {
                rendered: render(&diagnostics, source, path, args.color),
                path: path.to_string(),
            },
            other => TranslateError::Compile {
                path: path.to_string(),
                source: other,
            },
        })?;

    let diagnostics = translation.diagnostics();
    if args.strict && !diagnostics.is_empty() {
        return Err(TranslateError::Strict {
            path: path.to_string(),
            rendered: render(diagnostics, source, path, args.color),
        });
    }
    Ok(translation)
}

fn render(diagnostics: &Diagnostics, source: &SourceFile, path: &str, colored: bool) -> String {
    diagnostics
        .printer()
        .source(&source.content)
        .path(path)
        .colored(colored)
        .render()
}
