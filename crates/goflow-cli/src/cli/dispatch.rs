//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::input::Input;
use crate::commands::translate::TranslateArgs;

pub struct TranslateParams {
    pub path: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub no_export: bool,
    pub strict: bool,
    pub dump: bool,
    pub color: ColorChoice,
}

impl TranslateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("path").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            dir: m.get_one::<PathBuf>("dir").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            no_export: m.get_flag("no_export"),
            strict: m.get_flag("strict"),
            dump: m.get_flag("dump"),
            color: parse_color(m),
        }
    }

    /// The input to read; a positional directory behaves like `--dir`.
    pub fn input(&self) -> Option<Input> {
        if let Some(dir) = &self.dir {
            return Some(Input::Dir(dir.clone()));
        }
        if let Some(file) = &self.file {
            return Some(Input::File(file.clone()));
        }
        let path = self.path.clone()?;
        if path.is_dir() {
            return Some(Input::Dir(path));
        }
        Some(Input::File(path))
    }
}

impl From<TranslateParams> for TranslateArgs {
    fn from(p: TranslateParams) -> Self {
        Self {
            input: p.input(),
            output: p.output,
            export: !p.no_export,
            strict: p.strict,
            dump: p.dump,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
