//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("goflow")
        .about("Convert Go types to Flow types")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage(
            "\
  goflow <PATH>
  goflow -f <FILE>
  goflow -d <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  goflow schema.go                    # one file
  goflow -d ./schema                  # every file in a directory
  goflow schema.go -o types.js        # write to a file
  goflow schema.go --no-export        # plain `type` declarations
  goflow schema.go --dump             # parsed declarations as JSON

Set GOFLOW_LOG=debug to trace the translation on stderr."#,
        )
        .arg(path_arg())
        .arg(file_arg())
        .arg(dir_arg())
        .arg(output_arg())
        .arg(no_export_arg())
        .arg(strict_arg())
        .arg(dump_arg())
        .arg(color_arg())
}
