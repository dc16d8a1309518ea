use std::fs;
use std::path::PathBuf;

use super::input::{Input, SourceFile};
use super::translate::{Failure, TranslateArgs, TranslateError, execute, translate_sources};

fn args() -> TranslateArgs {
    TranslateArgs {
        input: None,
        output: None,
        export: true,
        strict: false,
        dump: false,
        color: false,
    }
}

fn source(path: &str, content: &str) -> SourceFile {
    SourceFile {
        path: PathBuf::from(path),
        content: content.to_string(),
    }
}

#[test]
fn concatenates_in_source_order() {
    let sources = [
        source("a.go", "type A int"),
        source("b.go", "type B []A"),
    ];

    let report = translate_sources(&sources, &args()).unwrap();

    insta::assert_snapshot!(report.output, @r"
    export type A = number;

    export type B = Array<MISSING_TYPE_DEF_IN_MAP>;
    ");
    assert!(report.warnings.starts_with("b.go: 1 warning\n"));
    assert!(report.warnings.contains("`A` is neither a known primitive"));
}

#[test]
fn no_export() {
    let report = translate_sources(
        &[source("a.go", "type A string")],
        &TranslateArgs {
            export: false,
            ..args()
        },
    )
    .unwrap();
    assert_eq!(report.output, "type A = string;\n\n");
}

#[test]
fn clean_translation_has_no_warnings() {
    let report = translate_sources(&[source("a.go", "type A string")], &args()).unwrap();
    assert!(report.warnings.is_empty());
}

#[test]
fn strict_turns_warnings_into_errors() {
    let Failure { error: err, .. } = translate_sources(
        &[source("a.go", "type A Missing")],
        &TranslateArgs {
            strict: true,
            ..args()
        },
    )
    .unwrap_err();

    assert!(matches!(err, TranslateError::Strict { .. }));
    assert_eq!(err.to_string(), "warnings in 'a.go' treated as errors");
    let rendered = err.rendered().unwrap();
    assert!(rendered.contains("a.go"));
    assert!(rendered.contains("`Missing` is neither a known primitive"));
}

#[test]
fn parse_failure_keeps_earlier_output() {
    let sources = [
        source("a.go", "type A int"),
        source("b.go", "type B struct {"),
        source("c.go", "type C string"),
    ];

    let Failure { report, error } = translate_sources(&sources, &args()).unwrap_err();

    assert_eq!(report.output, "export type A = number;\n\n");
    assert!(report.warnings.is_empty());
    assert!(matches!(error, TranslateError::Parse { .. }));
    assert_eq!(error.to_string(), "failed to parse 'b.go'");
    assert!(error.rendered().unwrap().contains("missing closing `}`"));
}

#[test]
fn strict_failure_keeps_earlier_output() {
    let sources = [
        source("a.go", "type A int"),
        source("b.go", "type B Missing"),
    ];

    let Failure { report, error } = translate_sources(
        &sources,
        &TranslateArgs {
            strict: true,
            ..args()
        },
    )
    .unwrap_err();

    assert_eq!(report.output, "export type A = number;\n\n");
    assert!(matches!(error, TranslateError::Strict { .. }));
}

#[test]
fn failure_on_first_file_keeps_nothing() {
    let Failure { report, .. } =
        translate_sources(&[source("a.go", "type A [")], &args()).unwrap_err();
    assert!(report.output.is_empty());
}

#[test]
fn dump_declarations_as_json() {
    let report = translate_sources(
        &[source("a.go", "type Ids []string\ntype user struct {\n\tID *int `json:\"id\"`\n}")],
        &TranslateArgs {
            dump: true,
            ..args()
        },
    )
    .unwrap();

    insta::assert_snapshot!(report.output, @r#"
    [
      {
        "path": "a.go",
        "symbols": [
          "Ids",
          "user"
        ],
        "decls": [
          {
            "name": "Ids",
            "exported": true,
            "kind": {
              "array_alias_of": {
                "named": "string"
              }
            }
          },
          {
            "name": "user",
            "exported": false,
            "kind": {
              "struct": [
                {
                  "raw_tag": "json:\"id\"",
                  "is_pointer": true,
                  "type": {
                    "pointer": {
                      "named": "int"
                    }
                  }
                }
              ]
            }
          }
        ]
      }
    ]
    "#);
}

#[test]
fn directory_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.go"), "package s\n\ntype B struct {\n\tA A `json:\"a\"`\n}\n").unwrap();
    fs::write(dir.path().join("a.go"), "package s\n\ntype A bool\n").unwrap();

    let report = execute(&Input::Dir(dir.path().to_path_buf()), &args()).unwrap();

    insta::assert_snapshot!(report.output, @r"
    export type A = boolean;

    export type B {
      a: MISSING_TYPE_DEF_IN_MAP,
    }
    ");
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let Failure { report, error } =
        execute(&Input::File(dir.path().join("nope.go")), &args()).unwrap_err();
    assert!(matches!(error, TranslateError::Input(_)));
    assert!(report.output.is_empty());
}
