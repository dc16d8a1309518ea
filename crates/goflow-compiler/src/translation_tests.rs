use goflow_core::{DeclKind, TypeDecl, TypeExpr};
use indoc::indoc;

use crate::{Config, Error, Translation, translate_decls};

#[test]
fn product_schema() {
    let input = indoc! {r#"
    package schema

    import (
        "time"
    )

    // UpdateProductRequest is used to create or update an existing product.
    type UpdateProductRequest struct {
        Name                  string                `json:"name"`
        PublisherID           string                `json:"publisher_id"`
        CreatedAt             time.Time             `json:"created_at"`
        OptionalTime          *time.Time            `json:"optional_time,omitempty"`
        NullableTime          *time.Time            `json:"nullable_time"`
        ShortDescription      string                `json:"short_description"`
        FullDescription       string                `json:"full_description,omitempty"`
        Source                string                `json:"source"`
        PopularityScore       int64                 `json:"popularity"`
        Categories            []Category            `json:"categories"`
        Links                 []URLInfo             `json:"links"`
        Screenshots           [][]URLInfo           `json:"screenshots"`
        LogoURLs              map[string]string     `json:"logo_url"`
        CrazyMap              map[AliasType]bool    `json:"crazy_map"`
        CrazyMap2             map[bool]AliasType    `json:"crazy_map_2"`
        MapAlias              MapAliasType          `json:"map_alias_type"`
        IsOffline             bool                  `json:"is_offline,omitempty"`
        AliasTest             ArrayAliasType        `json:"array_alias"`
        ArrayPointerAliasTest ArrayPointerAliasType `json:"array_pointer_alias"`
    }

    type BoolAlias bool
    type AliasType BoolAlias

    type ArrayAliasType []AliasType
    type ArrayPointerAliasType []*AliasType
    type MapAliasType map[bool]AliasType

    /*URLInfo is the representation of a link and its label. It can be for external links
    that we expose on the product details page, or for screenshots and other images */
    type URLInfo struct {
        URL   string `json:"url"`
        Label string `json:"label"`
    }

    /*
    Category contains the name and user-friendly label of a product category
    */
    type Category struct {
        Name  string `json:"name"`
        Label string `json:"label"`
    }
    "#};

    insta::assert_snapshot!(Translation::expect_valid(input), @r"
    export type UpdateProductRequest {
      name: string,
      publisher_id: string,
      created_at: string,
      optional_time?: string,
      nullable_time: ?string,
      short_description: string,
      full_description?: string,
      source: string,
      popularity: number,
      categories: Array<Category>,
      links: Array<URLInfo>,
      screenshots: Array<Array<URLInfo>>,
      logo_url: {[string]: string},
      crazy_map: {[AliasType]: boolean},
      crazy_map_2: {[boolean]: AliasType},
      map_alias_type: MapAliasType,
      is_offline?: boolean,
      array_alias: ArrayAliasType,
      array_pointer_alias: ArrayPointerAliasType,
    }

    export type BoolAlias = boolean;

    export type AliasType = BoolAlias;

    export type ArrayAliasType = Array<AliasType>;

    export type ArrayPointerAliasType = Array<AliasType>;

    export type MapAliasType = {[boolean]: AliasType};

    export type URLInfo {
      url: string,
      label: string,
    }

    export type Category {
      name: string,
      label: string,
    }
    ");
}

#[test]
fn grouped_and_unexported() {
    let input = indoc! {r#"
    type (
        userID string
        User struct {
            ID   userID `json:"id"`
            Tags []string `json:"tags,omitempty"`
        }
    )
    "#};

    insta::assert_snapshot!(Translation::expect_valid(input), @r"
    export type User {
      id: userID,
      tags?: Array<string>,
    }
    ");
}

#[test]
fn unresolved_names_are_warnings() {
    let input = indoc! {r#"
    type Order struct {
        Customer Customer `json:"customer"`
        Id uuid.UUID `json:"id"`
    }
    "#};

    let translation = Translation::from_source(input).unwrap();

    insta::assert_snapshot!(translation.output(), @r"
    export type Order {
      customer: MISSING_TYPE_DEF_IN_MAP,
      id: uuid.UUID,
    }
    ");
    insta::assert_snapshot!(translation.diagnostics().printer().render(), @"warning at 24..59: `Customer` is neither a known primitive nor declared in this file");
}

#[test]
fn unsupported_field_type_is_a_warning() {
    let translation =
        Translation::from_source("type Bag struct {\n\tAny interface{} `json:\"any\"`\n}").unwrap();

    assert_eq!(
        translation.output(),
        "export type Bag {\n  any: UNKNOWN_EXPR_TYPE,\n}\n\n"
    );
    assert_eq!(translation.diagnostics().warning_count(), 1);
}

#[test]
fn unsupported_declarations_are_silent() {
    let input = indoc! {r#"
    type Reader interface {
        Read(p []byte) (int, error)
    }
    type Handler func() error
    type Id string
    "#};

    insta::assert_snapshot!(Translation::expect_valid(input), @"export type Id = string;");
}

#[test]
fn no_export_keyword() {
    let config = Config::new().export(false);
    let translation = Translation::with_config("type Id string", &config).unwrap();
    assert_eq!(translation.output(), "type Id = string;\n\n");
}

#[test]
fn parse_errors_fail_translation() {
    insta::assert_snapshot!(Translation::expect_invalid("type A struct {\n\tB int\n"), @"error at 23..23: missing closing `}`; found end of file (related: opened here at 14..15)");
}

#[test]
fn parse_failure_error_message() {
    let err = Translation::from_source("type A\ntype B").unwrap_err();
    assert_eq!(err.to_string(), "parsing failed with 2 errors");
}

#[test]
fn recursion_limit_is_an_error() {
    let source = format!("type A {}int", "*".repeat(1024));
    let result = Translation::from_source(&source);
    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn accessors_expose_both_passes() {
    let translation = Translation::from_source("type a int\ntype B a").unwrap();

    let names: Vec<_> = translation.symbols().iter().collect();
    assert_eq!(names, ["a", "B"]);
    assert_eq!(translation.decls().len(), 2);
    assert_eq!(translation.output(), "export type B = a;\n\n");
}

#[test]
fn translate_decls_runs_both_passes() {
    let decls = [
        TypeDecl::new("Ids", DeclKind::ArrayAliasOf(TypeExpr::named("Id"))),
        TypeDecl::new("Id", DeclKind::AliasOf(TypeExpr::named("string"))),
    ];

    let (output, diagnostics) = translate_decls(&decls, &Config::default());

    assert!(diagnostics.is_empty());
    assert_eq!(
        output,
        "export type Ids = Array<Id>;\n\nexport type Id = string;\n\n"
    );
}

#[test]
fn empty_source_translates_to_nothing() {
    assert_eq!(Translation::expect_valid(""), "");
    assert_eq!(Translation::expect_valid("package main\n"), "");
}

#[test]
fn pointer_and_qualified_aliases_emit_nothing() {
    let input = indoc! {r#"
    type H *Foo
    type G time.Time
    type Foo struct{}
    "#};

    insta::assert_snapshot!(Translation::expect_valid(input), @r"
    export type Foo {
    }
    ");
}
