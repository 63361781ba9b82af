//! Scoping and minification tests.

mod common;

use common::assert_css;
use tokencss::{
    Error, LexErrorKind, MAX_NESTING, ParseErrorKind, TransformOptions, minify_css, transform_css,
};

fn scope(css: &str, prefix: &str) -> String {
    transform_css(css, &TransformOptions::prefix(prefix)).expect("transform")
}

#[test]
fn plain_rule_is_nested_and_minified() {
    assert_css(&scope(".x{color:red}", ".scope"), ".scope .x{color:red;}");
}

#[test]
fn root_is_replaced_textually() {
    assert_css(&scope(":root{--a:1}", ".scope"), ".scope{--a:1}");
}

#[test]
fn host_is_replaced_textually() {
    assert_css(&scope(":host { --a: 1; }", "[data-p]"), "[data-p]{--a:1;}");
}

#[test]
fn combined_root_host_is_replaced_before_singles() {
    assert_css(
        &scope(":root,:host{--a:1} :root .x{b:c}", ".s"),
        ".s{--a:1}.s .x{b:c}",
    );
}

#[test]
fn root_anywhere_disables_nesting() {
    // the textual branch applies to the whole stylesheet
    assert_css(&scope(".x{a:b} :root{c:d}", ".s"), ".x{a:b}.s{c:d}");
}

#[test]
fn variables_rule_can_be_rescoped() {
    let vars = common::flatten("p", r##"{"primary": "#fff"}"##);
    let rule = vars.css.replace(":root", ":root,:host");
    assert_css(&scope(&rule, ".dark"), ".dark{--p-primary:#fff;}");
}

#[test]
fn multiple_rules_and_media() {
    assert_css(
        &scope(
            ".a { x: 1 }\n@media (max-width: 640px) {\n  .b { y: 2 }\n}\n",
            ".s",
        ),
        ".s .a{x:1;}@media (max-width:640px){.s .b{y:2;}}",
    );
}

#[test]
fn bare_declarations_attach_to_prefix() {
    assert_css(&scope("color: red;", ".s"), ".s{color:red;}");
}

#[test]
fn no_prefix_minifies_only() {
    let out = transform_css(
        "/* c */ .a {\n  color : red ;\n}\n",
        &TransformOptions::default(),
    )
    .expect("transform");
    assert_css(&out, ".a{color :red;}");
}

#[test]
fn empty_prefix_is_treated_as_absent() {
    let out = transform_css(".a { b: c }", &TransformOptions::prefix("")).expect("transform");
    assert_css(&out, ".a{b:c}");
}

#[test]
fn compiler_errors_propagate() {
    let err = transform_css(".a{content:\"x}", &TransformOptions::prefix(".s"))
        .expect_err("should fail");
    assert!(matches!(
        err,
        Error::Lex(ref e) if matches!(e.kind, LexErrorKind::UnterminatedString { .. })
    ));
}

#[test]
fn deep_nesting_is_an_error() {
    let css = ".a{".repeat(200_000);
    let err = transform_css(&css, &TransformOptions::prefix(".s")).expect_err("should fail");
    assert!(matches!(
        err,
        Error::Parse(ref e) if e.kind == ParseErrorKind::NestingTooDeep
    ));
}

#[test]
fn nesting_below_limit_is_scoped() {
    // the scoping prefix adds one level
    let depth = MAX_NESTING - 1;
    let css = format!("{}x:1{}", ".a{".repeat(depth), "}".repeat(depth));
    let out = scope(&css, ".s");
    assert!(out.starts_with(".s .a .a"));
    assert!(out.ends_with("{x:1;}"));
}

#[test]
fn textual_branch_does_not_validate() {
    assert_css(&scope(":root{a:b", ".s"), ".s{a:b");
}

#[test]
fn minify_is_idempotent_on_scoped_output() {
    let once = scope(".a { .b { c: d } }", ".s");
    assert_eq!(minify_css(&once), once);
}
