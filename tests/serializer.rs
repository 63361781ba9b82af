//! Serializer tests: parse nested CSS and check the flattened output.

mod common;

use common::assert_css;
use tokencss::compile_str;

fn compile(input: &str) -> String {
    compile_str(input).expect("compile")
}

#[test]
fn flat_stylesheet_is_compacted() {
    assert_css(&compile(".a {\n  color: red;\n}\n"), ".a{color:red;}");
}

#[test]
fn nested_selectors() {
    assert_css(
        &compile(".card { padding: 1rem; .title { font-weight: 600 } }"),
        ".card{padding:1rem;}.card .title{font-weight:600;}",
    );
}

#[test]
fn parent_reference() {
    assert_css(
        &compile(".btn { &:hover { color: red } &.active { color: blue } }"),
        ".btn:hover{color:red;}.btn.active{color:blue;}",
    );
}

#[test]
fn nested_selector_lists() {
    assert_css(
        &compile(".a, .b { .c, .d { x: 1 } }"),
        ".a .c,.a .d,.b .c,.b .d{x:1;}",
    );
}

#[test]
fn media_inside_rule() {
    assert_css(
        &compile(".a { @media (min-width: 640px) { color: red } }"),
        "@media (min-width: 640px){.a{color:red;}}",
    );
}

#[test]
fn supports_keeps_nested_rules_scoped() {
    assert_css(
        &compile(".s { @supports (display: grid) { .g { display: grid } } }"),
        "@supports (display: grid){.s .g{display:grid;}}",
    );
}

#[test]
fn font_face_is_emitted_verbatim() {
    assert_css(
        &compile(".s { @font-face { font-family: x } }"),
        "@font-face{font-family:x;}",
    );
}

#[test]
fn comments_are_dropped() {
    assert_css(&compile("/* a */ .a { /* b */ x: 1 }"), ".a{x:1;}");
}

#[test]
fn order_is_preserved() {
    assert_css(
        &compile(".a{x:1} .b{y:2} .a{z:3}"),
        ".a{x:1;}.b{y:2;}.a{z:3;}",
    );
}
