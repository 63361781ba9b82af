//! Reference resolver tests.

mod common;

use regex::Regex;
use tokencss::{Scalar, TokenTree, get_computed_value, get_variable_value, has_odd_braces};

fn text(s: &str) -> Scalar {
    Scalar::Text(s.to_string())
}

fn var(value: &str, prefix: &str) -> Option<String> {
    get_variable_value(&text(value), prefix, &[], None)
}

// -----------------------------------------------------------
// Brace parity.
// -----------------------------------------------------------

#[test]
fn parity_examples() {
    assert!(!has_odd_braces("{a}"));
    assert!(has_odd_braces("{a"));
    assert!(!has_odd_braces(""));
    assert!(has_odd_braces("}"));
}

#[test]
fn parity_accepts_misordered_braces() {
    assert!(!has_odd_braces("}{"));
    assert!(!has_odd_braces("}}{{"));
    assert!(!has_odd_braces("a}}"));
}

// -----------------------------------------------------------
// Variable mode.
// -----------------------------------------------------------

#[test]
fn variable_reference() {
    assert_eq!(
        var("{colors.primary}", "app").as_deref(),
        Some("var(--app-colors-primary)")
    );
}

#[test]
fn variable_reference_without_prefix() {
    assert_eq!(var("{colors.primary}", "").as_deref(), Some("var(--colors-primary)"));
}

#[test]
fn reference_inside_shorthand() {
    assert_eq!(
        var("0 0 0 {focus.ring.width} {focus.ring.color}", "p").as_deref(),
        Some("0 0 0 var(--p-focus-ring-width) var(--p-focus-ring-color)")
    );
}

#[test]
fn arithmetic_between_references() {
    assert_eq!(
        var("{a} + {b}", "app").as_deref(),
        Some("calc(var(--app-a) + var(--app-b))")
    );
    assert_eq!(
        var("{a} * 2", "app").as_deref(),
        Some("calc(var(--app-a) * 2)")
    );
}

#[test]
fn arithmetic_requires_spaced_operator() {
    assert_eq!(var("{a}-{b}", "app").as_deref(), Some("var(--app-a)-var(--app-b)"));
}

#[test]
fn literal_arithmetic_without_references_is_untouched() {
    assert_eq!(var("1 + 2", "app").as_deref(), Some("1 + 2"));
}

#[test]
fn misordered_braces_are_resolved_greedily() {
    assert_eq!(var("{{a}}", "p").as_deref(), Some("var(--p-a)}"));
}

#[test]
fn odd_braces_are_rejected() {
    assert_eq!(var("{a", "app"), None);
    assert_eq!(var("{a} {b", "app"), None);
}

#[test]
fn excluded_segments_and_fallback() {
    let re = Regex::new("(?i)^(semantic|default)$").expect("regex");
    assert_eq!(
        get_variable_value(&text("{semantic.primary.color}"), "p", &[&re], Some("#000"))
            .as_deref(),
        Some("var(--p-primary-color, #000)")
    );
}

#[test]
fn number_passes_through() {
    assert_eq!(
        get_variable_value(&Scalar::Number(0.5), "p", &[], None).as_deref(),
        Some("0.5")
    );
}

// -----------------------------------------------------------
// Computed mode.
// -----------------------------------------------------------

#[test]
fn computed_mode_substitutes_values() {
    let tree = common::theme(r#"{"spacing": {"sm": "4px", "lg": 16}}"#);
    assert_eq!(
        get_computed_value(&tree, &text("{spacing.sm} {spacing.lg}")),
        Some(text("4px 16"))
    );
}

#[test]
fn computed_mode_group_is_undefined() {
    let tree = common::theme(r#"{"spacing": {"sm": "4px"}}"#);
    assert_eq!(get_computed_value(&tree, &text("{spacing}")), Some(text("undefined")));
}

#[test]
fn computed_mode_plain_text() {
    let tree = TokenTree::new();
    assert_eq!(get_computed_value(&tree, &text(" red ")), Some(text("red")));
    assert_eq!(get_computed_value(&tree, &Scalar::Opaque("null".into())), None);
}
