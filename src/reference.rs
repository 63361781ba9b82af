//! Brace-reference resolution.
//!
//! A reference is a `{a.b.c}` span inside a token value. References are
//! rewritten either to `var(--prefix-a-b-c)` calls (variable mode) or to
//! the literal value found in a token tree (computed mode).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::case::{get_variable_name, to_kebab_case};
use crate::theme::{Scalar, TokenTree, TokenValue, UNDEFINED};

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("reference pattern is valid"));

static VAR_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\([^)]+\)").expect("var pattern is valid"));

static CALCULATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s+[+\-*/]\s+\d+").expect("calc pattern is valid"));

/// Whether the total count of `{` and `}` is odd.
///
/// Only parity is checked: `}{` passes, `{a` does not.
#[must_use]
pub fn has_odd_braces(value: &str) -> bool {
    let braces = value.chars().filter(|c| *c == '{' || *c == '}').count();
    braces % 2 != 0
}

fn reference_path(span: &str) -> String {
    span.chars().filter(|c| *c != '{' && *c != '}').collect()
}

/// Resolve a token value into a CSS value.
///
/// Returns `None` for opaque values and for text with an odd number
/// of braces; the caller decides what an unresolvable value means.
#[must_use]
pub fn get_variable_value(
    value: &Scalar,
    prefix: &str,
    excluded: &[&Regex],
    fallback: Option<&str>,
) -> Option<String> {
    match value {
        Scalar::Text(text) => resolve_variable_text(text, prefix, excluded, fallback),
        Scalar::Number(_) => Some(value.to_string()),
        Scalar::Opaque(_) => None,
    }
}

fn resolve_variable_text(
    text: &str,
    prefix: &str,
    excluded: &[&Regex],
    fallback: Option<&str>,
) -> Option<String> {
    let value = text.trim();

    if has_odd_braces(value) {
        tracing::debug!(value, "unbalanced braces in token value");
        return None;
    }

    if !REFERENCE.is_match(value) {
        return Some(value.to_string());
    }

    let fallback = fallback
        .filter(|f| !f.is_empty())
        .map(|f| format!(", {f}"))
        .unwrap_or_default();

    let resolved = REFERENCE.replace_all(value, |caps: &Captures<'_>| {
        let path = reference_path(&caps[0]);
        let keys: Vec<&str> = path
            .split('.')
            .filter(|segment| !excluded.iter().any(|re| re.is_match(segment)))
            .collect();
        let name = get_variable_name(prefix, &to_kebab_case(&keys.join("-")));
        format!("var({name}{fallback})")
    });

    let masked = VAR_CALL.replace_all(&resolved, "0");
    if CALCULATION.is_match(&masked) {
        Some(format!("calc({resolved})"))
    } else {
        Some(resolved.into_owned())
    }
}

/// Resolve a token value against a token tree.
///
/// Each `{path}` span is replaced by the scalar found at `path`; a
/// missing path or a group renders as `undefined`. Unlike
/// [`get_variable_value`], brace parity is not checked.
#[must_use]
pub fn get_computed_value(tree: &TokenTree, value: &Scalar) -> Option<Scalar> {
    match value {
        Scalar::Text(text) => {
            let value = text.trim();
            let resolved = REFERENCE.replace_all(value, |caps: &Captures<'_>| {
                match tree.get_key_value(&reference_path(&caps[0])) {
                    Some(TokenValue::Scalar(scalar)) => scalar.to_string(),
                    // a group is reported as missing, not stringified
                    Some(TokenValue::Group(_)) | None => UNDEFINED.to_string(),
                }
            });
            Some(Scalar::Text(resolved.into_owned()))
        }
        Scalar::Number(_) => Some(value.clone()),
        Scalar::Opaque(_) => None,
    }
}
