//! Key normalization: case conversion and CSS variable naming.
//!
//! Every function here is total. Empty prefixes or variables produce a
//! shorter name, never an error.

/// Properties whose numeric values are unitless.
const UNITLESS_PROPERTIES: [&str; 8] = [
    "opacity",
    "z-index",
    "line-height",
    "font-weight",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
];

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Convert a camel-cased key to dotted lower case.
///
/// `primaryColor` becomes `primary.color`. The first character never
/// gets a separator, so `Primary` becomes `primary`.
#[must_use]
pub fn to_token_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('.');
        }
        out.push(ch);
    }
    out.to_lowercase()
}

/// Convert a key to kebab case.
///
/// Underscores become dashes and every uppercase ASCII letter after the
/// first character is preceded by a dash.
#[must_use]
pub fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        match ch {
            '_' => out.push('-'),
            c if i > 0 && c.is_ascii_uppercase() => {
                out.push('-');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.to_lowercase()
}

/// Strip dashes and underscores and lower-case the rest.
#[must_use]
pub fn to_flat_case(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

/// Remove spaces and replace every non-word character with `-`.
#[must_use]
pub fn to_normalize_prefix(prefix: &str) -> String {
    prefix
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| if is_word_char(c) { c } else { '-' })
        .collect()
}

/// Join `prefix` and `variable` with a dash when both are non-empty,
/// then normalize the result.
#[must_use]
pub fn to_normalize_variable(prefix: &str, variable: &str) -> String {
    if !prefix.is_empty() && !variable.is_empty() {
        to_normalize_prefix(&format!("{prefix}-{variable}"))
    } else {
        to_normalize_prefix(&format!("{prefix}{variable}"))
    }
}

/// Build a CSS custom-property name: `--<prefix>-<variable>`.
#[must_use]
pub fn get_variable_name(prefix: &str, variable: &str) -> String {
    format!("--{}", to_normalize_variable(prefix, variable))
}

/// Append `px` to each numeric word of `value`.
///
/// Values for unitless properties (matched by the suffix of
/// `variable`) are returned unchanged.
#[must_use]
pub fn to_unit(value: &str, variable: &str) -> String {
    if UNITLESS_PROPERTIES
        .iter()
        .any(|property| variable.ends_with(property))
    {
        return value.to_string();
    }

    value
        .trim()
        .split(' ')
        .map(|word| {
            if is_numeric(word) {
                format!("{word}px")
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty()
        && word.parse::<f64>().is_ok_and(f64::is_finite)
        && !word.contains(|c: char| c.is_ascii_alphabetic())
}
