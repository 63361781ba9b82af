#![allow(dead_code)]

use tokencss::{TokenTree, VariableConfig, VariableOptions, Variables, to_variables};

/// Parse a JSON theme, panicking with the input on failure.
pub fn theme(json: &str) -> TokenTree {
    TokenTree::from_json_str(json).unwrap_or_else(|e| panic!("invalid theme: {e}\n{json}"))
}

/// Config with no excluded keys.
pub fn config(prefix: &str, selector: &str) -> VariableConfig {
    VariableConfig {
        prefix: prefix.to_string(),
        selector: selector.to_string(),
        excluded_key_regex: None,
    }
}

/// Flatten a JSON theme under `prefix` with a `:root` selector.
pub fn flatten(prefix: &str, json: &str) -> Variables {
    to_variables(&config(prefix, ":root"), &theme(json), &VariableOptions::new())
}

/// Assert that a compiled stylesheet matches, showing both on failure.
pub fn assert_css(actual: &str, expected: &str) {
    assert_eq!(
        actual, expected,
        "css mismatch:\n--- expected ---\n{expected}\n--- got ---\n{actual}"
    );
}
