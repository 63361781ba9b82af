//! Theme flattening into CSS custom properties.
//!
//! [`to_variables`] walks a token tree depth-first, in insertion order,
//! and produces one declaration and one token path per leaf.

use std::sync::LazyLock;

use regex::Regex;

use crate::case::{get_variable_name, to_kebab_case, to_normalize_variable};
use crate::reference::get_variable_value;
use crate::theme::{Scalar, TokenTree, TokenValue, UNDEFINED};

static DEFAULT_EXCLUDED_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(primitive|semantic|components|directives|variables|colorscheme|light|dark|common|root|states|extend|css)$",
    )
    .expect("default excluded key pattern is valid")
});

/// Compiler defaults.
#[derive(Debug, Clone)]
pub struct VariableConfig {
    /// Namespace prepended to every variable name.
    pub prefix: String,
    /// Selector wrapping the generated declarations.
    pub selector: String,
    /// Keys matching this pattern add no path segment.
    pub excluded_key_regex: Option<Regex>,
}

impl Default for VariableConfig {
    fn default() -> Self {
        Self {
            prefix: "p".to_string(),
            selector: ":root,:host".to_string(),
            excluded_key_regex: Some(DEFAULT_EXCLUDED_KEY.clone()),
        }
    }
}

/// Per-call overrides. Unset fields fall back to [`VariableConfig`].
#[derive(Debug, Clone, Default)]
pub struct VariableOptions {
    pub prefix: Option<String>,
    pub selector: Option<String>,
    pub excluded_key_regex: Option<Regex>,
}

impl VariableOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    #[must_use]
    pub fn selector(mut self, selector: &str) -> Self {
        self.selector = Some(selector.to_string());
        self
    }

    #[must_use]
    pub fn excluded_key_regex(mut self, regex: Regex) -> Self {
        self.excluded_key_regex = Some(regex);
        self
    }
}

/// Result of flattening a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    /// One `--name:value;` declaration per leaf, in traversal order.
    pub value: Vec<String>,
    /// Dotted token path per leaf, prefix stripped.
    pub tokens: Vec<String>,
    /// All declarations concatenated.
    pub declarations: String,
    /// Declarations wrapped in the selector.
    pub css: String,
}

/// Push `key:value;` unless `key` is empty.
///
/// An unresolved value is written as `undefined`; only the key gates
/// the push.
pub fn set_property(properties: &mut Vec<String>, key: &str, value: Option<&str>) {
    if !key.is_empty() {
        properties.push(format!("{key}:{};", value.unwrap_or(UNDEFINED)));
    }
}

/// Wrap `properties` in `selector{...}`; empty selector yields `""`.
#[must_use]
pub fn get_rule(selector: &str, properties: &str) -> String {
    if selector.is_empty() {
        String::new()
    } else {
        format!("{selector}{{{properties}}}")
    }
}

/// Flatten `theme` into CSS variable declarations.
#[must_use]
pub fn to_variables(defaults: &VariableConfig, theme: &TokenTree, options: &VariableOptions) -> Variables {
    let prefix = options.prefix.as_deref().unwrap_or(&defaults.prefix);
    let selector = options.selector.as_deref().unwrap_or(&defaults.selector);
    let excluded = options
        .excluded_key_regex
        .as_ref()
        .or(defaults.excluded_key_regex.as_ref());

    let flattener = Flattener { prefix, excluded };
    let mut acc = Accumulator::default();
    flattener.walk(theme, prefix, &mut acc);

    tracing::trace!(
        prefix,
        declarations = acc.variables.len(),
        "flattened theme"
    );

    let declarations = acc.variables.concat();
    Variables {
        css: get_rule(selector, &declarations),
        value: acc.variables,
        tokens: acc.tokens,
        declarations,
    }
}

#[derive(Default)]
struct Accumulator {
    variables: Vec<String>,
    tokens: Vec<String>,
}

struct Flattener<'a> {
    prefix: &'a str,
    excluded: Option<&'a Regex>,
}

impl Flattener<'_> {
    fn walk(&self, tree: &TokenTree, parent: &str, acc: &mut Accumulator) {
        for (key, value) in &tree.entries {
            let path = if self.is_excluded(key) {
                to_normalize_variable(parent, "")
            } else {
                to_normalize_variable(parent, &to_kebab_case(key))
            };

            match value {
                TokenValue::Group(child) => self.walk(child, &path, acc),
                TokenValue::Scalar(leaf) => self.leaf(&path, leaf, acc),
            }
        }
    }

    fn leaf(&self, path: &str, leaf: &Scalar, acc: &mut Accumulator) {
        acc.tokens.push(self.token_path(path));

        let excluded: Vec<&Regex> = self.excluded.into_iter().collect();
        let value = get_variable_value(leaf, self.prefix, &excluded, None);
        if value.is_none() {
            tracing::debug!(path, "token value could not be resolved");
        }
        set_property(&mut acc.variables, &get_variable_name(path, ""), value.as_deref());
    }

    fn is_excluded(&self, key: &str) -> bool {
        self.excluded.is_some_and(|re| re.is_match(key))
    }

    fn token_path(&self, path: &str) -> String {
        let stripped = if self.prefix.is_empty() {
            path.to_string()
        } else {
            path.replacen(&format!("{}-", self.prefix), "", 1)
        };
        stripped.replace('-', ".")
    }
}
