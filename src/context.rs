//! Design-token context for style resolution.
//!
//! A [`DesignTokens`] value bundles a theme with its compiler config and
//! answers token lookups. Styles are resolved through a [`CssInstance`]
//! built by [`get_css_instance`]; independent instances can serve
//! different themes side by side.

use std::fmt;

use regex::Regex;

use crate::reference::{get_computed_value, get_variable_value};
use crate::theme::{Scalar, TokenTree};
use crate::variables::{VariableConfig, VariableOptions, Variables, to_variables};

/// Theme plus compiler config.
#[derive(Debug, Clone, Default)]
pub struct DesignTokens {
    pub config: VariableConfig,
    pub theme: TokenTree,
}

impl DesignTokens {
    #[must_use]
    pub const fn new(config: VariableConfig, theme: TokenTree) -> Self {
        Self { config, theme }
    }

    /// CSS reference to the token at `path`, e.g. `var(--p-primary-color)`.
    ///
    /// `path` may be given bare (`primary.color`) or brace-wrapped.
    /// Returns an empty string for an empty path.
    #[must_use]
    pub fn dt(&self, path: &str, fallback: Option<&str>) -> String {
        if path.is_empty() {
            return String::new();
        }

        let token = if path.starts_with('{') && path.ends_with('}') {
            path.to_string()
        } else {
            format!("{{{path}}}")
        };
        let excluded: Vec<&Regex> = self.config.excluded_key_regex.iter().collect();

        get_variable_value(&Scalar::Text(token), &self.config.prefix, &excluded, fallback)
            .unwrap_or_default()
    }

    /// Literal value of the token at `path`, references resolved one level.
    #[must_use]
    pub fn value(&self, path: &str) -> Option<Scalar> {
        let scalar = self.theme.get_key_value(path)?.as_scalar()?;
        get_computed_value(&self.theme, scalar)
    }

    /// Flatten this theme into CSS variables.
    #[must_use]
    pub fn variables(&self, options: &VariableOptions) -> Variables {
        to_variables(&self.config, &self.theme, options)
    }
}

type StyleFn = dyn Fn(&DesignTokens) -> String + Send + Sync;

/// Style source: fixed CSS text or a function of the design tokens.
pub enum Style {
    Fixed(String),
    Dynamic(Box<StyleFn>),
}

impl Style {
    #[must_use]
    pub fn fixed(css: &str) -> Self {
        Self::Fixed(css.to_string())
    }

    #[must_use]
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&DesignTokens) -> String + Send + Sync + 'static,
    {
        Self::Dynamic(Box::new(f))
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(css) => f.debug_tuple("Fixed").field(css).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Resolves styles against one set of design tokens.
#[derive(Debug, Clone)]
pub struct CssInstance {
    tokens: DesignTokens,
}

impl CssInstance {
    /// Resolve a style into CSS text.
    #[must_use]
    pub fn css(&self, style: &Style) -> String {
        match style {
            Style::Fixed(css) => css.clone(),
            Style::Dynamic(f) => f(&self.tokens),
        }
    }

    #[must_use]
    pub const fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }
}

/// Build a [`CssInstance`] bound to `tokens`.
#[must_use]
pub const fn get_css_instance(tokens: DesignTokens) -> CssInstance {
    CssInstance { tokens }
}
