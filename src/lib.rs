//! Design-token compiler for CSS custom properties.
//!
//! Flattens a nested theme into `--prefix-path:value;` declarations,
//! resolves `{a.b}` references between tokens, and scopes or minifies
//! finished stylesheets.
//!
//! # Quick start
//!
//! ## Flatten a theme
//!
//! ```
//! use tokencss::{TokenTree, VariableConfig, VariableOptions, to_variables};
//!
//! let theme = TokenTree::from_json_str(
//!     r##"{"colors": {"primary": "#fff", "secondary": "{colors.primary}"}}"##,
//! ).unwrap();
//! let options = VariableOptions::new().prefix("p").selector(":root");
//! let vars = to_variables(&VariableConfig::default(), &theme, &options);
//!
//! assert_eq!(vars.tokens, ["colors.primary", "colors.secondary"]);
//! assert_eq!(
//!     vars.css,
//!     ":root{--p-colors-primary:#fff;--p-colors-secondary:var(--p-colors-primary);}"
//! );
//! ```
//!
//! ## Scope a stylesheet
//!
//! ```
//! use tokencss::{TransformOptions, transform_css};
//!
//! let css = transform_css(".x { color: red }", &TransformOptions::prefix(".scope")).unwrap();
//! assert_eq!(css, ".scope .x{color:red;}");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod case;
pub mod context;
pub mod lexer;
pub mod minify;
pub mod parser;
pub mod reference;
pub mod serializer;
pub mod theme;
pub mod token;
pub mod transform;
pub mod variables;

pub use ast::{Node, Stylesheet};
pub use case::{
    get_variable_name, to_flat_case, to_kebab_case, to_normalize_prefix, to_normalize_variable,
    to_token_key, to_unit,
};
pub use context::{CssInstance, DesignTokens, Style, get_css_instance};
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use minify::minify_css;
pub use parser::{MAX_NESTING, ParseError, ParseErrorKind, parse};
pub use reference::{get_computed_value, get_variable_value, has_odd_braces};
pub use serializer::serialize;
pub use theme::{Scalar, ThemeError, TokenTree, TokenValue};
pub use token::{Span, Token, TokenKind};
pub use transform::{TransformOptions, transform_css};
pub use variables::{
    VariableConfig, VariableOptions, Variables, get_rule, set_property, to_variables,
};

/// Unified error type covering theme ingestion and CSS compilation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// A theme ingestion error.
    #[error("{0}")]
    Theme(#[from] ThemeError),
}

/// Tokenize, parse and serialize a stylesheet in one step.
pub fn compile_str(input: &str) -> Result<String, Error> {
    let tokens = tokenize(input)?;
    Ok(serialize(&parse(&tokens)?))
}
