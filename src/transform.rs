//! Stylesheet scoping.

use crate::Error;
use crate::lexer::tokenize;
use crate::minify::minify_css;
use crate::parser::parse;
use crate::serializer::serialize;

/// Options for [`transform_css`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Selector every rule is scoped under.
    pub prefix: Option<String>,
}

impl TransformOptions {
    #[must_use]
    pub fn prefix(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
        }
    }
}

/// Scope `css` under `options.prefix`, then minify.
///
/// Top-level `:root` and `:host` selectors are replaced textually.
/// Any other stylesheet is nested inside `<prefix> { ... }` and
/// recompiled so every rule becomes a descendant of the prefix.
/// Empty input is returned unchanged.
///
/// # Errors
///
/// Returns `Error` if the stylesheet has to be recompiled and cannot
/// be lexed or parsed.
pub fn transform_css(css: &str, options: &TransformOptions) -> Result<String, Error> {
    if css.is_empty() {
        return Ok(String::new());
    }

    let scoped = match options.prefix.as_deref().filter(|p| !p.is_empty()) {
        None => css.to_string(),
        Some(prefix) if css.contains(":root") || css.contains(":host") => {
            tracing::debug!(prefix, "replacing :root/:host selectors");
            css.replace(":root,:host", prefix)
                .replace(":root", prefix)
                .replace(":host", prefix)
        }
        Some(prefix) => {
            tracing::debug!(prefix, "nesting stylesheet under prefix");
            let tokens = tokenize(&format!("{prefix} {{ {css} }}"))?;
            serialize(&parse(&tokens)?)
        }
    };

    Ok(minify_css(&scoped))
}
