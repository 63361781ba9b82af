//! Token tree data model.
//!
//! Themes are ingested once into a typed tree. Design-token wrappers of
//! the form `{ "$value": ..., "$type": ... }` are unwrapped during
//! ingestion so the compiler only ever sees scalars and groups.

use std::fmt;

use serde_json::Value;

use crate::case::to_flat_case;

/// Rendering of a missing or non-scalar value.
pub const UNDEFINED: &str = "undefined";

/// Error produced while ingesting a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The input is not valid JSON.
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level JSON value is not an object.
    #[error("theme must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Leaf value of a token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// String value, possibly containing `{path}` references.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Booleans, null and arrays. Resolvers treat these as undefined.
    Opaque(String),
}

/// A node of the tree: either a leaf or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Scalar(Scalar),
    Group(TokenTree),
}

/// Ordered mapping from keys to token values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTree {
    pub entries: Vec<(String, TokenValue)>,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Opaque(s) => f.write_str(s),
            Self::Number(n) => write_number(f, *n),
        }
    }
}

/// Render a number the way JavaScript's `String(n)` does: integral values
/// without a trailing `.0`, exponent form below `1e-6` and from `1e21`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let abs = n.abs();
    if abs >= 1e21 || (abs < 1e-6 && abs != 0.0) {
        let exp = format!("{n:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        };
    }

    // Integral values below 2^53 are exact in both f64 and i64.
    if n.fract() == 0.0 && abs < 9_007_199_254_740_992.0 {
        #[allow(clippy::cast_possible_truncation)]
        let int = n as i64;
        write!(f, "{int}")
    } else {
        write!(f, "{n}")
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl TokenValue {
    /// Ingest a JSON value, unwrapping one level of `$value`/`$type`.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match unwrap_design_token(value) {
            Value::Object(map) => Self::Group(TokenTree {
                entries: map
                    .iter()
                    .map(|(key, child)| (key.clone(), Self::from_json(child)))
                    .collect(),
            }),
            Value::String(s) => Self::Scalar(Scalar::Text(s.clone())),
            Value::Number(n) => n.as_f64().map_or_else(
                || Self::Scalar(Scalar::Opaque(n.to_string())),
                |n| Self::Scalar(Scalar::Number(n)),
            ),
            other => Self::Scalar(Scalar::Opaque(other.to_string())),
        }
    }

    /// Return the scalar if this value is a leaf.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Group(_) => None,
        }
    }
}

fn unwrap_design_token(value: &Value) -> &Value {
    match value {
        Value::Object(map) if map.contains_key("$value") && map.contains_key("$type") => {
            &map["$value"]
        }
        other => other,
    }
}

impl TokenTree {
    /// Parse a theme from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` if the text is not JSON or its top-level
    /// value is not an object.
    pub fn from_json_str(input: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    /// Ingest a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::NotAnObject` unless `value` is an object
    /// (or a design-token wrapper around one).
    pub fn from_json(value: &Value) -> Result<Self, ThemeError> {
        match TokenValue::from_json(value) {
            TokenValue::Group(tree) => Ok(tree),
            TokenValue::Scalar(_) => Err(ThemeError::NotAnObject(json_kind(value))),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up a direct child by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: TokenValue) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Resolve a dotted path.
    ///
    /// Each segment matches the first key whose flat case (dashes and
    /// underscores removed, lower-cased) equals the segment's flat case,
    /// so `{colors.primaryColor}` finds `primary-color`.
    #[must_use]
    pub fn get_key_value(&self, path: &str) -> Option<&TokenValue> {
        let mut segments = path.split('.');
        // an empty leading segment finds nothing, never the whole tree
        let first = segments.next().filter(|s| !s.is_empty())?;
        let mut current = self.get_flat(first)?;

        for segment in segments {
            if segment.is_empty() {
                break;
            }
            match current {
                TokenValue::Group(tree) => current = tree.get_flat(segment)?,
                TokenValue::Scalar(_) => return None,
            }
        }

        Some(current)
    }

    fn get_flat(&self, segment: &str) -> Option<&TokenValue> {
        let wanted = to_flat_case(segment);
        self.entries
            .iter()
            .find_map(|(k, v)| (to_flat_case(k) == wanted).then_some(v))
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
