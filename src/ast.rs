/// Parsed stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

/// A statement inside a stylesheet or block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Style rule; `nodes` may contain nested rules.
    Rule {
        selectors: Vec<String>,
        nodes: Vec<Self>,
    },
    /// `property:value`.
    Declaration { property: String, value: String },
    /// `@name prelude;` or `@name prelude { ... }`.
    AtRule {
        name: String,
        prelude: String,
        block: Option<Vec<Self>>,
    },
    /// Block comment, delimiters included.
    Comment(String),
}

impl Node {
    /// Build a rule from a selector list such as `.a, .b`.
    #[must_use]
    pub fn rule(selector: &str, nodes: Vec<Self>) -> Self {
        Self::Rule {
            selectors: split_selectors(selector),
            nodes,
        }
    }

    #[must_use]
    pub fn declaration(property: &str, value: &str) -> Self {
        Self::Declaration {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

/// Split a selector list on top-level commas.
///
/// Commas inside parentheses, brackets or strings (`:is(.a, .b)`) do
/// not split.
#[must_use]
pub fn split_selectors(selector: &str) -> Vec<String> {
    let mut selectors = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => {
                quote = None;
                current.push(c);
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                current.push(ch);
            }
            (None, '(' | '[') => {
                depth += 1;
                current.push(ch);
            }
            (None, ')' | ']') => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            (None, ',') if depth == 0 => {
                selectors.push(current.trim().to_string());
                current.clear();
            }
            (None, c) => current.push(c),
        }
    }
    selectors.push(current.trim().to_string());
    selectors.retain(|s| !s.is_empty());
    selectors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_top_level_commas() {
        assert_eq!(split_selectors(".a, .b"), [".a", ".b"]);
        assert_eq!(split_selectors(":is(.a, .b) .c"), [":is(.a, .b) .c"]);
        assert_eq!(split_selectors("[data-x=\"a,b\"]"), ["[data-x=\"a,b\"]"]);
        assert!(split_selectors("").is_empty());
    }
}
