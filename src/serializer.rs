//! Serializer that flattens a nested stylesheet into plain CSS.
//!
//! Nested rules are resolved against their parent selectors: `&` is
//! replaced by the parent, any other selector becomes a descendant of
//! it. A rule's own declarations are written first, nested rules
//! after, and comments are dropped. Output carries no optional
//! whitespace. Recursion follows the block nesting, which the parser
//! caps at [`MAX_NESTING`](crate::parser::MAX_NESTING).

use crate::ast::{Node, Stylesheet};

/// At-rules whose blocks keep the enclosing selector context.
const CONDITIONAL_AT_RULES: [&str; 5] = ["media", "supports", "container", "layer", "document"];

/// Serialize a stylesheet into flat CSS text.
#[must_use]
pub fn serialize(sheet: &Stylesheet) -> String {
    let mut out = String::new();
    serialize_nodes(&mut out, &sheet.nodes, &[]);
    out
}

fn serialize_nodes(out: &mut String, nodes: &[Node], parents: &[String]) {
    let declarations: String = nodes
        .iter()
        .filter_map(|node| match node {
            Node::Declaration { property, value } => Some(format!("{property}:{value};")),
            _ => None,
        })
        .collect();

    if !declarations.is_empty() {
        if parents.is_empty() {
            out.push_str(&declarations);
        } else {
            out.push_str(&parents.join(","));
            out.push('{');
            out.push_str(&declarations);
            out.push('}');
        }
    }

    for node in nodes {
        match node {
            Node::Declaration { .. } | Node::Comment(_) => {}
            Node::Rule { selectors, nodes } => {
                let resolved = resolve_selectors(parents, selectors);
                serialize_nodes(out, nodes, &resolved);
            }
            Node::AtRule {
                name,
                prelude,
                block,
            } => serialize_at_rule(out, name, prelude, block.as_deref(), parents),
        }
    }
}

fn serialize_at_rule(
    out: &mut String,
    name: &str,
    prelude: &str,
    block: Option<&[Node]>,
    parents: &[String],
) {
    out.push('@');
    out.push_str(name);
    if !prelude.is_empty() {
        out.push(' ');
        out.push_str(prelude);
    }

    let Some(children) = block else {
        out.push(';');
        return;
    };

    out.push('{');
    if CONDITIONAL_AT_RULES.contains(&name.to_ascii_lowercase().as_str()) {
        serialize_nodes(out, children, parents);
    } else {
        serialize_nodes(out, children, &[]);
    }
    out.push('}');
}

/// Combine every parent selector with every child selector.
#[must_use]
pub fn resolve_selectors(parents: &[String], selectors: &[String]) -> Vec<String> {
    if parents.is_empty() {
        return selectors.to_vec();
    }

    parents
        .iter()
        .flat_map(|parent| {
            selectors.iter().map(move |selector| {
                if selector.contains('&') {
                    selector.replace('&', parent)
                } else {
                    format!("{parent} {selector}")
                }
            })
        })
        .collect()
}
