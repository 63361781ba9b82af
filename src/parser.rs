use std::fmt;

use crate::ast::{Node, Stylesheet, split_selectors};
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `}` with no open block.
    UnexpectedCloseBrace,
    /// Input ended inside a block.
    ExpectedCloseBrace,
    /// Statement is neither an at-rule nor `property:value`.
    ExpectedColon { found: String },
    /// Block opened with an empty selector.
    ExpectedSelector,
    /// Blocks nested deeper than [`MAX_NESTING`].
    NestingTooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCloseBrace => write!(f, "unexpected '}}'"),
            Self::ExpectedCloseBrace => write!(f, "expected '}}' before end of input"),
            Self::ExpectedColon { found } => {
                write!(f, "expected ':' in declaration, got '{found}'")
            }
            Self::ExpectedSelector => write!(f, "expected selector before '{{'"),
            Self::NestingTooDeep => write!(f, "blocks nested deeper than {MAX_NESTING}"),
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Deepest block nesting accepted by [`parse`].
pub const MAX_NESTING: usize = 256;

/// Parse a token stream into a `Stylesheet`.
///
/// # Errors
///
/// Returns `ParseError` on unbalanced braces, empty selectors,
/// declarations without a colon, or nesting deeper than [`MAX_NESTING`].
pub fn parse(tokens: &[Token]) -> Result<Stylesheet, ParseError> {
    Parser::new(tokens).parse()
}

/// Statement text accumulated between structural tokens.
#[derive(Default)]
struct Statement {
    text: String,
    span: Option<Span>,
    pending_space: bool,
}

impl Statement {
    fn push(&mut self, token: &Token) {
        if self.span.is_none() {
            self.span = Some(token.span);
        }
        if self.pending_space && !self.text.is_empty() {
            self.text.push(' ');
        }
        self.pending_space = false;
        self.text.push_str(&token.text);
    }

    const fn space(&mut self) {
        self.pending_space = true;
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn take(&mut self) -> (String, Option<Span>) {
        let text = std::mem::take(&mut self.text);
        let span = self.span.take();
        self.pending_space = false;
        (text, span)
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Stylesheet, ParseError> {
        let nodes = self.parse_nodes(None, 0)?;
        Ok(Stylesheet { nodes })
    }

    /// Parse statements until the matching `}` (when `open` is set)
    /// or end of input. `depth` counts the enclosing blocks.
    fn parse_nodes(&mut self, open: Option<Span>, depth: usize) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        let mut statement = Statement::default();
        let tokens = self.tokens;

        while self.pos < tokens.len() {
            let token = &tokens[self.pos];
            self.pos += 1;

            match token.kind {
                TokenKind::Whitespace => statement.space(),
                TokenKind::Comment => {
                    // comments inside a statement are dropped
                    if statement.is_empty() {
                        nodes.push(Node::Comment(token.text.clone()));
                    }
                }
                TokenKind::Text | TokenKind::QuotedString => statement.push(token),
                TokenKind::Semicolon => {
                    Self::flush(&mut statement, &mut nodes)?;
                }
                TokenKind::OpenBrace => {
                    let (prelude, span) = statement.take();
                    let span = span.unwrap_or(token.span);
                    if depth >= MAX_NESTING {
                        return Err(ParseError {
                            kind: ParseErrorKind::NestingTooDeep,
                            span: token.span,
                        });
                    }
                    let children = self.parse_nodes(Some(token.span), depth + 1)?;
                    nodes.push(Self::block(&prelude, span, children)?);
                }
                TokenKind::CloseBrace => {
                    if open.is_none() {
                        return Err(ParseError {
                            kind: ParseErrorKind::UnexpectedCloseBrace,
                            span: token.span,
                        });
                    }
                    Self::flush(&mut statement, &mut nodes)?;
                    return Ok(nodes);
                }
            }
        }

        if let Some(span) = open {
            return Err(ParseError {
                kind: ParseErrorKind::ExpectedCloseBrace,
                span,
            });
        }

        Self::flush(&mut statement, &mut nodes)?;
        Ok(nodes)
    }

    /// Turn pending statement text into a declaration or block-less
    /// at-rule.
    fn flush(statement: &mut Statement, nodes: &mut Vec<Node>) -> Result<(), ParseError> {
        let (text, span) = statement.take();
        let Some(span) = span else {
            return Ok(());
        };

        if text.starts_with('@') {
            let (name, prelude) = split_at_rule(&text);
            nodes.push(Node::AtRule {
                name,
                prelude,
                block: None,
            });
            return Ok(());
        }

        match text.split_once(':') {
            Some((property, value)) => {
                nodes.push(Node::declaration(property.trim(), value.trim()));
                Ok(())
            }
            None => Err(ParseError {
                kind: ParseErrorKind::ExpectedColon { found: text },
                span,
            }),
        }
    }

    fn block(prelude: &str, span: Span, children: Vec<Node>) -> Result<Node, ParseError> {
        if prelude.starts_with('@') {
            let (name, prelude) = split_at_rule(prelude);
            return Ok(Node::AtRule {
                name,
                prelude,
                block: Some(children),
            });
        }

        let selectors = split_selectors(prelude);
        if selectors.is_empty() {
            return Err(ParseError {
                kind: ParseErrorKind::ExpectedSelector,
                span,
            });
        }

        Ok(Node::Rule {
            selectors,
            nodes: children,
        })
    }
}

/// Split `@media (x)` into `("media", "(x)")`.
fn split_at_rule(text: &str) -> (String, String) {
    let body = &text[1..];
    let end = body
        .find(|c: char| c.is_ascii_whitespace() || c == '(' || c == '"' || c == '\'')
        .unwrap_or(body.len());
    (body[..end].to_string(), body[end..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_str(input: &str) -> Result<Stylesheet, ParseError> {
        parse(&tokenize(input).expect("should tokenize"))
    }

    #[test]
    fn simple_rule() {
        let sheet = parse_str(".x { color: red; }").expect("should parse");
        assert_eq!(
            sheet.nodes,
            [Node::rule(".x", vec![Node::declaration("color", "red")])]
        );
    }

    #[test]
    fn last_declaration_without_semicolon() {
        let sheet = parse_str(".x{color:red;margin:0}").expect("should parse");
        let Node::Rule { nodes, .. } = &sheet.nodes[0] else {
            panic!("expected rule");
        };
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1], Node::declaration("margin", "0"));
    }

    #[test]
    fn selector_whitespace_collapses() {
        let sheet = parse_str(".a   >\n  .b{}").expect("should parse");
        assert_eq!(sheet.nodes, [Node::rule(".a > .b", Vec::new())]);
    }

    #[test]
    fn selector_list() {
        let sheet = parse_str(".a, .b {}").expect("should parse");
        let Node::Rule { selectors, .. } = &sheet.nodes[0] else {
            panic!("expected rule");
        };
        assert_eq!(selectors, &[".a", ".b"]);
    }

    #[test]
    fn nested_rule() {
        let sheet = parse_str(".scope { .x { color: red } }").expect("should parse");
        assert_eq!(
            sheet.nodes,
            [Node::rule(
                ".scope",
                vec![Node::rule(".x", vec![Node::declaration("color", "red")])]
            )]
        );
    }

    #[test]
    fn at_rules() {
        let sheet =
            parse_str("@import url(a.css); @media (min-width: 1px) { .a { b: c } }").expect("should parse");
        assert_eq!(
            sheet.nodes[0],
            Node::AtRule {
                name: "import".to_string(),
                prelude: "url(a.css)".to_string(),
                block: None,
            }
        );
        assert!(matches!(
            &sheet.nodes[1],
            Node::AtRule { name, prelude, block: Some(_) }
            if name == "media" && prelude == "(min-width: 1px)"
        ));
    }

    #[test]
    fn value_keeps_strings_and_parens() {
        let sheet = parse_str(r#".a{content:"x ; y";background:url(a;b)}"#).expect("should parse");
        let Node::Rule { nodes, .. } = &sheet.nodes[0] else {
            panic!("expected rule");
        };
        assert_eq!(nodes[0], Node::declaration("content", "\"x ; y\""));
        assert_eq!(nodes[1], Node::declaration("background", "url(a;b)"));
    }

    #[test]
    fn standalone_comment_is_kept() {
        let sheet = parse_str("/* a */ .x{}").expect("should parse");
        assert_eq!(sheet.nodes[0], Node::Comment("/* a */".to_string()));
    }

    #[test]
    fn unexpected_close_brace() {
        let err = parse_str(".a{}}").expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCloseBrace);
        assert_eq!(err.span.column, 5);
    }

    #[test]
    fn missing_close_brace() {
        let err = parse_str(".a{color:red").expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::ExpectedCloseBrace);
        assert_eq!(err.span.column, 3);
    }

    #[test]
    fn declaration_without_colon() {
        let err = parse_str(".a{color red}").expect_err("should fail");
        assert_eq!(
            err.kind,
            ParseErrorKind::ExpectedColon {
                found: "color red".to_string()
            }
        );
    }

    #[test]
    fn nesting_limit() {
        let within = format!("{}{}", ".a{".repeat(MAX_NESTING), "}".repeat(MAX_NESTING));
        assert!(parse_str(&within).is_ok());

        let beyond = ".a{".repeat(MAX_NESTING + 1);
        let err = parse_str(&beyond).expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep);
        assert_eq!(err.span.column, MAX_NESTING * 3 + 3);
    }

    #[test]
    fn empty_selector() {
        let err = parse_str("{a:b}").expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::ExpectedSelector);
    }
}
