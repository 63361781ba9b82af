/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the CSS lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of selector, property or value text. Parenthesized groups
    /// are kept whole, including any braces or semicolons inside them.
    Text,
    /// Quoted string, quotes included (`"..."` or `'...'`).
    QuotedString,
    /// Block comment (`/* ... */`).
    Comment,
    /// Whitespace run.
    Whitespace,
    /// Opening brace `{`.
    OpenBrace,
    /// Closing brace `}`.
    CloseBrace,
    /// Statement terminator `;`.
    Semicolon,
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
