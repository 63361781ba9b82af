use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Quoted string without its closing quote.
    UnterminatedString { quote: char },
    /// Block comment without `*/`.
    UnterminatedComment,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString { quote } => {
                write!(f, "unterminated string, expected closing {quote}")
            }
            Self::UnterminatedComment => {
                write!(f, "unterminated comment")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize CSS source into a sequence of tokens.
///
/// # Errors
///
/// Returns `LexError` on unterminated strings or comments.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        let bytes = input.as_bytes();
        let start = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            input: bytes,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let token = match ch {
                b'{' => self.single(TokenKind::OpenBrace),
                b'}' => self.single(TokenKind::CloseBrace),
                b';' => self.single(TokenKind::Semicolon),
                b'"' | b'\'' => self.read_string()?,
                b'/' if self.peek_at(1) == Some(b'*') => self.read_comment()?,
                c if c.is_ascii_whitespace() => self.read_whitespace(),
                _ => self.read_text()?,
            };
            tokens.push(token);
        }

        Ok(tokens)
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.input.len() {
            if self.input[self.pos] == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn slice(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let span = self.span();
        let start = self.pos;
        self.advance();
        Token {
            kind,
            text: self.slice(start),
            span,
        }
    }

    fn read_whitespace(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
        Token {
            kind: TokenKind::Whitespace,
            text: self.slice(start),
            span,
        }
    }

    fn read_comment(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        self.advance(); // skip /
        self.advance(); // skip *

        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedComment,
                        span,
                    });
                }
                Some(b'*') if self.peek_at(1) == Some(b'/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                Some(_) => self.advance(),
            }
        }

        Ok(Token {
            kind: TokenKind::Comment,
            text: self.slice(start),
            span,
        })
    }

    /// Consume a quoted string starting at the current quote.
    fn skip_string(&mut self) -> Result<(), LexError> {
        let span = self.span();
        let quote = self.input[self.pos];
        self.advance(); // skip opening quote

        loop {
            match self.peek() {
                None | Some(b'\n') => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString {
                            quote: char::from(quote),
                        },
                        span,
                    });
                }
                Some(b'\\') => {
                    self.advance();
                    self.advance();
                }
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        self.skip_string()?;
        Ok(Token {
            kind: TokenKind::QuotedString,
            text: self.slice(start),
            span,
        })
    }

    fn read_text(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        let mut depth = 0usize;

        while let Some(ch) = self.peek() {
            match ch {
                b'(' => {
                    depth += 1;
                    self.advance();
                }
                b')' => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                }
                b'"' | b'\'' if depth > 0 => self.skip_string()?,
                b'"' | b'\'' => break,
                b'/' if self.peek_at(1) == Some(b'*') => break,
                b'{' | b'}' | b';' if depth == 0 => break,
                c if c.is_ascii_whitespace() && depth == 0 => break,
                b'\\' => {
                    // escaped character
                    self.advance();
                    self.advance();
                }
                _ => self.advance(),
            }
        }

        Ok(Token {
            kind: TokenKind::Text,
            text: self.slice(start),
            span,
        })
    }
}
