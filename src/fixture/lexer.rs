//! Lexer (tokenizer) for the fixture format.
//!
//! Tokens are maximal runs of non-whitespace characters. Line breaks carry no
//! meaning, so a record may span several lines.

use crate::error::{ResistanceError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Token {
    /// Interpret this token as a floating-point value.
    pub fn as_value(&self) -> Result<f64> {
        match self.kind {
            TokenKind::Number => parse_value(&self.text).ok_or_else(|| {
                ResistanceError::parse(self.line, self.column, format!("invalid number '{}'", self.text))
            }),
            TokenKind::Word | TokenKind::Eof => Err(ResistanceError::parse(
                self.line,
                self.column,
                format!("expected a number, got '{}'", self.text),
            )),
        }
    }

    /// Interpret this token as a child count.
    pub fn as_count(&self) -> Result<usize> {
        self.text.parse::<usize>().map_err(|_| {
            ResistanceError::parse(
                self.line,
                self.column,
                format!("expected a non-negative integer count, got '{}'", self.text),
            )
        })
    }
}

/// Token types in the fixture format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Any token that is not a number (case names, circuit keywords)
    Word,
    /// A decimal number, possibly signed, with optional fraction and exponent
    Number,
    /// End of input
    Eof,
}

/// Lexer for tokenizing fixture input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let line = self.line;
        let column = self.column;

        if self.chars.peek().is_none() {
            return Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line,
                column,
            };
        }

        let text = self.read_word();
        let kind = if looks_like_number(&text) {
            TokenKind::Number
        } else {
            TokenKind::Word
        };

        Token {
            kind,
            text,
            line,
            column,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || ch == '#' {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Non-finite spellings accepted in place of digits, after an optional sign.
const SPECIAL_VALUES: [&str; 3] = ["Infinity", "inf", "NaN"];

/// Check if a word has the shape `[+-] digits [. digits] [(e|E) [+-] digits]`
/// or is a signed [`SPECIAL_VALUES`] spelling.
fn looks_like_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    if SPECIAL_VALUES.contains(&unsigned) {
        return true;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    // Optional sign
    if i < chars.len() && (chars[i] == '-' || chars[i] == '+') {
        i += 1;
    }

    // Integer part
    let mut has_digits = false;
    while i < chars.len() && chars[i].is_ascii_digit() {
        has_digits = true;
        i += 1;
    }

    // Decimal part
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            has_digits = true;
            i += 1;
        }
    }

    if !has_digits {
        return false;
    }

    // Exponent
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        if i < chars.len() && (chars[i] == '-' || chars[i] == '+') {
            i += 1;
        }
        let exponent_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }

    i == chars.len()
}

/// Parse a decimal number, `Infinity`/`inf` or `NaN`.
pub fn parse_value(text: &str) -> Option<f64> {
    if !looks_like_number(text) {
        return None;
    }
    text.parse::<f64>().ok()
}
