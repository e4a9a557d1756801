use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a scanner error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Byte that cannot start any token.
    UnexpectedCharacter(char),
    /// String literal with no closing quote before a newline
    /// or end of input.
    UnterminatedString,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string")
            }
        }
    }
}

/// Error recorded during scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("[line {}] Error: {kind}", span.line)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub span: Span,
}

/// Outcome of scanning one source text.
///
/// Lexical errors never abort the scan: the token stream is always
/// complete and [`TokenKind::Eof`]-terminated, with every problem
/// recorded in `errors`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    /// Whether any lexical error was recorded.
    #[must_use]
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan a Lox source string into a sequence of tokens.
///
/// Errors are accumulated in the result rather than returned early,
/// so a single pass reports every lexical problem in the source.
#[must_use]
pub fn scan(source: &str) -> ScanResult {
    Scanner::new(source).scan()
}

struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Scanner<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            input: source.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn scan(mut self) -> ScanResult {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while self.pos < self.input.len() {
            let ch = self.input[self.pos];

            match ch {
                b'/' if self.peek_at(1) == Some(b'/') => {
                    self.skip_comment();
                }
                b'"' => match self.read_string() {
                    Ok(token) => tokens.push(token),
                    Err(err) => errors.push(err),
                },
                c if c.is_ascii_whitespace() => {
                    self.advance();
                }
                c if c.is_ascii_digit() => {
                    tokens.push(self.read_number());
                }
                c if c == b'_' || c.is_ascii_alphabetic() => {
                    tokens.push(self.read_identifier());
                }
                _ => match self.read_operator() {
                    Ok(token) => tokens.push(token),
                    Err(err) => errors.push(err),
                },
            }
        }

        tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span: self.span(),
        });

        ScanResult { tokens, errors }
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

    fn lexeme_from(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    /// Skip a `//` comment up to the next newline. The newline itself
    /// is left for the main loop so line counting stays in one place.
    fn skip_comment(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos] != b'\n' {
            self.advance();
        }
    }

    fn read_string(&mut self) -> Result<Token, ScanError> {
        let start_span = self.span();
        let start = self.pos;
        self.advance(); // skip opening quote

        loop {
            match self.peek() {
                // Unterminated: report at the opening quote and
                // resume scanning at the newline (if any).
                None | Some(b'\n') => {
                    return Err(ScanError {
                        kind: ScanErrorKind::UnterminatedString,
                        span: start_span,
                    });
                }
                Some(b'"') => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        Ok(Token {
            kind: TokenKind::String,
            lexeme: self.lexeme_from(start),
            span: start_span,
        })
    }

    fn read_number(&mut self) -> Token {
        let start_span = self.span();
        let start = self.pos;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A dot is part of the number only when a digit follows it;
        // a trailing dot is left for the next scan step.
        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        Token {
            kind: TokenKind::Number,
            lexeme: self.lexeme_from(start),
            span: start_span,
        }
    }

    fn read_identifier(&mut self) -> Token {
        let start_span = self.span();
        let start = self.pos;

        while self
            .peek()
            .is_some_and(|c| c == b'_' || c.is_ascii_alphanumeric())
        {
            self.advance();
        }

        let lexeme = self.lexeme_from(start);
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);

        Token {
            kind,
            lexeme,
            span: start_span,
        }
    }

    fn read_operator(&mut self) -> Result<Token, ScanError> {
        let start_span = self.span();
        let start = self.pos;
        let ch = self.input[self.pos];

        // Compound operators win over their single-character
        // prefixes at the same position.
        if let Some(kind) = self.peek_at(1).and_then(|next| compound_kind(ch, next)) {
            self.advance();
            self.advance();
            return Ok(Token {
                kind,
                lexeme: self.lexeme_from(start),
                span: start_span,
            });
        }

        if let Some(kind) = single_kind(ch) {
            self.advance();
            return Ok(Token {
                kind,
                lexeme: self.lexeme_from(start),
                span: start_span,
            });
        }

        // Error recovery: skip the offending byte and continue.
        self.advance();
        Err(ScanError {
            kind: ScanErrorKind::UnexpectedCharacter(char::from(ch)),
            span: start_span,
        })
    }
}

const fn compound_kind(first: u8, second: u8) -> Option<TokenKind> {
    match (first, second) {
        (b'=', b'=') => Some(TokenKind::EqualEqual),
        (b'!', b'=') => Some(TokenKind::BangEqual),
        (b'>', b'=') => Some(TokenKind::GreaterEqual),
        (b'<', b'=') => Some(TokenKind::LessEqual),
        _ => None,
    }
}

const fn single_kind(ch: u8) -> Option<TokenKind> {
    match ch {
        b'(' => Some(TokenKind::LeftParen),
        b')' => Some(TokenKind::RightParen),
        b'{' => Some(TokenKind::LeftBrace),
        b'}' => Some(TokenKind::RightBrace),
        b'*' => Some(TokenKind::Star),
        b'.' => Some(TokenKind::Dot),
        b',' => Some(TokenKind::Comma),
        b'+' => Some(TokenKind::Plus),
        b'-' => Some(TokenKind::Minus),
        b'/' => Some(TokenKind::Slash),
        b';' => Some(TokenKind::Semicolon),
        b':' => Some(TokenKind::Colon),
        b'=' => Some(TokenKind::Equal),
        b'!' => Some(TokenKind::Bang),
        b'>' => Some(TokenKind::Greater),
        b'<' => Some(TokenKind::Less),
        _ => None,
    }
}
