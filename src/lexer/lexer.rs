/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     lexer/lexer.rs
 * Purpose:  Scans Fluentix source text into the ordered token stream the
 *           parser consumes.
 *
 * Website:  https://fluentix.dev
 * Docs:     https://docs.fluentix.dev
 *
 * License:
 * This file is part of the Fluentix programming language project.
 * Fluentix is distributed under the terms of the MIT license.
 *
 * ==========================================================================
 */

use crate::errors::{FluError, FluResult};
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};

/// The Fluentix scanner.
///
/// Walks the source one character at a time and emits classified tokens.
/// Indentation is significant: at the start of every physical line, each tab
/// (or run of four spaces) becomes one `Tab` token. Everywhere else,
/// whitespace other than newlines is skipped.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    at_line_start: bool,
    tokens: Vec<Token>,
}

/// Tokenizes a complete source string.
///
/// On success the returned stream always ends with a single `Eof` token.
/// The first lexical error aborts scanning.
pub fn tokenize(source: &str) -> FluResult<Vec<Token>> {
    Lexer::new(source).scan_tokens()
}

impl Lexer {
    /// Creates a lexer over raw source text with the cursor at the start
    /// of the first line.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            at_line_start: true,
            tokens: Vec::new(),
        }
    }

    /// Scans the entire input and returns the token stream, terminated by
    /// an `Eof` marker.
    pub fn scan_tokens(mut self) -> FluResult<Vec<Token>> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token::eof());
        Ok(self.tokens)
    }

    /// Scans a single token (or skips insignificant input) from the
    /// current cursor position.
    fn scan_token(&mut self) -> FluResult<()> {
        if self.at_line_start {
            self.scan_indentation();
            self.at_line_start = false;

            if self.is_at_end() {
                return Ok(());
            }
        }

        let ch = self.advance();

        match ch {
            // Insignificant whitespace away from line starts.
            ' ' | '\r' => {}

            '\n' => {
                self.push(TokenKind::Newline, "\n");
                self.at_line_start = true;
            }

            // Line comment.
            '#' => {
                while !self.is_at_end() && self.peek() != '\n' {
                    self.advance();
                }
            }

            '+' => self.push(TokenKind::Plus, "+"),
            '-' => self.push(TokenKind::Minus, "-"),
            '*' => self.push(TokenKind::Multiply, "*"),
            '/' => self.push(TokenKind::Divide, "/"),
            '^' => self.push(TokenKind::Power, "^"),
            '=' => self.push(TokenKind::Equals, "="),

            '<' => {
                if self.match_char('>') {
                    self.push(TokenKind::NotEquals, "<>");
                } else if self.match_char('=') {
                    self.push(TokenKind::SmallerThanOrEquals, "<=");
                } else {
                    self.push(TokenKind::SmallerThan, "<");
                }
            }

            '>' => {
                if self.match_char('=') {
                    self.push(TokenKind::GreaterThanOrEquals, ">=");
                } else {
                    self.push(TokenKind::GreaterThan, ">");
                }
            }

            ':' => self.push(TokenKind::Colon, ":"),
            ';' => self.push(TokenKind::Semi, ";"),
            '(' => self.push(TokenKind::OpenParen, "("),
            ')' => self.push(TokenKind::CloseParen, ")"),
            '[' => self.push(TokenKind::OpenBracket, "["),
            ']' => self.push(TokenKind::CloseBracket, "]"),

            '"' | '\'' => self.string(ch)?,

            '0'..='9' => self.number(ch),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier(ch),

            _ => {
                return Err(FluError::syntax(
                    format!("Unexpected character '{}'", ch),
                    21,
                ));
            }
        }

        Ok(())
    }

    /// Emits one `Tab` token per leading tab or per run of four spaces.
    ///
    /// Stops at the first character that is neither, leaving shorter space
    /// runs to be skipped as ordinary whitespace.
    fn scan_indentation(&mut self) {
        loop {
            if self.peek() == '\t' {
                self.advance();
                self.push(TokenKind::Tab, "\t");
            } else if self.peek_spaces(4) {
                for _ in 0..4 {
                    self.advance();
                }
                self.push(TokenKind::Tab, "\t");
            } else {
                break;
            }
        }
    }

    /// Scans a string literal delimited by `delimiter`.
    ///
    /// The emitted lexeme is the raw inner text: escape sequences are kept
    /// undecoded for the parser, but a backslash always protects the next
    /// character so escaped delimiters do not close the string.
    fn string(&mut self, delimiter: char) -> FluResult<()> {
        let mut lexeme = String::new();

        while !self.is_at_end() && self.peek() != delimiter {
            let ch = self.advance();
            lexeme.push(ch);

            if ch == '\\' && !self.is_at_end() {
                lexeme.push(self.advance());
            }
        }

        if self.is_at_end() {
            return Err(FluError::syntax("Unterminated string", 22));
        }

        self.advance(); // closing delimiter
        self.push(TokenKind::String, lexeme);
        Ok(())
    }

    /// Scans a number: a digit run with at most one fractional part.
    fn number(&mut self, first: char) {
        let mut lexeme = first.to_string();

        while self.peek().is_ascii_digit() {
            lexeme.push(self.advance());
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            lexeme.push(self.advance());
            while self.peek().is_ascii_digit() {
                lexeme.push(self.advance());
            }
        }

        self.push(TokenKind::Number, lexeme);
    }

    /// Scans an identifier and reclassifies it through the keyword table.
    fn identifier(&mut self, first: char) {
        let mut lexeme = first.to_string();

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            lexeme.push(self.advance());
        }

        let kind = keyword_kind(&lexeme).unwrap_or(TokenKind::Identifier);
        self.push(kind, lexeme);
    }

    fn push(&mut self, kind: TokenKind, lexeme: impl Into<String>) {
        self.tokens.push(Token::new(kind, lexeme));
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    /// True when the next `count` characters are all spaces.
    fn peek_spaces(&self, count: usize) -> bool {
        (0..count).all(|offset| {
            self.chars.get(self.current + offset).copied() == Some(' ')
        })
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
