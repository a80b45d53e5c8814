/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     parser/helpers.rs
 * Purpose:  Shared parser utilities: cursor movement, token expectation,
 *           line/block capture, and depth-zero span splitting.
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

use crate::ast::{Expr, Program};
use crate::errors::{FluError, FluResult};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the current token without consuming it.
    ///
    /// Unlike `eat`, this does **not** skip indentation markers; block
    /// capture and dedent detection rely on seeing them.
    pub(super) fn at(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Consumes and returns the next token.
    ///
    /// Indentation markers in front of the cursor are silently discarded
    /// first; indentation is significant only at the start of a body line
    /// inspected by block capture, nowhere else in the grammar. The `Eof`
    /// marker is never advanced past.
    pub(super) fn eat(&mut self) -> Token {
        self.skip_tabs();
        self.pop_raw()
    }

    /// Consumes and returns the next token verbatim, tabs included.
    ///
    /// Block capture uses this so nested bodies keep their remaining
    /// indentation markers for the recursive parser instance to strip.
    pub(super) fn pop_raw(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if token.kind != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    /// Advances the cursor past any indentation markers.
    pub(super) fn skip_tabs(&mut self) {
        while self.tokens[self.current].kind == TokenKind::Tab {
            self.current += 1;
        }
    }

    /// Consumes one token and checks it against the expected kinds.
    ///
    /// On failure the caller-supplied error is returned **unchanged** when
    /// the offending token is a line terminator or end-of-input (the
    /// statement simply ended too early); otherwise it is rephrased to
    /// quote the actual lexeme, keeping the caller's stable code.
    pub(super) fn expect(
        &mut self,
        expected: &[TokenKind],
        error: FluError,
    ) -> FluResult<Token> {
        let token = self.eat();

        if !expected.contains(&token.kind) {
            if is_line_end(&token) {
                return Err(error);
            }

            return Err(FluError::syntax(
                format!("{}, got '{}'", error.reason, token.lexeme),
                error.code,
            ));
        }

        Ok(token)
    }

    /// True when the current token terminates the logical line.
    pub(super) fn at_end(&self) -> bool {
        is_line_end(self.at())
    }

    /// True when the cursor has reached the end-of-input marker.
    pub(super) fn is_at_end(&self) -> bool {
        self.at().kind == TokenKind::Eof
    }

    /// Fails with the given stable code unless the statement is followed by
    /// a line terminator or end-of-input.
    pub(super) fn require_line_end(&self, code: u16) -> FluResult<()> {
        if !self.at_end() {
            return Err(FluError::syntax(
                format!(
                    "Expected newline or nothing, got '{}'",
                    self.at().lexeme
                ),
                code,
            ));
        }

        Ok(())
    }

    /// Consumes every remaining token of the current logical line.
    ///
    /// Used to capture condition spans for `if`/`unless`/`until`; the line
    /// terminator itself is left unconsumed.
    pub(super) fn capture_line(&mut self) -> Vec<Token> {
        let mut span = Vec::new();

        while !self.at_end() {
            span.push(self.eat());
        }

        span
    }

    /// Collects the tokens of the indented body that follows a statement
    /// header.
    ///
    /// Repeatedly buffers blank lines, then strips **exactly one** leading
    /// indentation marker and buffers the rest of that line verbatim.
    /// Stops at end-of-input or at the first line whose leading token is
    /// not an indentation marker; that dedent token is left unconsumed so
    /// the caller can inspect it (e.g. to detect `unless`/`else`).
    ///
    /// Nested blocks inside the body keep their remaining markers; the
    /// recursive parser instance strips one marker per line at its own
    /// capture sites, so nesting depth is realized purely through recursive
    /// instantiation.
    pub(super) fn capture_block(&mut self) -> Vec<Token> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            while self.at().kind == TokenKind::Newline {
                body.push(self.pop_raw());
            }

            if self.at().kind != TokenKind::Tab {
                break;
            }

            self.pop_raw(); // strip exactly one indentation marker

            while !self.at_end() {
                body.push(self.pop_raw());
            }
        }

        body
    }

    /// Captures an indented body and parses it as a nested program with a
    /// fresh parser instance of the same dialect.
    pub(super) fn parse_block(&mut self) -> FluResult<Program> {
        let body = self.capture_block();
        self.parse_program_slice(body)
    }

    /// Parses an owned token slice as a program via a fresh instance.
    pub(super) fn parse_program_slice(
        &self,
        mut tokens: Vec<Token>,
    ) -> FluResult<Program> {
        tokens.push(Token::eof());
        Parser::new(tokens, self.dialect).produce_ast()
    }

    /// Parses an owned token slice as a single expression via a fresh
    /// instance.
    pub(super) fn parse_expression_slice(
        &self,
        mut tokens: Vec<Token>,
    ) -> FluResult<Expr> {
        tokens.push(Token::eof());
        Parser::new(tokens, self.dialect).expression()
    }
}

/// True for the tokens that terminate a logical line.
pub(super) fn is_line_end(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Newline | TokenKind::Eof)
}

/// Splits a captured span on `;` tokens at bracket depth zero.
///
/// Empty pieces are dropped, so stray or trailing separators contribute no
/// elements. When `skip_line_breaks` is set, line terminators inside the
/// span are dropped as well (multi-line array literals).
///
/// Bracket depth is tracked with a stack of open kinds; a closer with no
/// matching opener anywhere, or whose innermost opener is of the other
/// kind, is a structural error with a dedicated stable code.
pub(super) fn split_on_semicolons(
    span: &[Token],
    skip_line_breaks: bool,
) -> FluResult<Vec<Vec<Token>>> {
    let mut pieces = Vec::new();
    let mut piece: Vec<Token> = Vec::new();
    let mut stack: Vec<TokenKind> = Vec::new();

    for token in span {
        if token.kind == TokenKind::Semi && stack.is_empty() {
            if !piece.is_empty() {
                pieces.push(std::mem::take(&mut piece));
            }
        } else if !(skip_line_breaks && is_line_end(token)) {
            piece.push(token.clone());
        }

        match token.kind {
            TokenKind::OpenParen | TokenKind::OpenBracket => {
                stack.push(token.kind);
            }
            TokenKind::CloseParen => {
                if !stack.contains(&TokenKind::OpenParen) {
                    return Err(FluError::syntax("Unexpected ')'", 63));
                }
                if stack.last() != Some(&TokenKind::OpenParen) {
                    return Err(FluError::syntax("Unexpected ')'", 84));
                }
                stack.pop();
            }
            TokenKind::CloseBracket => {
                if !stack.contains(&TokenKind::OpenBracket) {
                    return Err(FluError::syntax("Unexpected ']'", 17));
                }
                if stack.last() != Some(&TokenKind::OpenBracket) {
                    return Err(FluError::syntax("Unexpected ']'", 27));
                }
                stack.pop();
            }
            _ => {}
        }
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    Ok(pieces)
}

/// Decodes backslash escape sequences in a raw string lexeme.
///
/// Unknown escapes are kept verbatim, backslash included.
pub(super) fn decode_escapes(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('0') => decoded.push('\0'),
            Some('\\') => decoded.push('\\'),
            Some('\'') => decoded.push('\''),
            Some('"') => decoded.push('"'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }

    decoded
}
