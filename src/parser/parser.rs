/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     parser/parser.rs
 * Purpose:  Core recursive-descent parser entry point.
 *
 * This file defines the `Parser` structure and the public `parse()` driver
 * used to transform a token stream into a Fluentix program node. The
 * grammar itself is split across sibling modules:
 * - `statements.rs`   → statement dispatch and block capture
 * - `expressions.rs`  → expression grammar and operator precedence
 * - `helpers.rs`      → cursor, expectation, and span-splitting utilities
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

use crate::ast::Program;
use crate::dialect::Dialect;
use crate::errors::FluResult;
use crate::lexer::token::{Token, TokenKind};

/// The Fluentix recursive-descent parser.
///
/// One instance owns one token slice and parses exactly one scope: the top
/// level, or one nested block or bracketed sub-expression. Nested scopes are
/// parsed by **fresh instances** over their own private slices, so a parent
/// parse and its sub-parses never share mutable state.
///
/// The cursor index is the only structural mutation; tokens are consumed
/// strictly left-to-right and never revisited.
pub struct Parser {
    /// The token slice this instance owns, always terminated by `Eof`.
    pub(super) tokens: Vec<Token>,

    /// Current cursor position within the token slice.
    pub(super) current: usize,

    /// Dialect tag, fixed for the lifetime of this instance and inherited
    /// by every nested instance it spawns.
    pub(super) dialect: Dialect,
}

/// Public entry point for the parsing phase.
///
/// The token stream must be terminated by an `Eof` token, as produced by
/// [`crate::lexer::tokenize`].
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST
/// ```
pub fn parse(tokens: Vec<Token>, dialect: Dialect) -> FluResult<Program> {
    Parser::new(tokens, dialect).produce_ast()
}

impl Parser {
    /// Creates a parser over a token slice with the cursor at the front.
    pub fn new(tokens: Vec<Token>, dialect: Dialect) -> Self {
        Self {
            tokens,
            current: 0,
            dialect,
        }
    }

    /// Parses this instance's entire token slice into a program node.
    ///
    /// Blank lines between statements are skipped; the first error anywhere
    /// aborts the whole parse and is returned unchanged.
    pub fn produce_ast(&mut self) -> FluResult<Program> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            while self.at().kind == TokenKind::Newline {
                self.eat();
            }

            if self.at().kind == TokenKind::Eof {
                break;
            }

            body.push(self.statement()?);
        }

        Ok(Program { body })
    }
}
