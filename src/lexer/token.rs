/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     lexer/token.rs
 * Purpose:  Defines the lexical token types consumed by the Fluentix
 *           parser.
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

use std::fmt;

/// The **category of a lexical token** in the Fluentix language.
///
/// `TokenKind` is a closed enumeration: every token the lexer can produce is
/// one of these variants, and the parser dispatches on nothing else.
///
/// # Pipeline Role
/// ```text
/// Source → Lexer → Tokens → Parser → AST
/// ```
///
/// Keywords each get their own kind so statement dispatch is a plain `match`
/// on the leading token, with no lexeme comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A user-defined name.
    Identifier,

    /// A numeric literal, integer or fractional (`42`, `3.14`).
    Number,

    /// A quoted string literal. The lexeme holds the raw inner text with
    /// escape sequences still undecoded; the parser decodes them.
    String,

    /// The `true` literal.
    True,

    /// The `false` literal.
    False,

    /// The `null` literal.
    Null,

    // Declaration keywords.
    Variable,
    Let,
    Constant,
    Create,
    Changeable,
    Unchangeable,
    Function,

    // Binding and update keywords.
    Is,
    Be,
    Now,

    // Control flow keywords.
    If,
    Unless,
    Else,
    Until,
    Repeat,
    Stop,
    Break,
    Forever,
    Return,

    // Module keywords.
    Get,
    Module,

    // Function declaration keywords.
    Define,
    With,

    // Array statement keywords.
    Include,
    Exclude,
    To,
    Element,
    At,
    From,

    // Operators.
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEquals,
    SmallerThan,
    SmallerThanOrEquals,

    // Punctuation.
    Colon,
    Semi,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    /// One level of leading indentation at the start of a physical line.
    /// Significant only during block capture; discarded everywhere else.
    Tab,

    /// End of a physical line.
    Newline,

    /// End-of-input marker, always the final token of a stream.
    Eof,
}

/// A single lexical token: a kind plus the original source text.
///
/// Tokens carry no source positions; error messages quote the offending
/// lexeme only.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,
}

impl Token {
    /// Creates a token from a kind and its source text.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The synthetic end-of-input marker appended to every token slice.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    /// User-facing output prints only the lexeme, so diagnostics read as
    /// `got 'until'` rather than a debug dump of the token structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
