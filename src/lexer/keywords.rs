/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     lexer/keywords.rs
 * Purpose:  Reserved-word table for the Fluentix lexer.
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

use crate::lexer::token::TokenKind;

/// Classifies a scanned word as a reserved keyword or literal.
///
/// Returns the specific token kind for reserved words (including the
/// `true`/`false`/`null` literals) and `None` for user-defined identifiers.
/// Keywords are case-sensitive and always lower-case.
///
/// Dialect gating is **not** applied here: `create`, `break` and `forever`
/// are always lexed as keywords, and the parser decides whether the active
/// dialect recognizes them.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "variable" => TokenKind::Variable,
        "let" => TokenKind::Let,
        "constant" => TokenKind::Constant,
        "create" => TokenKind::Create,
        "changeable" => TokenKind::Changeable,
        "unchangeable" => TokenKind::Unchangeable,
        "function" => TokenKind::Function,
        "is" => TokenKind::Is,
        "be" => TokenKind::Be,
        "now" => TokenKind::Now,
        "if" => TokenKind::If,
        "unless" => TokenKind::Unless,
        "else" => TokenKind::Else,
        "until" => TokenKind::Until,
        "repeat" => TokenKind::Repeat,
        "stop" => TokenKind::Stop,
        "break" => TokenKind::Break,
        "forever" => TokenKind::Forever,
        "return" => TokenKind::Return,
        "get" => TokenKind::Get,
        "module" => TokenKind::Module,
        "define" => TokenKind::Define,
        "with" => TokenKind::With,
        "include" => TokenKind::Include,
        "exclude" => TokenKind::Exclude,
        "to" => TokenKind::To,
        "element" => TokenKind::Element,
        "at" => TokenKind::At,
        "from" => TokenKind::From,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        _ => return None,
    };

    Some(kind)
}
