/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Fluentix lexer.
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

/// Reserved-word classification.
pub mod keywords;

/// The scanner itself.
pub mod lexer;

/// Token and token-kind definitions.
pub mod token;

pub use lexer::tokenize;
pub use token::{Token, TokenKind};
