/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the Fluentix front end.
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

//! The Fluentix language front end: lexer, parser, and AST.
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! The evaluator lives downstream and consumes the [`ast::Program`] this
//! crate produces; every failure on the way there is a structured
//! [`errors::FluError`].

pub mod ast;
pub mod diagnostics;
pub mod dialect;
pub mod errors;
pub mod lexer;
pub mod parser;

use ast::Program;
use dialect::Dialect;
use errors::FluResult;

/// Tokenizes and parses a complete source string in one step.
pub fn parse_source(source: &str, dialect: Dialect) -> FluResult<Program> {
    let tokens = lexer::tokenize(source)?;
    parser::parse(tokens, dialect)
}
