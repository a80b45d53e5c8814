/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Fluentix recursive-descent parser.
 *
 * This module wires together all parser sub-modules:
 *   - Core parser control logic
 *   - Statement parsing and block capture
 *   - Expression parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens, dialect)` entry point
pub mod parser;

/// Statement-level parsing:
/// - keyword dispatch
/// - declarations, `create:` redirection, updates
/// - conditionals, loops, module / array statements
/// - indented block capture
pub mod statements;

/// Expression-level parsing:
/// - comparison → additive → multiplicative → exponent → unary → call → primary
/// - call argument and array element splitting
pub mod expressions;

/// Shared parser helpers:
/// - cursor movement and token expectation
/// - line and block capture
/// - depth-zero span splitting
pub mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::parse;
