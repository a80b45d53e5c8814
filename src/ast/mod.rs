/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the Fluentix abstract syntax tree.
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

/// Expression nodes and operator enums.
pub mod expr;

/// Statement nodes and the program root.
pub mod stmt;

pub use expr::{BinaryOp, CompareOp, Expr, Sign};
pub use stmt::{Program, Stmt};
