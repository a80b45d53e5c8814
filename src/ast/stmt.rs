/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Statement nodes of the Fluentix abstract syntax tree.
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

use serde::Serialize;

use crate::ast::Expr;

/// An ordered sequence of statements: the whole script, or one indented
/// block body parsed by a nested parser instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// All executable Fluentix statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// A bare expression; its value is discarded by the evaluator.
    Expression(Expr),

    /// `variable x is expr`, `let x be expr`, or `constant x is expr`
    /// (`constant` and `unchangeable` set the immutability flag).
    Assignment {
        name: String,
        value: Expr,
        constant: bool,
    },

    /// `target is now expr` — rebinds an already-declared target.
    Update { target: Expr, value: Expr },

    /// `if`/`unless` with an indented body.
    ///
    /// `otherwise` chains the next branch: another conditional for a
    /// following `unless`, or a synthetic always-true conditional wrapping
    /// the `else` body, so the evaluator only ever sees a binary branch.
    Conditional {
        condition: Expr,
        body: Program,
        otherwise: Option<Box<Stmt>>,
    },

    /// `get: module name` — imports a module by name.
    GetModule { module: String },

    /// `define name with: a; b; c` followed by an indented body.
    FunctionDeclaration {
        name: String,
        params: Vec<String>,
        body: Program,
    },

    /// `return` with an expression, or the null literal when bare.
    Return(Expr),

    /// `until condition` loop with an indented body.
    Until { condition: Expr, body: Program },

    /// `forever` loop with an indented body (extended dialect only).
    Forever { body: Program },

    /// `stop` / `break` — exits the innermost loop.
    Stop,

    /// `include element to array`.
    Include { array: Expr, element: Expr },

    /// `exclude element at index from array`.
    Exclude { array: Expr, index: Expr },
}
