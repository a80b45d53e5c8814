/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     ast/expr.rs
 * Purpose:  Expression nodes of the Fluentix abstract syntax tree.
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

/// All Fluentix expression forms.
///
/// Children are owned exclusively by their parent; the tree is built
/// bottom-up and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Identifier(String),
    Number(f64),
    Str(String),
    Bool(bool),
    Null,

    /// A signed operand, produced only when at least one leading `+`/`-`
    /// token was consumed.
    Unary { sign: Sign, operand: Box<Expr> },

    /// An arithmetic operation.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// A comparison, kept distinct from `Binary` so the evaluator can treat
    /// truth-producing operators separately.
    Comparison {
        left: Box<Expr>,
        op: CompareOp,
        right: Box<Expr>,
    },

    /// A call: `callee: arg; arg; ...`.
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },

    /// An array literal: `[elem; elem; ...]`.
    Array(Vec<Expr>),
}

/// The resolved sign of a unary `+`/`-` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sign {
    Positive,
    Negative,
}

/// Arithmetic operators, low precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareOp {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEquals,
    SmallerThan,
    SmallerThanOrEquals,
}
