/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     errors.rs
 * Purpose:  Structured error values shared by the lexer and parser.
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

use thiserror::Error;

/// Result alias used throughout the front end.
pub type FluResult<T> = Result<T, FluError>;

/// The category of a Fluentix error.
///
/// The front end only ever produces syntax errors; the evaluator adds its
/// own categories downstream, all sharing this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "SyntaxError"),
        }
    }
}

/// A structured Fluentix error.
///
/// Every failure site carries a stable numeric code alongside the
/// human-readable reason; the code identifies the site, doubles as the
/// process exit status, and keys the documentation page for the error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{category}#{code}: {reason}")]
pub struct FluError {
    /// Broad classification of the failure.
    pub category: ErrorCategory,

    /// Human-readable description, quoting the offending lexeme where one
    /// exists.
    pub reason: String,

    /// Stable per-site code; also the process exit status.
    pub code: u16,
}

impl FluError {
    /// Creates a syntax error with a stable per-site code.
    pub fn syntax(reason: impl Into<String>, code: u16) -> Self {
        Self {
            category: ErrorCategory::Syntax,
            reason: reason.into(),
            code,
        }
    }

    /// The documentation page for this error.
    pub fn docs_url(&self) -> String {
        format!(
            "https://docs.fluentix.dev/error/{}{}",
            self.category, self.code
        )
    }
}
