/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Renders structured Fluentix errors for users.
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

use crate::errors::FluError;

/// Renders human-friendly diagnostics for Fluentix errors.
///
/// The lexer and parser never print or terminate the process; they only
/// return structured error values. This reporter is the boundary that turns
/// one of those values into user-facing output. Whether to halt, and with
/// what status, stays with the caller.
///
/// Tokens carry no source positions, so the output names the script and
/// quotes the offending lexeme embedded in the reason, nothing more.
pub struct ErrorReporter {
    /// Name of the script being parsed (e.g. `main.flu`), display only.
    file_name: String,
}

impl ErrorReporter {
    /// Creates a reporter for a given script.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Prints a formatted diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[SyntaxError#61]: Expected newline or nothing, got 'until'
    ///   --> main.flu
    /// help: learn more at https://docs.fluentix.dev/error/SyntaxError61
    /// ```
    pub fn print(&self, error: &FluError) {
        eprintln!(
            "error[{}#{}]: {}",
            error.category, error.code, error.reason
        );
        eprintln!("  --> {}", self.file_name);
        eprintln!("help: learn more at {}", error.docs_url());
    }
}
