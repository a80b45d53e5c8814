/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     dialect.rs
 * Purpose:  The two Fluentix source dialects and their keyword gating.
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

/// The source dialect, selected by file extension.
///
/// Both dialects share one lexer and one grammar; the parser consults the
/// dialect at dispatch time to decide whether the extended keywords
/// (`create:`, `break`, `forever`) are live. In the base dialect those
/// keywords fall through to the expression fallback and are reported as
/// unexpected tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// The base dialect (`.flu` scripts).
    Flu,

    /// The extended dialect (`.fl` scripts).
    Fl,
}

impl Dialect {
    /// Resolves a dialect from a file extension, case-sensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "flu" => Some(Dialect::Flu),
            "fl" => Some(Dialect::Fl),
            _ => None,
        }
    }

    /// True when the extended keywords are live.
    pub fn has_extended_syntax(self) -> bool {
        matches!(self, Dialect::Fl)
    }
}
