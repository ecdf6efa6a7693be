/*

error.rs - Syntax errors and diagnostics for Scalc
Copyright (C) 2022  Kian Kasad

This file is part of Scalc.

Scalc is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, version 3 of the License.

Scalc is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Scalc.  If not, see <https://www.gnu.org/licenses/>.

*/

//! Syntax errors and the diagnostics built from them
//!
//! The lexer and parser return [`SyntaxError`]s, which only know the column
//! at which they occurred. [`Runtime::evaluate`][1] pairs the error with the
//! input line to produce an [`EvalError`], whose [`Display`] output is ready
//! to be printed:
//!
//! ```text
//! missing closing parenthesis at position 4
//! (2+3
//!     ^
//! ```
//!
//! [1]: crate::runtime::Runtime::evaluate

use std::fmt::{self, Display};

use strum_macros::EnumIter;
use thiserror::Error;

/// # Error kind
///
/// Discriminant of a [`SyntaxError`], without its position.
#[derive(Copy, Clone, Debug, strum_macros::Display, EnumIter, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lexer met a character that starts no token.
    BadChar,
    /// The parser met a token that can't appear where it is.
    BadToken,
    /// An operator was used in a prefix or infix role it doesn't have.
    BadOp,
    /// An opening parenthesis was never closed.
    NoParen,
    /// The expression is nested deeper than the runtime allows.
    TooDeep,
}

/// # Syntax error
///
/// Every error the lexer or parser can produce. Columns count characters
/// from zero.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// ## Unknown character
    ///
    /// `character` starts no token.
    #[error("unknown character '{character}' at position {column}")]
    BadChar {
        /// The offending character.
        character: char,
        /// Its column.
        column: usize,
    },

    /// ## Misplaced token
    ///
    /// E.g. the end of input right after `2+`, or a stray `)` after a
    /// complete expression.
    #[error("unknown token at position {column}")]
    BadToken {
        /// Column of the token.
        column: usize,
    },

    /// ## Misused operator
    ///
    /// An operator in a prefix or infix role it doesn't have, e.g. `*3`.
    #[error("unknown operator at position {column}")]
    BadOp {
        /// Column of the operator.
        column: usize,
    },

    /// ## Unclosed parenthesis
    #[error("missing closing parenthesis at position {column}")]
    NoParen {
        /// Column of the token found instead of `)`.
        column: usize,
    },

    /// ## Nesting limit exceeded
    #[error("expression nested too deeply at position {column} (limit is {limit})")]
    TooDeep {
        /// Column of the operand that would exceed the limit.
        column: usize,
        /// The nesting limit in effect.
        limit: usize,
    },
}

impl SyntaxError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::BadChar { .. } => ErrorKind::BadChar,
            SyntaxError::BadToken { .. } => ErrorKind::BadToken,
            SyntaxError::BadOp { .. } => ErrorKind::BadOp,
            SyntaxError::NoParen { .. } => ErrorKind::NoParen,
            SyntaxError::TooDeep { .. } => ErrorKind::TooDeep,
        }
    }

    /// Returns the column the error points at.
    pub fn column(&self) -> usize {
        match *self {
            SyntaxError::BadChar { column, .. }
            | SyntaxError::BadToken { column }
            | SyntaxError::BadOp { column }
            | SyntaxError::NoParen { column }
            | SyntaxError::TooDeep { column, .. } => column,
        }
    }
}

/// # Evaluation error
///
/// A [`SyntaxError`] together with the line it occurred in. Displaying it
/// prints the error message, the line, and a caret under the offending
/// column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    error: SyntaxError,
    line: String,
}

impl EvalError {
    /// Create an [`EvalError`] for `error`, which occurred in `line`.
    pub fn new(error: SyntaxError, line: &str) -> Self {
        Self {
            error,
            line: line.to_owned(),
        }
    }

    /// Returns the kind of the underlying error.
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Returns the column the error points at.
    pub fn column(&self) -> usize {
        self.error.column()
    }

    /// Returns the underlying [`SyntaxError`].
    pub fn syntax_error(&self) -> &SyntaxError {
        &self.error
    }

    /// Returns the line the error occurred in.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Returns the full diagnostic text, without a trailing newline.
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.error)?;
        writeln!(f, "{}", self.line)?;
        write!(f, "{:>width$}", '^', width = self.column() + 1)
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn messages() {
        let cases = [
            (
                SyntaxError::BadChar {
                    character: '@',
                    column: 2,
                },
                "unknown character '@' at position 2",
            ),
            (
                SyntaxError::BadToken { column: 0 },
                "unknown token at position 0",
            ),
            (
                SyntaxError::BadOp { column: 1 },
                "unknown operator at position 1",
            ),
            (
                SyntaxError::NoParen { column: 4 },
                "missing closing parenthesis at position 4",
            ),
            (
                SyntaxError::TooDeep {
                    column: 9,
                    limit: 8,
                },
                "expression nested too deeply at position 9 (limit is 8)",
            ),
        ];
        for (error, message) in cases {
            assert_eq!(error.to_string(), message);
        }
    }

    #[test]
    fn kinds() {
        let errors = [
            SyntaxError::BadChar {
                character: 'x',
                column: 0,
            },
            SyntaxError::BadToken { column: 0 },
            SyntaxError::BadOp { column: 0 },
            SyntaxError::NoParen { column: 0 },
            SyntaxError::TooDeep {
                column: 0,
                limit: 0,
            },
        ];
        let kinds: Vec<ErrorKind> = errors.iter().map(SyntaxError::kind).collect();
        assert_eq!(kinds, ErrorKind::iter().collect::<Vec<_>>());
        assert_eq!(ErrorKind::NoParen.to_string(), "NoParen");
    }

    #[test]
    fn caret_diagnostic() {
        let err = EvalError::new(SyntaxError::NoParen { column: 4 }, "(2+3");
        assert_eq!(err.kind(), ErrorKind::NoParen);
        assert_eq!(err.column(), 4);
        assert_eq!(
            err.diagnostic(),
            "missing closing parenthesis at position 4\n(2+3\n    ^"
        );

        let err = EvalError::new(
            SyntaxError::BadChar {
                character: '?',
                column: 0,
            },
            "?",
        );
        assert_eq!(err.to_string(), "unknown character '?' at position 0\n?\n^");
    }
}
