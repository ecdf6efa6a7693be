/*

lib.rs - Scalc library crate
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

// Don't allow unwrapping Results and Options
#![deny(clippy::unwrap_used)]
// Warn about additional compiler diagnostics. These don't affect the behavior
// or performance of Scalc, but they generally lead to cleaner code.
#![warn(
    missing_docs,
    missing_copy_implementations,
    missing_debug_implementations,
    unreachable_pub,
    unused_extern_crates,
    macro_use_extern_crate
)]

//! # Scalc
//!
//! Scalc is a small calculator for arithmetic expressions. It supports
//! `+ - * / ^`, parentheses, signs, and implicit multiplication (`2(3+4)`).
//!
//! See the [`Runtime`][1] struct for a runtime which can be used to integrate
//! Scalc into an application, or [`evaluate()`] for one-off evaluations.
//!
//! [1]: crate::runtime::Runtime

pub mod cursor;
pub mod error;
pub mod format;
pub mod lexer;
pub mod operation;
pub mod parser;
pub mod runtime;

use crate::{error::EvalError, runtime::Runtime};

/// Evaluate a single expression with a fresh [`Runtime`].
///
/// ```
/// assert_eq!(scalc::evaluate("2(3+4)"), Ok(14.0));
///
/// let err = scalc::evaluate("(2+3").unwrap_err();
/// assert_eq!(err.kind(), scalc::error::ErrorKind::NoParen);
/// assert_eq!(err.column(), 4);
/// ```
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    Runtime::new().evaluate(input)
}
