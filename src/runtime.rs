/*

runtime.rs - Scalc runtime
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

//! Execution runtime for Scalc.

use log::debug;

use crate::{
    error::{EvalError, SyntaxError},
    format::Formatter,
    lexer::{tokenize, Token},
    parser::Parser,
};

/// Execution runtime for Scalc.
///
/// Owns the token buffer shared by successive evaluations and applies user
/// preferences like output precision and the nesting limit.
#[derive(Debug)]
pub struct Runtime {
    tokens: Vec<Token>,
    precision: usize,
    max_depth: usize,
}

impl Runtime {
    /// Significant digits printed by [`format()`][Self::format].
    pub const DEFAULT_PRECISION: usize = 6;
    /// Deepest expression nesting accepted by default.
    pub const DEFAULT_MAX_DEPTH: usize = Parser::DEFAULT_MAX_DEPTH;
    const INITIAL_CAPACITY: usize = 256;

    /// Create a [`Runtime`] with the default settings.
    pub fn new() -> Self {
        Self {
            tokens: Vec::with_capacity(Self::INITIAL_CAPACITY),
            precision: Self::DEFAULT_PRECISION,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the number of significant digits used by [`format()`][Self::format].
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the deepest expression nesting [`evaluate()`][Self::evaluate]
    /// accepts.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluate one line of input.
    ///
    /// ## Errors
    ///
    /// Returns an [`EvalError`] describing the first syntax error in `input`.
    /// Errors only affect this call; the runtime is ready for the next line
    /// either way.
    pub fn evaluate(&mut self, input: &str) -> Result<f64, EvalError> {
        let result = self.run(input);
        self.tokens.clear();
        match &result {
            Ok(value) => debug!("{:?} = {}", input, value),
            Err(err) => debug!("{:?} failed: {}", input, err),
        }
        result.map_err(|err| EvalError::new(err, input))
    }

    /// Evaluate one line of input, also returning its tokens.
    #[cfg(feature = "debug")]
    pub fn evaluate_debug(&mut self, input: &str) -> (Vec<Token>, Result<f64, EvalError>) {
        let result = self.run(input);
        let tokens = self.tokens.clone();
        self.tokens.clear();
        (tokens, result.map_err(|err| EvalError::new(err, input)))
    }

    /// Format a result for printing, in the style of C's `%g`.
    pub fn format(&self, value: f64) -> String {
        value.format(self.precision)
    }

    fn run(&mut self, input: &str) -> Result<f64, SyntaxError> {
        tokenize(input, &mut self.tokens)?;
        Parser::with_max_depth(&self.tokens, self.max_depth).parse()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
