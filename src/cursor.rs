/*

cursor.rs - Token cursor for Scalc
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

//! Peek/advance view over a token sequence

use crate::lexer::{Token, TokenKind};

/// # Token cursor
///
/// Reads a token sequence front to back, remembering the column of the last
/// token it handed out so errors can point at it.
///
/// Reading past the end keeps returning the final [`End`][TokenKind::End]
/// token. A sequence missing its `End` token behaves as if it had one at
/// column 0.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    at: usize,
    last_column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new [`Cursor`] at the start of `tokens`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            at: 0,
            last_column: 0,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Token {
        self.tokens
            .get(self.at)
            .copied()
            .unwrap_or(Token::new(TokenKind::End, 0))
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> Token {
        let token = self.peek();
        self.last_column = token.column;
        if token.kind != TokenKind::End {
            self.at += 1;
        }
        token
    }

    /// Column of the most recently consumed token.
    pub fn last_column(&self) -> usize {
        self.last_column
    }
}
