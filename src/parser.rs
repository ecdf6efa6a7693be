/*

parser.rs - Expression parser and evaluator for Scalc
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

/*!
# Expression parser

Parses a token sequence and computes its value in the same pass, using
precedence climbing driven by [binding powers][1].

Each call to [`Parser::expr_bp()`] reads one operand (a number, a
parenthesized group, or a signed operand), then keeps absorbing infix
operators as long as their left binding power is at least the minimum it was
called with. An operator that binds too loosely is left for the caller.

Juxtaposed operands such as `2 3` or `2(3)` are multiplied. The implicit
multiplication behaves exactly like `*` but has no token of its own.

```
use scalc::{lexer::tokenize, parser::Parser};

let mut tokens = Vec::new();
tokenize("2(1 + 2)^2", &mut tokens).unwrap();
assert_eq!(Parser::new(&tokens).parse(), Ok(18.0));
```

[1]: crate::operation::Operation::infix_binding_power
*/

use log::trace;

use crate::{
    cursor::Cursor,
    error::SyntaxError,
    lexer::{Token, TokenKind},
    operation::Operation,
};

/// # Expression parser
///
/// Evaluates a complete token sequence, as produced by
/// [`tokenize()`][crate::lexer::tokenize].
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Default limit on expression nesting.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Create a new [`Parser`] over `tokens`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_max_depth(tokens, Self::DEFAULT_MAX_DEPTH)
    }

    /// Create a new [`Parser`] which fails with [`SyntaxError::TooDeep`] once
    /// operands are nested more than `max_depth` levels deep.
    ///
    /// Each nested operand (parenthesis, sign, or tighter-binding right
    /// operand) adds a level.
    pub fn with_max_depth(tokens: &'a [Token], max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            depth: 0,
            max_depth,
        }
    }

    /// Evaluate the whole token sequence.
    ///
    /// ## Errors
    ///
    /// Besides the errors of [`expr_bp()`][Self::expr_bp], returns
    /// [`SyntaxError::BadToken`] if tokens remain after a complete
    /// expression, e.g. for `1)`.
    pub fn parse(mut self) -> Result<f64, SyntaxError> {
        let value = self.expr_bp(0)?;
        let trailing = self.cursor.peek();
        match trailing.kind {
            TokenKind::End => Ok(value),
            _ => Err(SyntaxError::BadToken {
                column: trailing.column,
            }),
        }
    }

    /// Parse and evaluate one expression whose infix operators all have a left
    /// binding power of at least `min_bp`.
    pub fn expr_bp(&mut self, min_bp: u8) -> Result<f64, SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::TooDeep {
                column: self.cursor.peek().column,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = self.expr_bp_inner(min_bp);
        self.depth -= 1;
        result
    }

    fn expr_bp_inner(&mut self, min_bp: u8) -> Result<f64, SyntaxError> {
        let mut lhs = self.operand()?;

        loop {
            let next = self.cursor.peek();
            let (op, implicit) = match next.kind {
                TokenKind::End => break,
                TokenKind::Number(_) | TokenKind::Operator(Operation::OpenParen) => {
                    (Operation::Multiply, true)
                }
                TokenKind::Operator(op) => (op, false),
            };

            let (l_bp, r_bp) = match op.infix_binding_power() {
                Some(powers) => powers,
                None => break,
            };
            if l_bp < min_bp {
                break;
            }

            if !implicit {
                self.cursor.next();
            }
            let rhs = self.expr_bp(r_bp)?;
            trace!("{} {} {} (min_bp {})", lhs, op, rhs, min_bp);
            lhs = op
                .apply(lhs, rhs)
                .ok_or_else(|| SyntaxError::BadOp { column: next.column })?;
        }

        Ok(lhs)
    }

    /// Parse the left-hand operand of an expression.
    fn operand(&mut self) -> Result<f64, SyntaxError> {
        let token = self.cursor.next();
        match token.kind {
            TokenKind::Number(value) => Ok(value),

            TokenKind::Operator(Operation::OpenParen) => {
                let value = self.expr_bp(0)?;
                match self.cursor.next().kind {
                    TokenKind::Operator(Operation::CloseParen) => Ok(value),
                    _ => Err(SyntaxError::NoParen {
                        column: self.cursor.last_column(),
                    }),
                }
            }

            TokenKind::Operator(op) => {
                let bad_op = SyntaxError::BadOp {
                    column: token.column,
                };
                let r_bp = op.prefix_binding_power().ok_or(bad_op)?;
                let operand = self.expr_bp(r_bp)?;
                op.apply_prefix(operand).ok_or(bad_op)
            }

            TokenKind::End => Err(SyntaxError::BadToken {
                column: self.cursor.last_column(),
            }),
        }
    }
}
