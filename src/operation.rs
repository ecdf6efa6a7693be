/*

operation.rs - Operators and binding powers for Scalc
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

//! Operators and their binding powers
//!
//! A binding power is a precedence value. An infix operator has a left
//! binding power, which decides whether a caller parsing at some minimum power
//! may absorb it, and a right binding power, which is the minimum power used
//! to parse its right operand. Left-associative levels use `right = left + 1`
//! and right-associative ones use `right = left - 1`.

use strum_macros::{Display, EnumIter, EnumString};

/// # Operator
///
/// Every single-character operator recognized by the [lexer][1], including
/// the grouping parentheses.
///
/// [1]: crate::lexer
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumString, PartialEq, Eq)]
pub enum Operation {
    /// ## Addition, or unary identity
    #[strum(serialize = "+")]
    Add,

    /// ## Subtraction, or unary negation
    #[strum(serialize = "-")]
    Subtract,

    /// ## Multiplication
    ///
    /// Also used for implicit multiplication, e.g. `2(3)`.
    #[strum(serialize = "*")]
    Multiply,

    /// ## Division
    #[strum(serialize = "/")]
    Divide,

    /// ## Exponentiation
    ///
    /// E.g. *A* to the power of *B*
    #[strum(serialize = "^")]
    Raise,

    /// ## Group open
    #[strum(serialize = "(")]
    OpenParen,

    /// ## Group close
    #[strum(serialize = ")")]
    CloseParen,
}

impl Operation {
    /// Binding power of a unary prefix operator.
    ///
    /// It is higher than every infix right binding power except that of
    /// [`Raise`][Self::Raise], so `-2*3` negates only `2` while `-2^2` is
    /// `-(2^2)`.
    pub const PREFIX_BINDING_POWER: u8 = 5;

    /// Returns the binding power of this operator in prefix (unary) position,
    /// or [`None`] if it can't be used as a prefix operator.
    pub fn prefix_binding_power(self) -> Option<u8> {
        use Operation::*;
        match self {
            Add | Subtract => Some(Self::PREFIX_BINDING_POWER),
            Multiply | Divide | Raise | OpenParen | CloseParen => None,
        }
    }

    /// Returns the `(left, right)` binding powers of this operator in infix
    /// (binary) position, or [`None`] if it is not an infix operator.
    pub fn infix_binding_power(self) -> Option<(u8, u8)> {
        use Operation::*;
        match self {
            Add | Subtract => Some((1, 2)),
            Multiply | Divide => Some((3, 4)),
            // right-associative: 2^3^2 = 2^(3^2)
            Raise => Some((7, 6)),
            OpenParen | CloseParen => None,
        }
    }

    /// Apply this operator to a single operand.
    ///
    /// Returns [`None`] for operators without a prefix form.
    pub fn apply_prefix(self, operand: f64) -> Option<f64> {
        use Operation::*;
        match self {
            Add => Some(operand),
            Subtract => Some(-operand),
            Multiply | Divide | Raise | OpenParen | CloseParen => None,
        }
    }

    /// Apply this operator to two operands.
    ///
    /// Floating-point semantics are kept as-is, so `5/0` is infinite and
    /// `(-8)^0.5` is NaN. Returns [`None`] for the parentheses.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        use Operation::*;
        match self {
            Add => Some(lhs + rhs),
            Subtract => Some(lhs - rhs),
            Multiply => Some(lhs * rhs),
            Divide => Some(lhs / rhs),
            Raise => Some(lhs.powf(rhs)),
            OpenParen | CloseParen => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn operator_names() {
        for op in Operation::iter() {
            assert_eq!(Operation::from_str(&op.to_string()), Ok(op));
        }
        assert_eq!(Operation::Raise.to_string(), "^");
        assert!(Operation::from_str("%").is_err());
    }

    #[test]
    fn prefix_powers() {
        use Operation::*;
        assert_eq!(Add.prefix_binding_power(), Some(5));
        assert_eq!(Subtract.prefix_binding_power(), Some(5));
        for op in [Multiply, Divide, Raise, OpenParen, CloseParen] {
            assert_eq!(op.prefix_binding_power(), None, "{} has no prefix form", op);
        }
    }

    #[test]
    fn infix_powers() {
        use Operation::*;
        assert_eq!(Add.infix_binding_power(), Some((1, 2)));
        assert_eq!(Subtract.infix_binding_power(), Some((1, 2)));
        assert_eq!(Multiply.infix_binding_power(), Some((3, 4)));
        assert_eq!(Divide.infix_binding_power(), Some((3, 4)));
        assert_eq!(Raise.infix_binding_power(), Some((7, 6)));
        assert_eq!(OpenParen.infix_binding_power(), None);
        assert_eq!(CloseParen.infix_binding_power(), None);
    }

    #[test]
    fn signs_bind_tighter_than_arithmetic() {
        for op in Operation::iter().filter(|&op| op != Operation::Raise) {
            if let Some((_, right)) = op.infix_binding_power() {
                assert!(right < Operation::PREFIX_BINDING_POWER, "{}", op);
            }
        }
        let (left, _) = Operation::Raise.infix_binding_power().unwrap();
        assert!(left > Operation::PREFIX_BINDING_POWER);
    }

    #[test]
    fn binary_application() {
        macro_rules! binop_cases {
            ( $( $b:literal $a:tt $c:literal = $d:expr ),+ $(,)? ) => {
                vec![ $(
                    (
                        stringify!($b $a $c),
                        Operation::from_str(stringify!($a)).unwrap(),
                        $b as f64,
                        $c as f64,
                        $d as f64,
                    ),
                )+ ]
            };
        }

        let cases = binop_cases! {
            1 + 2 = 3,
            4 - 5 = -1,
            6 * 7 = 42,
            64 / 4 = 16,
            2 ^ 10 = 1024,
            4 ^ 0.5 = 2,
            1 / 0 = f64::INFINITY,
            -1 / 0 = f64::NEG_INFINITY,
        };
        for (repr, op, lhs, rhs, expected) in cases {
            assert_eq!(op.apply(lhs, rhs), Some(expected), "{}", repr);
        }

        assert!(Operation::Raise
            .apply(-8.0, 0.5)
            .map_or(false, f64::is_nan));
        assert_eq!(Operation::OpenParen.apply(1.0, 2.0), None);
    }

    #[test]
    fn unary_application() {
        assert_eq!(Operation::Add.apply_prefix(-4.0), Some(-4.0));
        assert_eq!(Operation::Subtract.apply_prefix(-4.0), Some(4.0));
        assert_eq!(Operation::Multiply.apply_prefix(4.0), None);
    }
}
