/*

lexer.rs - Scalc input lexer
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

# Expression lexer

Transforms expression strings into [`Token`] streams.

## Examples

```
use scalc::{
    lexer::{Lexer, Token, TokenKind::*},
    operation::Operation::*,
};

let mut lexer = Lexer::new("1 + 2.5e1");
assert_eq!(lexer.next(), Some(Ok(Token::new(Number(1.0), 0))));
assert_eq!(lexer.next(), Some(Ok(Token::new(Operator(Add), 2))));
assert_eq!(lexer.next(), Some(Ok(Token::new(Number(25.0), 4))));
assert_eq!(lexer.next(), None);
```

*/

use std::{
    iter::Peekable,
    str::{CharIndices, FromStr},
};

use log::trace;
use strum_macros::Display;

use crate::{error::SyntaxError, operation::Operation};

/// # Token kind
///
/// What a [`Token`] represents.
#[derive(Copy, Clone, Display, Debug, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum TokenKind {
    /// ## Number token
    ///
    /// Represents a number literal, like `123` or `8.2e-1`.
    Number(f64),

    /// ## Operator token
    ///
    /// Represents an operator or parenthesis, like `+` or `(`.
    Operator(Operation),

    /// ## End of input
    ///
    /// Always the last token of a tokenized line.
    #[strum(serialize = "end of input")]
    End,
}

/// # Expression syntax token
///
/// A [`TokenKind`] and the column at which the token starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Column of the token's first character, counted in characters.
    pub column: usize,
}

impl Token {
    /// Create a new [`Token`].
    pub fn new(kind: TokenKind, column: usize) -> Self {
        Self { kind, column }
    }
}

/// # Expression lexer
///
/// Processes input strings into [`Token`] streams.
///
/// This struct implements [`Iterator<Item = Result<Token, SyntaxError>>`][2],
/// so it can be used like any other iterator. The iterator does not yield the
/// [`End`][TokenKind::End] token; use [`tokenize()`] to get a complete token
/// sequence.
///
/// See [module-level documentation][1] for an example usage.
///
/// [1]: crate::lexer
/// [2]: Iterator
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new [`Lexer`] for an expression string.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            column: 0,
        }
    }

    /// Column of the next unread character.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Consume the next character.
    fn bump(&mut self) {
        if self.chars.next().is_some() {
            self.column += 1;
        }
    }

    fn lex_number(&mut self, offset: usize) -> Result<Token, SyntaxError> {
        let column = self.column;
        let src = self.src;
        let rest = &src[offset..];
        let len = float_prefix_len(rest);
        let bad_char = || SyntaxError::BadChar {
            character: rest.chars().next().unwrap_or('.'),
            column,
        };
        if len == 0 {
            return Err(bad_char());
        }
        let value = f64::from_str(&rest[..len]).map_err(|_| bad_char())?;
        // literals are ASCII, so one byte per character
        for _ in 0..len {
            self.bump();
        }
        Ok(Token::new(TokenKind::Number(value), column))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.next_if(|&(_, c)| c == ' ').is_some() {
            self.column += 1;
        }

        let &(offset, c) = self.chars.peek()?;
        let result = if c.is_ascii_digit() || c == '.' {
            self.lex_number(offset)
        } else if let Ok(op) = Operation::from_str(&c.to_string()) {
            let token = Token::new(TokenKind::Operator(op), self.column);
            self.bump();
            Ok(token)
        } else {
            Err(SyntaxError::BadChar {
                character: c,
                column: self.column,
            })
        };

        match &result {
            Ok(token) => trace!("token {:?} at column {}", token.kind, token.column),
            Err(err) => {
                trace!("lexer stopped: {}", err);
                // Don't yield anything after an error
                while self.chars.next().is_some() {}
            }
        }
        Some(result)
    }
}

/// Tokenize `src`, appending its tokens to `tokens`.
///
/// On success, the last token appended is [`End`][TokenKind::End], whose
/// column is the length of `src` in characters. On failure, `tokens` may hold
/// the tokens read before the error.
pub fn tokenize(src: &str, tokens: &mut Vec<Token>) -> Result<(), SyntaxError> {
    let mut lexer = Lexer::new(src);
    for token in lexer.by_ref() {
        tokens.push(token?);
    }
    tokens.push(Token::new(TokenKind::End, lexer.column()));
    Ok(())
}

/// Returns the length in bytes of the longest decimal floating-point literal
/// at the start of `src`, or 0 if there is none.
///
/// Accepts `digits [. digits] [(e|E) [+|-] digits]` where at least one
/// mantissa digit is present. An exponent marker is only part of the literal
/// if digits follow it.
fn float_prefix_len(src: &str) -> usize {
    let bytes = src.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut len = digits(0);
    let mut mantissa_digits = len;
    if bytes.get(len) == Some(&b'.') {
        let fraction = digits(len + 1);
        mantissa_digits += fraction;
        len += 1 + fraction;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if let Some(b'e' | b'E') = bytes.get(len) {
        let mut exp = len + 1;
        if let Some(b'+' | b'-') = bytes.get(exp) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            len = exp + exp_digits;
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Tests the [Lexer]'s ability to tokenize input strings
    #[test]
    fn tokenize_lines() {
        macro_rules! toks {
            ( o $b:literal @ $c:literal ) => {
                Token::new(
                    TokenKind::Operator(Operation::from_str($b).unwrap()),
                    $c,
                )
            };
            ( n $b:literal @ $c:literal ) => {
                Token::new(TokenKind::Number($b as f64), $c)
            };
            ( e @ $c:literal ) => {
                Token::new(TokenKind::End, $c)
            };
            ( $( $a:ident $( $b:literal )? @ $c:literal ),+ $(,)? ) => {
                vec![ $( toks!($a $( $b )? @ $c), )+ ]
            }
        }
        let cases: Vec<(&'static str, Vec<Token>)> = vec![
            ("", toks!(e @ 0,)),
            ("   ", toks!(e @ 3,)),
            ("1 2 3", toks!(n 1 @ 0, n 2 @ 2, n 3 @ 4, e @ 5)),
            (
                "1 + 2 * 3",
                toks!(n 1 @ 0, o "+" @ 2, n 2 @ 4, o "*" @ 6, n 3 @ 8, e @ 9),
            ),
            (
                "(1+2)^3",
                toks!(o "(" @ 0, n 1 @ 1, o "+" @ 2, n 2 @ 3, o ")" @ 4, o "^" @ 5, n 3 @ 6, e @ 7),
            ),
            ("  12.5/.5", toks!(n 12.5 @ 2, o "/" @ 6, n 0.5 @ 7, e @ 9)),
            ("1.", toks!(n 1 @ 0, e @ 2)),
            ("1.2.3", toks!(n 1.2 @ 0, n 0.3 @ 3, e @ 5)),
            ("2e3", toks!(n 2000 @ 0, e @ 3)),
            ("2.5E-1", toks!(n 0.25 @ 0, e @ 6)),
            ("1e+2-1", toks!(n 100 @ 0, o "-" @ 4, n 1 @ 5, e @ 6)),
            ("-3", toks!(o "-" @ 0, n 3 @ 1, e @ 2)),
        ];
        for (src, expected) in cases {
            let mut tokens = Vec::new();
            tokenize(src, &mut tokens).unwrap();
            assert_eq!(tokens, expected, "tokenizing {:?}", src);
        }
    }

    #[test]
    fn bad_characters() {
        let cases = [
            ("2+@3", '@', 2),
            ("x", 'x', 0),
            ("1\t2", '\t', 1),
            ("é+1", 'é', 0),
            ("1+é", 'é', 2),
            ("2e", 'e', 1),
            ("2e+", 'e', 1),
            (".", '.', 0),
            ("1 + .e5", '.', 4),
        ];
        for (src, character, column) in cases {
            let mut tokens = Vec::new();
            assert_eq!(
                tokenize(src, &mut tokens),
                Err(SyntaxError::BadChar { character, column }),
                "tokenizing {:?}",
                src
            );
        }
    }

    #[test]
    fn stops_after_error() {
        let results: Vec<_> = Lexer::new("1 ? 2").collect();
        assert_eq!(
            results,
            vec![
                Ok(Token::new(TokenKind::Number(1.0), 0)),
                Err(SyntaxError::BadChar {
                    character: '?',
                    column: 2
                }),
            ]
        );
    }

    #[test]
    fn appends_to_buffer() {
        let mut tokens = vec![Token::new(TokenKind::Number(7.0), 0)];
        tokenize("8", &mut tokens).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::new(TokenKind::Number(8.0), 0));
        assert_eq!(tokens[2].kind, TokenKind::End);
    }

    #[test]
    fn float_prefixes() {
        let cases = [
            ("123", 3),
            ("1.5x", 3),
            (".25", 3),
            ("1e10", 4),
            ("1e", 1),
            ("1e-", 1),
            ("1E-7)", 4),
            ("..", 0),
            ("", 0),
        ];
        for (src, len) in cases {
            assert_eq!(float_prefix_len(src), len, "prefix of {:?}", src);
        }
    }

    #[test]
    fn token_kind_names() {
        assert_eq!(TokenKind::Number(1.0).to_string(), "number");
        assert_eq!(TokenKind::Operator(Operation::Add).to_string(), "operator");
        assert_eq!(TokenKind::End.to_string(), "end of input");
    }
}
