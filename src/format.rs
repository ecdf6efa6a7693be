/*

format.rs - Formatting for printing values in Scalc
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

//! Formatting of results
//!
//! Results are printed in the "general" style of C's `%g`: `precision`
//! significant digits, in fixed or scientific notation depending on the
//! magnitude, with trailing zeros removed.

/// Values which can be printed with a number of significant digits.
pub trait Formatter {
    /// Format `self` with `precision` significant digits, like `%.<precision>g`.
    fn format(&self, precision: usize) -> String;
}

impl Formatter for f64 {
    fn format(&self, precision: usize) -> String {
        let value = *self;
        if value.is_nan() {
            return "nan".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
        }
        if value == 0.0 {
            return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
        }

        let precision = precision.max(1);
        // Round to the requested significant digits first, since rounding can
        // change the exponent (e.g. 999999.7 -> 1e+06).
        let sci = format!("{:.*e}", precision - 1, value);
        let (mantissa, exponent) = match sci.split_once('e') {
            Some(parts) => parts,
            None => return sci,
        };
        let exponent: i32 = match exponent.parse() {
            Ok(exp) => exp,
            Err(_) => return sci,
        };

        if exponent < -4 || exponent >= precision as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!(
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (precision as i32 - 1 - exponent) as usize;
            trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
        }
    }
}

/// Remove trailing zeros after a decimal point, and the point itself if
/// nothing follows it.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
