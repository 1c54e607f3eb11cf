//! Lexical scanner for number-as-string values.
//!
//! The scanner walks the candidate once, left to right, through the states
//! `Sign → IntegerDigits → FractionalDigits`. Both separator glyphs are
//! recognised regardless of configuration; deciding whether the separator
//! found is acceptable is the policy evaluator's job.

use crate::number::config::DecimalSeparator;
use crate::number::error::NumberError;

/// Sign of a scanned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// Structure of a lexically valid candidate.
///
/// `integer_part` and `fractional_part` borrow from the input and hold only
/// ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan<'a> {
    /// The scanned input, unchanged.
    pub raw: &'a str,
    pub sign: Sign,
    /// Digits before the separator. Empty only when a separator follows the
    /// sign directly (`".5"`, `"-.5"`).
    pub integer_part: &'a str,
    /// The separator glyph found, if any.
    pub separator: Option<DecimalSeparator>,
    /// Digits after the separator; its length is the decimal count.
    pub fractional_part: &'a str,
    /// `0` followed by another digit at the start of the integer part.
    pub wrong_leading_zero: bool,
}

impl Scan<'_> {
    /// Whether a separator was present.
    #[must_use]
    pub const fn has_separator(&self) -> bool {
        self.separator.is_some()
    }

    /// Number of fractional digits.
    #[must_use]
    pub const fn decimals(&self) -> usize {
        self.fractional_part.len()
    }

    /// Whether every digit is `0`, i.e. the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.integer_part
            .bytes()
            .chain(self.fractional_part.bytes())
            .all(|b| b == b'0')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Sign,
    IntegerDigits,
    FractionalDigits,
}

/// Scans `raw` into its sign, integer part, separator and fractional part.
///
/// Fails with [`NumberError::NotANumber`] on an empty or sign-only string,
/// on any character that is not a digit, a leading `-` or a separator, on a
/// second separator, and on a separator with no digits after it.
///
/// ```
/// use field_rules::number::scan::{scan, Sign};
///
/// let scan = scan("-0012,50").unwrap();
/// assert_eq!(scan.sign, Sign::Negative);
/// assert_eq!(scan.integer_part, "0012");
/// assert_eq!(scan.fractional_part, "50");
/// assert!(scan.wrong_leading_zero);
///
/// assert!(field_rules::number::scan::scan("12.").is_err());
/// ```
pub fn scan(raw: &str) -> Result<Scan<'_>, NumberError> {
    let mut state = State::Sign;
    let mut sign = Sign::Positive;
    let mut integer_start = 0;
    let mut integer_end = raw.len();
    let mut separator = None;
    let mut fraction_start = raw.len();

    for (index, c) in raw.char_indices() {
        state = match state {
            State::Sign if c == '-' => {
                sign = Sign::Negative;
                integer_start = index + c.len_utf8();
                State::IntegerDigits
            }
            State::Sign | State::IntegerDigits => {
                if c.is_ascii_digit() {
                    State::IntegerDigits
                } else {
                    let found = DecimalSeparator::from_glyph(c).ok_or(NumberError::NotANumber)?;
                    separator = Some(found);
                    integer_end = index;
                    fraction_start = index + c.len_utf8();
                    State::FractionalDigits
                }
            }
            State::FractionalDigits => {
                if !c.is_ascii_digit() {
                    return Err(NumberError::NotANumber);
                }
                State::FractionalDigits
            }
        };
    }

    let integer_part = &raw[integer_start..integer_end];
    let fractional_part = &raw[fraction_start..];

    // Covers "", "-", "." and "12,".
    if separator.is_none() && integer_part.is_empty() {
        return Err(NumberError::NotANumber);
    }
    if separator.is_some() && fractional_part.is_empty() {
        return Err(NumberError::NotANumber);
    }

    Ok(Scan {
        raw,
        sign,
        integer_part,
        separator,
        fractional_part,
        wrong_leading_zero: integer_part.len() > 1 && integer_part.starts_with('0'),
    })
}
