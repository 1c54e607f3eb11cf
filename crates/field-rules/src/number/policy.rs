//! Format policy: decides whether a scanned value satisfies a field's
//! configuration, and which single reason applies when it does not.
//!
//! Several conditions can hold at once (`"-00,5"` against a `.` field has a
//! wrong separator, a leading zero and a negative sign). The checks run in a
//! fixed order and the first failure wins:
//!
//! 1. separator present with no fractional digits → `NotANumber`
//! 2. separator present but none configured → `NoDecimalsAllowed`;
//!    separator differs from the configured one → `WrongSeparator`
//! 3. leading zero → `LeadingZero`
//! 4. negative sign on an all-zero value → `NegativeZero`
//! 5. too many fractional digits → `MaxDecimalsExceeded`
//! 6. too few fractional digits → `MinDecimalsNotMet`
//! 7. value overflows `f64` → `NotANumber`

use crate::number::coerce::coerce;
use crate::number::config::ValidatorConfig;
use crate::number::error::NumberError;
use crate::number::scan::{Scan, Sign};

/// Evaluates a scan against a configuration.
pub fn evaluate(scan: &Scan<'_>, config: &ValidatorConfig) -> Result<(), NumberError> {
    if let Some(found) = scan.separator {
        // The scanner already rejects this; kept so the policy holds on its own.
        if scan.fractional_part.is_empty() {
            return Err(NumberError::NotANumber);
        }
        match config.decimal_separator {
            None => return Err(NumberError::NoDecimalsAllowed),
            Some(expected) if expected != found => {
                return Err(NumberError::WrongSeparator { expected, found });
            }
            Some(_) => {}
        }
    }

    if scan.wrong_leading_zero {
        return Err(NumberError::LeadingZero);
    }

    if scan.sign == Sign::Negative && scan.is_zero() {
        return Err(NumberError::NegativeZero);
    }

    let decimals = scan.decimals();
    if decimals > config.max_decimals as usize {
        return Err(NumberError::MaxDecimalsExceeded {
            max: config.max_decimals,
            actual: decimals,
        });
    }
    if decimals < config.min_decimals as usize {
        return Err(NumberError::MinDecimalsNotMet {
            min: config.min_decimals,
            actual: decimals,
        });
    }

    coerce(scan.raw, config).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::config::DecimalSeparator;
    use crate::number::scan::scan;
    use rstest::rstest;

    fn config(separator: Option<char>, min: u32, max: u32) -> ValidatorConfig {
        ValidatorConfig {
            decimal_separator: separator.map(|c| DecimalSeparator::try_from(c).unwrap()),
            min_decimals: min,
            max_decimals: max,
        }
    }

    fn run(input: &str, config: &ValidatorConfig) -> Result<(), NumberError> {
        evaluate(&scan(input)?, config)
    }

    #[test]
    fn test_structurally_unreachable_empty_fraction_still_rejected() {
        let crafted = Scan {
            raw: "1.",
            sign: Sign::Positive,
            integer_part: "1",
            separator: Some(DecimalSeparator::Point),
            fractional_part: "",
            wrong_leading_zero: false,
        };
        assert_eq!(
            evaluate(&crafted, &config(Some('.'), 0, 2)),
            Err(NumberError::NotANumber)
        );
    }

    #[rstest]
    #[case("4.2")]
    #[case("4,2")]
    #[case("-0.0")]
    #[case("00.1")]
    fn test_no_separator_configured(#[case] input: &str) {
        assert_eq!(run(input, &config(None, 0, 0)), Err(NumberError::NoDecimalsAllowed));
    }

    #[test]
    fn test_wrong_separator_wins_over_leading_zero() {
        assert_eq!(
            run("-00,5", &config(Some('.'), 0, 2)),
            Err(NumberError::WrongSeparator {
                expected: DecimalSeparator::Point,
                found: DecimalSeparator::Comma,
            })
        );
    }

    #[test]
    fn test_leading_zero_wins_over_negative_zero() {
        assert_eq!(run("-00", &config(None, 0, 0)), Err(NumberError::LeadingZero));
    }

    #[test]
    fn test_negative_zero_wins_over_decimal_counts() {
        assert_eq!(
            run("-0.000", &config(Some('.'), 0, 1)),
            Err(NumberError::NegativeZero)
        );
    }

    #[test]
    fn test_max_decimals_before_min_decimals() {
        // min > max rejects everything; the upper bound is reported first.
        let inverted = config(Some('.'), 3, 1);
        assert_eq!(
            run("1.25", &inverted),
            Err(NumberError::MaxDecimalsExceeded { max: 1, actual: 2 })
        );
        assert_eq!(
            run("1.2", &inverted),
            Err(NumberError::MinDecimalsNotMet { min: 3, actual: 1 })
        );
    }

    #[test]
    fn test_integer_meets_zero_min_decimals() {
        assert_eq!(run("12", &config(Some(','), 0, 2)), Ok(()));
        assert_eq!(
            run("12", &config(Some(','), 2, 2)),
            Err(NumberError::MinDecimalsNotMet { min: 2, actual: 0 })
        );
    }

    #[test]
    fn test_overflow_rejected_last() {
        let huge = "9".repeat(400);
        assert_eq!(run(&huge, &config(None, 0, 0)), Err(NumberError::NotANumber));
    }
}
