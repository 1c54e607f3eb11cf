//! Numeric coercion of accepted values.
//!
//! Coercion is only ever used to compare; the value handed back to the
//! host is always the original string.

use std::borrow::Cow;

use crate::number::config::{DecimalSeparator, ValidatorConfig};
use crate::number::error::NumberError;

/// Parses an accepted value as `f64`, reading the configured separator as
/// the decimal point.
///
/// Non-finite results (a few hundred integer digits overflow `f64`) are
/// reported as [`NumberError::NotANumber`].
///
/// ```
/// use field_rules::number::coerce::coerce;
/// use field_rules::number::{DecimalSeparator, ValidatorConfig};
///
/// let config = ValidatorConfig {
///     decimal_separator: Some(DecimalSeparator::Comma),
///     ..ValidatorConfig::default()
/// };
/// assert_eq!(coerce("10,20", &config), Ok(10.2));
/// ```
pub fn coerce(accepted: &str, config: &ValidatorConfig) -> Result<f64, NumberError> {
    let normalized = match config.decimal_separator {
        Some(DecimalSeparator::Comma) => Cow::Owned(accepted.replace(',', ".")),
        Some(DecimalSeparator::Point) | None => Cow::Borrowed(accepted),
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(NumberError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(separator: Option<DecimalSeparator>) -> ValidatorConfig {
        ValidatorConfig {
            decimal_separator: separator,
            ..ValidatorConfig::default()
        }
    }

    #[test]
    fn test_integer_without_separator() {
        assert_eq!(coerce("42", &with(None)), Ok(42.0));
        assert_eq!(coerce("-7", &with(None)), Ok(-7.0));
    }

    #[test]
    fn test_point_and_comma() {
        assert_eq!(coerce("1.5", &with(Some(DecimalSeparator::Point))), Ok(1.5));
        assert_eq!(coerce("1,5", &with(Some(DecimalSeparator::Comma))), Ok(1.5));
    }

    #[test]
    fn test_bare_fraction() {
        assert_eq!(coerce(".5", &with(Some(DecimalSeparator::Point))), Ok(0.5));
        assert_eq!(coerce("-,25", &with(Some(DecimalSeparator::Comma))), Ok(-0.25));
    }

    #[test]
    fn test_negative_zero_compares_equal_to_zero() {
        assert_eq!(coerce("-0", &with(None)), Ok(0.0));
    }

    #[test]
    fn test_overflow_is_not_a_number() {
        let huge = "9".repeat(400);
        assert_eq!(coerce(&huge, &with(None)), Err(NumberError::NotANumber));
    }
}
