//! Rejection reasons for number-as-string fields.

use crate::foundation::ValidationError;
use crate::number::config::DecimalSeparator;

/// Why a number-as-string value was rejected.
///
/// Exactly one reason is reported per validation call. Every reason is an
/// ordinary, expected outcome; none of them indicate a bug.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum NumberError {
    /// The value is not textual; `actual` names the JSON type received.
    #[error("must be a string")]
    NotAString { actual: &'static str },

    /// The value contains something other than an optional leading `-`,
    /// digits and a single separator followed by at least one digit.
    #[error("must be a number")]
    NotANumber,

    /// The integer part starts with `0` and has more than one digit.
    #[error("must not have leading zeros")]
    LeadingZero,

    /// A negative sign on a value that is exactly zero.
    #[error("must not be negative zero")]
    NegativeZero,

    /// A separator is present but the field allows no decimal part.
    #[error("must not have a decimal part")]
    NoDecimalsAllowed,

    /// The separator present is not the one the field requires.
    #[error("must use '{expected}' as decimal separator, found '{found}'")]
    WrongSeparator {
        expected: DecimalSeparator,
        found: DecimalSeparator,
    },

    /// More fractional digits than allowed.
    #[error("must have at most {max} decimals")]
    MaxDecimalsExceeded { max: u32, actual: usize },

    /// Fewer fractional digits than required.
    #[error("must have at least {min} decimals")]
    MinDecimalsNotMet { min: u32, actual: usize },

    /// `min(limit)` failed.
    #[error("must be greater than or equal to {limit}")]
    BelowMin { limit: f64 },

    /// `max(limit)` failed.
    #[error("must be less than or equal to {limit}")]
    AboveMax { limit: f64 },

    /// `greater(limit)` failed.
    #[error("must be greater than {limit}")]
    NotGreater { limit: f64 },

    /// `less(limit)` failed.
    #[error("must be less than {limit}")]
    NotLess { limit: f64 },

    /// A range limit refers to a sibling field that is missing or not numeric.
    #[error("limit reference '{reference}' does not resolve to a number")]
    UnresolvedLimit { reference: String },
}

impl NumberError {
    /// Stable error code for the host's message-formatting layer.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotAString { .. } => "not_a_string",
            Self::NotANumber => "not_a_number",
            Self::LeadingZero => "leading_zero",
            Self::NegativeZero => "negative_zero",
            Self::NoDecimalsAllowed => "no_decimals_allowed",
            Self::WrongSeparator { .. } => "wrong_separator",
            Self::MaxDecimalsExceeded { .. } => "max_decimals_exceeded",
            Self::MinDecimalsNotMet { .. } => "min_decimals_not_met",
            Self::BelowMin { .. } => "below_min",
            Self::AboveMax { .. } => "above_max",
            Self::NotGreater { .. } => "not_greater",
            Self::NotLess { .. } => "not_less",
            Self::UnresolvedLimit { .. } => "unresolved_limit",
        }
    }
}

impl From<NumberError> for ValidationError {
    fn from(error: NumberError) -> Self {
        let base = ValidationError::new(error.code(), error.to_string());
        match error {
            NumberError::NotAString { actual } => base
                .with_param("expected", "string")
                .with_param("actual", actual),
            NumberError::WrongSeparator { expected, found } => base
                .with_param("expected", expected.to_string())
                .with_param("found", found.to_string()),
            NumberError::MaxDecimalsExceeded { max, actual } => base
                .with_param("max", max.to_string())
                .with_param("actual", actual.to_string()),
            NumberError::MinDecimalsNotMet { min, actual } => base
                .with_param("min", min.to_string())
                .with_param("actual", actual.to_string()),
            NumberError::BelowMin { limit }
            | NumberError::AboveMax { limit }
            | NumberError::NotGreater { limit }
            | NumberError::NotLess { limit } => base.with_param("limit", limit.to_string()),
            NumberError::UnresolvedLimit { reference } => base.with_param("ref", reference),
            _ => base,
        }
    }
}

/// Schema-construction mistakes. These are raised while a schema is being
/// built, never while a value is being validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A separator glyph other than `.` or `,`.
    #[error("unsupported decimal separator '{0}', expected '.' or ','")]
    UnsupportedSeparator(char),
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_wrong_separator_renders_both_glyphs() {
        let error: ValidationError = NumberError::WrongSeparator {
            expected: DecimalSeparator::Point,
            found: DecimalSeparator::Comma,
        }
        .into();

        assert_snapshot!(
            error.to_string(),
            @"must use '.' as decimal separator, found ',' [wrong_separator; expected=., found=,]"
        );
    }

    #[test]
    fn test_range_reason_carries_limit() {
        let error: ValidationError = NumberError::BelowMin { limit: 10.2 }.into();
        assert_eq!(error.code, "below_min");
        assert_eq!(error.param("limit"), Some("10.2"));
        assert_snapshot!(error.message, @"must be greater than or equal to 10.2");
    }

    #[test]
    fn test_not_a_string_names_both_types() {
        let error: ValidationError = NumberError::NotAString { actual: "array" }.into();
        assert_snapshot!(error.to_string(), @"must be a string [not_a_string; expected=string, actual=array]");
    }

    #[test]
    fn test_decimal_count_params() {
        let error: ValidationError = NumberError::MaxDecimalsExceeded { max: 2, actual: 3 }.into();
        assert_eq!(error.param("max"), Some("2"));
        assert_eq!(error.param("actual"), Some("3"));
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            ConfigError::UnsupportedSeparator(';').to_string(),
            "unsupported decimal separator ';', expected '.' or ','"
        );
    }
}
