//! Number-as-string fields.
//!
//! A number-as-string field holds a decimal number written as text
//! (`"1250,00"`, `"-3.5"`, `"42"`). Validation never converts the value: an
//! accepted string is handed back unchanged (or trimmed, in convert mode).
//! Numeric comparisons parse it on the side.
//!
//! One call runs these phases in order, stopping at the first failure:
//!
//! 1. [`scan`](scan::scan) splits the text into sign, integer digits,
//!    separator and fractional digits
//! 2. [`evaluate`](policy::evaluate) checks the scan against the field's
//!    [`ValidatorConfig`]
//! 3. each [`RangeRule`], in the order it was added, re-coerces the value
//!    and compares it with its limit
//!
//! # Examples
//!
//! ```
//! use field_rules::number::{number_as_string, DecimalSeparator, NumberError};
//! use field_rules::foundation::FieldContext;
//!
//! let amount = number_as_string()
//!     .decimal(DecimalSeparator::Comma, 2)
//!     .min(0)
//!     .less(1_000_000);
//!
//! let ctx = FieldContext::default();
//! assert_eq!(amount.check(" 1250,00 ", &ctx), Ok("1250,00"));
//! assert_eq!(amount.check("1250", &ctx), Err(NumberError::MinDecimalsNotMet { min: 2, actual: 0 }));
//! assert_eq!(amount.check("-0,00", &ctx), Err(NumberError::NegativeZero));
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod policy;
pub mod range;
pub mod scan;

pub use config::{DecimalSeparator, ValidatorConfig};
pub use error::{ConfigError, NumberError};
pub use range::{Limit, RangeKind, RangeRule};

use serde::Deserialize;
use serde_json::Value;

use crate::foundation::validatable::json_type_name;
use crate::foundation::{FieldContext, Validate, ValidationError};

/// A number-as-string field: format configuration plus range rules.
///
/// Builder methods consume and return the node, so a finished node is
/// frozen and can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "NumberAsStringSpec")]
pub struct NumberAsString {
    config: ValidatorConfig,
    rules: Vec<RangeRule>,
}

impl NumberAsString {
    /// A field that accepts integers only, with no range rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `separator` as the decimal separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn decimal_separator(mut self, separator: DecimalSeparator) -> Self {
        self.config.decimal_separator = Some(separator);
        self
    }

    /// Like [`decimal_separator`](Self::decimal_separator), for a glyph
    /// supplied at runtime. Anything but `.` or `,` is a schema error.
    pub fn try_decimal_separator(self, separator: char) -> Result<Self, ConfigError> {
        Ok(self.decimal_separator(DecimalSeparator::try_from(separator)?))
    }

    /// Minimum number of fractional digits.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_decimals(mut self, digits: u32) -> Self {
        self.config.min_decimals = digits;
        self
    }

    /// Maximum number of fractional digits.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_decimals(mut self, digits: u32) -> Self {
        self.config.max_decimals = digits;
        self
    }

    /// Requires `separator` and exactly `digits` fractional digits.
    ///
    /// Same as `decimal_separator(separator).min_decimals(digits).max_decimals(digits)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn decimal(self, separator: DecimalSeparator, digits: u32) -> Self {
        self.decimal_separator(separator)
            .min_decimals(digits)
            .max_decimals(digits)
    }

    /// Value must be `>= limit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, limit: impl Into<Limit>) -> Self {
        self.range(RangeKind::Min, limit)
    }

    /// Value must be `<= limit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, limit: impl Into<Limit>) -> Self {
        self.range(RangeKind::Max, limit)
    }

    /// Value must be `> limit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater(self, limit: impl Into<Limit>) -> Self {
        self.range(RangeKind::Greater, limit)
    }

    /// Value must be `< limit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less(self, limit: impl Into<Limit>) -> Self {
        self.range(RangeKind::Less, limit)
    }

    fn range(mut self, kind: RangeKind, limit: impl Into<Limit>) -> Self {
        self.rules.push(RangeRule::new(kind, limit));
        self
    }

    /// The frozen format configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Range rules in the order they were added.
    #[must_use]
    pub fn range_rules(&self) -> &[RangeRule] {
        &self.rules
    }

    /// Validates a textual candidate and returns the accepted value.
    ///
    /// In convert mode the result is the trimmed slice of `input`; otherwise
    /// it is `input` itself.
    pub fn check<'a>(&self, input: &'a str, ctx: &FieldContext<'_>) -> Result<&'a str, NumberError> {
        let candidate = if ctx.options.convert {
            input.trim()
        } else {
            input
        };

        let outcome = scan::scan(candidate)
            .and_then(|scan| policy::evaluate(&scan, &self.config))
            .and_then(|()| {
                self.rules
                    .iter()
                    .try_for_each(|rule| rule.check(candidate, &self.config, ctx))
            });

        match outcome {
            Ok(()) => Ok(candidate),
            Err(error) => {
                tracing::trace!(
                    code = error.code(),
                    len = candidate.len(),
                    convert = ctx.options.convert,
                    "number-as-string rejected"
                );
                Err(error)
            }
        }
    }

    /// Validates an arbitrary JSON value; anything but a string is
    /// [`NumberError::NotAString`].
    pub fn check_value<'a>(
        &self,
        value: &'a Value,
        ctx: &FieldContext<'_>,
    ) -> Result<&'a str, NumberError> {
        match value {
            Value::String(s) => self.check(s, ctx),
            other => Err(NumberError::NotAString {
                actual: json_type_name(other),
            }),
        }
    }
}

impl Validate for NumberAsString {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.check(input, &FieldContext::default())
            .map(|_| ())
            .map_err(ValidationError::from)
    }
}

/// Creates a number-as-string field with the default configuration.
#[must_use]
pub fn number_as_string() -> NumberAsString {
    NumberAsString::new()
}

/// Declarative form used when a schema is loaded from JSON:
/// `{"decimal_separator": ",", "max_decimals": 2, "min": 0, "less": {"ref": "cap"}}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NumberAsStringSpec {
    decimal_separator: Option<DecimalSeparator>,
    min_decimals: u32,
    max_decimals: u32,
    min: Option<Limit>,
    max: Option<Limit>,
    greater: Option<Limit>,
    less: Option<Limit>,
}

impl From<NumberAsStringSpec> for NumberAsString {
    fn from(spec: NumberAsStringSpec) -> Self {
        let rules = [
            (RangeKind::Min, spec.min),
            (RangeKind::Max, spec.max),
            (RangeKind::Greater, spec.greater),
            (RangeKind::Less, spec.less),
        ]
        .into_iter()
        .filter_map(|(kind, limit)| limit.map(|limit| RangeRule::new(kind, limit)))
        .collect();

        Self {
            config: ValidatorConfig {
                decimal_separator: spec.decimal_separator,
                min_decimals: spec.min_decimals,
                max_decimals: spec.max_decimals,
            },
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationOptions;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn ctx() -> FieldContext<'static> {
        FieldContext::default()
    }

    #[rstest]
    #[case("0")]
    #[case("0.0")]
    #[case(".0")]
    #[case("1.2")]
    #[case("-1.2")]
    fn test_point_separator_accepts(#[case] input: &str) {
        let field = number_as_string().decimal_separator(DecimalSeparator::Point).max_decimals(2);
        assert_eq!(field.check(input, &ctx()), Ok(input));
    }

    #[rstest]
    #[case("4,2", "wrong_separator")]
    #[case("0.", "not_a_number")]
    #[case(".", "not_a_number")]
    #[case("00.01", "leading_zero")]
    #[case("-0", "negative_zero")]
    #[case("-0.0", "negative_zero")]
    #[case("-.0", "negative_zero")]
    #[case("-.00", "negative_zero")]
    fn test_point_separator_rejects(#[case] input: &str, #[case] code: &str) {
        let field = number_as_string().decimal_separator(DecimalSeparator::Point).max_decimals(2);
        assert_eq!(field.check(input, &ctx()).unwrap_err().code(), code);
    }

    #[test]
    fn test_no_separator_configured() {
        let field = number_as_string();
        assert_eq!(field.check("42", &ctx()), Ok("42"));
        assert_eq!(field.check("4.2", &ctx()), Err(NumberError::NoDecimalsAllowed));
        assert_eq!(field.check("4,2", &ctx()), Err(NumberError::NoDecimalsAllowed));
    }

    #[test]
    fn test_decimal_sugar_matches_three_calls() {
        let sugar = number_as_string().decimal(DecimalSeparator::Comma, 2);
        let spelled = number_as_string()
            .decimal_separator(DecimalSeparator::Comma)
            .min_decimals(2)
            .max_decimals(2);
        assert_eq!(sugar, spelled);
    }

    #[test]
    fn test_last_setter_wins() {
        let field = number_as_string()
            .decimal_separator(DecimalSeparator::Point)
            .max_decimals(5)
            .decimal_separator(DecimalSeparator::Comma)
            .max_decimals(1);
        assert_eq!(
            *field.config(),
            ValidatorConfig {
                decimal_separator: Some(DecimalSeparator::Comma),
                min_decimals: 0,
                max_decimals: 1,
            }
        );
    }

    #[test]
    fn test_try_decimal_separator_rejects_other_glyphs() {
        assert_eq!(
            number_as_string().try_decimal_separator('\''),
            Err(ConfigError::UnsupportedSeparator('\''))
        );
        assert!(number_as_string().try_decimal_separator(',').is_ok());
    }

    #[test]
    fn test_range_rules_run_after_format() {
        let field = number_as_string().min(10);
        // Format failures win over range failures.
        assert_eq!(field.check("05", &ctx()), Err(NumberError::LeadingZero));
        assert_eq!(field.check("5", &ctx()), Err(NumberError::BelowMin { limit: 10.0 }));
    }

    #[test]
    fn test_range_rules_in_insertion_order() {
        let field = number_as_string().max(5).min(10);
        assert_eq!(field.check("7", &ctx()), Err(NumberError::AboveMax { limit: 5.0 }));
        assert_eq!(field.range_rules().len(), 2);
        assert_eq!(field.range_rules()[1].kind, RangeKind::Min);
    }

    #[test]
    fn test_convert_trims_and_returns_trimmed() {
        let field = number_as_string();
        assert_eq!(field.check("\t 42\r\n", &ctx()), Ok("42"));
    }

    #[test]
    fn test_without_convert_whitespace_is_not_a_number() {
        let field = number_as_string();
        let strict = FieldContext::new(ValidationOptions::strict());
        assert_eq!(field.check("\t 42\r\n", &strict), Err(NumberError::NotANumber));
    }

    #[test]
    fn test_check_value_requires_string() {
        let field = number_as_string();
        assert_eq!(
            field.check_value(&json!(42), &ctx()),
            Err(NumberError::NotAString { actual: "number" })
        );
        assert_eq!(field.check_value(&json!("42"), &ctx()), Ok("42"));
    }

    #[test]
    fn test_validate_converts_to_validation_error() {
        let field = number_as_string().decimal(DecimalSeparator::Point, 2);
        let err = field.validate("1.5").unwrap_err();
        assert_eq!(err.code, "min_decimals_not_met");
        assert_eq!(err.param("min"), Some("2"));
    }

    #[test]
    fn test_shared_between_threads() {
        let field = number_as_string().decimal(DecimalSeparator::Comma, 2).max(100);
        std::thread::scope(|scope| {
            for input in ["1,00", "99,99", "100,01", "-0,00"] {
                let field = &field;
                scope.spawn(move || {
                    let first = field.check(input, &FieldContext::default());
                    assert_eq!(first, field.check(input, &FieldContext::default()));
                });
            }
        });
    }

    #[test]
    fn test_deserialize_spec() {
        let field: NumberAsString = serde_json::from_value(json!({
            "decimal_separator": ",",
            "max_decimals": 2,
            "min": 0,
            "less": { "ref": "cap" }
        }))
        .unwrap();

        let expected = number_as_string()
            .decimal_separator(DecimalSeparator::Comma)
            .max_decimals(2)
            .min(0)
            .less(Limit::reference("cap"));
        assert_eq!(field, expected);
    }
}
