//! Conjunction of two rules over the same input.

use crate::foundation::{Validate, ValidationError};

/// Runs `L`, then `R`; the first rejection is returned as is.
///
/// Short-circuiting keeps the one-reason-per-value contract: a conjunction
/// never reports two errors for the same field.
///
/// ```
/// use field_rules::combinators::And;
/// use field_rules::foundation::Validate;
/// use field_rules::rules::{digits, one_of};
///
/// let ledger = And(digits(), one_of(["4000", "4010"]));
/// assert!(ledger.validate("4010").is_ok());
/// assert_eq!(ledger.validate("40a0").unwrap_err().code, "invalid_format");
/// assert_eq!(ledger.validate("4020").unwrap_err().code, "not_allowed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R>(pub L, pub R);

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &L::Input) -> Result<(), ValidationError> {
        self.0.validate(input).and_then(|()| self.1.validate(input))
    }
}

/// Function form of [`ValidateExt::and`](crate::foundation::ValidateExt::and).
pub fn and<L, R>(first: L, second: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::number::{DecimalSeparator, number_as_string};
    use crate::rules::{digits, ledger_number, one_of};

    #[test]
    fn test_first_rejection_wins() {
        let rule = and(ledger_number(), one_of(["1000"]));
        assert!(rule.validate("1000").is_ok());
        assert_eq!(rule.validate("10").unwrap_err().code, "invalid_format");
        assert_eq!(rule.validate("2000").unwrap_err().code, "not_allowed");
    }

    #[test]
    fn test_nested_chain() {
        let rule = digits().and(ledger_number()).and(one_of(["1000", "2000"]));
        assert!(rule.validate("2000").is_ok());
        assert!(rule.validate("3000").is_err());
    }

    #[test]
    fn test_number_as_string_in_chain() {
        let rule = number_as_string()
            .decimal(DecimalSeparator::Point, 2)
            .and(one_of(["0.50", "1.00"]));
        assert_eq!(rule.validate("0.5").unwrap_err().code, "min_decimals_not_met");
        assert_eq!(rule.validate("2.00").unwrap_err().code, "not_allowed");
        assert!(rule.validate("1.00").is_ok());
    }
}
