//! The rule trait and its combinator extension.

use std::borrow::Borrow;

use crate::combinators::and::And;
use crate::foundation::ValidationError;
use crate::foundation::validatable::AsValidatable;

/// A field rule.
///
/// `Input` is the borrowed form the rule inspects, `str` for every rule in
/// this crate. Rules are immutable once built: `validate` takes `&self`, so
/// one rule value can serve any number of threads.
///
/// ```
/// use field_rules::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         match input.trim() {
///             "" => Err(ValidationError::new("blank", "must not be blank")),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("x").is_ok());
/// assert!(NotBlank.validate(" \t").is_err());
/// ```
pub trait Validate {
    type Input: ?Sized;

    /// Accepts or rejects `input` with exactly one error.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Like [`validate`](Self::validate), for any value that can present
    /// itself as `Self::Input`: owned strings, `Cow<str>`, or a JSON value
    /// (anything but a JSON string is rejected with `not_a_string`).
    ///
    /// ```
    /// use field_rules::foundation::Validate;
    /// use field_rules::rules::six_digits;
    /// use serde_json::json;
    ///
    /// assert!(six_digits().validate_any(&String::from("123456")).is_ok());
    /// assert!(six_digits().validate_any(&json!("123456")).is_ok());
    /// assert_eq!(six_digits().validate_any(&json!(123456)).unwrap_err().code, "not_a_string");
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let adapted = value.as_validatable()?;
        self.validate(adapted.borrow())
    }
}

/// Combinators available on every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// `self`, then `other`; see [`And`].
    ///
    /// ```
    /// use field_rules::prelude::*;
    ///
    /// let checked = digits().and(one_of(["1000", "2000"]));
    /// assert!(checked.validate("1000").is_ok());
    /// assert!(checked.validate("3000").is_err());
    /// assert!(checked.validate("10a0").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    struct Uppercase;

    impl Validate for Uppercase {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.chars().all(|c| c.is_ascii_uppercase()) {
                Ok(())
            } else {
                Err(ValidationError::new("not_uppercase", "must be uppercase"))
            }
        }
    }

    #[test]
    fn test_validate_any_adapts_string_types() {
        assert!(Uppercase.validate_any(&String::from("EUR")).is_ok());
        assert!(Uppercase.validate_any(&Cow::Borrowed("EUR")).is_ok());
        assert!(Uppercase.validate_any("eur").is_err());
    }

    #[test]
    fn test_validate_any_rejects_non_string_json() {
        let err = Uppercase.validate_any(&serde_json::json!(42)).unwrap_err();
        assert_eq!(err.code, "not_a_string");
        assert_eq!(err.param("actual"), Some("number"));
    }
}
