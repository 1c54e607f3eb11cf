//! Closed-set membership.

use indexmap::IndexSet;
use serde::Deserialize;

use crate::foundation::{Validate, ValidationError};

/// Accepts only values from a fixed, case-sensitive set.
///
/// The set keeps insertion order so the `allowed` parameter of the error
/// lists values the way they were declared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OneOf {
    values: IndexSet<String>,
}

impl OneOf {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Allowed values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    fn allowed_list(&self) -> String {
        self.values().collect::<Vec<_>>().join(", ")
    }
}

impl Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.values.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::new("not_allowed", "Value is not one of the allowed values")
                .with_param("allowed", self.allowed_list()))
        }
    }
}

/// Creates a [`OneOf`] rule.
#[must_use]
pub fn one_of<I>(values: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    OneOf::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_membership() {
        let rule = one_of(["draft", "sent", "paid"]);
        assert!(rule.validate("sent").is_ok());
        assert!(rule.validate("Sent").is_err());
        assert!(rule.validate("").is_err());
    }

    #[test]
    fn test_allowed_param_keeps_order() {
        let err = one_of(["b", "a", "b", "c"]).validate("x").unwrap_err();
        assert_eq!(err.code, "not_allowed");
        assert_eq!(err.param("allowed"), Some("b, a, c"));
    }

    #[test]
    fn test_deserialize() {
        let rule: OneOf = serde_json::from_value(json!({ "values": ["EUR", "USD"] })).unwrap();
        assert_eq!(rule, one_of(["EUR", "USD"]));
        assert_eq!(rule.values().collect::<Vec<_>>(), ["EUR", "USD"]);
    }
}
