//! Presenting caller values to a rule as the input type it expects.
//!
//! Host engines hand over strings in several shapes: borrowed, owned,
//! copy-on-write, or still wrapped in a `serde_json::Value`. Each shape
//! implements [`AsValidatable<str>`] once, and every `str` rule accepts all
//! of them through [`Validate::validate_any`](crate::foundation::Validate::validate_any).

use std::borrow::{Borrow, Cow};

use serde_json::Value;

use crate::foundation::ValidationError;

/// A value that can be viewed as `&T`, or fails with a typed error.
///
/// `Output` is a generic associated type so an implementation may lend a
/// borrow or build an owned value, whichever `T` needs.
pub trait AsValidatable<T: ?Sized> {
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

macro_rules! lend_str {
    ($($ty:ty),+) => {$(
        impl AsValidatable<str> for $ty {
            type Output<'a>
                = &'a str
            where
                Self: 'a;

            #[inline]
            fn as_validatable(&self) -> Result<&str, ValidationError> {
                Ok(self.borrow())
            }
        }
    )+};
}

lend_str!(str, String, Cow<'_, str>);

/// Name of a JSON value's kind, as used in `type_mismatch` and
/// `not_a_string` params.
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Only `Value::String` lends a `str`.
impl AsValidatable<str> for Value {
    type Output<'a> = &'a str;

    fn as_validatable(&self) -> Result<&str, ValidationError> {
        if let Value::String(text) = self {
            return Ok(text.as_str());
        }
        Err(ValidationError::new("not_a_string", "must be a string")
            .with_param("expected", "string")
            .with_param("actual", json_type_name(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_string_borrows() {
        let value = json!("12,50");
        let s: &str = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(s, "12,50");
    }

    #[test]
    fn test_json_non_string_names_actual_type() {
        for (value, name) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(1.5), "number"),
            (json!([]), "array"),
            (json!({}), "object"),
        ] {
            let err = AsValidatable::<str>::as_validatable(&value).unwrap_err();
            assert_eq!(err.code, "not_a_string");
            assert_eq!(err.param("actual"), Some(name));
        }
    }
}
