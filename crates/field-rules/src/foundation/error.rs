//! Validation failures as the host engine sees them.
//!
//! Each rule rejects with exactly one [`ValidationError`]. The object schema
//! gathers them, tagged with their field, into [`ValidationErrors`].
//!
//! Codes and English messages are `Cow<'static, str>`: rules build them from
//! literals, so a rejection normally allocates only for its parameters.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

type Text = Cow<'static, str>;

/// Message parameters in insertion order. No rule attaches more than three.
pub type ErrorParams = SmallVec<[(Text, Text); 3]>;

/// One rejected value.
///
/// `code` is stable and meant for programs and translation tables;
/// `message` is a default English rendering; `params` carry the values a
/// translated message needs (`limit`, `expected`, `max`, ...).
///
/// ```
/// use field_rules::foundation::ValidationError;
///
/// let error = ValidationError::new("max_decimals_exceeded", "must have at most 2 decimals")
///     .with_field("amount")
///     .with_param("max", "2");
///
/// assert_eq!(error.param("max"), Some("2"));
/// assert_eq!(error.to_string(), "amount: must have at most 2 decimals [max_decimals_exceeded; max=2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: Text,
    pub message: Text,
    /// Set by [`ObjectSchema`](crate::schema::ObjectSchema); rules leave it empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Text>,
    #[serde(serialize_with = "params_as_map")]
    pub params: ErrorParams,
}

fn params_as_map<S: Serializer>(params: &ErrorParams, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
}

impl ValidationError {
    pub fn new(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: ErrorParams::new(),
        }
    }

    /// A required field that is missing or `null`.
    pub fn required(field: impl Into<Text>) -> Self {
        Self::new("required", "is required").with_field(field)
    }

    /// Text that does not match a fixed pattern; `expected` names the pattern.
    pub fn invalid_format(expected: impl Into<Text>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// A JSON value of the wrong kind, e.g. an array where an object belongs.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::new("type_mismatch", format!("must be {expected}, got {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Text>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Text>, value: impl Into<Text>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// First parameter named `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_ref()))
    }
}

/// `field: message [code; k=v, ...]`
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{field}: ")?;
        }
        write!(f, "{} [{}", self.message, self.code)?;

        let mut separator = "; ";
        for (key, value) in &self.params {
            write!(f, "{separator}{key}={value}")?;
            separator = ", ";
        }
        f.write_str("]")
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERRORS OF ONE OBJECT
// ============================================================================

/// Rejections collected while validating one object, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    /// The error reported for `field`, if that field failed.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field.as_deref() == Some(field))
    }

    /// `Ok(value)` when nothing was collected, `Err(self)` otherwise.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One error per line.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
