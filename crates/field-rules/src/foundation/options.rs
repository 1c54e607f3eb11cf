//! Options and per-field context the host passes into each validation call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validation options.
///
/// ```
/// use field_rules::foundation::ValidationOptions;
///
/// let options: ValidationOptions = serde_json::from_str(r#"{"convert": false}"#).unwrap();
/// assert!(!options.convert);
/// assert!(options.abort_early);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Trim leading and trailing whitespace before checking, and hand back
    /// the trimmed value.
    pub convert: bool,
    /// Stop an object validation at the first failing field.
    pub abort_early: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            convert: true,
            abort_early: true,
        }
    }
}

impl ValidationOptions {
    /// Options with whitespace trimming disabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            convert: false,
            ..Self::default()
        }
    }
}

/// What a rule may read besides its own value: the options of the call and
/// the other fields of the enclosing object.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldContext<'a> {
    pub options: ValidationOptions,
    pub siblings: Option<&'a Map<String, Value>>,
}

impl<'a> FieldContext<'a> {
    /// Context for a standalone value with the given options.
    #[must_use]
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            siblings: None,
        }
    }

    /// Attaches the enclosing object.
    #[must_use]
    pub fn with_siblings(mut self, siblings: &'a Map<String, Value>) -> Self {
        self.siblings = Some(siblings);
        self
    }

    /// Looks up a sibling field.
    #[must_use]
    pub fn sibling(&self, name: &str) -> Option<&'a Value> {
        self.siblings.and_then(|s| s.get(name))
    }
}
