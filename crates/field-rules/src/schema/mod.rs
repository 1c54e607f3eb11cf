//! Object schemas: the registration shim that plugs number-as-string fields
//! and their peer rules into a host form engine.
//!
//! A schema is an ordered map of field names to rules. It can be built in
//! code or loaded from JSON:
//!
//! ```
//! use field_rules::schema::ObjectSchema;
//! use field_rules::foundation::ValidationOptions;
//! use serde_json::json;
//!
//! let schema = ObjectSchema::from_json(r#"{
//!     "fields": {
//!         "ledger": { "type": "ledger_number", "required": true },
//!         "amount": { "type": "number_as_string", "decimal_separator": ",", "max_decimals": 2, "required": true }
//!     }
//! }"#).unwrap();
//!
//! let accepted = schema
//!     .validate(&json!({ "ledger": "4000", "amount": " 12,50 " }), &ValidationOptions::default())
//!     .unwrap();
//! assert_eq!(accepted["amount"], "12,50");
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::foundation::validatable::json_type_name;
use crate::foundation::{
    AsValidatable, FieldContext, Validate, ValidationError, ValidationErrors, ValidationOptions,
};
use crate::number::NumberAsString;
use crate::rules::{
    Digits, ElevenProof, Email, EndDate, LedgerNumber, OneOf, SixDigits, StrictDate,
    StrictDateTime, StrictTime, UppercaseCode,
};

/// Errors raised while loading a schema.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Malformed JSON, an unknown rule `type`, or a bad rule option such as
    /// an unsupported separator glyph.
    #[error("invalid schema: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// The rule attached to one field.
///
/// In JSON the variant is selected by `"type"` and the rule's options sit
/// next to it: `{"type": "date", "format": "%d-%m-%Y"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum FieldRule {
    NumberAsString(NumberAsString),
    Date(StrictDate),
    Time(StrictTime),
    #[serde(rename = "datetime")]
    DateTime(StrictDateTime),
    EndDate(EndDate),
    OneOf(OneOf),
    SixDigits,
    UppercaseCode,
    Digits,
    LedgerNumber,
    Email,
    Bsn,
}

impl FieldRule {
    /// Validates one field value and returns the value to store.
    ///
    /// Every rule is a string rule, so anything but a JSON string fails
    /// with `not_a_string`. In convert mode surrounding whitespace is
    /// trimmed before the rule runs and the trimmed string is returned.
    pub fn check(&self, value: &Value, ctx: &FieldContext<'_>) -> Result<Value, ValidationError> {
        match self {
            Self::NumberAsString(node) => node
                .check_value(value, ctx)
                .map(|accepted| Value::String(accepted.to_owned()))
                .map_err(ValidationError::from),
            Self::Date(rule) => check_text(value, ctx, |s| rule.validate(s)),
            Self::Time(rule) => check_text(value, ctx, |s| rule.validate(s)),
            Self::DateTime(rule) => check_text(value, ctx, |s| rule.validate(s)),
            Self::EndDate(rule) => check_text(value, ctx, |s| rule.check(s, ctx)),
            Self::OneOf(rule) => check_text(value, ctx, |s| rule.validate(s)),
            Self::SixDigits => check_text(value, ctx, |s| SixDigits.validate(s)),
            Self::UppercaseCode => check_text(value, ctx, |s| UppercaseCode.validate(s)),
            Self::Digits => check_text(value, ctx, |s| Digits.validate(s)),
            Self::LedgerNumber => check_text(value, ctx, |s| LedgerNumber.validate(s)),
            Self::Email => check_text(value, ctx, |s| Email.validate(s)),
            Self::Bsn => check_text(value, ctx, |s| ElevenProof.validate(s)),
        }
    }
}

fn check_text(
    value: &Value,
    ctx: &FieldContext<'_>,
    rule: impl FnOnce(&str) -> Result<(), ValidationError>,
) -> Result<Value, ValidationError> {
    let raw = AsValidatable::<str>::as_validatable(value)?;
    let input = if ctx.options.convert { raw.trim() } else { raw };
    rule(input)?;
    Ok(Value::String(input.to_owned()))
}

macro_rules! impl_from_rule {
    ($($ty:ident => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for FieldRule {
            fn from(rule: $ty) -> Self {
                Self::$variant(rule)
            }
        }
    )+};
}

macro_rules! impl_from_unit_rule {
    ($($ty:ident => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for FieldRule {
            fn from(_: $ty) -> Self {
                Self::$variant
            }
        }
    )+};
}

impl_from_rule! {
    NumberAsString => NumberAsString,
    StrictDate => Date,
    StrictTime => Time,
    StrictDateTime => DateTime,
    EndDate => EndDate,
    OneOf => OneOf,
}

impl_from_unit_rule! {
    SixDigits => SixDigits,
    UppercaseCode => UppercaseCode,
    Digits => Digits,
    LedgerNumber => LedgerNumber,
    Email => Email,
    ElevenProof => Bsn,
}

// ============================================================================
// OBJECT SCHEMA
// ============================================================================

/// A field's rule and whether the field must be present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldSpec {
    #[serde(flatten)]
    pub rule: FieldRule,
    #[serde(default)]
    pub required: bool,
}

/// An ordered set of named fields validated against a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectSchema {
    fields: IndexMap<String, FieldSpec>,
}

impl ObjectSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a schema from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a schema from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Adds a required field. Re-adding a name replaces its rule in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(self, name: impl Into<String>, rule: impl Into<FieldRule>) -> Self {
        self.insert(name.into(), rule.into(), true)
    }

    /// Adds a field that may be absent or `null`.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional_field(self, name: impl Into<String>, rule: impl Into<FieldRule>) -> Self {
        self.insert(name.into(), rule.into(), false)
    }

    fn insert(mut self, name: String, rule: FieldRule, required: bool) -> Self {
        self.fields.insert(name, FieldSpec { rule, required });
        self
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Validates `input` and returns the accepted object.
    ///
    /// Fields are checked in declaration order; each error carries its field
    /// name. With `abort_early` the first failing field ends validation.
    /// Keys the schema does not declare are copied through unchanged.
    pub fn validate(
        &self,
        input: &Value,
        options: &ValidationOptions,
    ) -> Result<Map<String, Value>, ValidationErrors> {
        let Value::Object(object) = input else {
            return Err(ValidationError::type_mismatch("object", json_type_name(input)).into());
        };

        let ctx = FieldContext::new(*options).with_siblings(object);
        let mut accepted = object.clone();
        let mut errors = ValidationErrors::new();

        for (name, spec) in &self.fields {
            let outcome = match object.get(name) {
                None | Some(Value::Null) if spec.required => {
                    Err(ValidationError::required(name.clone()))
                }
                None | Some(Value::Null) => continue,
                Some(value) => spec
                    .rule
                    .check(value, &ctx)
                    .map_err(|error| error.with_field(name.clone())),
            };

            match outcome {
                Ok(value) => {
                    accepted.insert(name.clone(), value);
                }
                Err(error) => {
                    errors.push(error);
                    if options.abort_early {
                        break;
                    }
                }
            }
        }

        tracing::debug!(
            fields = self.fields.len(),
            errors = errors.len(),
            convert = options.convert,
            abort_early = options.abort_early,
            "object validated"
        );

        errors.finish(accepted)
    }
}
