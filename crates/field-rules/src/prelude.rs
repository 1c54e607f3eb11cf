//! Prelude module for convenient imports.
//!
//! ```
//! use field_rules::prelude::*;
//!
//! let ledger = digits().and(ledger_number());
//! assert!(ledger.validate("4000").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, options
// ============================================================================

pub use crate::foundation::{
    AsValidatable, FieldContext, Validate, ValidateExt, ValidationError, ValidationErrors,
    ValidationOptions,
};

// ============================================================================
// NUMBER-AS-STRING
// ============================================================================

pub use crate::number::{
    ConfigError, DecimalSeparator, Limit, NumberAsString, NumberError, ValidatorConfig,
    number_as_string,
};

// ============================================================================
// RULES
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// COMBINATORS AND SCHEMA
// ============================================================================

pub use crate::combinators::{And, and};
pub use crate::schema::{FieldRule, ObjectSchema, SchemaError};
