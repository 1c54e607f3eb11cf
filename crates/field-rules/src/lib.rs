//! # field-rules
//!
//! Number-as-string validation for form schemas, plus the string rules that
//! usually sit next to it.
//!
//! A number-as-string field keeps a decimal value as text (`"1250,00"`) so
//! that the separator, the number of decimals and leading zeros stay
//! visible. Validation checks the text and hands it back unchanged; numeric
//! range checks parse it on the side.
//!
//! ## Quick Start
//!
//! ```
//! use field_rules::prelude::*;
//!
//! let amount = number_as_string()
//!     .decimal(DecimalSeparator::Comma, 2)
//!     .greater(0);
//!
//! assert!(amount.validate("12,50").is_ok());
//! assert_eq!(amount.validate("12.50").unwrap_err().code, "wrong_separator");
//! assert_eq!(amount.validate("012,50").unwrap_err().code, "leading_zero");
//! ```
//!
//! ## Modules
//!
//! - [`number`]: scanner, format policy, coercion and range rules
//! - [`rules`]: dates, times, fixed patterns, BSN eleven-proof, sets
//! - [`schema`]: [`ObjectSchema`](schema::ObjectSchema), loadable from JSON
//! - [`foundation`]: [`Validate`](foundation::Validate), errors, options
//!
//! Use the [`validator!`] macro for new single-pass rules.

// ValidationError is returned by value on every path; boxing it would add an
// allocation per rejected field.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod number;
pub mod prelude;
pub mod rules;
pub mod schema;
