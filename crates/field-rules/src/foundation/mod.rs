//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Input adaptation**: [`AsValidatable`]
//! - **Call context**: [`ValidationOptions`], [`FieldContext`]
//!
//! Rules are plain values: build them once, then call `validate` from as
//! many threads as needed. Nothing in a rule changes after construction.

pub mod error;
pub mod options;
pub mod traits;
pub mod validatable;

pub use error::{ErrorParams, ValidationError, ValidationErrors};
pub use options::{FieldContext, ValidationOptions};
pub use traits::{Validate, ValidateExt};
pub use validatable::AsValidatable;
