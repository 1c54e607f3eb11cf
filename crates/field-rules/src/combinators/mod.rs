//! Rule combinators.

pub mod and;

pub use and::{And, and};
