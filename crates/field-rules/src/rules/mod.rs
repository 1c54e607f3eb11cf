//! Peer rules: the string rules that sit next to number-as-string fields
//! in a form schema.
//!
//! - **Patterns**: [`six_digits`], [`uppercase_code`], [`digits`],
//!   [`ledger_number`], [`email`]
//! - **Checksums**: [`eleven_proof`]
//! - **Sets**: [`one_of`]
//! - **Dates and times**: [`strict_date`], [`strict_time`],
//!   [`strict_datetime`], [`end_date`]

pub mod eleven_proof;
pub mod format;
pub mod membership;
pub mod temporal;

pub use eleven_proof::{ElevenProof, eleven_proof, is_eleven_proof};
pub use format::{
    Digits, Email, LedgerNumber, SixDigits, UppercaseCode, digits, email, ledger_number,
    six_digits, uppercase_code,
};
pub use membership::{OneOf, one_of};
pub use temporal::{
    EndDate, StrictDate, StrictDateTime, StrictTime, end_date, strict_date, strict_datetime,
    strict_time,
};
