//! Fixed-pattern string rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static SIX_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());
static UPPERCASE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{12}$").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static LEDGER_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

crate::validator! {
    /// Exactly six ASCII digits, e.g. a one-time token.
    pub SixDigits for str => six_digits,
    accept |input| SIX_DIGITS.is_match(input),
    reject |input| ValidationError::invalid_format("six_digits"),
}

crate::validator! {
    /// Exactly twelve uppercase ASCII letters.
    pub UppercaseCode for str => uppercase_code,
    accept |input| UPPERCASE_CODE.is_match(input),
    reject |input| ValidationError::invalid_format("uppercase_code"),
}

crate::validator! {
    /// One or more ASCII digits and nothing else.
    pub Digits for str => digits,
    accept |input| DIGITS.is_match(input),
    reject |input| ValidationError::invalid_format("digits"),
}

crate::validator! {
    /// A four-digit ledger account number.
    pub LedgerNumber for str => ledger_number,
    accept |input| LEDGER_NUMBER.is_match(input),
    reject |input| ValidationError::invalid_format("ledger_number"),
}

crate::validator! {
    /// Exactly one `@`, with something on both sides and no whitespace.
    pub Email for str => email,
    accept |input| EMAIL.is_match(input),
    reject |input| ValidationError::invalid_format("email"),
}
