//! Date and time rules.
//!
//! Parsing is strict: the whole input must be consumed by the format and
//! must reproduce the input exactly when formatted back, so `2024-1-5` does
//! not pass for `%Y-%m-%d`.

use std::borrow::Cow;
use std::fmt::{self, Write};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::foundation::{FieldContext, Validate, ValidationError};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A chrono type that can be read from and written back to a format string.
trait Strftime: Sized {
    fn parse(input: &str, format: &str) -> chrono::ParseResult<Self>;
    fn render(&self, format: &str, out: &mut String) -> fmt::Result;
}

macro_rules! impl_strftime {
    ($($ty:ty),+) => {$(
        impl Strftime for $ty {
            fn parse(input: &str, format: &str) -> chrono::ParseResult<Self> {
                Self::parse_from_str(input, format)
            }

            fn render(&self, format: &str, out: &mut String) -> fmt::Result {
                write!(out, "{}", self.format(format))
            }
        }
    )+};
}

impl_strftime!(NaiveDate, NaiveTime, NaiveDateTime);

/// Parses `input` and checks that formatting the result gives `input` back.
fn parse_exact<T: Strftime>(input: &str, format: &str) -> Option<T> {
    let value = T::parse(input, format).ok()?;
    let mut rendered = String::with_capacity(input.len());
    value.render(format, &mut rendered).ok()?;
    (rendered == input).then_some(value)
}

macro_rules! strict_temporal {
    (
        $(#[$meta:meta])*
        $name:ident($ty:ty), $factory:ident, $default:expr, $code:literal, $what:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
        #[serde(default)]
        pub struct $name {
            format: Cow<'static, str>,
        }

        impl $name {
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    format: Cow::Borrowed($default),
                }
            }

            /// Replaces the `strftime`-style format.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
                self.format = format.into();
                self
            }

            #[must_use]
            pub fn format(&self) -> &str {
                &self.format
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Validate for $name {
            type Input = str;

            fn validate(&self, input: &str) -> Result<(), ValidationError> {
                if parse_exact::<$ty>(input, &self.format).is_some() {
                    Ok(())
                } else {
                    Err(ValidationError::new($code, concat!("Must be a valid ", $what))
                        .with_param("format", self.format.clone()))
                }
            }
        }

        #[must_use]
        pub const fn $factory() -> $name {
            $name::new()
        }
    };
}

strict_temporal! {
    /// A calendar date, `%Y-%m-%d` unless configured otherwise.
    StrictDate(NaiveDate), strict_date, DEFAULT_DATE_FORMAT, "invalid_date", "date"
}

strict_temporal! {
    /// A time of day, `%H:%M` unless configured otherwise.
    StrictTime(NaiveTime), strict_time, DEFAULT_TIME_FORMAT, "invalid_time", "time"
}

strict_temporal! {
    /// A local date and time, `%Y-%m-%dT%H:%M:%S` unless configured otherwise.
    StrictDateTime(NaiveDateTime), strict_datetime, DEFAULT_DATETIME_FORMAT, "invalid_datetime", "date and time"
}

// ============================================================================
// END DATE
// ============================================================================

fn default_start_field() -> Cow<'static, str> {
    Cow::Borrowed("startDate")
}

fn default_date_format() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_DATE_FORMAT)
}

/// An end date that must not precede a sibling start date.
///
/// Both dates use the same format. The start date is read from the sibling
/// field named by `start_field`, so this rule only runs with a
/// [`FieldContext`] that carries siblings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndDate {
    #[serde(default = "default_start_field")]
    start_field: Cow<'static, str>,
    #[serde(default = "default_date_format")]
    format: Cow<'static, str>,
}

impl EndDate {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_field: Cow::Borrowed("startDate"),
            format: Cow::Borrowed(DEFAULT_DATE_FORMAT),
        }
    }

    /// Reads the start date from `field` instead of `startDate`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_start_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.start_field = field.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn start_field(&self) -> &str {
        &self.start_field
    }

    fn invalid_date(&self) -> ValidationError {
        ValidationError::new("invalid_date", "Must be a valid date")
            .with_param("format", self.format.clone())
    }

    /// Checks `input` against the start date found in `ctx`.
    ///
    /// Fails with `start_date_required` when the sibling is absent, null or
    /// empty, `invalid_date` when either date does not parse, and
    /// `end_before_start` when the end precedes the start. Equal dates pass.
    pub fn check(&self, input: &str, ctx: &FieldContext<'_>) -> Result<(), ValidationError> {
        let start = match ctx.sibling(&self.start_field) {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s.trim(),
            Some(serde_json::Value::String(_) | serde_json::Value::Null) | None => {
                return Err(ValidationError::new(
                    "start_date_required",
                    "A start date is required before an end date",
                )
                .with_param("start_field", self.start_field.clone()));
            }
            Some(_) => {
                return Err(self
                    .invalid_date()
                    .with_param("start_field", self.start_field.clone()));
            }
        };

        let end = parse_exact::<NaiveDate>(input, &self.format).ok_or_else(|| self.invalid_date())?;
        let start = parse_exact::<NaiveDate>(start, &self.format).ok_or_else(|| {
            self.invalid_date()
                .with_param("start_field", self.start_field.clone())
        })?;

        if end < start {
            return Err(
                ValidationError::new("end_before_start", "End date must not precede the start date")
                    .with_param("start", start.format(DEFAULT_DATE_FORMAT).to_string()),
            );
        }
        Ok(())
    }
}

impl Default for EndDate {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub const fn end_date() -> EndDate {
    EndDate::new()
}
