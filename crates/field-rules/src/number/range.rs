//! Range rules applied to accepted number-as-string values.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::foundation::FieldContext;
use crate::number::coerce::coerce;
use crate::number::config::ValidatorConfig;
use crate::number::error::NumberError;
use crate::number::policy;
use crate::number::scan::scan;

/// Comparison performed by a range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// `value >= limit`
    Min,
    /// `value <= limit`
    Max,
    /// `value > limit`
    Greater,
    /// `value < limit`
    Less,
}

impl RangeKind {
    fn holds(self, value: f64, limit: f64) -> bool {
        match self {
            Self::Min => value >= limit,
            Self::Max => value <= limit,
            Self::Greater => value > limit,
            Self::Less => value < limit,
        }
    }

    fn reject(self, limit: f64) -> NumberError {
        match self {
            Self::Min => NumberError::BelowMin { limit },
            Self::Max => NumberError::AboveMax { limit },
            Self::Greater => NumberError::NotGreater { limit },
            Self::Less => NumberError::NotLess { limit },
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Greater => "greater",
            Self::Less => "less",
        })
    }
}

/// A range limit: a literal, or the value of a sibling field.
///
/// Deserializes from a JSON number or from `{"ref": "field"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Limit {
    Value(f64),
    Ref {
        #[serde(rename = "ref")]
        field: String,
    },
}

impl Limit {
    /// A limit read from the sibling field `field` at validation time.
    pub fn reference(field: impl Into<String>) -> Self {
        Self::Ref {
            field: field.into(),
        }
    }

    /// Resolves the limit to a number.
    ///
    /// A sibling holding a JSON number is used as is. A sibling holding a
    /// string must itself be a well-formed value for the referencing field:
    /// same separator, no leading zero, no negative zero. Its decimal count
    /// is not checked. In convert mode the string is trimmed first.
    pub fn resolve(
        &self,
        config: &ValidatorConfig,
        ctx: &FieldContext<'_>,
    ) -> Result<f64, NumberError> {
        let field = match self {
            Self::Value(value) => return Ok(*value),
            Self::Ref { field } => field,
        };

        let resolved = match ctx.sibling(field) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(text)) => {
                let text = if ctx.options.convert { text.trim() } else { text.as_str() };
                read_limit(text, config)
            }
            _ => None,
        };

        resolved.ok_or_else(|| NumberError::UnresolvedLimit {
            reference: field.clone(),
        })
    }
}

fn read_limit(text: &str, config: &ValidatorConfig) -> Option<f64> {
    let format = ValidatorConfig {
        min_decimals: 0,
        max_decimals: u32::MAX,
        ..*config
    };
    policy::evaluate(&scan(text).ok()?, &format).ok()?;
    coerce(text, &format).ok()
}

impl From<f64> for Limit {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_exact {
    ($($ty:ty),+) => {$(
        impl From<$ty> for Limit {
            fn from(value: $ty) -> Self {
                Self::Value(f64::from(value))
            }
        }
    )+};
}

// Values beyond 2^53 round to the nearest representable f64.
macro_rules! impl_from_rounded {
    ($($ty:ty),+) => {$(
        impl From<$ty> for Limit {
            #[allow(clippy::cast_precision_loss)]
            fn from(value: $ty) -> Self {
                Self::Value(value as f64)
            }
        }
    )+};
}

impl_from_exact!(f32, i8, i16, i32, u8, u16, u32);
impl_from_rounded!(i64, u64, i128, u128, isize, usize);

/// One range rule: a comparison against a limit.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    pub kind: RangeKind,
    pub limit: Limit,
}

impl RangeRule {
    pub fn new(kind: RangeKind, limit: impl Into<Limit>) -> Self {
        Self {
            kind,
            limit: limit.into(),
        }
    }

    /// Re-coerces `accepted` and compares it with the resolved limit.
    pub fn check(
        &self,
        accepted: &str,
        config: &ValidatorConfig,
        ctx: &FieldContext<'_>,
    ) -> Result<(), NumberError> {
        let value = coerce(accepted, config)?;
        let limit = self.limit.resolve(config, ctx)?;
        if self.kind.holds(value, limit) {
            Ok(())
        } else {
            Err(self.kind.reject(limit))
        }
    }
}
