//! Format configuration for the number-as-string rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::error::ConfigError;

/// The two decimal separator glyphs a number-as-string field may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecimalSeparator {
    /// `.`
    #[serde(rename = ".")]
    Point,
    /// `,`
    #[serde(rename = ",")]
    Comma,
}

impl DecimalSeparator {
    /// The literal glyph.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Point => '.',
            Self::Comma => ',',
        }
    }

    /// Recognises either glyph, whatever is configured.
    pub(crate) const fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Point),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }
}

impl TryFrom<char> for DecimalSeparator {
    type Error = ConfigError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_glyph(c).ok_or(ConfigError::UnsupportedSeparator(c))
    }
}

impl fmt::Display for DecimalSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Per-field format configuration.
///
/// Built once through the [`NumberAsString`](crate::number::NumberAsString)
/// builder and only read afterwards. Setters overwrite; nothing checks that
/// `min_decimals <= max_decimals`, and a field configured the other way round
/// simply rejects every value with a fractional part mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Required separator; `None` means no decimal part is allowed at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<DecimalSeparator>,
    /// Minimum number of fractional digits.
    pub min_decimals: u32,
    /// Maximum number of fractional digits.
    pub max_decimals: u32,
}
