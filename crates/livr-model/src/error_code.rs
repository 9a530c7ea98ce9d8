//! Validation error tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a value failed a rule.
///
/// Tags carry identity only; message text is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Value is not a primitive scalar.
    Format,
    /// Value cannot be coerced to any number.
    NotNumber,
    NotInteger,
    NotPositiveInteger,
    NotDecimal,
    NotPositiveDecimal,
    /// Value is above the allowed maximum.
    TooHigh,
    /// Value is below the allowed minimum.
    TooLow,
}

impl ErrorCode {
    /// Every error tag, in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Format,
            Self::NotNumber,
            Self::NotInteger,
            Self::NotPositiveInteger,
            Self::NotDecimal,
            Self::NotPositiveDecimal,
            Self::TooHigh,
            Self::TooLow,
        ]
    }

    /// Wire tag, e.g. `NOT_POSITIVE_INTEGER`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "FORMAT",
            Self::NotNumber => "NOT_NUMBER",
            Self::NotInteger => "NOT_INTEGER",
            Self::NotPositiveInteger => "NOT_POSITIVE_INTEGER",
            Self::NotDecimal => "NOT_DECIMAL",
            Self::NotPositiveDecimal => "NOT_POSITIVE_DECIMAL",
            Self::TooHigh => "TOO_HIGH",
            Self::TooLow => "TOO_LOW",
        }
    }

    /// Parse a tag, accepting the wire form (`TOO_HIGH`), snake case
    /// (`too_high`) and camel case (`tooHigh`).
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "format" => Some(Self::Format),
            "notnumber" => Some(Self::NotNumber),
            "notinteger" => Some(Self::NotInteger),
            "notpositiveinteger" => Some(Self::NotPositiveInteger),
            "notdecimal" => Some(Self::NotDecimal),
            "notpositivedecimal" => Some(Self::NotPositiveDecimal),
            "toohigh" => Some(Self::TooHigh),
            "toolow" => Some(Self::TooLow),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
