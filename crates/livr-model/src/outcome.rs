//! Result of running one rule against one value.

use crate::error_code::ErrorCode;
use crate::value::Value;

/// Outcome of a single validation.
///
/// Success may carry a replacement for the original value; failure carries
/// exactly one error tag and never a replacement.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Value accepted. `Some` holds the coerced replacement.
    Pass(Option<Value>),
    /// Value rejected.
    Fail(ErrorCode),
}

impl Outcome {
    /// Accept the value unchanged.
    pub const fn pass() -> Self {
        Self::Pass(None)
    }

    /// Accept the value and replace it.
    pub fn coerced(value: impl Into<Value>) -> Self {
        Self::Pass(Some(value.into()))
    }

    /// Reject the value.
    pub const fn fail(code: ErrorCode) -> Self {
        Self::Fail(code)
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Fail(code) => Some(*code),
            Self::Pass(_) => None,
        }
    }

    pub fn updated_value(&self) -> Option<&Value> {
        match self {
            Self::Pass(updated) => updated.as_ref(),
            Self::Fail(_) => None,
        }
    }

    /// Split into the `(error, replacement)` pair used by rule registries.
    /// At most one side is ever `Some`.
    pub fn into_parts(self) -> (Option<ErrorCode>, Option<Value>) {
        match self {
            Self::Pass(updated) => (None, updated),
            Self::Fail(code) => (Some(code), None),
        }
    }

    /// Resolve against the original value: the replacement when one was
    /// produced, the original otherwise, or the error tag.
    pub fn resolve(self, original: Value) -> Result<Value, ErrorCode> {
        match self {
            Self::Pass(Some(updated)) => Ok(updated),
            Self::Pass(None) => Ok(original),
            Self::Fail(code) => Err(code),
        }
    }
}
