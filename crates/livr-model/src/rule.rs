//! The contract every rule implements.

use std::fmt;

use crate::error_code::ErrorCode;
use crate::outcome::Outcome;
use crate::value::Value;

/// A named, stateless validator-and-coercer for one constraint class.
///
/// Implementations hold only immutable configuration fixed at construction,
/// so a rule can be shared across threads and invoked concurrently.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Stable identifier used for registry lookup, e.g. `max_number`.
    fn name(&self) -> &'static str;

    /// Error code reported when the value violates this rule's constraint.
    fn error_code(&self) -> ErrorCode;

    /// Override the constraint error code for this instance.
    fn set_error_code(&mut self, code: ErrorCode);

    /// Validate a value, optionally producing a replacement.
    fn validate(&self, value: &Value) -> Outcome;
}
