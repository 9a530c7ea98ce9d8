//! Whole-number rules (`integer`, `positive_integer`).
//!
//! Integer strings are coerced to native integers.

use livr_model::{ErrorCode, Outcome, Rule, Value};

use crate::primitives::{coerce, parse_integer, precheck, reject};

/// `integer`: the value must be a whole number.
///
/// Integer strings are coerced to native integers. Native floats are
/// rejected even when they have no fractional part.
#[derive(Debug, Clone)]
pub struct IntegerRule {
    error_code: ErrorCode,
}

impl IntegerRule {
    pub const NAME: &'static str = "integer";
    pub const DEFAULT_ERROR_CODE: ErrorCode = ErrorCode::NotInteger;

    pub fn new() -> Self {
        Self {
            error_code: Self::DEFAULT_ERROR_CODE,
        }
    }
}

impl Default for IntegerRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IntegerRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    fn set_error_code(&mut self, code: ErrorCode) {
        self.error_code = code;
    }

    fn validate(&self, value: &Value) -> Outcome {
        if let Some(outcome) = precheck(Self::NAME, value) {
            return outcome;
        }
        match value {
            Value::Integer(_) => Outcome::pass(),
            Value::String(s) => match parse_integer(s) {
                Some(i) => coerce(Self::NAME, value, Value::Integer(i)),
                None => reject(Self::NAME, value, self.error_code),
            },
            _ => reject(Self::NAME, value, self.error_code),
        }
    }
}

/// `positive_integer`: the value must be a whole number greater than zero.
#[derive(Debug, Clone)]
pub struct PositiveIntegerRule {
    error_code: ErrorCode,
}

impl PositiveIntegerRule {
    pub const NAME: &'static str = "positive_integer";
    pub const DEFAULT_ERROR_CODE: ErrorCode = ErrorCode::NotPositiveInteger;

    pub fn new() -> Self {
        Self {
            error_code: Self::DEFAULT_ERROR_CODE,
        }
    }
}

impl Default for PositiveIntegerRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PositiveIntegerRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    fn set_error_code(&mut self, code: ErrorCode) {
        self.error_code = code;
    }

    fn validate(&self, value: &Value) -> Outcome {
        if let Some(outcome) = precheck(Self::NAME, value) {
            return outcome;
        }
        match value {
            Value::Integer(i) if *i > 0 => Outcome::pass(),
            Value::String(s) => match parse_integer(s) {
                Some(i) if i > 0 => coerce(Self::NAME, value, Value::Integer(i)),
                _ => reject(Self::NAME, value, self.error_code),
            },
            _ => reject(Self::NAME, value, self.error_code),
        }
    }
}
