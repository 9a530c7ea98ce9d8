//! One-sided comparison rules (`max_number`, `min_number`).

use livr_model::{ErrorCode, Outcome, Result, Rule, Value};

use super::numeric_argument;
use crate::compare::{RangeCheck, check_range};
use crate::primitives::{can_be_coerced_to_number, coerce, precheck, reject};

/// `max_number`: the value must not exceed the argument.
#[derive(Debug, Clone)]
pub struct MaxNumberRule {
    max: Value,
    error_code: ErrorCode,
}

impl MaxNumberRule {
    pub const NAME: &'static str = "max_number";
    pub const DEFAULT_ERROR_CODE: ErrorCode = ErrorCode::TooHigh;

    /// Build the rule. The argument may be a native number or a numeric
    /// string; a single-element list is unwrapped.
    pub fn new(max: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            max: numeric_argument(Self::NAME, max.into())?,
            error_code: Self::DEFAULT_ERROR_CODE,
        })
    }
}

impl Rule for MaxNumberRule {
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
        if !can_be_coerced_to_number(value) {
            return reject(Self::NAME, value, ErrorCode::NotNumber);
        }
        match check_range(value, None, Some(&self.max)) {
            RangeCheck::Outside(_) => reject(Self::NAME, value, self.error_code),
            RangeCheck::Within(Some(replacement)) => coerce(Self::NAME, value, replacement),
            RangeCheck::Within(None) => Outcome::pass(),
        }
    }
}

/// `min_number`: the value must not be below the argument.
#[derive(Debug, Clone)]
pub struct MinNumberRule {
    min: Value,
    error_code: ErrorCode,
}

impl MinNumberRule {
    pub const NAME: &'static str = "min_number";
    pub const DEFAULT_ERROR_CODE: ErrorCode = ErrorCode::TooLow;

    /// Build the rule. Accepts the same argument forms as [`MaxNumberRule::new`].
    pub fn new(min: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            min: numeric_argument(Self::NAME, min.into())?,
            error_code: Self::DEFAULT_ERROR_CODE,
        })
    }
}

impl Rule for MinNumberRule {
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
        if !can_be_coerced_to_number(value) {
            return reject(Self::NAME, value, ErrorCode::NotNumber);
        }
        match check_range(value, Some(&self.min), None) {
            RangeCheck::Outside(_) => reject(Self::NAME, value, self.error_code),
            RangeCheck::Within(Some(replacement)) => coerce(Self::NAME, value, replacement),
            RangeCheck::Within(None) => Outcome::pass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livr_model::RuleError;

    #[test]
    fn max_number_native_and_string_inputs() {
        let rule = MaxNumberRule::new(10).expect("rule");
        assert_eq!(rule.validate(&Value::Integer(10)), Outcome::pass());
        assert_eq!(
            rule.validate(&Value::Integer(11)),
            Outcome::fail(ErrorCode::TooHigh)
        );
        assert_eq!(rule.validate(&Value::string("10.0")), Outcome::coerced(10i64));
        assert_eq!(rule.validate(&Value::string("9.5")), Outcome::coerced(9.5));
        assert_eq!(
            rule.validate(&Value::string("10.01")),
            Outcome::fail(ErrorCode::TooHigh)
        );
    }

    #[test]
    fn max_number_requires_a_number() {
        let rule = MaxNumberRule::new("10").expect("rule");
        assert_eq!(
            rule.validate(&Value::string("ten")),
            Outcome::fail(ErrorCode::NotNumber)
        );
        assert_eq!(
            rule.validate(&Value::Bool(false)),
            Outcome::fail(ErrorCode::NotNumber)
        );
        assert_eq!(rule.validate(&Value::string("")), Outcome::pass());
    }

    #[test]
    fn min_number_direction() {
        let rule = MinNumberRule::new(5).expect("rule");
        assert_eq!(
            rule.validate(&Value::Integer(4)),
            Outcome::fail(ErrorCode::TooLow)
        );
        assert_eq!(rule.validate(&Value::Integer(5)), Outcome::pass());
        assert_eq!(rule.validate(&Value::Float(5.5)), Outcome::pass());
        assert_eq!(rule.validate(&Value::string("6")), Outcome::coerced(6i64));
        assert_eq!(
            rule.validate(&Value::string("4.99")),
            Outcome::fail(ErrorCode::TooLow)
        );
    }

    #[test]
    fn argument_must_be_numeric() {
        assert!(matches!(
            MaxNumberRule::new("ten"),
            Err(RuleError::InvalidArgument { rule: "max_number", .. })
        ));
        assert!(matches!(
            MinNumberRule::new(Value::Null),
            Err(RuleError::MissingArgument { rule: "min_number" })
        ));
        let wrapped = MaxNumberRule::new(vec![Value::Integer(3)]).expect("rule");
        assert_eq!(wrapped.max, Value::Integer(3));
    }
}
