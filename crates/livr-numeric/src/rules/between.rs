//! Two-sided range rule.

use livr_model::{ErrorCode, Outcome, Result, Rule, RuleError, Value};

use super::numeric_argument;
use crate::compare::{RangeCheck, Violation, check_range};
use crate::primitives::{can_be_coerced_to_number, coerce, precheck, reject};

/// `number_between`: the value must lie within `[min, max]`, both inclusive.
///
/// Violations always report `TOO_LOW` or `TOO_HIGH`. The declared code
/// defaults to `FORMAT`; an override changes only what `error_code()`
/// reports.
#[derive(Debug, Clone)]
pub struct NumberBetweenRule {
    min: Value,
    max: Value,
    error_code: Option<ErrorCode>,
}

impl NumberBetweenRule {
    pub const NAME: &'static str = "number_between";
    pub const DEFAULT_ERROR_CODE: ErrorCode = ErrorCode::Format;

    pub fn new(min: impl Into<Value>, max: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            min: numeric_argument(Self::NAME, min.into())?,
            max: numeric_argument(Self::NAME, max.into())?,
            error_code: None,
        })
    }

    /// Build from an argument list `[min, max, ...]`. Elements past the
    /// second are ignored.
    pub fn from_argument(argument: Value) -> Result<Self> {
        match argument {
            Value::List(mut items) if items.len() >= 2 => {
                items.truncate(2);
                let max = items.pop().unwrap_or_default();
                let min = items.pop().unwrap_or_default();
                Self::new(min, max)
            }
            Value::Null => Err(RuleError::MissingArgument { rule: Self::NAME }),
            other => Err(RuleError::InvalidArgument {
                rule: Self::NAME,
                message: format!("expected [min, max], got {other}"),
            }),
        }
    }

}

fn violation_code(violation: Violation) -> ErrorCode {
    match violation {
        Violation::Below => ErrorCode::TooLow,
        Violation::Above => ErrorCode::TooHigh,
    }
}

impl Rule for NumberBetweenRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn error_code(&self) -> ErrorCode {
        self.error_code.unwrap_or(Self::DEFAULT_ERROR_CODE)
    }

    fn set_error_code(&mut self, code: ErrorCode) {
        self.error_code = Some(code);
    }

    fn validate(&self, value: &Value) -> Outcome {
        if let Some(outcome) = precheck(Self::NAME, value) {
            return outcome;
        }
        if !can_be_coerced_to_number(value) {
            return reject(Self::NAME, value, ErrorCode::NotNumber);
        }
        match check_range(value, Some(&self.min), Some(&self.max)) {
            RangeCheck::Outside(violation) => {
                reject(Self::NAME, value, violation_code(violation))
            }
            RangeCheck::Within(Some(replacement)) => coerce(Self::NAME, value, replacement),
            RangeCheck::Within(None) => Outcome::pass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn between(min: i64, max: i64) -> NumberBetweenRule {
        NumberBetweenRule::new(min, max).expect("rule")
    }

    #[test]
    fn reports_side_of_violation() {
        let rule = between(5, 10);
        assert_eq!(
            rule.validate(&Value::Integer(3)),
            Outcome::fail(ErrorCode::TooLow)
        );
        assert_eq!(
            rule.validate(&Value::Integer(15)),
            Outcome::fail(ErrorCode::TooHigh)
        );
        assert_eq!(rule.validate(&Value::Integer(7)), Outcome::pass());
        assert_eq!(rule.validate(&Value::Integer(5)), Outcome::pass());
        assert_eq!(rule.validate(&Value::Integer(10)), Outcome::pass());
    }

    #[test]
    fn strings_are_normalized() {
        let rule = between(5, 10);
        assert_eq!(rule.validate(&Value::string("7.0")), Outcome::coerced(7i64));
        assert_eq!(rule.validate(&Value::string("7.5")), Outcome::coerced(7.5));
        assert_eq!(
            rule.validate(&Value::string("4.5")),
            Outcome::fail(ErrorCode::TooLow)
        );
    }

    #[test]
    fn mixed_bound_types() {
        let rule = NumberBetweenRule::new("1.5", 3).expect("rule");
        assert_eq!(rule.validate(&Value::Integer(2)), Outcome::pass());
        assert_eq!(
            rule.validate(&Value::Integer(1)),
            Outcome::fail(ErrorCode::TooLow)
        );
        assert_eq!(rule.validate(&Value::Float(2.5)), Outcome::pass());
    }

    #[test]
    fn argument_list_shape() {
        let rule = NumberBetweenRule::from_argument(Value::List(vec![
            Value::Integer(1),
            Value::string("9"),
            Value::string("ignored"),
        ]))
        .expect("rule");
        assert_eq!((&rule.min, &rule.max), (&Value::Integer(1), &Value::string("9")));

        assert!(matches!(
            NumberBetweenRule::from_argument(Value::List(vec![Value::Integer(1)])),
            Err(RuleError::InvalidArgument { .. })
        ));
        assert!(matches!(
            NumberBetweenRule::from_argument(Value::Null),
            Err(RuleError::MissingArgument { .. })
        ));
    }

    #[test]
    fn override_keeps_range_codes() {
        let mut rule = between(5, 10);
        assert_eq!(rule.error_code(), ErrorCode::Format);
        rule.set_error_code(ErrorCode::NotNumber);
        assert_eq!(rule.error_code(), ErrorCode::NotNumber);
        assert_eq!(
            rule.validate(&Value::Integer(1)),
            Outcome::fail(ErrorCode::TooLow)
        );
        assert_eq!(
            rule.validate(&Value::string("11")),
            Outcome::fail(ErrorCode::TooHigh)
        );
    }
}
