//! Real-number rules (`decimal`, `positive_decimal`).
//!
//! Integer strings become exact decimals, other numeric strings floats.

use livr_model::{ErrorCode, Outcome, Rule, Value};
use rust_decimal::Decimal;

use crate::primitives::{coerce, parse_float, parse_integer, precheck, reject};

/// `decimal`: the value must be a finite real number.
///
/// Native floats and exact decimals pass as-is. Native integers are
/// rejected; only integer *strings* are accepted, and they become exact
/// decimals. Other numeric strings become floats.
#[derive(Debug, Clone)]
pub struct DecimalRule {
    error_code: ErrorCode,
}

impl DecimalRule {
    pub const NAME: &'static str = "decimal";
    pub const DEFAULT_ERROR_CODE: ErrorCode = ErrorCode::NotDecimal;

    pub fn new() -> Self {
        Self {
            error_code: Self::DEFAULT_ERROR_CODE,
        }
    }
}

impl Default for DecimalRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for DecimalRule {
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
            Value::Float(f) if f.is_finite() => Outcome::pass(),
            Value::Decimal(_) => Outcome::pass(),
            Value::String(s) => coerce_decimal_string(s, |_| true)
                .map(|replacement| coerce(Self::NAME, value, replacement))
                .unwrap_or_else(|| reject(Self::NAME, value, self.error_code)),
            _ => reject(Self::NAME, value, self.error_code),
        }
    }
}

/// `positive_decimal`: a decimal of at least 1 for native values.
///
/// Strings only need to be greater than zero, so `"0.5"` is coerced while a
/// native `0.5` is rejected.
#[derive(Debug, Clone)]
pub struct PositiveDecimalRule {
    error_code: ErrorCode,
}

impl PositiveDecimalRule {
    pub const NAME: &'static str = "positive_decimal";
    pub const DEFAULT_ERROR_CODE: ErrorCode = ErrorCode::NotPositiveDecimal;

    pub fn new() -> Self {
        Self {
            error_code: Self::DEFAULT_ERROR_CODE,
        }
    }
}

impl Default for PositiveDecimalRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PositiveDecimalRule {
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
            Value::Float(f) if f.is_finite() && *f >= 1.0 => Outcome::pass(),
            Value::Decimal(d) if *d >= Decimal::ONE => Outcome::pass(),
            Value::String(s) => coerce_decimal_string(s, |v| v > 0.0)
                .map(|replacement| coerce(Self::NAME, value, replacement))
                .unwrap_or_else(|| reject(Self::NAME, value, self.error_code)),
            _ => reject(Self::NAME, value, self.error_code),
        }
    }
}

/// Integer strings become exact decimals, other numeric strings floats.
/// `accept` filters on the numeric value.
fn coerce_decimal_string(text: &str, accept: impl Fn(f64) -> bool) -> Option<Value> {
    if let Some(i) = parse_integer(text) {
        return accept(i as f64).then(|| Value::Decimal(Decimal::from(i)));
    }
    parse_float(text)
        .filter(|v| accept(*v))
        .map(Value::Float)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_coerces_integer_strings_exactly() {
        let rule = DecimalRule::new();
        assert_eq!(
            rule.validate(&Value::string("10")),
            Outcome::coerced(Decimal::from(10))
        );
        assert_eq!(rule.validate(&Value::string("3.25")), Outcome::coerced(3.25));
        assert_eq!(rule.validate(&Value::Float(2.0)), Outcome::pass());
    }

    #[test]
    fn decimal_rejects_native_integers() {
        let rule = DecimalRule::new();
        assert_eq!(
            rule.validate(&Value::Integer(10)),
            Outcome::fail(ErrorCode::NotDecimal)
        );
        assert_eq!(
            rule.validate(&Value::string("ten")),
            Outcome::fail(ErrorCode::NotDecimal)
        );
        assert_eq!(
            rule.validate(&Value::Float(f64::NAN)),
            Outcome::fail(ErrorCode::NotDecimal)
        );
    }

    #[test]
    fn positive_decimal_native_threshold_is_one() {
        let rule = PositiveDecimalRule::new();
        assert_eq!(rule.validate(&Value::Float(1.0)), Outcome::pass());
        assert_eq!(
            rule.validate(&Value::Float(0.5)),
            Outcome::fail(ErrorCode::NotPositiveDecimal)
        );
        assert_eq!(
            rule.validate(&Value::Decimal(Decimal::ZERO)),
            Outcome::fail(ErrorCode::NotPositiveDecimal)
        );
    }

    #[test]
    fn positive_decimal_strings_need_only_be_positive() {
        let rule = PositiveDecimalRule::new();
        assert_eq!(
            rule.validate(&Value::string("5")),
            Outcome::coerced(Decimal::from(5))
        );
        assert_eq!(rule.validate(&Value::string("0.5")), Outcome::coerced(0.5));
        assert_eq!(
            rule.validate(&Value::string("0")),
            Outcome::fail(ErrorCode::NotPositiveDecimal)
        );
        assert_eq!(
            rule.validate(&Value::string("-1.5")),
            Outcome::fail(ErrorCode::NotPositiveDecimal)
        );
    }
}
