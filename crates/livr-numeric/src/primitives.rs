//! Shared value inspection and number parsing.
//!
//! Every numeric rule is built from these leaves; none of them depends on
//! another rule.

use livr_model::{ErrorCode, Outcome, Value};
use rust_decimal::prelude::ToPrimitive;

/// True for `null` and the empty string. Presence is the `required` rule's
/// concern, so every numeric rule accepts such values untouched.
pub fn has_no_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// True for scalars: numbers, strings and booleans.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::List(_) | Value::Map(_))
}

/// True when the value already is a native number.
pub fn is_number(value: &Value) -> bool {
    matches!(
        value,
        Value::Integer(_) | Value::Float(_) | Value::Decimal(_)
    )
}

/// True for native numbers and strings that parse as an integer or a finite float.
pub fn can_be_coerced_to_number(value: &Value) -> bool {
    match value {
        Value::String(s) => parse_integer(s).is_some() || parse_float(s).is_some(),
        other => is_number(other),
    }
}

/// Parses an integer literal: optional sign followed by decimal digits.
///
/// Surrounding whitespace, fractions and exponents are rejected, as are
/// values outside the `i64` range.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Parses a floating-point literal, returning `None` for non-finite results
/// (`inf`, `NaN`, overflow to infinity).
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads a value as an integer: native integers, integral decimals and
/// integer strings. Native floats never qualify, even when integral.
pub fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::Decimal(d) if d.fract().is_zero() => d.to_i64(),
        Value::String(s) => parse_integer(s),
        _ => None,
    }
}

/// Reads a value as a finite float: any native number or a numeric string.
pub fn float_of(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) if f.is_finite() => Some(*f),
        Value::Decimal(d) => d.to_f64(),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

/// Checks shared by every rule, in order: absence passes, composites fail
/// with `FORMAT`. `None` means the rule must evaluate the value itself.
pub(crate) fn precheck(rule: &'static str, value: &Value) -> Option<Outcome> {
    if has_no_value(value) {
        return Some(Outcome::pass());
    }
    if !is_primitive(value) {
        return Some(reject(rule, value, ErrorCode::Format));
    }
    None
}

pub(crate) fn reject(rule: &'static str, value: &Value, code: ErrorCode) -> Outcome {
    tracing::trace!(rule, value_type = value.type_name(), code = %code, "value rejected");
    Outcome::fail(code)
}

pub(crate) fn coerce(rule: &'static str, value: &Value, replacement: Value) -> Outcome {
    tracing::trace!(
        rule,
        from = value.type_name(),
        to = replacement.type_name(),
        "value coerced"
    );
    Outcome::Pass(Some(replacement))
}
