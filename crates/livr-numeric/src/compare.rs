//! Range comparison shared by `max_number`, `min_number` and `number_between`.
//!
//! Comparison runs in three tiers:
//!
//! 1. Native integer input: exact integer comparison when every bound reads
//!    as an integer, float comparison otherwise.
//! 2. Native float input: float comparison.
//! 3. Coerced input (numeric strings, exact decimals): integer comparison
//!    when the value and every bound read as integers, float comparison
//!    otherwise. Only this tier produces a replacement.
//!
//! Bounds are re-read from their raw argument values on every call.

use livr_model::Value;

use crate::primitives::{float_of, integer_of};

/// Which side of the range a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Below,
    Above,
}

/// Result of checking a value against optional lower and upper bounds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RangeCheck {
    Outside(Violation),
    /// In range; `Some` holds the canonical numeric form of a coerced input.
    Within(Option<Value>),
}

/// Compare `value` against the given bounds. The lower bound is checked
/// first, so a value violating both reports [`Violation::Below`].
///
/// Callers must have established that `value` can be coerced to a number.
pub(crate) fn check_range(value: &Value, min: Option<&Value>, max: Option<&Value>) -> RangeCheck {
    match value {
        Value::Integer(v) => {
            if let (Some(lo), Some(hi)) = (read_bound(min, integer_of), read_bound(max, integer_of)) {
                return within_unchanged(classify(*v, lo, hi));
            }
            compare_floats(*v as f64, min, max)
        }
        Value::Float(v) => compare_floats(*v, min, max),
        _ => compare_coerced(value, min, max),
    }
}

fn compare_floats(v: f64, min: Option<&Value>, max: Option<&Value>) -> RangeCheck {
    match (read_bound(min, float_of), read_bound(max, float_of)) {
        (Some(lo), Some(hi)) => within_unchanged(classify(v, lo, hi)),
        // bounds are validated at rule construction
        _ => RangeCheck::Within(None),
    }
}

fn compare_coerced(value: &Value, min: Option<&Value>, max: Option<&Value>) -> RangeCheck {
    if let (Some(v), Some(lo), Some(hi)) = (
        integer_of(value),
        read_bound(min, integer_of),
        read_bound(max, integer_of),
    ) {
        return match classify(v, lo, hi) {
            Some(violation) => RangeCheck::Outside(violation),
            None => RangeCheck::Within(Some(Value::Integer(v))),
        };
    }
    if let (Some(v), Some(lo), Some(hi)) = (
        float_of(value),
        read_bound(min, float_of),
        read_bound(max, float_of),
    ) {
        return match classify(v, lo, hi) {
            Some(violation) => RangeCheck::Outside(violation),
            None => RangeCheck::Within(Some(normalize(v))),
        };
    }
    RangeCheck::Within(None)
}

/// Absent bound reads as `Some(None)` (unbounded); an unreadable bound as `None`.
fn read_bound<T>(bound: Option<&Value>, read: fn(&Value) -> Option<T>) -> Option<Option<T>> {
    match bound {
        None => Some(None),
        Some(value) => read(value).map(Some),
    }
}

fn classify<T: PartialOrd>(v: T, lo: Option<T>, hi: Option<T>) -> Option<Violation> {
    if lo.is_some_and(|lo| v < lo) {
        return Some(Violation::Below);
    }
    if hi.is_some_and(|hi| v > hi) {
        return Some(Violation::Above);
    }
    None
}

fn within_unchanged(violation: Option<Violation>) -> RangeCheck {
    match violation {
        Some(violation) => RangeCheck::Outside(violation),
        None => RangeCheck::Within(None),
    }
}

/// Canonical numeric form of a coerced float: an integer when the fractional
/// part is zero and the value fits in `i64`, the float itself otherwise.
pub(crate) fn normalize(v: f64) -> Value {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Value::Integer(v as i64)
    } else {
        Value::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max(bound: impl Into<Value>, value: impl Into<Value>) -> RangeCheck {
        let bound = bound.into();
        check_range(&value.into(), None, Some(&bound))
    }

    #[test]
    fn native_integers_stay_unchanged() {
        assert_eq!(max(10, 10), RangeCheck::Within(None));
        assert_eq!(max(10, 11), RangeCheck::Outside(Violation::Above));
    }

    #[test]
    fn native_integer_against_fractional_bound_uses_floats() {
        assert_eq!(max("10.5", 10), RangeCheck::Within(None));
        assert_eq!(max(10.5, 11), RangeCheck::Outside(Violation::Above));
    }

    #[test]
    fn native_float_against_integer_bound() {
        assert_eq!(max(10, 9.5), RangeCheck::Within(None));
        assert_eq!(max(10, 10.5), RangeCheck::Outside(Violation::Above));
    }

    #[test]
    fn strings_are_normalized() {
        assert_eq!(max(10, "10.0"), RangeCheck::Within(Some(Value::Integer(10))));
        assert_eq!(max(10, "9.5"), RangeCheck::Within(Some(Value::Float(9.5))));
        assert_eq!(max(10, "7"), RangeCheck::Within(Some(Value::Integer(7))));
    }

    #[test]
    fn large_integer_strings_compare_exactly() {
        // 2^53 + 1 is not representable as f64
        let bound = Value::Integer(9_007_199_254_740_992);
        let value = Value::string("9007199254740993");
        assert_eq!(
            check_range(&value, None, Some(&bound)),
            RangeCheck::Outside(Violation::Above)
        );
    }

    #[test]
    fn lower_bound_is_reported_first() {
        let lo = Value::Integer(10);
        let hi = Value::Integer(5);
        assert_eq!(
            check_range(&Value::Integer(7), Some(&lo), Some(&hi)),
            RangeCheck::Outside(Violation::Below)
        );
    }

    #[test]
    fn normalize_keeps_out_of_range_floats() {
        assert_eq!(normalize(-3.0), Value::Integer(-3));
        assert_eq!(normalize(1e20), Value::Float(1e20));
        assert_eq!(normalize(0.25), Value::Float(0.25));
    }
}
