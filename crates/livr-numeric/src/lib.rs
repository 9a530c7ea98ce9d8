//! Numeric LIVR rules.
//!
//! Seven independent rules validate loosely-typed values against numeric
//! constraints and coerce numeric strings into canonical numbers:
//!
//! | Rule               | Argument     | Default error code       |
//! |--------------------|--------------|--------------------------|
//! | `integer`          | -            | `NOT_INTEGER`            |
//! | `positive_integer` | -            | `NOT_POSITIVE_INTEGER`   |
//! | `decimal`          | -            | `NOT_DECIMAL`            |
//! | `positive_decimal` | -            | `NOT_POSITIVE_DECIMAL`   |
//! | `max_number`       | number       | `TOO_HIGH`               |
//! | `min_number`       | number       | `TOO_LOW`                |
//! | `number_between`   | `[min, max]` | `TOO_LOW` / `TOO_HIGH`   |
//!
//! Every rule passes absent values (`null`, `""`) untouched and rejects
//! lists and maps with `FORMAT`.
//!
//! # Example
//!
//! ```
//! use livr_model::{ErrorCode, Outcome, Rule, Value};
//! use livr_numeric::{RuleOptions, build_rule};
//!
//! let rule = build_rule("max_number", Some(Value::Integer(10)), &RuleOptions::new()).unwrap();
//! assert_eq!(rule.validate(&Value::string("10.0")), Outcome::coerced(10i64));
//! assert_eq!(rule.validate(&Value::Integer(11)), Outcome::fail(ErrorCode::TooHigh));
//! ```

mod compare;
pub mod primitives;
pub mod registry;
pub mod rules;

pub use registry::{Arity, RuleKind, RuleOptions, build_rule};
pub use rules::{
    DecimalRule, IntegerRule, MaxNumberRule, MinNumberRule, NumberBetweenRule,
    PositiveDecimalRule, PositiveIntegerRule,
};
