//! The seven numeric rules.

mod between;
mod bounds;
mod decimal;
mod integer;

pub use between::NumberBetweenRule;
pub use bounds::{MaxNumberRule, MinNumberRule};
pub use decimal::{DecimalRule, PositiveDecimalRule};
pub use integer::{IntegerRule, PositiveIntegerRule};

use livr_model::{Result, RuleError, Value};

use crate::primitives::float_of;

/// Validate a comparison argument: a native number or numeric string. A
/// single-element list is unwrapped, since schema layers often pass rule
/// arguments as lists.
pub(crate) fn numeric_argument(rule: &'static str, argument: Value) -> Result<Value> {
    let argument = match argument {
        Value::List(mut items) if items.len() == 1 => items.pop().unwrap_or_default(),
        other => other,
    };
    if argument.is_null() {
        return Err(RuleError::MissingArgument { rule });
    }
    if float_of(&argument).is_none() {
        return Err(RuleError::InvalidArgument {
            rule,
            message: format!("expected a number, got {argument}"),
        });
    }
    Ok(argument)
}
