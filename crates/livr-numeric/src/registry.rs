//! Rule construction by name.
//!
//! Schema layers refer to rules by their stable names (`max_number`, ...)
//! and pass the argument payload already parsed. This module resolves the
//! name, checks the argument shape and applies per-instance options.

use livr_model::{ErrorCode, Result, Rule, RuleError, Value};
use tracing::debug;

use crate::rules::{
    DecimalRule, IntegerRule, MaxNumberRule, MinNumberRule, NumberBetweenRule,
    PositiveDecimalRule, PositiveIntegerRule,
};

/// Shape of the argument a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No argument.
    Zero,
    /// A single number.
    One,
    /// An ordered `[min, max]` pair.
    Pair,
}

impl Arity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zero => "-",
            Self::One => "number",
            Self::Pair => "[min, max]",
        }
    }
}

/// The numeric rules known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Integer,
    PositiveInteger,
    Decimal,
    PositiveDecimal,
    MaxNumber,
    MinNumber,
    NumberBetween,
}

impl RuleKind {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Integer,
            Self::PositiveInteger,
            Self::Decimal,
            Self::PositiveDecimal,
            Self::MaxNumber,
            Self::MinNumber,
            Self::NumberBetween,
        ]
    }

    /// Registry name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => IntegerRule::NAME,
            Self::PositiveInteger => PositiveIntegerRule::NAME,
            Self::Decimal => DecimalRule::NAME,
            Self::PositiveDecimal => PositiveDecimalRule::NAME,
            Self::MaxNumber => MaxNumberRule::NAME,
            Self::MinNumber => MinNumberRule::NAME,
            Self::NumberBetween => NumberBetweenRule::NAME,
        }
    }

    /// Resolve a registry name. Matching is exact.
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }

    pub const fn default_error_code(&self) -> ErrorCode {
        match self {
            Self::Integer => IntegerRule::DEFAULT_ERROR_CODE,
            Self::PositiveInteger => PositiveIntegerRule::DEFAULT_ERROR_CODE,
            Self::Decimal => DecimalRule::DEFAULT_ERROR_CODE,
            Self::PositiveDecimal => PositiveDecimalRule::DEFAULT_ERROR_CODE,
            Self::MaxNumber => MaxNumberRule::DEFAULT_ERROR_CODE,
            Self::MinNumber => MinNumberRule::DEFAULT_ERROR_CODE,
            Self::NumberBetween => NumberBetweenRule::DEFAULT_ERROR_CODE,
        }
    }

    pub const fn arity(&self) -> Arity {
        match self {
            Self::Integer | Self::PositiveInteger | Self::Decimal | Self::PositiveDecimal => {
                Arity::Zero
            }
            Self::MaxNumber | Self::MinNumber => Arity::One,
            Self::NumberBetween => Arity::Pair,
        }
    }

    /// Description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Integer => "Whole number; integer strings are coerced",
            Self::PositiveInteger => "Whole number greater than zero",
            Self::Decimal => "Finite real number; native integers are rejected",
            Self::PositiveDecimal => "Decimal of at least 1 (strings: greater than 0)",
            Self::MaxNumber => "Number not above the argument",
            Self::MinNumber => "Number not below the argument",
            Self::NumberBetween => "Number within [min, max], inclusive",
        }
    }

    /// Build a rule of this kind with its default error code.
    pub fn build(self, argument: Option<Value>) -> Result<Box<dyn Rule>> {
        let argument = argument.filter(|value| !is_empty_argument(value));
        let rule: Box<dyn Rule> = match self {
            Self::Integer => {
                self.no_argument(argument)?;
                Box::new(IntegerRule::new())
            }
            Self::PositiveInteger => {
                self.no_argument(argument)?;
                Box::new(PositiveIntegerRule::new())
            }
            Self::Decimal => {
                self.no_argument(argument)?;
                Box::new(DecimalRule::new())
            }
            Self::PositiveDecimal => {
                self.no_argument(argument)?;
                Box::new(PositiveDecimalRule::new())
            }
            Self::MaxNumber => Box::new(MaxNumberRule::new(self.required(argument)?)?),
            Self::MinNumber => Box::new(MinNumberRule::new(self.required(argument)?)?),
            Self::NumberBetween => {
                Box::new(NumberBetweenRule::from_argument(self.required(argument)?)?)
            }
        };
        Ok(rule)
    }

    fn no_argument(self, argument: Option<Value>) -> Result<()> {
        match argument {
            None => Ok(()),
            Some(_) => Err(RuleError::UnexpectedArgument { rule: self.name() }),
        }
    }

    fn required(self, argument: Option<Value>) -> Result<Value> {
        argument.ok_or(RuleError::MissingArgument { rule: self.name() })
    }
}

/// `null` and `[]` both mean "no argument".
fn is_empty_argument(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::List(items) => items.is_empty(),
        _ => false,
    }
}

/// Per-instance configuration applied when a rule is built.
#[derive(Debug, Clone, Default)]
pub struct RuleOptions {
    /// Replaces the code reported for constraint violations. `FORMAT` and
    /// `NOT_NUMBER` stay generic, and `number_between` keeps reporting
    /// `TOO_LOW`/`TOO_HIGH`.
    pub error_code: Option<ErrorCode>,
}

impl RuleOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the constraint error code.
    #[must_use]
    pub fn with_error_code(mut self, code: ErrorCode) -> Self {
        self.error_code = Some(code);
        self
    }
}

/// Build a rule from its registry name and argument payload.
pub fn build_rule(
    name: &str,
    argument: Option<Value>,
    options: &RuleOptions,
) -> Result<Box<dyn Rule>> {
    let kind = RuleKind::parse(name).ok_or_else(|| RuleError::UnknownRule {
        name: name.to_string(),
    })?;
    let mut rule = kind.build(argument)?;
    if let Some(code) = options.error_code {
        rule.set_error_code(code);
    }
    debug!(rule = kind.name(), error_code = %rule.error_code(), "built rule");
    Ok(rule)
}
