use thiserror::Error;

/// Errors raised while constructing a rule.
///
/// Validation failures are never errors; they are reported through
/// [`Outcome::Fail`](crate::Outcome::Fail).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("unknown rule: {name}")]
    UnknownRule { name: String },
    #[error("rule {rule} takes no argument")]
    UnexpectedArgument { rule: &'static str },
    #[error("rule {rule} requires an argument")]
    MissingArgument { rule: &'static str },
    #[error("invalid argument for rule {rule}: {message}")]
    InvalidArgument { rule: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, RuleError>;
