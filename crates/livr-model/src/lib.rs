//! Core types shared by LIVR rule implementations.
//!
//! - [`Value`]: the loosely-typed input under validation
//! - [`Outcome`]: pass (with optional replacement) or fail (with an [`ErrorCode`])
//! - [`Rule`]: the single-operation contract every rule implements
//! - [`RuleError`]: construction-time errors

pub mod error;
pub mod error_code;
pub mod outcome;
pub mod rule;
pub mod value;

pub use error::{Result, RuleError};
pub use error_code::ErrorCode;
pub use outcome::Outcome;
pub use rule::Rule;
pub use value::Value;
