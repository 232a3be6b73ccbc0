//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! decision, risk, and goal modules.

mod errors;
mod timestamp;
mod unit_interval;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::Timestamp;
pub use unit_interval::UnitInterval;
