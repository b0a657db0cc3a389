//! Error types for the eligibility rule engine

use thiserror::Error;

/// Internal error type for leaf condition matching.
///
/// The engine surface never propagates these: a malformed or unsupported
/// condition degrades to a failed [`Evaluation`](crate::Evaluation) whose
/// reason text is this error's `Display` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Condition text does not match `attr OP value`
    #[error("Invalid condition format.")]
    InvalidCondition,

    /// Operator token is something other than `>`, `<` or `=`
    #[error("Unsupported operator.")]
    UnsupportedOperator,
}

/// Result type alias for the eligibility rule engine
pub type Result<T> = std::result::Result<T, EngineError>;
