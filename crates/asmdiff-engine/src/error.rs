//! Error types for the engine crate.

use thiserror::Error;

/// Errors that can occur during comparison.
///
/// Comparison over in-memory data is otherwise pure; the only failure mode
/// is a contract violation at the dynamic comparator seam.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The two operands of a single comparison call were not both of the
    /// comparator's operand type.
    #[error("incomparable operands: expected both sides to be {expected}")]
    Incomparable {
        /// Type name the comparator expected on both sides.
        expected: &'static str,
    },
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
