//! Error types for the HabitMind domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Builder- and
//! catalog-level errors live in [`Error`]; the backend seam has its own
//! [`BackendError`] so a real generative backend can fail without widening
//! the library surface.

use thiserror::Error;

/// The top-level error type for all HabitMind operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A habit id outside the dense 1..=16 range was supplied to a prompt
    /// builder or to the catalog. Never coerced to a default habit.
    #[error("invalid habit id {id}: expected 1..=16")]
    InvalidHabitId { id: u8 },

    /// A required free-text field was empty after trimming, or a
    /// multi-habit tool received an empty habit selection.
    #[error("required field `{field}` is empty")]
    EmptyInput { field: &'static str },

    // --- Backend errors ---
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a generative backend may report from `invoke`.
///
/// The simulated backend never produces these. They define the contract a
/// real model backend must honor when substituted behind the [`Backend`]
/// trait, so callers already handle the failed outcome.
///
/// [`Backend`]: crate::backend::Backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("invocation failed: {message}")]
    InvocationFailed { message: String },

    #[error("backend timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("backend not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_habit_id_names_the_offending_id() {
        let err = Error::InvalidHabitId { id: 17 };
        assert_eq!(err.to_string(), "invalid habit id 17: expected 1..=16");
    }

    #[test]
    fn backend_error_converts_into_top_level_error() {
        let backend = BackendError::Timeout { elapsed_ms: 30_000 };
        let err: Error = backend.into();
        assert!(matches!(err, Error::Backend(BackendError::Timeout { .. })));
    }
}
