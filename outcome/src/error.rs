//! Errors raised when an outcome lacks the success its caller needed.

use thiserror::Error;

/// Returned when narrowing an [`Outcome`](crate::Outcome) that has not
/// resolved yet.
///
/// Produced by the `TryFrom<Outcome<T, E>>` implementation on
/// [`Settled`](crate::Settled); the succeeded and failed variants always
/// narrow, so a still-pending value is the only way the conversion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the outcome is still pending")]
pub struct StillPending;

/// Describes why an outcome held no success value, keeping the discarded
/// state.
///
/// Returned by [`Outcome::try_get`](crate::Outcome::try_get). The original
/// error payload rides along in [`NotSucceeded::Failed`] so callers can still
/// inspect or rewrap it after the extraction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotSucceeded<E> {
    /// The outcome had not resolved when the success value was requested.
    #[error("the outcome is still pending")]
    Pending,
    /// The outcome resolved to a failure; the domain error is preserved.
    #[error("the outcome failed: {0}")]
    Failed(E),
}

impl<E> NotSucceeded<E> {
    /// Returns the preserved domain error, if the outcome had failed.
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Pending => None,
            Self::Failed(error) => Some(error),
        }
    }
}
