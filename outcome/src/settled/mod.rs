//! The two-state [`Settled`] type: an outcome known to have resolved.
//!
//! `Settled` is its own sum type rather than a runtime-narrowed view of
//! [`Outcome`]: a completion handler that receives a `Settled` cannot be
//! handed a pending value, and the compiler enforces it. Inclusion into the
//! broader type ([`Settled::into_outcome`]) is total; the reverse direction
//! goes through `TryFrom` and can observe [`StillPending`].

use core::fmt;

use crate::error::{NotSucceeded, StillPending};
use crate::outcome::Outcome;


/// A resolved outcome: either a value or a domain error, never pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Settled<T, E> {
    /// The computation resolved with a value.
    Succeeded(T),
    /// The computation resolved with a domain error.
    Failed(E),
}

impl<T, E> Settled<T, E> {
    /// Returns `true` if the outcome resolved with a value.
    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` if the outcome resolved with an error.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Converts from `&Settled<T, E>` to `Settled<&T, &E>`.
    #[must_use]
    pub const fn as_ref(&self) -> Settled<&T, &E> {
        match self {
            Self::Succeeded(data) => Settled::Succeeded(data),
            Self::Failed(error) => Settled::Failed(error),
        }
    }

    /// Widens into the three-state [`Outcome`] by inclusion.
    ///
    /// Lossless and total: each variant maps to its namesake, and nothing can
    /// become `Pending`.
    #[must_use]
    pub fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Self::Succeeded(data) => Outcome::Succeeded(data),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Transforms the success payload, with the pending case statically
    /// impossible rather than merely unreachable.
    #[must_use]
    pub fn map_succeeded<U>(self, transform: impl FnOnce(T) -> U) -> Settled<U, E> {
        match self {
            Self::Succeeded(data) => Settled::Succeeded(transform(data)),
            Self::Failed(error) => Settled::Failed(error),
        }
    }

    /// Transforms the error payload; the mirror image of
    /// [`Settled::map_succeeded`].
    #[must_use]
    pub fn map_failed<F>(self, transform: impl FnOnce(E) -> F) -> Settled<T, F> {
        match self {
            Self::Succeeded(data) => Settled::Succeeded(data),
            Self::Failed(error) => Settled::Failed(transform(error)),
        }
    }

    /// Invokes `action` with the success payload, then returns the value
    /// unchanged.
    #[must_use]
    pub fn on_succeeded(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Succeeded(data) = &self {
            action(data);
        }
        self
    }

    /// Invokes `action` with the error payload, then returns the value
    /// unchanged.
    #[must_use]
    pub fn on_failed(self, action: impl FnOnce(&E)) -> Self {
        if let Self::Failed(error) = &self {
            action(error);
        }
        self
    }

    /// Returns the success payload, or the result of `fallback` for a
    /// failure. See [`Outcome::get_or_else`].
    pub fn get_or_else(self, fallback: impl FnOnce() -> T) -> T {
        self.into_outcome().get_or_else(fallback)
    }

    /// Returns the success payload, or `None` for a failure.
    #[must_use]
    pub fn get(self) -> Option<T> {
        self.into_outcome().get()
    }

    /// Returns the success payload, or the preserved failure.
    ///
    /// # Errors
    ///
    /// Returns [`NotSucceeded::Failed`] carrying the domain error; a settled
    /// value can never produce [`NotSucceeded::Pending`].
    pub fn try_get(self) -> Result<T, NotSucceeded<E>> {
        self.into_outcome().try_get()
    }

    /// Returns the success payload, panicking on a failure.
    ///
    /// # Panics
    ///
    /// Panics with the failure's payload if the value is `Failed`.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        self.into_outcome().unwrap()
    }

    /// Returns the success payload, panicking with `msg` on a failure.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the failure's payload if the value is `Failed`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        self.into_outcome().expect(msg)
    }

    /// Adapts into the conventional two-state `Result`.
    ///
    /// One-way by design: `Result` has no notion of "pending", which is
    /// exactly why this adapter lives on `Settled` and not on `Outcome`.
    ///
    /// # Errors
    ///
    /// Returns `Err` wrapping the domain error for a `Failed` value.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Succeeded(data) => Ok(data),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<T, E> From<Settled<T, E>> for Outcome<T, E> {
    fn from(settled: Settled<T, E>) -> Self {
        settled.into_outcome()
    }
}

impl<T, E> From<Settled<T, E>> for Result<T, E> {
    fn from(settled: Settled<T, E>) -> Self {
        settled.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Settled<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Succeeded(data),
            Err(error) => Self::Failed(error),
        }
    }
}

impl<T, E> TryFrom<Outcome<T, E>> for Settled<T, E> {
    type Error = StillPending;

    /// Narrows a resolved outcome, observing [`StillPending`] otherwise.
    fn try_from(outcome: Outcome<T, E>) -> Result<Self, StillPending> {
        match outcome {
            Outcome::Pending => Err(StillPending),
            Outcome::Succeeded(data) => Ok(Self::Succeeded(data)),
            Outcome::Failed(error) => Ok(Self::Failed(error)),
        }
    }
}
