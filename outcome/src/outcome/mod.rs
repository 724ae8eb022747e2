//! The three-state [`Outcome`] type and its combinators.
//!
//! Every operation here is a pure function of its input: combinators consume
//! one outcome and produce a brand-new value (or a plain value), so holding an
//! `Outcome` never hands anyone a mutation surface. Closures supplied by the
//! caller are invoked at most once, and nothing here catches a panic they
//! raise.

use core::fmt;

use crate::error::NotSucceeded;

#[cfg(test)]
mod tests;

/// The status of a deferred computation: not yet resolved, resolved with a
/// value, or resolved with an error.
///
/// `Pending` carries no payload, so equality is purely structural: every
/// pending outcome compares equal to every other, whatever `T` and `E` are
/// instantiated to. The two resolved variants hold exactly one payload each
/// and never mutate it; transformation always goes through a combinator that
/// builds a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation has not resolved yet.
    Pending,
    /// The computation resolved with a value.
    Succeeded(T),
    /// The computation resolved with a domain error.
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome has not resolved yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

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

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>` so the payload can
    /// be inspected without consuming the outcome.
    #[must_use]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Pending => Outcome::Pending,
            Self::Succeeded(data) => Outcome::Succeeded(data),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Transforms the success payload, passing the other variants through
    /// untouched.
    ///
    /// A panic raised by `transform` propagates to the caller; this combinator
    /// never catches it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let o: Outcome<u32, &str> = Outcome::Succeeded(5);
    /// assert_eq!(o.map_succeeded(|n| n * 2), Outcome::Succeeded(10));
    ///
    /// let e: Outcome<u32, &str> = Outcome::Failed("boom");
    /// assert_eq!(e.map_succeeded(|n| n * 2), Outcome::Failed("boom"));
    /// ```
    #[must_use]
    pub fn map_succeeded<U>(self, transform: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Pending => Outcome::Pending,
            Self::Succeeded(data) => Outcome::Succeeded(transform(data)),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Transforms the error payload, passing the other variants through
    /// untouched. The mirror image of [`Outcome::map_succeeded`].
    #[must_use]
    pub fn map_failed<F>(self, transform: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Pending => Outcome::Pending,
            Self::Succeeded(data) => Outcome::Succeeded(data),
            Self::Failed(error) => Outcome::Failed(transform(error)),
        }
    }

    /// Invokes `action` with the success payload, then returns the outcome
    /// unchanged.
    ///
    /// Tap semantics for fluent chains: the return value is always `self`,
    /// whichever variant it is.
    #[must_use]
    pub fn on_succeeded(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Succeeded(data) = &self {
            action(data);
        }
        self
    }

    /// Invokes `action` with the error payload, then returns the outcome
    /// unchanged.
    #[must_use]
    pub fn on_failed(self, action: impl FnOnce(&E)) -> Self {
        if let Self::Failed(error) = &self {
            action(error);
        }
        self
    }

    /// Invokes `action` if the outcome is still pending, then returns the
    /// outcome unchanged.
    #[must_use]
    pub fn on_pending(self, action: impl FnOnce()) -> Self {
        if self.is_pending() {
            action();
        }
        self
    }

    /// Returns the success payload, or the result of `fallback` for a pending
    /// or failed outcome (the error is discarded).
    ///
    /// `fallback` is lazy: it runs only when needed, and at most once.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Failed("err");
    /// assert_eq!(failed.get_or_else(|| -1), -1);
    /// ```
    pub fn get_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Succeeded(data) => data,
            Self::Pending | Self::Failed(_) => fallback(),
        }
    }

    /// Returns the success payload, or `None` for a pending or failed
    /// outcome.
    #[must_use]
    pub fn get(self) -> Option<T> {
        self.map_succeeded(Some).get_or_else(|| None)
    }

    /// Returns the success payload, or a [`NotSucceeded`] describing which
    /// non-success state was found.
    ///
    /// The non-panicking extraction: a failed outcome's error payload is
    /// preserved inside the returned [`NotSucceeded::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`NotSucceeded::Pending`] for a pending outcome and
    /// [`NotSucceeded::Failed`] for a failed one.
    pub fn try_get(self) -> Result<T, NotSucceeded<E>> {
        match self {
            Self::Pending => Err(NotSucceeded::Pending),
            Self::Succeeded(data) => Ok(data),
            Self::Failed(error) => Err(NotSucceeded::Failed(error)),
        }
    }

    /// Returns the success payload, panicking if the outcome is pending or
    /// failed.
    ///
    /// For call sites where a missing success is a programming error; the
    /// domain-failure channel stays with [`Outcome::get_or_else`] and friends.
    ///
    /// # Panics
    ///
    /// Panics with a message naming the variant (and, for a failure, the
    /// error payload) if the outcome is not `Succeeded`.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Succeeded(data) => data,
            Self::Failed(error) => {
                panic!("called `Outcome::unwrap()` on a `Failed` value: {error:?}")
            }
            Self::Pending => panic!("called `Outcome::unwrap()` on a `Pending` value"),
        }
    }

    /// Returns the success payload, panicking with `msg` if the outcome is
    /// pending or failed.
    ///
    /// # Panics
    ///
    /// Panics with `msg` (plus the error payload, for a failure) if the
    /// outcome is not `Succeeded`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Succeeded(data) => data,
            Self::Failed(error) => panic!("{msg}: {error:?}"),
            Self::Pending => panic!("{msg}"),
        }
    }
}

/// A fresh outcome starts pending; producers replace it once the computation
/// resolves.
impl<T, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Adopts an already-resolved `Result`; `Pending` has no `Result`
    /// counterpart, so the conversion is total.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Succeeded(data),
            Err(error) => Self::Failed(error),
        }
    }
}
