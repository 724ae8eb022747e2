//! Three-state outcomes for deferred computations.
//!
//! A deferred computation — a network request, a background job, a value a
//! view is waiting on — is at any moment [`Pending`](Outcome::Pending),
//! [`Succeeded`](Outcome::Succeeded), or [`Failed`](Outcome::Failed).
//! [`Outcome`] models those three states as a closed enum, and [`Settled`]
//! models the two resolved states for call sites that have already ruled the
//! pending case out (completion handlers, for instance).
//!
//! The crate is deliberately a data representation plus pure, synchronous
//! combinators: mapping over either payload, tap-style callbacks for side
//! effects, and terminal extraction. It schedules nothing, retries nothing,
//! and never transitions a value in place; producers construct fresh values
//! and publish them however they like.
//!
//! # Examples
//!
//! ```
//! use outcome::Outcome;
//!
//! let fetched: Outcome<u32, String> = Outcome::Succeeded(5);
//! let doubled = fetched.map_succeeded(|n| n * 2);
//! assert_eq!(doubled, Outcome::Succeeded(10));
//! assert_eq!(doubled.get_or_else(|| 0), 10);
//!
//! let failed: Outcome<u32, String> = Outcome::Failed("timeout".into());
//! assert_eq!(failed.get_or_else(|| 0), 0);
//! ```
//!
//! Domain failures travel as the `Failed` payload and are handled with
//! [`Outcome::map_failed`], [`Outcome::on_failed`], [`Outcome::get_or_else`],
//! or [`Settled::into_result`]. The only operations that escalate instead of
//! returning a value are [`Outcome::unwrap`] and [`Outcome::expect`] (and
//! their non-panicking sibling [`Outcome::try_get`]), for call sites where a
//! missing success is a programming error.

mod error;
mod outcome;
mod settled;

pub use error::{NotSucceeded, StillPending};
pub use outcome::Outcome;
pub use settled::Settled;
