//! Extension traits for outcomes.
//!
//! [`OutcomeExt`] provides logged combinators that never panic.
//! [`IntoOutcome`] lifts any payload into a successful outcome.

use tap::Tap;

use crate::error::SharedError;
use crate::outcome::{Outcome, OutcomeState};
use crate::value_outcome::ValueOutcome;

/// Logged combinators for outcomes carrying a payload.
///
/// Failures that get discarded are reported through `tracing` at error level.
pub trait OutcomeExt<T>: Sized {
    /// Convert to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the payload or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;

    /// Inspect the error without consuming the outcome.
    fn inspect_error<F: FnOnce(&SharedError)>(self, f: F) -> Self;
}

impl<T> OutcomeExt<T> for ValueOutcome<T> {
    fn into_option_logged(self) -> Option<T> {
        match self.into_result() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e.message());
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e.message());
                default
            }
        }
    }

    fn inspect_error<F: FnOnce(&SharedError)>(self, f: F) -> Self {
        self.tap(|outcome| {
            if let Some(e) = outcome.error() {
                f(e);
            }
        })
    }
}

impl<T: Clone> OutcomeExt<T> for Outcome<T> {
    fn into_option_logged(self) -> Option<T> {
        match self.into_result() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e.message());
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e.message());
                default
            }
        }
    }

    fn inspect_error<F: FnOnce(&SharedError)>(self, f: F) -> Self {
        self.tap(|outcome| {
            if let Some(e) = outcome.error() {
                f(e);
            }
        })
    }
}

/// Lift a payload into a successful outcome.
///
/// Equivalent to [`Outcome::ok`] and [`ValueOutcome::ok`].
pub trait IntoOutcome: Sized {
    /// Wrap as a shared successful outcome.
    fn into_outcome(self) -> Outcome<Self> {
        Outcome::ok(self)
    }

    /// Wrap as an inline successful outcome.
    fn into_value_outcome(self) -> ValueOutcome<Self> {
        ValueOutcome::ok(self)
    }
}

impl<T> IntoOutcome for T {}
