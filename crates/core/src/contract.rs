//! Contract violations raised by outcome construction and payload access.
//!
//! These are programmer errors, not domain failures. The panicking entry
//! points (`fail`, `value`) report them through [`ContractViolation::raise`];
//! the `try_*` mirrors hand them back as values.

use thiserror::Error;

/// A broken precondition of the outcome API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// A failure was requested without an error to carry.
    #[error("a failed outcome requires an error, got none (parameter 'error')")]
    MissingError,

    /// The payload of a failed outcome was read.
    #[error("outcome is in failed state, value is not set")]
    ValueOfFailure,
}

impl ContractViolation {
    /// Abort the caller with this violation.
    ///
    /// # Panics
    ///
    /// Always. The message is the violation's `Display` text.
    #[allow(clippy::panic)]
    #[track_caller]
    #[cold]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}
