//! Inline outcome with value semantics.
//!
//! [`ValueOutcome`] fulfils the same contract as [`Outcome`] but stores its
//! state inline, so clones are independent copies. The default value of the
//! no-payload form is a success.

use std::sync::Arc;

use crate::contract::ContractViolation;
use crate::error::{DomainError, IntoError, SharedError};
use crate::outcome::{Outcome, OutcomeState, OutcomeValue, State};

/// Inline outcome; see the module docs.
#[derive(Debug, Clone)]
#[must_use]
pub struct ValueOutcome<T = ()> {
    state: State<T>,
}

impl<T: Default> Default for ValueOutcome<T> {
    fn default() -> Self {
        Self::ok(T::default())
    }
}

impl ValueOutcome {
    /// The no-payload success, equal to `ValueOutcome::default()`.
    pub const fn success() -> Self {
        Self::ok(())
    }
}

impl<T> ValueOutcome<T> {
    /// Success carrying `value`. An absent payload (`None`) is still a success.
    pub const fn ok(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Failure carrying `error`.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] when `error` is absent.
    #[track_caller]
    pub fn fail(error: impl IntoError) -> Self {
        match Self::try_fail(error) {
            Ok(outcome) => outcome,
            Err(violation) => violation.raise(),
        }
    }

    /// Failure carrying `error`, without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::MissingError`] when `error` is absent.
    pub fn try_fail(error: impl IntoError) -> Result<Self, ContractViolation> {
        State::failure(error).map(Self::from_state)
    }

    /// Lift a std result, erasing its error.
    pub fn from_result<E: DomainError>(result: Result<T, E>) -> Self {
        Self::from_state(State::from_result(result))
    }

    /// Convert into a std result.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome failed.
    pub fn into_result(self) -> Result<T, SharedError> {
        self.state.into_result()
    }

    /// Take the payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOfFailure`] when the outcome
    /// failed.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => ContractViolation::ValueOfFailure.raise(),
        }
    }

    /// Drop the payload, keeping success or the error.
    pub fn discard_value(self) -> ValueOutcome {
        match self.state {
            State::Success(_) => ValueOutcome::success(),
            State::Failure(err) => ValueOutcome::from_state(State::Failure(err)),
        }
    }

    /// Move onto the heap as a shared [`Outcome`].
    pub fn into_shared(self) -> Outcome<T> {
        Outcome::from_shared_state(Arc::new(self.state))
    }

    pub(crate) const fn from_state(state: State<T>) -> Self {
        Self { state }
    }
}

impl<T> ValueOutcome<Option<T>> {
    /// Turn a success without a payload into a failure carrying `error`.
    ///
    /// Failures and successes with a payload come back unchanged.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] when the outcome must
    /// fail and `error` is absent.
    #[track_caller]
    pub fn fail_if_none(self, error: impl IntoError) -> Self {
        if matches!(self.state, State::Success(None)) {
            Self::fail(error)
        } else {
            self
        }
    }
}

impl<T> OutcomeState for ValueOutcome<T> {
    fn error(&self) -> Option<&SharedError> {
        self.state.error()
    }
}

impl<T> OutcomeValue<T> for ValueOutcome<T> {
    fn try_get_value(&self) -> Option<&T> {
        self.state.value()
    }
}

impl<T, E: DomainError> From<E> for ValueOutcome<T> {
    fn from(error: E) -> Self {
        Self::from_state(State::Failure(Arc::new(error)))
    }
}

impl<T> From<SharedError> for ValueOutcome<T> {
    fn from(error: SharedError) -> Self {
        Self::from_state(State::Failure(error))
    }
}
