//! Outcome values: the inspection contract and the shared representation.
//!
//! [`OutcomeState`] and [`OutcomeValue`] are the contract both
//! representations fulfil. [`Outcome`] is the heap-allocated one: clones share
//! a single immutable state, and the no-payload success is one canonical
//! instance.

use std::sync::{Arc, LazyLock};

use crate::contract::ContractViolation;
use crate::error::{DomainError, IntoError, SharedError};
use crate::value_outcome::ValueOutcome;

/// Success or failure, as seen by a consumer.
pub trait OutcomeState {
    /// The stored error, or `None` for a success. Never panics.
    fn error(&self) -> Option<&SharedError>;

    /// Exactly one of `is_success` and `is_failure` holds.
    fn is_success(&self) -> bool {
        self.error().is_none()
    }

    fn is_failure(&self) -> bool {
        self.error().is_some()
    }

    /// Failure whose error is an `E`.
    fn has_error<E: DomainError>(&self) -> bool
    where
        Self: Sized,
    {
        self.error().is_some_and(|err| err.is::<E>())
    }

    /// The stored error, `Some` iff failure.
    fn try_get_error(&self) -> Option<&SharedError> {
        self.error()
    }

    /// The stored error as an `E`; `None` on success or on a different variant.
    fn try_get_error_as<E: DomainError>(&self) -> Option<&E>
    where
        Self: Sized,
    {
        self.error().and_then(|err| err.downcast_ref::<E>())
    }
}

impl<R: OutcomeState + ?Sized> OutcomeState for &R {
    fn error(&self) -> Option<&SharedError> {
        (**self).error()
    }
}

/// Payload access for outcomes that carry a value on success.
pub trait OutcomeValue<T>: OutcomeState {
    /// The payload, `Some` iff success.
    fn try_get_value(&self) -> Option<&T>;

    /// The payload, or [`ContractViolation::ValueOfFailure`] on a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::ValueOfFailure`] when the outcome failed.
    fn try_value(&self) -> Result<&T, ContractViolation> {
        self.try_get_value().ok_or(ContractViolation::ValueOfFailure)
    }

    /// The payload. Check [`OutcomeState::is_success`] first.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOfFailure`] when the outcome
    /// failed. A default payload is never substituted.
    #[track_caller]
    fn value(&self) -> &T {
        match self.try_get_value() {
            Some(value) => value,
            None => ContractViolation::ValueOfFailure.raise(),
        }
    }
}

/// The two states of an outcome, shared by both representations.
#[derive(Debug, Clone)]
pub(crate) enum State<T> {
    Success(T),
    Failure(SharedError),
}

impl<T> State<T> {
    pub(crate) const fn error(&self) -> Option<&SharedError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub(crate) const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Failure from an optional error, rejecting an absent one.
    pub(crate) fn failure(error: impl IntoError) -> Result<Self, ContractViolation> {
        error
            .into_error()
            .map(Self::Failure)
            .ok_or(ContractViolation::MissingError)
    }

    pub(crate) fn from_result<E: DomainError>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(Arc::new(err)),
        }
    }

    pub(crate) fn into_result(self) -> Result<T, SharedError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

static SUCCESS: LazyLock<Outcome> = LazyLock::new(|| Outcome::ok(()));

/// Heap-allocated outcome with reference identity.
///
/// Cloning is cheap and yields a handle to the same state; see
/// [`Outcome::ptr_eq`]. The state never changes after construction.
#[derive(Debug)]
#[must_use]
pub struct Outcome<T = ()>(Arc<State<T>>);

impl<T> Clone for Outcome<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl Outcome {
    /// The canonical no-payload success. Every call returns the same instance.
    pub fn success() -> Self {
        SUCCESS.clone()
    }
}

impl<T> Outcome<T> {
    /// Success carrying `value`. An absent payload (`None`) is still a success.
    pub fn ok(value: T) -> Self {
        Self(Arc::new(State::Success(value)))
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
        State::failure(error).map(|state| Self(Arc::new(state)))
    }

    /// Lift a std result, erasing its error.
    pub fn from_result<E: DomainError>(result: Result<T, E>) -> Self {
        Self(Arc::new(State::from_result(result)))
    }

    /// Whether both handles share one state.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Drop the payload, keeping success or the error.
    pub fn discard_value(self) -> Outcome {
        match self.0.error() {
            None => Outcome::success(),
            Some(err) => Outcome(Arc::new(State::Failure(Arc::clone(err)))),
        }
    }

    /// Convert into a std result, cloning the payload out of the shared state.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome failed.
    pub fn into_result(self) -> Result<T, SharedError>
    where
        T: Clone,
    {
        Arc::unwrap_or_clone(self.0).into_result()
    }

    /// Copy into the value representation.
    pub fn to_value_outcome(&self) -> ValueOutcome<T>
    where
        T: Clone,
    {
        ValueOutcome::from_state(State::clone(&self.0))
    }

    pub(crate) const fn from_shared_state(state: Arc<State<T>>) -> Self {
        Self(state)
    }
}

impl<T> Outcome<Option<T>> {
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
        if matches!(*self.0, State::Success(None)) {
            Self::fail(error)
        } else {
            self
        }
    }
}

impl<T> OutcomeState for Outcome<T> {
    fn error(&self) -> Option<&SharedError> {
        self.0.error()
    }
}

impl<T> OutcomeValue<T> for Outcome<T> {
    fn try_get_value(&self) -> Option<&T> {
        self.0.value()
    }
}

impl<T, E: DomainError> From<E> for Outcome<T> {
    fn from(error: E) -> Self {
        Self(Arc::new(State::Failure(Arc::new(error))))
    }
}

impl<T> From<SharedError> for Outcome<T> {
    fn from(error: SharedError) -> Self {
        Self(Arc::new(State::Failure(error)))
    }
}
