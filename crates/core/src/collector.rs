//! Error collection across a batch of fallible operations.
//!
//! An [`ErrorCollector`] is filled through chained `with_*` calls and read
//! once the batch is done. It only ever holds present errors, in the order
//! they were added.
//!
//! Mutation goes through `&mut self`. Sharing one collector between threads
//! needs external synchronization such as a `Mutex`.

use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::{DomainError, IntoError, SharedError};
use crate::outcome::OutcomeState;
use crate::value_outcome::ValueOutcome;

/// Ordered, append-only collection of errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    errors: Vec<SharedError>,
}

impl ErrorCollector {
    /// Create an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create an empty collector with room for `capacity` errors.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            errors: Vec::with_capacity(capacity),
        }
    }

    /// Append `error` when present. An absent error is dropped.
    pub fn with_error(&mut self, error: impl IntoError) -> &mut Self {
        match error.into_error() {
            Some(err) => self.push(err),
            None => trace!("dropping absent error"),
        }
        self
    }

    /// Append every present error, in order.
    pub fn with_errors<I>(&mut self, errors: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoError,
    {
        errors.into_iter().for_each(|error| {
            self.with_error(error);
        });
        self
    }

    /// Append the error of a failed outcome. Successes are skipped.
    pub fn with_result(&mut self, result: impl OutcomeState) -> &mut Self {
        match result.error() {
            Some(err) => self.push(SharedError::clone(err)),
            None => trace!("skipping successful outcome"),
        }
        self
    }

    /// Apply [`ErrorCollector::with_result`] to each outcome, in order.
    pub fn with_results<I>(&mut self, results: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: OutcomeState,
    {
        results.into_iter().for_each(|result| {
            self.with_result(result);
        });
        self
    }

    /// All collected errors, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any collected error is an `E`.
    #[must_use]
    pub fn has_error<E: DomainError>(&self) -> bool {
        self.errors.iter().any(|err| err.is::<E>())
    }

    /// The first collected error that is an `E`.
    #[must_use]
    pub fn try_get_error<E: DomainError>(&self) -> Option<&E> {
        self.errors_of::<E>().next()
    }

    /// Every collected `E`, in order, or `None` when there is none.
    #[must_use]
    pub fn try_get_errors<E: DomainError>(&self) -> Option<Vec<&E>> {
        let matching = self.errors_of::<E>().collect_vec();
        (!matching.is_empty()).then_some(matching)
    }

    /// Iterate the collected errors that are an `E`.
    pub fn errors_of<E: DomainError>(&self) -> impl Iterator<Item = &E> {
        self.errors.iter().filter_map(|err| err.downcast_ref::<E>())
    }

    /// Take the collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<SharedError> {
        self.errors
    }

    /// Success when nothing was collected, otherwise a failure carrying the
    /// first error.
    pub fn into_outcome(self) -> ValueOutcome {
        self.errors
            .into_iter()
            .next()
            .map_or_else(ValueOutcome::success, ValueOutcome::from)
    }

    fn push(&mut self, error: SharedError) {
        self.errors.push(error);
        debug!(
            error = error_message(self.errors.last()),
            collected = self.errors.len(),
            "collected error"
        );
    }
}

fn error_message(error: Option<&SharedError>) -> &str {
    error.map_or("", |err| err.message())
}

impl fmt::Display for ErrorCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.message()).join("; "))
    }
}

impl Extend<SharedError> for ErrorCollector {
    fn extend<I: IntoIterator<Item = SharedError>>(&mut self, iter: I) {
        self.with_errors(iter);
    }
}

impl FromIterator<SharedError> for ErrorCollector {
    fn from_iter<I: IntoIterator<Item = SharedError>>(iter: I) -> Self {
        let mut collector = Self::new();
        collector.with_errors(iter);
        collector
    }
}
