//! # atomic-results
//!
//! Outcome values that replace exceptions, plus an error collector for
//! batches of fallible operations.
//!
//! ## Model
//!
//! - An operation returns an [`Outcome`] (shared, reference identity) or a
//!   [`ValueOutcome`] (inline, copied on clone). Both are either a success,
//!   optionally carrying a payload, or a failure carrying a [`SharedError`].
//! - Errors are any type implementing [`DomainError`]. The crate ships
//!   [`Error`] and [`SimpleError`]; callers add their own variants and
//!   discriminate them with [`OutcomeState::has_error`] and
//!   [`OutcomeState::try_get_error_as`].
//! - [`ErrorCollector`] gathers the failures of many outcomes in order.
//!
//! ## Panics
//!
//! Domain errors are data and never unwind. Only two contract violations
//! panic, both with a [`ContractViolation`] message:
//!
//! - building a failure from an absent error (`fail(None)`)
//! - reading the payload of a failure (`value()`)
//!
//! Each has a non-panicking mirror (`try_fail`, `try_value`).
//!
//! ## Example
//!
//! ```
//! use atomic_results::{Error, ErrorCollector, Outcome, OutcomeState, OutcomeValue};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>()
//!         .map_or_else(|_| Outcome::fail(Error::new(format!("bad port {raw}"))), Outcome::ok)
//! }
//!
//! let ok = parse_port("8080");
//! assert_eq!(*ok.value(), 8080);
//!
//! let mut collector = ErrorCollector::new();
//! collector.with_result(&parse_port("x")).with_result(&ok);
//! assert_eq!(collector.len(), 1);
//! assert!(collector.has_error::<Error>());
//! ```

pub mod collector;
pub mod contract;
pub mod error;
pub mod ext;
pub mod outcome;
pub mod value_outcome;

pub use collector::ErrorCollector;
pub use contract::ContractViolation;
pub use error::{DomainError, Error, IntoError, Metadata, MetadataItem, SharedError, SimpleError};
pub use ext::{IntoOutcome, OutcomeExt};
pub use outcome::{Outcome, OutcomeState, OutcomeValue};
pub use value_outcome::ValueOutcome;
