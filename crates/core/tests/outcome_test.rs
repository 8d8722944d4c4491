//! Integration tests for producing and consuming outcomes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]

use std::sync::Once;

use atomic_results::{
    ContractViolation, DomainError, Error, Metadata, MetadataItem, Outcome, OutcomeExt,
    OutcomeState, OutcomeValue, SimpleError, ValueOutcome,
};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Test helper: route library logs to the test writer once per binary.
fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("trace"))
            .with_test_writer()
            .try_init();
    });
}

/// A consumer-defined variant used only to prove discrimination.
#[derive(Debug)]
struct CustomError;

impl DomainError for CustomError {
    fn message(&self) -> &str {
        "custom"
    }

    fn metadata(&self) -> &[Metadata] {
        &[]
    }
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

fn find_user(id: u32) -> Outcome<Option<User>> {
    match id {
        0 => Outcome::fail(SimpleError::with_metadata(
            "invalid id",
            [MetadataItem::some(id)],
        )),
        1 => Outcome::ok(Some(User {
            id,
            name: "Ada".to_string(),
        })),
        _ => Outcome::ok(None),
    }
}

fn load_user(id: u32) -> Outcome<Option<User>> {
    find_user(id).fail_if_none(Error::new(format!("user {id} not found")))
}

#[test]
fn test_lookup_success() {
    let outcome = load_user(1);
    assert!(outcome.is_success());
    let user = outcome.value().as_ref().unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.id, 1);
}

#[test]
fn test_lookup_missing_becomes_failure() {
    let outcome = load_user(7);
    assert!(outcome.has_error::<Error>());
    assert_eq!(
        outcome.try_get_error().map(|e| e.message().to_string()),
        Some("user 7 not found".to_string())
    );
    assert_eq!(outcome.try_value().err(), Some(ContractViolation::ValueOfFailure));
}

#[test]
fn test_lookup_invalid_keeps_original_error() {
    let outcome = load_user(0);
    let error = outcome.try_get_error_as::<SimpleError>().unwrap();
    assert_eq!(error.message(), "invalid id");
    let id = error.metadata()[0]
        .as_ref()
        .and_then(MetadataItem::downcast_ref::<u32>);
    assert_eq!(id, Some(&0));
    assert!(!outcome.has_error::<CustomError>());
}

#[test]
fn test_custom_variant_is_discriminated() {
    let outcome: ValueOutcome<String> = CustomError.into();
    assert!(outcome.has_error::<CustomError>());
    assert!(!outcome.has_error::<Error>());
    assert!(outcome.try_get_error_as::<Error>().is_none());
    assert_eq!(
        outcome.try_get_error_as::<CustomError>().map(DomainError::message),
        Some("custom")
    );
}

#[test]
fn test_payload_outcome_discards_into_plain_outcome() {
    let error = Error::new("gone");
    let failed = ValueOutcome::<Vec<u8>>::fail(error.clone()).discard_value();
    assert!(failed.is_failure());
    assert_eq!(failed.try_get_error_as::<Error>(), Some(&error));

    let ok = ValueOutcome::ok(vec![1_u8]).discard_value();
    assert!(ok.is_success());
    assert!(ok.error().is_none());
}

#[test]
fn test_shared_outcome_keeps_identity() {
    let outcome = Outcome::ok(String::from("shared"));
    let alias = outcome.clone();
    assert!(alias.ptr_eq(&outcome));
    assert!(std::ptr::eq(alias.value(), outcome.value()));
}

#[test]
fn test_value_outcome_copies() {
    let outcome = ValueOutcome::ok(String::from("inline"));
    let copy = outcome.clone();
    assert!(!std::ptr::eq(copy.value(), outcome.value()));
    assert_eq!(copy.value(), outcome.value());
}

#[test]
fn test_std_result_bridge_with_question_mark() {
    fn double(raw: &str) -> Result<u32, atomic_results::SharedError> {
        let parsed = ValueOutcome::from_result(
            raw.parse::<u32>()
                .map_err(|e| SimpleError::new(e.to_string())),
        );
        Ok(parsed.into_result()? * 2)
    }

    assert_eq!(double("21").ok(), Some(42));
    let err = double("x").err().unwrap();
    assert!(err.is::<SimpleError>());
}

#[test]
fn test_logged_combinators_report_failures() {
    init_tracing();

    let missing = load_user(9).into_option_logged();
    assert!(missing.is_none());

    let fallback = ValueOutcome::<u32>::fail(Error::new("no config")).or_default_logged(8080);
    assert_eq!(fallback, 8080);
}
