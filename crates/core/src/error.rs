//! Domain error values.
//!
//! A domain error is plain data: a message and an ordered list of opaque
//! metadata items. Any type implementing [`DomainError`] can travel inside an
//! outcome or a collector; the crate ships two variants, the shared [`Error`]
//! and the owned [`SimpleError`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A failure reason carried by an outcome.
///
/// Implementors are `'static` so that outcomes can test the concrete variant
/// at runtime (see [`DomainError::is`]).
pub trait DomainError: AsAny + fmt::Debug + Send + Sync + 'static {
    /// Human-readable description of the failure.
    fn message(&self) -> &str;

    /// Auxiliary values, in insertion order. Entries may be absent.
    fn metadata(&self) -> &[Metadata];
}

/// Upcast to [`Any`] for variant tests. Implemented for every `'static` type.
#[doc(hidden)]
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn DomainError {
    /// Whether the concrete variant behind this error is `E`.
    #[must_use]
    pub fn is<E: DomainError>(&self) -> bool {
        self.as_any().is::<E>()
    }

    /// The concrete variant, if it is `E`.
    #[must_use]
    pub fn downcast_ref<E: DomainError>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}

/// A type-erased error as stored by outcomes and collectors.
pub type SharedError = Arc<dyn DomainError>;

/// One metadata entry; `None` is a legal, preserved entry.
pub type Metadata = Option<MetadataItem>;

/// An opaque auxiliary value attached to an error.
///
/// Cloning shares the value. Two items are equal when they share it.
#[derive(Clone)]
pub struct MetadataItem {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl MetadataItem {
    /// Wrap a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wrap a value as a present metadata entry.
    pub fn some<T: Any + Send + Sync>(value: T) -> Metadata {
        Some(Self::new(value))
    }

    /// The wrapped value, if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Rust type name of the wrapped value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for MetadataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MetadataItem").field(&self.type_name).finish()
    }
}

impl PartialEq for MetadataItem {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl Eq for MetadataItem {}

#[derive(Debug, PartialEq, Eq)]
struct ErrorRecord {
    message: String,
    metadata: Vec<Metadata>,
}

/// General-purpose error. The record lives on the heap and clones share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(Arc<ErrorRecord>);

impl Error {
    /// Create an error without metadata. The message is taken as-is.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_metadata(message, Vec::new())
    }

    /// Create an error with metadata, keeping order and absent entries.
    pub fn with_metadata(
        message: impl Into<String>,
        metadata: impl IntoIterator<Item = Metadata>,
    ) -> Self {
        Self(Arc::new(ErrorRecord {
            message: message.into(),
            metadata: metadata.into_iter().collect(),
        }))
    }

    /// Append one metadata entry, returning a new error.
    #[must_use]
    pub fn push_metadata(self, item: Metadata) -> Self {
        let ErrorRecord { message, metadata } =
            Arc::try_unwrap(self.0).unwrap_or_else(|shared| ErrorRecord {
                message: shared.message.clone(),
                metadata: shared.metadata.clone(),
            });
        Self::with_metadata(message, metadata.into_iter().chain(std::iter::once(item)))
    }

    /// Whether both handles point at the same record.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.message)
    }
}

impl std::error::Error for Error {}

impl DomainError for Error {
    fn message(&self) -> &str {
        &self.0.message
    }

    fn metadata(&self) -> &[Metadata] {
        &self.0.metadata
    }
}

/// Lightweight owned error. Clones copy the message and metadata list.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SimpleError {
    message: String,
    metadata: Vec<Metadata>,
}

impl SimpleError {
    /// Create an error without metadata. The message is taken as-is.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Vec::new(),
        }
    }

    /// Create an error with metadata, keeping order and absent entries.
    pub fn with_metadata(
        message: impl Into<String>,
        metadata: impl IntoIterator<Item = Metadata>,
    ) -> Self {
        Self {
            message: message.into(),
            metadata: metadata.into_iter().collect(),
        }
    }

    /// Append one metadata entry.
    #[must_use]
    pub fn push_metadata(mut self, item: Metadata) -> Self {
        self.metadata.push(item);
        self
    }
}

impl DomainError for SimpleError {
    fn message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> &[Metadata] {
        &self.metadata
    }
}

/// Conversion into an optional [`SharedError`].
///
/// `None` stands for an absent error: collectors drop it, failure
/// constructors reject it.
pub trait IntoError {
    /// Erase into a shared error, or `None` when absent.
    fn into_error(self) -> Option<SharedError>;
}

impl<E: DomainError> IntoError for E {
    fn into_error(self) -> Option<SharedError> {
        Some(Arc::new(self))
    }
}

impl IntoError for SharedError {
    fn into_error(self) -> Option<SharedError> {
        Some(self)
    }
}

impl IntoError for &SharedError {
    fn into_error(self) -> Option<SharedError> {
        Some(Arc::clone(self))
    }
}

impl<X: IntoError> IntoError for Option<X> {
    fn into_error(self) -> Option<SharedError> {
        self.and_then(IntoError::into_error)
    }
}
