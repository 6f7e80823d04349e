//! Error types for `friends-core`.

use thiserror::Error;

/// Input that breaks a [`Person`](crate::person::Person) invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("invalid birth date {0:?}: expected YYYY-MM-DD")]
  InvalidBirthDate(String),

  #[error("at least one field must be provided")]
  EmptyPatch,
}

/// Coarse classification of a store failure, used by outer layers to pick a
/// response without knowing the concrete backend error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The referenced id does not exist.
  NotFound,
  /// The caller supplied data that violates an invariant.
  Validation,
  /// The persistence layer failed.
  Storage,
}

/// Implemented by backend error types so they can be classified generically.
pub trait Classify {
  fn kind(&self) -> ErrorKind;
}
