//! The `PersonStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `friends-store-sqlite`).
//! Higher layers (`friends-api`, `friends-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  error::Classify,
  patch::PersonPatch,
  person::{NewPerson, Person, PersonId},
};

/// Abstraction over a record store backend.
///
/// Each operation is atomic: it either completes or leaves no persisted
/// effect. All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Classify + Send + Sync + 'static;

  /// All records, ordered by id.
  fn list(&self) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// A single record; fails with a not-found error if `id` is absent.
  fn get(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Persist a new record and return it with its assigned id.
  fn create(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Persist many records at once, all or nothing. Returned records are in
  /// input order.
  fn create_many(
    &self,
    inputs: Vec<NewPerson>,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Apply a sparse merge to an existing record.
  ///
  /// An empty patch is rejected before the store is consulted, so it fails
  /// with a validation error whether or not `id` exists.
  fn update(
    &self,
    id: PersonId,
    patch: PersonPatch,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Remove a record; fails with a not-found error if `id` is absent.
  fn delete(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
