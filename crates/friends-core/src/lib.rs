//! Core types and trait definitions for the friends record store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod patch;
pub mod person;
pub mod store;

pub use error::{Classify, ErrorKind, ValidationError};
pub use patch::{Patch, PersonPatch};
pub use person::{NewPerson, Person, PersonId, parse_birth_date};
