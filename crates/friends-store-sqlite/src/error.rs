//! Error type for `friends-store-sqlite`.

use friends_core::{Classify, ErrorKind, PersonId, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person not found: {0}")]
  NotFound(PersonId),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  /// A stored `birth_date` column could not be decoded.
  #[error("date parse error: {0}")]
  DateParse(String),

  #[error("invalid table name {0:?}: expected [A-Za-z_][A-Za-z0-9_]*")]
  InvalidTableName(String),
}

impl Classify for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::NotFound(_) => ErrorKind::NotFound,
      Error::Validation(_) => ErrorKind::Validation,
      Error::Database(_)
      | Error::Sqlite(_)
      | Error::DateParse(_)
      | Error::InvalidTableName(_) => ErrorKind::Storage,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
