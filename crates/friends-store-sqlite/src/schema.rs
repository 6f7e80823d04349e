//! SQL schema and statements for the friends SQLite store.
//!
//! The table name is configurable, so every statement is rendered once at
//! open time from a validated [`TableName`].

use std::fmt;

use crate::{Error, Result};

// ─── Table name ──────────────────────────────────────────────────────────────

/// A SQL identifier safe to interpolate into statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
  pub const DEFAULT: &'static str = "friends";

  pub fn new(name: impl Into<String>) -> Result<Self> {
    let name = name.into();
    let mut chars = name.chars();
    let valid = chars
      .next()
      .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
      && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid {
      return Err(Error::InvalidTableName(name));
    }
    Ok(Self(name))
  }
}

impl Default for TableName {
  fn default() -> Self { Self(Self::DEFAULT.to_owned()) }
}

impl fmt::Display for TableName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── DDL ─────────────────────────────────────────────────────────────────────

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again.
pub fn schema(table: &TableName) -> String {
  format!(
    "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS {table} (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    surname     TEXT NOT NULL,
    name        TEXT NOT NULL,
    patronymic  TEXT,
    birth_date  TEXT NOT NULL   -- YYYY-MM-DD
);
"
  )
}

// ─── Statements ──────────────────────────────────────────────────────────────

/// Pre-rendered statements for one table.
#[derive(Debug)]
pub struct Statements {
  pub select_all: String,
  pub select_one: String,
  pub insert:     String,
  pub update:     String,
  pub delete:     String,
}

impl Statements {
  pub fn new(table: &TableName) -> Self {
    const COLUMNS: &str = "id, surname, name, patronymic, birth_date";
    Self {
      select_all: format!("SELECT {COLUMNS} FROM {table} ORDER BY id"),
      select_one: format!("SELECT {COLUMNS} FROM {table} WHERE id = ?1"),
      insert:     format!(
        "INSERT INTO {table} (surname, name, patronymic, birth_date)
         VALUES (?1, ?2, ?3, ?4)"
      ),
      update:     format!(
        "UPDATE {table}
         SET surname = ?1, name = ?2, patronymic = ?3, birth_date = ?4
         WHERE id = ?5"
      ),
      delete:     format!("DELETE FROM {table} WHERE id = ?1"),
    }
  }
}
