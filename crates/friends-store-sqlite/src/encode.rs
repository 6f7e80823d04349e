//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Birth dates are stored as `YYYY-MM-DD` strings; ids are SQLite rowids.

use chrono::NaiveDate;
use friends_core::{Person, PersonId, person::DATE_FORMAT};

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a person row.
pub struct RawPerson {
  pub id:         i64,
  pub surname:    String,
  pub name:       String,
  pub patronymic: Option<String>,
  pub birth_date: String,
}

impl RawPerson {
  /// Column order matches `Statements::select_*`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      surname:    row.get(1)?,
      name:       row.get(2)?,
      patronymic: row.get(3)?,
      birth_date: row.get(4)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:         PersonId(self.id),
      surname:    self.surname,
      name:       self.name,
      patronymic: self.patronymic,
      birth_date: decode_date(&self.birth_date)?,
    })
  }
}
