//! Person records and the validation rules every stored record satisfies.
//!
//! A [`NewPerson`] can only be built through [`NewPerson::new`], which trims
//! and validates its inputs. Stores therefore never see unvalidated data.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Wire and storage format for birth dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned identifier. Positive, unique, never reused.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A stored person, as returned by every read and write operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:         PersonId,
  pub surname:    String,
  pub name:       String,
  pub patronymic: Option<String>,
  pub birth_date: NaiveDate,
}

// ─── NewPerson ───────────────────────────────────────────────────────────────

/// Validated input to [`crate::store::PersonStore::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
  surname:    String,
  name:       String,
  patronymic: Option<String>,
  birth_date: NaiveDate,
}

impl NewPerson {
  /// Trim and validate the fields of a person.
  ///
  /// `surname` and `name` must be non-empty after trimming. A patronymic that
  /// trims to nothing is treated as absent.
  pub fn new(
    surname: impl Into<String>,
    name: impl Into<String>,
    patronymic: Option<String>,
    birth_date: NaiveDate,
  ) -> Result<Self, ValidationError> {
    Ok(Self {
      surname: required("surname", surname.into())?,
      name: required("name", name.into())?,
      patronymic: optional(patronymic),
      birth_date,
    })
  }

  pub fn surname(&self) -> &str { &self.surname }

  pub fn name(&self) -> &str { &self.name }

  pub fn patronymic(&self) -> Option<&str> { self.patronymic.as_deref() }

  pub fn birth_date(&self) -> NaiveDate { self.birth_date }

  /// Attach a store-assigned id.
  pub fn into_person(self, id: PersonId) -> Person {
    Person {
      id,
      surname: self.surname,
      name: self.name,
      patronymic: self.patronymic,
      birth_date: self.birth_date,
    }
  }
}

fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::EmptyField(field));
  }
  Ok(trimmed.to_owned())
}

fn optional(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_owned())
    .filter(|v| !v.is_empty())
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Parse a birth date in strict `YYYY-MM-DD` form.
///
/// chrono alone accepts unpadded months and days, so the shape is checked
/// before handing the string to it.
pub fn parse_birth_date(s: &str) -> Result<NaiveDate, ValidationError> {
  let invalid = || ValidationError::InvalidBirthDate(s.to_owned());

  let bytes = s.as_bytes();
  let well_formed = bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    });
  if !well_formed {
    return Err(invalid());
  }

  NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(s: &str) -> NaiveDate { parse_birth_date(s).unwrap() }

  #[test]
  fn new_person_trims_fields() {
    let p = NewPerson::new(
      "  Ivanov ",
      "\tIvan",
      Some(" Ivanovich  ".into()),
      date("1990-05-20"),
    )
    .unwrap();
    assert_eq!(p.surname(), "Ivanov");
    assert_eq!(p.name(), "Ivan");
    assert_eq!(p.patronymic(), Some("Ivanovich"));
  }

  #[test]
  fn empty_surname_is_rejected() {
    let err = NewPerson::new("", "Ivan", None, date("1990-05-20")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyField("surname"));
  }

  #[test]
  fn whitespace_name_is_rejected() {
    let err = NewPerson::new("Ivanov", "   ", None, date("1990-05-20")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyField("name"));
  }

  #[test]
  fn blank_patronymic_becomes_none() {
    let p = NewPerson::new("Ivanov", "Ivan", Some("  ".into()), date("1990-05-20"))
      .unwrap();
    assert_eq!(p.patronymic(), None);
  }

  #[test]
  fn parse_birth_date_accepts_iso_dates() {
    let d = parse_birth_date("2000-02-29").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
  }

  #[test]
  fn parse_birth_date_rejects_malformed_input() {
    for s in ["", "1990-5-20", "1990/05/20", "20-05-1990", "1990-05-20T00:00", "abcd-ef-gh"] {
      assert!(
        matches!(parse_birth_date(s), Err(ValidationError::InvalidBirthDate(_))),
        "accepted {s:?}"
      );
    }
  }

  #[test]
  fn parse_birth_date_rejects_impossible_dates() {
    assert!(parse_birth_date("2001-02-29").is_err());
    assert!(parse_birth_date("1990-13-01").is_err());
  }

  #[test]
  fn person_serialises_dates_as_iso_strings() {
    let person = NewPerson::new("Ivanov", "Ivan", None, date("1990-05-20"))
      .unwrap()
      .into_person(PersonId(7));
    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "id": 7,
        "surname": "Ivanov",
        "name": "Ivan",
        "patronymic": null,
        "birth_date": "1990-05-20",
      })
    );
  }
}
