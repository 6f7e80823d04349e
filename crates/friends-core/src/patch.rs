//! Partial updates.
//!
//! A [`PersonPatch`] carries one [`Patch`] per field. Applying it overlays the
//! `Set` fields onto a loaded record and re-validates the result as a whole
//! with the same rules used by [`NewPerson::new`].

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::{
  error::ValidationError,
  person::{NewPerson, Person},
};

// ─── Patch ───────────────────────────────────────────────────────────────────

/// A field that may or may not be supplied.
///
/// Used with `#[serde(default)]`: a missing key deserialises to `Absent`, a
/// present key to `Set`. For `Patch<Option<T>>` an explicit `null` becomes
/// `Set(None)`, which is how a nullable field gets cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
  #[default]
  Absent,
  Set(T),
}

impl<T> Patch<T> {
  pub fn is_set(&self) -> bool { matches!(self, Self::Set(_)) }

  /// The supplied value, or `current` if the field was not supplied.
  pub fn unwrap_or(self, current: T) -> T {
    match self {
      Self::Set(v) => v,
      Self::Absent => current,
    }
  }

  /// Convert a supplied value, passing `Absent` through.
  pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Patch<U>, E> {
    match self {
      Self::Set(v) => f(v).map(Patch::Set),
      Self::Absent => Ok(Patch::Absent),
    }
  }
}

impl<T> From<T> for Patch<T> {
  fn from(value: T) -> Self { Self::Set(value) }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    T::deserialize(deserializer).map(Self::Set)
  }
}

// ─── PersonPatch ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::PersonStore::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
  pub surname:    Patch<String>,
  pub name:       Patch<String>,
  pub patronymic: Patch<Option<String>>,
  pub birth_date: Patch<NaiveDate>,
}

impl PersonPatch {
  /// `true` if no field is supplied.
  pub fn is_empty(&self) -> bool {
    !(self.surname.is_set()
      || self.name.is_set()
      || self.patronymic.is_set()
      || self.birth_date.is_set())
  }

  /// Reject a patch with no supplied fields.
  pub fn ensure_not_empty(&self) -> Result<(), ValidationError> {
    if self.is_empty() {
      return Err(ValidationError::EmptyPatch);
    }
    Ok(())
  }

  /// Sparse merge: overlay supplied fields onto `base`, then validate the
  /// merged record. The id is carried over unchanged.
  pub fn apply(self, base: Person) -> Result<Person, ValidationError> {
    self.ensure_not_empty()?;

    let Person { id, surname, name, patronymic, birth_date } = base;
    let merged = NewPerson::new(
      self.surname.unwrap_or(surname),
      self.name.unwrap_or(name),
      self.patronymic.unwrap_or(patronymic),
      self.birth_date.unwrap_or(birth_date),
    )?;
    Ok(merged.into_person(id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::person::{PersonId, parse_birth_date};

  fn ivanov() -> Person {
    NewPerson::new(
      "Ivanov",
      "Ivan",
      Some("Ivanovich".into()),
      parse_birth_date("1990-05-20").unwrap(),
    )
    .unwrap()
    .into_person(PersonId(1))
  }

  #[test]
  fn empty_patch_is_rejected() {
    let err = PersonPatch::default().apply(ivanov()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyPatch);
  }

  #[test]
  fn apply_changes_only_supplied_fields() {
    let patch = PersonPatch { name: "Pyotr".to_string().into(), ..Default::default() };
    let updated = patch.apply(ivanov()).unwrap();
    assert_eq!(updated, Person { name: "Pyotr".into(), ..ivanov() });
  }

  #[test]
  fn apply_updates_birth_date() {
    let new_date = parse_birth_date("1991-05-20").unwrap();
    let patch = PersonPatch { birth_date: Patch::Set(new_date), ..Default::default() };
    let updated = patch.apply(ivanov()).unwrap();
    assert_eq!(updated.birth_date, new_date);
    assert_eq!(updated.surname, "Ivanov");
    assert_eq!(updated.name, "Ivan");
    assert_eq!(updated.patronymic.as_deref(), Some("Ivanovich"));
  }

  #[test]
  fn apply_can_clear_patronymic() {
    let patch = PersonPatch { patronymic: Patch::Set(None), ..Default::default() };
    let updated = patch.apply(ivanov()).unwrap();
    assert_eq!(updated.patronymic, None);
  }

  #[test]
  fn merged_record_is_revalidated() {
    let patch = PersonPatch { surname: Patch::Set("  ".into()), ..Default::default() };
    let err = patch.apply(ivanov()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyField("surname"));
  }

  #[test]
  fn apply_trims_supplied_values() {
    let patch = PersonPatch { name: Patch::Set("  Pyotr ".into()), ..Default::default() };
    assert_eq!(patch.apply(ivanov()).unwrap().name, "Pyotr");
  }

  #[derive(Debug, Deserialize)]
  struct Body {
    #[serde(default)]
    name:       Patch<String>,
    #[serde(default)]
    patronymic: Patch<Option<String>>,
  }

  #[test]
  fn missing_key_deserialises_as_absent() {
    let body: Body = serde_json::from_str("{}").unwrap();
    assert_eq!(body.name, Patch::Absent);
    assert_eq!(body.patronymic, Patch::Absent);
  }

  #[test]
  fn explicit_null_is_distinct_from_missing() {
    let body: Body = serde_json::from_str(r#"{"patronymic": null}"#).unwrap();
    assert_eq!(body.patronymic, Patch::Set(None));
    assert_eq!(body.name, Patch::Absent);
  }

  #[test]
  fn null_for_required_field_fails_to_deserialise() {
    assert!(serde_json::from_str::<Body>(r#"{"name": null}"#).is_err());
  }
}
