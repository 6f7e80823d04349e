//! Synthetic records for bulk-loading the store.
//!
//! [`SeedGenerator`] produces gender-consistent (surname, name, patronymic)
//! triples with a birth date drawn uniformly from an [`AgeRange`]. The batch
//! goes through [`PersonStore::create_many`], so seeded rows obey the same
//! invariants as records created over the API.

mod names;

use chrono::{Days, NaiveDate};
use friends_core::{NewPerson, Person, ValidationError, store::PersonStore};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

pub const DEFAULT_COUNT: usize = 100;

/// Upper bound on `max_years`; keeps date arithmetic far from chrono's limits.
pub const MAX_SUPPORTED_AGE: u32 = 150;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid age range {min}..={max} (max supported age is {MAX_SUPPORTED_AGE})")]
  InvalidAgeRange { min: u32, max: u32 },

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

// ─── Age range ────────────────────────────────────────────────────────────────

/// Inclusive range of ages, in years, for generated people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
  min_years: u32,
  max_years: u32,
}

impl AgeRange {
  pub fn new(min_years: u32, max_years: u32) -> Result<Self, Error> {
    if min_years > max_years || max_years > MAX_SUPPORTED_AGE {
      return Err(Error::InvalidAgeRange { min: min_years, max: max_years });
    }
    Ok(Self { min_years, max_years })
  }

  /// Earliest and latest birth dates for this range as seen from `today`.
  /// A year counts as 365 days.
  pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let earliest = today - Days::new(u64::from(self.max_years) * 365);
    let latest = today - Days::new(u64::from(self.min_years) * 365);
    (earliest, latest)
  }
}

impl Default for AgeRange {
  fn default() -> Self { Self { min_years: 0, max_years: 80 } }
}

// ─── Generator ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
  Male,
  Female,
}

/// Source of plausible person tuples.
pub struct SeedGenerator {
  rng:   SmallRng,
  ages:  AgeRange,
  today: NaiveDate,
}

impl SeedGenerator {
  /// Deterministic generator; the same seed yields the same people.
  pub fn from_seed(seed: u64, ages: AgeRange, today: NaiveDate) -> Self {
    Self { rng: SmallRng::seed_from_u64(seed), ages, today }
  }

  pub fn from_entropy(ages: AgeRange, today: NaiveDate) -> Self {
    Self { rng: SmallRng::from_entropy(), ages, today }
  }

  pub fn birth_date(&mut self) -> NaiveDate {
    let (earliest, latest) = self.ages.bounds(self.today);
    let span = u64::try_from((latest - earliest).num_days()).unwrap_or(0);
    earliest + Days::new(self.rng.gen_range(0..=span))
  }

  pub fn next_person(&mut self) -> Result<NewPerson, ValidationError> {
    let gender = if self.rng.gen_bool(0.5) { Gender::Male } else { Gender::Female };

    let surnames = pick(&mut self.rng, names::SURNAMES);
    let patronymics = pick(&mut self.rng, names::PATRONYMICS);
    let (surname, name, patronymic) = match gender {
      Gender::Male => (surnames.0, pick(&mut self.rng, names::MALE_NAMES), patronymics.0),
      Gender::Female => {
        (surnames.1, pick(&mut self.rng, names::FEMALE_NAMES), patronymics.1)
      }
    };

    let birth_date = self.birth_date();
    NewPerson::new(surname, name, Some(patronymic.to_owned()), birth_date)
  }

  pub fn generate(&mut self, count: usize) -> Result<Vec<NewPerson>, ValidationError> {
    (0..count).map(|_| self.next_person()).collect()
  }
}

fn pick<T: Copy>(rng: &mut SmallRng, pool: &[T]) -> T { pool[rng.gen_range(0..pool.len())] }

// ─── Seeding ──────────────────────────────────────────────────────────────────

/// Generate `count` people and insert them in one batch.
pub async fn seed<S>(
  store:     &S,
  generator: &mut SeedGenerator,
  count:     usize,
) -> Result<Vec<Person>, Error>
where
  S: PersonStore,
{
  let batch = generator.generate(count)?;
  let people = store
    .create_many(batch)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  tracing::info!(count = people.len(), "seeded store");
  Ok(people)
}

#[cfg(test)]
mod tests {
  use super::*;

  use friends_store_sqlite::{SqliteStore, TableName};

  fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2026, 10, 16).unwrap() }

  #[test]
  fn default_range_spans_eighty_years() {
    let (earliest, latest) = AgeRange::default().bounds(today());
    assert_eq!(latest, today());
    assert_eq!((latest - earliest).num_days(), 80 * 365);
  }

  #[test]
  fn inverted_or_huge_ranges_are_rejected() {
    assert!(matches!(AgeRange::new(30, 20), Err(Error::InvalidAgeRange { .. })));
    assert!(matches!(
      AgeRange::new(0, MAX_SUPPORTED_AGE + 1),
      Err(Error::InvalidAgeRange { .. })
    ));
    assert!(AgeRange::new(18, 18).is_ok());
  }

  #[test]
  fn birth_dates_stay_within_bounds() {
    let ages = AgeRange::new(18, 30).unwrap();
    let (earliest, latest) = ages.bounds(today());
    let mut generator = SeedGenerator::from_seed(7, ages, today());
    for _ in 0..1000 {
      let d = generator.birth_date();
      assert!(earliest <= d && d <= latest, "{d} outside {earliest}..={latest}");
    }
  }

  #[test]
  fn single_age_range_yields_fixed_date() {
    let ages = AgeRange::new(25, 25).unwrap();
    let mut generator = SeedGenerator::from_seed(1, ages, today());
    let (expected, _) = ages.bounds(today());
    assert_eq!(generator.birth_date(), expected);
  }

  #[test]
  fn same_seed_same_people() {
    let mut a = SeedGenerator::from_seed(42, AgeRange::default(), today());
    let mut b = SeedGenerator::from_seed(42, AgeRange::default(), today());
    assert_eq!(a.generate(20).unwrap(), b.generate(20).unwrap());
  }

  #[test]
  fn names_agree_on_gender() {
    let mut generator = SeedGenerator::from_seed(3, AgeRange::default(), today());
    for person in generator.generate(200).unwrap() {
      let male = names::MALE_NAMES.contains(&person.name());
      let female = names::FEMALE_NAMES.contains(&person.name());
      assert!(male ^ female, "unknown name {}", person.name());

      let patronymic = person.patronymic().unwrap();
      let surname_ok = names::SURNAMES
        .iter()
        .any(|&(m, f)| person.surname() == if male { m } else { f });
      let patronymic_ok = names::PATRONYMICS
        .iter()
        .any(|&(m, f)| patronymic == if male { m } else { f });
      assert!(surname_ok && patronymic_ok, "{person:?}");
    }
  }

  #[tokio::test]
  async fn seed_inserts_requested_count() {
    let store = SqliteStore::open_in_memory(TableName::default()).await.unwrap();
    let mut generator = SeedGenerator::from_seed(9, AgeRange::default(), today());

    let people = seed(&store, &mut generator, 25).await.unwrap();
    assert_eq!(people.len(), 25);

    let stored = store.list().await.unwrap();
    assert_eq!(stored, people);
  }

  #[tokio::test]
  async fn seed_zero_is_a_no_op() {
    let store = SqliteStore::open_in_memory(TableName::default()).await.unwrap();
    let mut generator = SeedGenerator::from_seed(9, AgeRange::default(), today());
    assert!(seed(&store, &mut generator, 0).await.unwrap().is_empty());
    assert!(store.list().await.unwrap().is_empty());
  }
}
