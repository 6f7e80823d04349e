//! [`SqliteStore`], the SQLite implementation of [`PersonStore`].

use std::{path::Path, sync::Arc, time::Duration};

use rusqlite::{OptionalExtension as _, TransactionBehavior};

use friends_core::{
  NewPerson, Person, PersonId, PersonPatch, store::PersonStore,
};

use crate::{
  Error, Result,
  encode::{RawPerson, encode_date},
  schema::{Statements, TableName, schema},
};

/// How long a write waits for another connection's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// ─── Store ───────────────────────────────────────────────────────────────────

/// A friends record store backed by a single SQLite file.
///
/// Cloning is cheap. The inner connection is reference-counted and is
/// closed when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
  table:           TableName,
  sql:             Arc<Statements>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and make sure `table` exists.
  pub async fn open(path: impl AsRef<Path>, table: TableName) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn, table).await
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory(table: TableName) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn, table).await
  }

  async fn init(conn: tokio_rusqlite::Connection, table: TableName) -> Result<Self> {
    let ddl = schema(&table);
    conn
      .call(move |conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(&ddl)?;
        Ok(())
      })
      .await?;

    tracing::debug!(%table, "schema ready");
    let sql = Arc::new(Statements::new(&table));
    Ok(Self { conn, table, sql })
  }

  /// The table this store reads and writes.
  pub fn table(&self) -> &TableName { &self.table }
}

/// Read-merge-write for [`PersonStore::update`], run inside one immediate
/// transaction so concurrent updates to the same id cannot interleave.
fn update_in_tx(
  conn:  &mut rusqlite::Connection,
  sql:   &Statements,
  id:    PersonId,
  patch: PersonPatch,
) -> Result<Person> {
  let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

  let current = tx
    .query_row(&sql.select_one, rusqlite::params![id.0], RawPerson::from_row)
    .optional()?
    .ok_or(Error::NotFound(id))?
    .into_person()?;

  let merged = patch.apply(current)?;

  tx.execute(
    &sql.update,
    rusqlite::params![
      merged.surname,
      merged.name,
      merged.patronymic,
      encode_date(merged.birth_date),
      id.0,
    ],
  )?;
  tx.commit()?;

  Ok(merged)
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<Person>> {
    let sql = Arc::clone(&self.sql);

    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql.select_all)?;
        let rows = stmt
          .query_map([], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn get(&self, id: PersonId) -> Result<Person> {
    let sql = Arc::clone(&self.sql);

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql.select_one, rusqlite::params![id.0], RawPerson::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.ok_or(Error::NotFound(id))?.into_person()
  }

  async fn create(&self, input: NewPerson) -> Result<Person> {
    let sql = Arc::clone(&self.sql);

    let person = self
      .conn
      .call(move |conn| {
        conn.execute(
          &sql.insert,
          rusqlite::params![
            input.surname(),
            input.name(),
            input.patronymic(),
            encode_date(input.birth_date()),
          ],
        )?;
        let id = PersonId(conn.last_insert_rowid());
        Ok(input.into_person(id))
      })
      .await?;

    Ok(person)
  }

  async fn create_many(&self, inputs: Vec<NewPerson>) -> Result<Vec<Person>> {
    let sql = Arc::clone(&self.sql);

    let people = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut people = Vec::with_capacity(inputs.len());
        {
          let mut stmt = tx.prepare(&sql.insert)?;
          for input in inputs {
            let id = stmt.insert(rusqlite::params![
              input.surname(),
              input.name(),
              input.patronymic(),
              encode_date(input.birth_date()),
            ])?;
            people.push(input.into_person(PersonId(id)));
          }
        }
        tx.commit()?;
        Ok(people)
      })
      .await?;

    tracing::debug!(count = people.len(), "inserted batch");
    Ok(people)
  }

  async fn update(&self, id: PersonId, patch: PersonPatch) -> Result<Person> {
    patch.ensure_not_empty()?;
    let sql = Arc::clone(&self.sql);

    self
      .conn
      .call(move |conn| Ok(update_in_tx(conn, &sql, id, patch)))
      .await?
  }

  async fn delete(&self, id: PersonId) -> Result<()> {
    let sql = Arc::clone(&self.sql);

    let removed = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql.delete, rusqlite::params![id.0])?))
      .await?;

    if removed == 0 {
      return Err(Error::NotFound(id));
    }
    Ok(())
  }
}
