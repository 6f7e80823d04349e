//! Handlers for `/friends` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/friends` | All records, ordered by id |
//! | `POST`   | `/friends` | Body: [`CreateBody`]; returns 201 + stored record |
//! | `GET`    | `/friends/{id}` | 404 if not found |
//! | `PUT`    | `/friends/{id}` | Body: [`UpdateBody`]; sparse merge, 422 if empty |
//! | `PATCH`  | `/friends/{id}` | Same as `PUT` |
//! | `DELETE` | `/friends/{id}` | 204 on success |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use friends_core::{
  NewPerson, Patch, Person, PersonId, PersonPatch, ValidationError,
  parse_birth_date, store::PersonStore,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /friends`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
{
  let people = store.list().await.map_err(ApiError::from_store)?;
  Ok(Json(people))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /friends/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<PersonId>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let person = store.get(id).await.map_err(ApiError::from_store)?;
  Ok(Json(person))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /friends`.
///
/// `birth_date` is taken as a string so a malformed date is reported as a
/// validation error rather than a deserialisation failure.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub surname:    String,
  pub name:       String,
  #[serde(default)]
  pub patronymic: Option<String>,
  pub birth_date: String,
}

impl TryFrom<CreateBody> for NewPerson {
  type Error = ValidationError;

  fn try_from(b: CreateBody) -> Result<Self, Self::Error> {
    let birth_date = parse_birth_date(&b.birth_date)?;
    NewPerson::new(b.surname, b.name, b.patronymic, birth_date)
  }
}

/// `POST /friends`: returns 201 + the stored [`Person`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let input = NewPerson::try_from(body)?;
  let person = store.create(input).await.map_err(ApiError::from_store)?;
  tracing::debug!(id = %person.id, "created");
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `PUT`/`PATCH /friends/{id}`. Every key is optional;
/// `"patronymic": null` clears the patronymic.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBody {
  #[serde(default)]
  pub surname:    Patch<String>,
  #[serde(default)]
  pub name:       Patch<String>,
  #[serde(default)]
  pub patronymic: Patch<Option<String>>,
  #[serde(default)]
  pub birth_date: Patch<String>,
}

impl TryFrom<UpdateBody> for PersonPatch {
  type Error = ValidationError;

  fn try_from(b: UpdateBody) -> Result<Self, Self::Error> {
    Ok(PersonPatch {
      surname:    b.surname,
      name:       b.name,
      patronymic: b.patronymic,
      birth_date: b.birth_date.try_map(|s| parse_birth_date(&s))?,
    })
  }
}

/// `PUT /friends/{id}`: returns the full merged record.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<PersonId>,
  Json(body): Json<UpdateBody>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let patch = PersonPatch::try_from(body)?;
  let person = store.update(id, patch).await.map_err(ApiError::from_store)?;
  Ok(Json(person))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /friends/{id}`: 204 with an empty body.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<PersonId>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
{
  store.delete(id).await.map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}
