//! Director use cases.

use super::people::{PeopleTable, PersonFields, PersonRow};
use crate::config::DbConfig;
use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DIRECTORS: PeopleTable = PeopleTable {
    table: "Directors",
    id_column: "DirectorID",
    label: "director",
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorCreateReq {
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Full replacement of a director's mutable fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorUpdateReq {
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorDto {
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<PersonRow> for DirectorDto {
    fn from(r: PersonRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            nationality: r.nationality,
            date_of_birth: r.date_of_birth,
        }
    }
}

pub async fn director_create(config: &DbConfig, req: DirectorCreateReq) -> Result<DirectorDto, AppError> {
    let fields = PersonFields::new(&req.name, req.nationality, req.date_of_birth)?;
    DIRECTORS.create(config, fields).await.map(DirectorDto::from)
}

/// All directors in insertion (id) order.
pub async fn director_list(config: &DbConfig) -> Result<Vec<DirectorDto>, AppError> {
    let rows = DIRECTORS.list(config).await?;
    Ok(rows.into_iter().map(DirectorDto::from).collect())
}

pub async fn director_get(config: &DbConfig, id: i32) -> Result<DirectorDto, AppError> {
    DIRECTORS.get(config, id).await.map(DirectorDto::from)
}

/// `Ok(None)` means no director has `id`; nothing was changed.
pub async fn director_update(
    config: &DbConfig,
    id: i32,
    req: DirectorUpdateReq,
) -> Result<Option<DirectorDto>, AppError> {
    let fields = PersonFields::new(&req.name, req.nationality, req.date_of_birth)?;
    let row = DIRECTORS.update(config, id, fields).await?;
    Ok(row.map(DirectorDto::from))
}

/// Fails with `CONSTRAINT_VIOLATION` while a movie still references the
/// director.
pub async fn director_delete(config: &DbConfig, id: i32) -> Result<Option<DirectorDto>, AppError> {
    let row = DIRECTORS.delete(config, id).await?;
    Ok(row.map(DirectorDto::from))
}
