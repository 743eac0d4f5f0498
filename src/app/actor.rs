//! Actor use cases.

use super::people::{PeopleTable, PersonFields, PersonRow};
use crate::config::DbConfig;
use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const ACTORS: PeopleTable = PeopleTable {
    table: "Actors",
    id_column: "ActorID",
    label: "actor",
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorCreateReq {
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorUpdateReq {
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorDto {
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<PersonRow> for ActorDto {
    fn from(r: PersonRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            nationality: r.nationality,
            date_of_birth: r.date_of_birth,
        }
    }
}

pub async fn actor_create(config: &DbConfig, req: ActorCreateReq) -> Result<ActorDto, AppError> {
    let fields = PersonFields::new(&req.name, req.nationality, req.date_of_birth)?;
    ACTORS.create(config, fields).await.map(ActorDto::from)
}

pub async fn actor_list(config: &DbConfig) -> Result<Vec<ActorDto>, AppError> {
    let rows = ACTORS.list(config).await?;
    Ok(rows.into_iter().map(ActorDto::from).collect())
}

pub async fn actor_get(config: &DbConfig, id: i32) -> Result<ActorDto, AppError> {
    ACTORS.get(config, id).await.map(ActorDto::from)
}

pub async fn actor_update(
    config: &DbConfig,
    id: i32,
    req: ActorUpdateReq,
) -> Result<Option<ActorDto>, AppError> {
    let fields = PersonFields::new(&req.name, req.nationality, req.date_of_birth)?;
    let row = ACTORS.update(config, id, fields).await?;
    Ok(row.map(ActorDto::from))
}

pub async fn actor_delete(config: &DbConfig, id: i32) -> Result<Option<ActorDto>, AppError> {
    let row = ACTORS.delete(config, id).await?;
    Ok(row.map(ActorDto::from))
}
