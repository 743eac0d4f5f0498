//! Shared single-statement CRUD for the two person tables (Directors, Actors).
//! Both have the same column layout: serial id, Name, Nationality, DOB.

use crate::config::DbConfig;
use crate::error::AppError;
use crate::infra::{acquire, release};
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::Row;

pub(crate) struct PeopleTable {
    pub table: &'static str,
    pub id_column: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub(crate) struct PersonFields {
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl PersonFields {
    /// Trim the name and reject it when nothing is left.
    pub fn new(
        name: &str,
        nationality: Option<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        Ok(Self {
            name: name.to_string(),
            nationality,
            date_of_birth,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PersonRow {
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

fn map_row(row: &PgRow) -> Result<PersonRow, sqlx::Error> {
    Ok(PersonRow {
        id: row.try_get(0)?,
        name: row.try_get(1)?,
        nationality: row.try_get(2)?,
        date_of_birth: row.try_get(3)?,
    })
}

impl PeopleTable {
    fn columns(&self) -> String {
        format!("{}, Name, Nationality, DOB", self.id_column)
    }

    pub async fn create(&self, config: &DbConfig, fields: PersonFields) -> Result<PersonRow, AppError> {
        let sql = format!(
            "INSERT INTO {} (Name, Nationality, DOB) VALUES ($1, $2, $3) RETURNING {}",
            self.table,
            self.columns()
        );
        let mut conn = acquire(config).await?;
        let result = sqlx::query(&sql)
            .bind(&fields.name)
            .bind(&fields.nationality)
            .bind(fields.date_of_birth)
            .fetch_one(&mut conn)
            .await;
        release(conn).await;

        let created = map_row(&result?)?;
        log::debug!("{} created: id={}", self.label, created.id);
        Ok(created)
    }

    pub async fn list(&self, config: &DbConfig) -> Result<Vec<PersonRow>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            self.columns(),
            self.table,
            self.id_column
        );
        let mut conn = acquire(config).await?;
        let result = sqlx::query(&sql).fetch_all(&mut conn).await;
        release(conn).await;

        let mut out = Vec::new();
        for row in result? {
            out.push(map_row(&row)?);
        }
        Ok(out)
    }

    pub async fn get(&self, config: &DbConfig, id: i32) -> Result<PersonRow, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            self.columns(),
            self.table,
            self.id_column
        );
        let mut conn = acquire(config).await?;
        let result = sqlx::query(&sql).bind(id).fetch_optional(&mut conn).await;
        release(conn).await;

        match result? {
            Some(row) => Ok(map_row(&row)?),
            None => Err(AppError::NotFound(format!("{} {}", self.label, id))),
        }
    }

    /// `None` when no row has `id`.
    pub async fn update(
        &self,
        config: &DbConfig,
        id: i32,
        fields: PersonFields,
    ) -> Result<Option<PersonRow>, AppError> {
        let sql = format!(
            "UPDATE {} SET Name = $1, Nationality = $2, DOB = $3 WHERE {} = $4 RETURNING {}",
            self.table,
            self.id_column,
            self.columns()
        );
        let mut conn = acquire(config).await?;
        let result = sqlx::query(&sql)
            .bind(&fields.name)
            .bind(&fields.nationality)
            .bind(fields.date_of_birth)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;

        match result? {
            Some(row) => Ok(Some(map_row(&row)?)),
            None => {
                log::debug!("{} update: no row with id={}", self.label, id);
                Ok(None)
            }
        }
    }

    /// Returns the removed row, `None` when no row has `id`.
    pub async fn delete(&self, config: &DbConfig, id: i32) -> Result<Option<PersonRow>, AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1 RETURNING {}",
            self.table,
            self.id_column,
            self.columns()
        );
        let mut conn = acquire(config).await?;
        let result = sqlx::query(&sql).bind(id).fetch_optional(&mut conn).await;
        release(conn).await;

        match result? {
            Some(row) => {
                log::debug!("{} deleted: id={}", self.label, id);
                Ok(Some(map_row(&row)?))
            }
            None => Ok(None),
        }
    }
}
