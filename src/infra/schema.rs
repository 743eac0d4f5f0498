//! Catalog DDL and sample data.

use crate::error::AppError;
use sqlx::postgres::PgConnection;

pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");
pub const SEED_SQL: &str = include_str!("../../sql/seed.sql");

/// Tables in creation order (parents before children).
pub const TABLES: &[&str] = &[
    "Directors",
    "Actors",
    "Genres",
    "Movies",
    "Ratings",
    "MovieGenres",
];

/// Split a script into statements. `--` comment lines are dropped; the
/// scripts never put `;` inside a literal.
pub fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|chunk| {
            chunk
                .lines()
                .filter(|line| !line.trim_start().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Run every statement of `sql` in order, stopping at the first failure.
/// Returns the number of rows inserted by `INSERT` statements.
pub(crate) async fn run_script(conn: &mut PgConnection, name: &str, sql: &str) -> Result<u64, AppError> {
    let mut inserted = 0;
    for (i, stmt) in split_statements(sql).iter().enumerate() {
        let done = sqlx::query(stmt).execute(&mut *conn).await.map_err(|e| {
            log::error!("{} statement #{} failed: {}", name, i + 1, e);
            AppError::from(e)
        })?;
        if stmt.to_ascii_uppercase().starts_with("INSERT") {
            inserted += done.rows_affected();
        }
    }
    Ok(inserted)
}
