//! Database, schema and sample data provisioning.

use crate::config::DbConfig;
use crate::error::AppError;
use crate::infra::schema::{run_script, SCHEMA_SQL, SEED_SQL};
use crate::infra::{acquire, create_database_if_missing, release};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    /// The database did not exist before this run.
    pub database_created: bool,
    /// Sample rows inserted by this run; 0 when everything was already there.
    pub seeded_rows: u64,
}

/// Create the catalog database if needed, then its tables, then the sample
/// rows. Safe to repeat: existing tables and rows are left alone.
///
/// Statements run one after another on a single connection without a
/// surrounding transaction; the first failure stops the run and is returned.
pub async fn bootstrap(config: &DbConfig) -> Result<BootstrapReport, AppError> {
    let database_created = create_database_if_missing(config).await?;
    if database_created {
        log::info!("Database {} created", config.database);
    } else {
        log::info!("Database {} already exists", config.database);
    }

    let mut conn = acquire(config).await?;
    let result: Result<u64, AppError> = async {
        run_script(&mut conn, "schema", SCHEMA_SQL).await?;
        log::info!("Tables created");
        run_script(&mut conn, "seed", SEED_SQL).await
    }
    .await;
    release(conn).await;

    let seeded_rows = result?;
    log::info!("Sample data inserted: {} new rows", seeded_rows);
    Ok(BootstrapReport {
        database_created,
        seeded_rows,
    })
}
