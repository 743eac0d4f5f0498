//! Postgres connection handling.
//!
//! There is no pool: every operation calls [`acquire`], runs its statement and
//! hands the connection back to [`release`] whatever the statement returned.

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection, Executor};

/// Open a connection to the catalog database.
pub(crate) async fn acquire(config: &DbConfig) -> Result<PgConnection, AppError> {
    open(config.connect_options()).await
}

/// Open a connection to the maintenance database.
pub(crate) async fn acquire_admin(config: &DbConfig) -> Result<PgConnection, AppError> {
    open(config.admin_connect_options()).await
}

async fn open(opts: PgConnectOptions) -> Result<PgConnection, AppError> {
    let opts = opts.log_statements(log::LevelFilter::Trace);
    opts.connect().await.map_err(|e| {
        log::debug!("connect failed: {}", e);
        AppError::from(e)
    })
}

/// Close gracefully. A failed close only loses the goodbye message, the socket
/// is dropped either way.
pub(crate) async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        log::warn!("closing connection: {}", e);
    }
}

/// Postgres truncates longer identifiers (NAMEDATALEN - 1).
const MAX_IDENTIFIER_BYTES: usize = 63;

/// Quote an identifier for statements that cannot take bind parameters.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn check_database_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Config("database name is empty".into()));
    }
    if name.contains('\0') {
        return Err(AppError::Config("database name contains NUL".into()));
    }
    if name.len() > MAX_IDENTIFIER_BYTES {
        return Err(AppError::Config(format!(
            "database name is {} bytes, at most {} allowed",
            name.len(),
            MAX_IDENTIFIER_BYTES
        )));
    }
    Ok(())
}

async fn exists_on(conn: &mut PgConnection, name: &str) -> Result<bool, AppError> {
    let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

/// Whether the configured catalog database exists on the server.
pub async fn database_exists(config: &DbConfig) -> Result<bool, AppError> {
    check_database_name(&config.database)?;
    let mut conn = acquire_admin(config).await?;
    let result = exists_on(&mut conn, &config.database).await;
    release(conn).await;
    result
}

/// Create the catalog database unless it is already there. Returns `true`
/// when it was created by this call.
pub async fn create_database_if_missing(config: &DbConfig) -> Result<bool, AppError> {
    check_database_name(&config.database)?;
    let mut conn = acquire_admin(config).await?;
    let result: Result<bool, AppError> = async {
        if exists_on(&mut conn, &config.database).await? {
            return Ok(false);
        }
        // simple-query protocol, outside any implicit transaction
        let sql = format!("CREATE DATABASE {}", quote_ident(&config.database));
        (&mut conn).execute(sql.as_str()).await?;
        Ok(true)
    }
    .await;
    release(conn).await;
    result
}

/// Drop the catalog database if present. Returns `true` when something was
/// dropped.
pub async fn drop_database(config: &DbConfig) -> Result<bool, AppError> {
    check_database_name(&config.database)?;
    let mut conn = acquire_admin(config).await?;
    let result: Result<bool, AppError> = async {
        if !exists_on(&mut conn, &config.database).await? {
            return Ok(false);
        }
        let sql = format!("DROP DATABASE {}", quote_ident(&config.database));
        (&mut conn).execute(sql.as_str()).await?;
        Ok(true)
    }
    .await;
    release(conn).await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_wraps_and_escapes() {
        assert_eq!(quote_ident("movies_db"), "\"movies_db\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn blank_database_name_rejected() {
        let err = check_database_name("  ").unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(check_database_name("movies_db").is_ok());
    }

    #[test]
    fn overlong_database_name_rejected() {
        assert!(check_database_name(&"m".repeat(63)).is_ok());
        let err = check_database_name(&format!("movies_test_{}", "x".repeat(60))).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        // bytes, not chars
        let err = check_database_name(&"é".repeat(32)).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn bootstrap_overlong_name_fails_before_connecting() {
        let cfg = DbConfig {
            database: format!("movies_test_{}", "x".repeat(60)),
            port: 1,
            ..DbConfig::default()
        };
        let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
        let err = rt.block_on(crate::app::bootstrap(&cfg)).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        let err = rt.block_on(database_exists(&cfg)).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn create_with_blank_name_fails_before_connecting() {
        let cfg = DbConfig {
            database: String::new(),
            // nothing listens here, a connect attempt would be a CONNECTION_ERROR
            port: 1,
            ..DbConfig::default()
        };
        let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
        let err = rt.block_on(create_database_if_missing(&cfg)).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
