//! Stable error codes for callers.

use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

/// Map a database-reported failure onto our categories.
///
/// `kind` is what sqlx derived from the SQLSTATE; `code` is the raw SQLSTATE,
/// consulted for the class-23 codes sqlx folds into `ErrorKind::Other`.
pub(crate) fn classify_database_error(kind: ErrorKind, code: Option<&str>, message: String) -> AppError {
    match kind {
        ErrorKind::NotNullViolation => AppError::Validation(message),
        ErrorKind::ForeignKeyViolation | ErrorKind::UniqueViolation | ErrorKind::CheckViolation => {
            AppError::ConstraintViolation(message)
        }
        _ => match code {
            // 22001: value too long for the column
            Some("23502") | Some("22001") => AppError::Validation(message),
            Some(c) if c.starts_with("23") => AppError::ConstraintViolation(message),
            // 08xxx: connection exception, 28xxx: invalid authorization, 3D000: unknown database
            Some(c) if c.starts_with("08") || c.starts_with("28") || c == "3D000" => {
                AppError::Connection(message)
            }
            _ => AppError::Db(message),
        },
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db) => {
                let code = db.code().map(|c| c.into_owned());
                classify_database_error(db.kind(), code.as_deref(), db.message().to_string())
            }
            sqlx::Error::RowNotFound => AppError::NotFound("row".into()),
            conn @ (sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed) => AppError::Connection(conn.to_string()),
            other => AppError::Db(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
