//! Connection configuration, loaded from a JSON file.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "movie-catalog";
const CONFIG_FILE_NAME: &str = "config.json";

/// Everything needed to reach the catalog database.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database holding the catalog tables.
    pub database: String,
    /// Database used to check for and create `database`.
    pub admin_database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            database: "movies_db".into(),
            admin_database: "postgres".into(),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("admin_database", &self.admin_database)
            .finish()
    }
}

impl DbConfig {
    /// Same server and credentials, different target database.
    pub fn with_database(&self, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..self.clone()
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        self.options_for(&self.database)
    }

    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.options_for(&self.admin_database)
    }

    fn options_for(&self, database: &str) -> PgConnectOptions {
        let opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(database);
        if self.password.is_empty() {
            opts
        } else {
            opts.password(&self.password)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DbConfig,
}

impl AppConfig {
    /// `<config dir>/movie-catalog/config.json`, or the working directory when
    /// the platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let parsed: Self = serde_json::from_str(&contents)?;
        Ok(parsed)
    }

    /// Like [`AppConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_server() {
        let cfg = DbConfig::default();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.user, "postgres");
        assert_eq!(cfg.database, "movies_db");
        assert_eq!(cfg.admin_database, "postgres");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"database": {"host": "db.internal", "password": "s3cret"}}"#)
                .unwrap();
        assert_eq!(cfg.database.host, "db.internal");
        assert_eq!(cfg.database.password, "s3cret");
        assert_eq!(cfg.database.port, 5432);
        assert_eq!(cfg.database.database, "movies_db");
    }

    #[test]
    fn camel_case_keys() {
        let cfg: DbConfig = serde_json::from_str(r#"{"adminDatabase": "template1"}"#).unwrap();
        assert_eq!(cfg.admin_database, "template1");
    }

    #[test]
    fn debug_redacts_password() {
        let cfg = DbConfig {
            password: "hunter2".into(),
            ..DbConfig::default()
        };
        let out = format!("{:?}", cfg);
        assert!(!out.contains("hunter2"));
        assert!(out.contains("movies_db"));
    }

    #[test]
    fn with_database_keeps_credentials() {
        let base = DbConfig {
            password: "pw".into(),
            ..DbConfig::default()
        };
        let other = base.with_database("movies_test");
        assert_eq!(other.database, "movies_test");
        assert_eq!(other.password, "pw");
        assert_eq!(other.admin_database, base.admin_database);
    }

    #[test]
    fn connect_options_target_right_database() {
        let cfg = DbConfig::default();
        assert_eq!(cfg.connect_options().get_database(), Some("movies_db"));
        assert_eq!(cfg.admin_connect_options().get_database(), Some("postgres"));
        assert_eq!(cfg.connect_options().get_port(), 5432);
    }
}
