//! Shared helpers for the live Postgres tests.
//! Run only when MOVIES_PG_TEST=1 is set.

#![allow(dead_code)]

use movie_catalog::app::bootstrap;
use movie_catalog::config::DbConfig;
use movie_catalog::infra::drop_database;
use std::env;
use std::future::Future;
use uuid::Uuid;

pub fn pg_config() -> Option<DbConfig> {
    if env::var("MOVIES_PG_TEST").ok().as_deref() != Some("1") {
        return None;
    }

    let defaults = DbConfig::default();
    Some(DbConfig {
        host: env::var("MOVIES_PG_HOST").unwrap_or(defaults.host),
        port: env::var("MOVIES_PG_PORT")
            .ok()
            .map(|p| p.parse().expect("MOVIES_PG_PORT must be a port number"))
            .unwrap_or(defaults.port),
        user: env::var("MOVIES_PG_USER").unwrap_or(defaults.user),
        password: env::var("MOVIES_PG_PASSWORD").unwrap_or(defaults.password),
        database: defaults.database,
        admin_database: env::var("MOVIES_PG_ADMIN_DB").unwrap_or(defaults.admin_database),
    })
}

/// A config nothing listens on; any connect attempt fails fast.
pub fn unreachable_config() -> DbConfig {
    DbConfig {
        host: "127.0.0.1".into(),
        port: 1,
        ..DbConfig::default()
    }
}

/// Same server, throwaway database name.
pub fn scratch_config(base: &DbConfig) -> DbConfig {
    let suffix = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(12)
        .collect::<String>();
    base.with_database(format!("movies_test_{}", suffix))
}

/// Bootstrap a scratch database, run `body` against it, then drop it. The
/// database is dropped even when `body` panics; the panic is re-raised after.
pub fn with_seeded_db<F, Fut>(test_name: &str, body: F)
where
    F: FnOnce(DbConfig) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let Some(base) = pg_config() else {
        eprintln!("skip {}: MOVIES_PG_TEST != 1", test_name);
        return;
    };
    let cfg = scratch_config(&base);

    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
    let outcome = rt.block_on(async {
        bootstrap(&cfg).await.expect("bootstrap scratch database");
        let outcome = tokio::spawn(body(cfg.clone())).await;
        drop_database(&cfg).await.expect("drop scratch database");
        outcome
    });

    if let Err(e) = outcome {
        if e.is_panic() {
            std::panic::resume_unwind(e.into_panic());
        }
        panic!("{} did not finish: {}", test_name, e);
    }
}

pub async fn count_rows(cfg: &DbConfig, sql: &str) -> i64 {
    use sqlx::{ConnectOptions, Connection};
    let mut conn = cfg.connect_options().connect().await.expect("connect");
    let n: i64 = sqlx::query_scalar(sql)
        .fetch_one(&mut conn)
        .await
        .expect("count query");
    conn.close().await.expect("close");
    n
}
