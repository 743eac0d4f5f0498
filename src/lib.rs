pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod infra;

use config::AppConfig;

/// Load configuration, provision the catalog and log a short summary.
/// Failures are logged; the process still exits normally.
pub async fn run() {
    let path = AppConfig::default_path();
    log::info!("Config path: {:?}", path);

    let config = match AppConfig::load_or_default(&path) {
        Ok(c) => c.database,
        Err(e) => {
            log::error!("Config load failed: {}", e);
            return;
        }
    };
    log::info!("Using {:?}", config);

    let Some(report) = commands::bootstrap::cmd_bootstrap(&config).await else {
        return;
    };
    log::info!(
        "Catalog ready (database created: {}, rows seeded: {})",
        report.database_created,
        report.seeded_rows
    );

    if let Some(directors) = commands::director::cmd_director_list(&config).await {
        log::info!("{} directors", directors.len());
    }
    if let Some(actors) = commands::actor::cmd_actor_list(&config).await {
        log::info!("{} actors", actors.len());
    }
}
