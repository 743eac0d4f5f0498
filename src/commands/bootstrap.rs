use super::logged;
use crate::app::{bootstrap, BootstrapReport};
use crate::config::DbConfig;

pub async fn cmd_bootstrap(config: &DbConfig) -> Option<BootstrapReport> {
    logged("bootstrap", bootstrap(config).await)
}
