//! Call-site wrappers for the binary.
//!
//! Failures are logged with the operation name and turned into `None`, so a
//! failing call never stops the process.

pub mod actor;
pub mod bootstrap;
pub mod director;

use crate::error::AppError;

pub(crate) fn logged<T>(op: &str, result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("{} failed [{}]: {}", op, e.code(), e);
            None
        }
    }
}

/// Like [`logged`], for operations whose `Ok(None)` means "no such row".
pub(crate) fn logged_lookup<T>(op: &str, id: i32, result: Result<Option<T>, AppError>) -> Option<T> {
    let found = logged(op, result)?;
    if found.is_none() {
        log::warn!("{}: no row with id {}", op, id);
    }
    found
}
