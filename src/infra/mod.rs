//! Infrastructure: Postgres connections, schema and seed scripts.

pub mod db;
pub mod schema;

pub(crate) use db::{acquire, release};
pub use db::{create_database_if_missing, database_exists, drop_database};
