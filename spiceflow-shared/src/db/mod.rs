/// Database layer
///
/// - `pool`: PostgreSQL connection pool construction and health check
/// - `migrations`: embedded schema migrations
/// - `seed`: launch catalog and admin account
///
/// Models live in the `models` module at crate root level.

pub mod migrations;
pub mod pool;
pub mod seed;
