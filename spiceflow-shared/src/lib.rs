//! # SpiceFlow Shared Library
//!
//! Database layer, models and admin-secret verification used by the SpiceFlow
//! API server and its seed tool.
//!
//! ## Module Organization
//!
//! - `db`: connection pool, migrations and seed catalog
//! - `models`: users, tasks and claims with their SQL operations
//! - `auth`: admin secret verification

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the SpiceFlow shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
