/// API route handlers
///
/// - `health`: liveness probe
/// - `tasks`: public task catalog
/// - `claims`: claim a task and earn its points
/// - `progress`: a user's points and claim history
/// - `admin`: catalog and role management (admin key required)

pub mod admin;
pub mod claims;
pub mod health;
pub mod progress;
pub mod tasks;
