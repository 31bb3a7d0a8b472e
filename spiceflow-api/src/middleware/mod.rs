/// Middleware for the API server
///
/// - `admin`: shared-secret gate for the `/api/admin` route group

pub mod admin;
