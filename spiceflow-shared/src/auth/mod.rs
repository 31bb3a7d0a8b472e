/// Authentication utilities
///
/// The only credential in the system is the shared admin secret sent in the
/// `x-admin-key` header; see `admin`.

pub mod admin;
