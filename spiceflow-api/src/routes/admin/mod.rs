/// Admin endpoints
///
/// Every route here sits behind `middleware::admin::admin_auth_layer`, so the
/// handlers assume the caller is authorized.
///
/// - `tasks`: create, update and delete catalog entries
/// - `users`: list users and change roles

pub mod tasks;
pub mod users;

pub use tasks::{create_task, delete_task, update_task};
pub use users::{list_users, set_user_role};
