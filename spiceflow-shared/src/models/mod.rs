/// Database models
///
/// - `user`: participants and admins, with their point balance
/// - `task`: the reward catalog
/// - `claim`: user/task completion records and the claim transaction

pub mod claim;
pub mod task;
pub mod user;
