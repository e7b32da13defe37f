//! Persisted entry names. Changing any of these orphans existing data.

/// Session: `{"username": .., "role": ..}` or absent.
pub const CURRENT_USER: &str = "current_user";

/// Registered accounts: `{"<username>": "<password>"}`.
pub const APP_USERS: &str = "app_users";

/// Full catalog: array of motors.
pub const APP_MOTORS: &str = "app_motors";
