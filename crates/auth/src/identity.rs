//! Who is logged in: the sentinel admin or a registered account.

use serde::{Deserialize, Serialize};

use motordesk_core::Username;

use crate::roles::Role;

/// Login name of the built-in superuser.
pub const ADMIN_USERNAME: &str = "admin";

/// Password of the built-in superuser. Hardcoded, never stored.
pub const ADMIN_PASSWORD: &str = "admin";

/// An authenticated identity.
///
/// The admin is not a member of the registered set, so every mutation on that
/// set can ignore it structurally instead of re-checking the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Admin,
    Registered(Username),
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Identity::Admin => Role::Admin,
            Identity::Registered(_) => Role::User,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Identity::Admin => ADMIN_USERNAME,
            Identity::Registered(name) => name.as_str(),
        }
    }

    pub fn to_user(&self) -> User {
        User {
            username: self.username().to_string(),
            role: self.role(),
        }
    }
}

/// Password-free projection of an account, as listed and persisted in the
/// `current_user` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
}

impl User {
    pub fn admin() -> Self {
        Identity::Admin.to_user()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<Identity> for User {
    fn from(identity: Identity) -> Self {
        identity.to_user()
    }
}
