//! Registered accounts (username → plaintext password).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use motordesk_core::{DomainError, Username};

use crate::identity::{ADMIN_PASSWORD, ADMIN_USERNAME, Identity, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user and wrong password are deliberately the same error.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("the admin username is reserved")]
    AdminNameReserved,

    #[error("user '{0}' already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// The mutable set of non-admin accounts.
///
/// Serialized as a flat JSON object, which is the persisted `app_users` format.
/// Any `admin` key found there is kept for round-tripping but never consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialSet {
    users: BTreeMap<String, String>,
}

fn is_admin(username: &str) -> bool {
    username == ADMIN_USERNAME
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a login attempt. Both fields are compared exactly.
    ///
    /// The admin pair is hardcoded; no stored record can replace it. A stored
    /// empty password never matches.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if is_admin(username) {
            return if password == ADMIN_PASSWORD {
                Ok(Identity::Admin)
            } else {
                Err(AuthError::InvalidCredentials)
            };
        }

        match self.users.get(username) {
            Some(stored) if !stored.is_empty() && stored == password => {
                let name = Username::new(username).map_err(|_| AuthError::InvalidCredentials)?;
                Ok(Identity::Registered(name))
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Add a new account.
    pub fn register(&mut self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if is_admin(username) {
            return Err(AuthError::AdminNameReserved);
        }
        let name = Username::new(username)?;
        if password.is_empty() {
            return Err(DomainError::validation("password cannot be empty").into());
        }
        if self.users.contains_key(username) {
            return Err(AuthError::AlreadyExists(username.to_string()));
        }
        self.users.insert(username.to_string(), password.to_string());
        Ok(Identity::Registered(name))
    }

    /// Delete an account. Returns whether anything was removed; the admin and
    /// unknown names are no-ops.
    pub fn remove(&mut self, username: &str) -> bool {
        if is_admin(username) {
            return false;
        }
        self.users.remove(username).is_some()
    }

    /// Overwrite an existing password. Returns whether anything changed; the
    /// admin, unknown names and empty passwords are ignored.
    pub fn update_password(&mut self, username: &str, new_password: &str) -> bool {
        if is_admin(username) || new_password.is_empty() {
            return false;
        }
        match self.users.get_mut(username) {
            Some(stored) => {
                *stored = new_password.to_string();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        !is_admin(username) && self.users.contains_key(username)
    }

    /// Number of registered (non-admin) accounts.
    pub fn len(&self) -> usize {
        self.users.keys().filter(|name| !is_admin(name)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Admin first, then registered accounts by name.
    pub fn list_all(&self) -> Vec<User> {
        let registered = self
            .users
            .keys()
            .filter(|name| !is_admin(name))
            .filter_map(|name| Username::new(name.as_str()).ok())
            .map(|name| Identity::Registered(name).to_user());
        std::iter::once(User::admin()).chain(registered).collect()
    }
}
