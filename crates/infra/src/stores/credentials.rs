use thiserror::Error;

use motordesk_auth::{AuthError, CredentialSet, Identity, User};

use crate::kv::{KeyValueStore, StoreError, keys, load_json, save_json};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccountError {
    /// The business-level failure, if this is not a storage problem.
    pub fn auth(&self) -> Option<&AuthError> {
        match self {
            AccountError::Auth(e) => Some(e),
            AccountError::Store(_) => None,
        }
    }
}

/// Registered accounts, persisted under `app_users`. The admin sentinel is
/// never part of the stored set.
#[derive(Debug)]
pub struct CredentialStore<S> {
    kv: S,
    credentials: CredentialSet,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn open(kv: S) -> Result<Self, StoreError> {
        let credentials = load_json(&kv, keys::APP_USERS)?.unwrap_or_default();
        Ok(Self { kv, credentials })
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        self.credentials.authenticate(username, password)
    }

    /// Create an account.
    pub fn register(&mut self, username: &str, password: &str) -> Result<Identity, AccountError> {
        let mut next = self.credentials.clone();
        let identity = next.register(username, password).inspect_err(|e| {
            tracing::warn!(username, error = %e, "registration rejected");
        })?;
        self.commit(next)?;
        tracing::info!(username, "user registered");
        Ok(identity)
    }

    /// Delete an account; the admin and unknown names are no-ops.
    pub fn remove(&mut self, username: &str) -> Result<(), StoreError> {
        let mut next = self.credentials.clone();
        if next.remove(username) {
            self.commit(next)?;
            tracing::info!(username, "user removed");
        } else {
            tracing::debug!(username, "user removal ignored");
        }
        Ok(())
    }

    /// Reset a password; the admin and unknown names are no-ops.
    pub fn update_password(
        &mut self,
        username: &str,
        new_password: &str,
    ) -> Result<(), StoreError> {
        let mut next = self.credentials.clone();
        if next.update_password(username, new_password) {
            self.commit(next)?;
            tracing::info!(username, "password updated");
        } else {
            tracing::debug!(username, "password update ignored");
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<User> {
        self.credentials.list_all()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.credentials.contains(username)
    }

    fn commit(&mut self, next: CredentialSet) -> Result<(), StoreError> {
        save_json(&self.kv, keys::APP_USERS, &next)?;
        self.credentials = next;
        Ok(())
    }
}
