use motordesk_auth::{Identity, User};

use crate::kv::{KeyValueStore, StoreError, keys, load_json, save_json};
use crate::stores::credentials::{AccountError, CredentialStore};

/// The single logged-in user, persisted under `current_user` so a restart
/// resumes the session. There is no expiry.
#[derive(Debug)]
pub struct SessionStore<S> {
    kv: S,
    current: Option<User>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore whatever session was persisted.
    pub fn open(kv: S) -> Result<Self, StoreError> {
        let current: Option<User> = load_json(&kv, keys::CURRENT_USER)?;
        if let Some(user) = &current {
            tracing::debug!(username = %user.username, "session restored");
        }
        Ok(Self { kv, current })
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Authenticate against `credentials` and start a session on success.
    /// A failed attempt leaves the current session as it was.
    pub fn login<K: KeyValueStore>(
        &mut self,
        credentials: &CredentialStore<K>,
        username: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        let identity = credentials.authenticate(username, password).inspect_err(|_| {
            tracing::warn!(username, "login failed");
        })?;
        let user = self.begin(identity)?;
        tracing::info!(username = %user.username, role = %user.role, "login succeeded");
        Ok(user)
    }

    /// Make `identity` the current session.
    pub fn begin(&mut self, identity: Identity) -> Result<User, StoreError> {
        let user = identity.to_user();
        save_json(&self.kv, keys::CURRENT_USER, &user)?;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// End the session and forget it.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.kv.remove(keys::CURRENT_USER)?;
        if let Some(user) = self.current.take() {
            tracing::info!(username = %user.username, "logout");
        }
        Ok(())
    }
}
