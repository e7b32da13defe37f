use anyhow::Context;

use motordesk_auth::{Role, User, authorize, require_admin};
use motordesk_catalog::Motor;
use motordesk_core::MotorCode;
use motordesk_import::{export, template};
use motordesk_infra::{
    AppConfig, CatalogStore, CredentialStore, FileKeyValueStore, ImportSummary, KeyValueStore,
    SessionStore, StoreError,
};
use motordesk_pricing::{DEFAULT_REGION, PriceBreakdown, compute_breakdown};

use crate::errors::AppError;

/// What [`MotorDesk::save_motor`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    Updated,
}

/// Session, accounts and catalog over one persistence backend.
#[derive(Debug)]
pub struct MotorDesk<S> {
    session: SessionStore<S>,
    credentials: CredentialStore<S>,
    catalog: CatalogStore<S>,
    region: String,
}

impl MotorDesk<FileKeyValueStore> {
    /// Open the file-backed desk described by `config`.
    pub fn open_with_config(config: &AppConfig) -> anyhow::Result<Self> {
        let kv = FileKeyValueStore::open(&config.data_dir)?;
        let mut desk = Self::open(kv).with_context(|| {
            format!("failed to load persisted state from {:?}", config.data_dir)
        })?;
        desk.select_region(&config.default_region);
        Ok(desk)
    }
}

impl<S: KeyValueStore + Clone> MotorDesk<S> {
    /// Load every store from `kv`, restoring any persisted session.
    pub fn open(kv: S) -> Result<Self, StoreError> {
        let desk = Self {
            session: SessionStore::open(kv.clone())?,
            credentials: CredentialStore::open(kv.clone())?,
            catalog: CatalogStore::open(kv)?,
            region: DEFAULT_REGION.to_string(),
        };
        tracing::info!(
            motors = desk.catalog.len(),
            authenticated = desk.session.is_authenticated(),
            "motordesk opened"
        );
        Ok(desk)
    }

    // ── session ────────────────────────────────────────────────────────────

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<User, AppError> {
        Ok(self.session.login(&self.credentials, username, password)?)
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        Ok(self.session.logout()?)
    }

    // ── region ─────────────────────────────────────────────────────────────

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Any code is accepted; unknown ones simply price with a zero rate.
    pub fn select_region(&mut self, region: &str) {
        self.region = region.to_string();
    }

    // ── catalog reads (any authenticated user) ─────────────────────────────

    pub fn motors(&self) -> Result<&[Motor], AppError> {
        self.require(Role::User)?;
        Ok(self.catalog.list())
    }

    pub fn search(&self, term: &str) -> Result<Vec<&Motor>, AppError> {
        self.require(Role::User)?;
        Ok(self.catalog.search(term))
    }

    pub fn motor(&self, code: &MotorCode) -> Result<&Motor, AppError> {
        self.require(Role::User)?;
        self.catalog
            .get(code)
            .ok_or_else(|| AppError::MotorNotFound(code.clone()))
    }

    /// Breakdown of `code` in the selected region.
    pub fn price(&self, code: &MotorCode) -> Result<PriceBreakdown, AppError> {
        self.price_in(code, &self.region)
    }

    pub fn price_in(&self, code: &MotorCode, region: &str) -> Result<PriceBreakdown, AppError> {
        Ok(compute_breakdown(self.motor(code)?, region))
    }

    /// CSV template for bulk import.
    pub fn template(&self) -> String {
        template()
    }

    pub fn export_csv(&self) -> Result<String, AppError> {
        self.require(Role::User)?;
        Ok(export(self.catalog.list()))
    }

    // ── catalog administration ─────────────────────────────────────────────

    pub fn add_motor(&mut self, motor: Motor) -> Result<(), AppError> {
        self.require(Role::Admin)?;
        Ok(self.catalog.add(motor)?)
    }

    pub fn update_motor(&mut self, motor: Motor) -> Result<(), AppError> {
        self.require(Role::Admin)?;
        Ok(self.catalog.update(motor)?)
    }

    /// Editor save: update when the code is the one being edited, ask for
    /// confirmation before overwriting a different existing motor, add
    /// otherwise. Changing the code of a selected motor saves a copy under
    /// the new code and keeps the original.
    #[tracing::instrument(skip(self, motor), fields(code = %motor.code))]
    pub fn save_motor(
        &mut self,
        selected: Option<&MotorCode>,
        motor: Motor,
        overwrite: bool,
    ) -> Result<SaveOutcome, AppError> {
        self.require(Role::Admin)?;
        motor.validate()?;

        if selected == Some(&motor.code) {
            self.catalog.update(motor)?;
            return Ok(SaveOutcome::Updated);
        }
        if self.catalog.contains(&motor.code) {
            if !overwrite {
                return Err(AppError::OverwriteNotConfirmed(motor.code));
            }
            self.catalog.update(motor)?;
            return Ok(SaveOutcome::Updated);
        }
        self.catalog.add(motor)?;
        Ok(SaveOutcome::Added)
    }

    pub fn delete_motor(&mut self, code: &MotorCode) -> Result<(), AppError> {
        self.require(Role::Admin)?;
        Ok(self.catalog.delete(code)?)
    }

    /// Replace the whole catalog with the rows of `text`.
    #[tracing::instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn import_csv(&mut self, text: &str) -> Result<ImportSummary, AppError> {
        self.require(Role::Admin)?;
        Ok(self.catalog.import_csv(text)?)
    }

    // ── account administration ─────────────────────────────────────────────

    pub fn users(&self) -> Result<Vec<User>, AppError> {
        self.require(Role::Admin)?;
        Ok(self.credentials.list_all())
    }

    /// Register an account; with `auto_login` the new user replaces the
    /// current session.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        auto_login: bool,
    ) -> Result<User, AppError> {
        self.require(Role::Admin)?;
        let identity = self.credentials.register(username, password)?;
        if auto_login {
            return Ok(self.session.begin(identity)?);
        }
        Ok(identity.to_user())
    }

    /// Admin panel account creation (no session switch).
    pub fn create_user(&mut self, username: &str, password: &str) -> Result<User, AppError> {
        self.register(username, password, false)
    }

    /// No-op for the admin and for unknown users.
    pub fn remove_user(&mut self, username: &str) -> Result<(), AppError> {
        self.require(Role::Admin)?;
        Ok(self.credentials.remove(username)?)
    }

    /// No-op for the admin, unknown users and empty passwords.
    pub fn reset_password(&mut self, username: &str, new_password: &str) -> Result<(), AppError> {
        self.require(Role::Admin)?;
        Ok(self.credentials.update_password(username, new_password)?)
    }

    fn require(&self, role: Role) -> Result<&User, AppError> {
        Ok(authorize(self.session.current(), role)?)
    }

    /// Whether the session may use the admin operations.
    pub fn is_admin(&self) -> bool {
        require_admin(self.session.current()).is_ok()
    }
}
