//! `motordesk-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from storage: the credential set is a
//! plain value that a store loads, mutates and persists.

pub mod authorize;
pub mod credentials;
pub mod identity;
pub mod roles;

pub use authorize::{AuthzError, authorize, require_admin};
pub use credentials::{AuthError, CredentialSet};
pub use identity::{ADMIN_PASSWORD, ADMIN_USERNAME, Identity, User};
pub use roles::Role;
