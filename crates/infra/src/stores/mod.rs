//! Stateful stores: an in-memory working copy backed by a [`KeyValueStore`].
//!
//! Every mutation persists the complete resulting value before the working
//! copy is replaced, so a failed write leaves the store as it was.
//!
//! [`KeyValueStore`]: crate::kv::KeyValueStore

pub mod catalog;
pub mod credentials;
pub mod session;

pub use catalog::{CatalogError, CatalogStore, ImportFailure, ImportSummary};
pub use credentials::{AccountError, CredentialStore};
pub use session::SessionStore;
