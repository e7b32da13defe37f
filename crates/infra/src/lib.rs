//! Infrastructure layer: key-value persistence, stateful stores, config.

pub mod config;
pub mod kv;
pub mod stores;

pub use config::AppConfig;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StoreError};
pub use stores::{
    AccountError, CatalogError, CatalogStore, CredentialStore, ImportFailure, ImportSummary,
    SessionStore,
};
