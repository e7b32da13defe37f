//! `motordesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no persistence concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, dedup_by_id, find_by_id, upsert};
pub use error::{DomainError, DomainResult};
pub use id::{MotorCode, Username};
