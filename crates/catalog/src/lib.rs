//! Catalog domain module.
//!
//! This crate contains the motor record and the business rules around it,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod motor;
pub mod search;
pub mod seed;

pub use motor::Motor;
pub use search::search;
pub use seed::initial_motors;
