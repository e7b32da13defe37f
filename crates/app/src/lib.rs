//! Application facade: the one handle a UI layer talks to.
//!
//! It wires session, credentials and catalog over a single persistence
//! backend, checks roles before every operation, and turns outcomes into
//! structured reports.

pub mod desk;
pub mod errors;
pub mod report;

pub use desk::{MotorDesk, SaveOutcome};
pub use errors::AppError;
pub use motordesk_infra::AppConfig;
pub use report::Report;

use motordesk_infra::FileKeyValueStore;

/// Process entry point for an embedding UI: logging, then the file-backed
/// desk configured from the environment.
pub fn bootstrap() -> anyhow::Result<MotorDesk<FileKeyValueStore>> {
    motordesk_observability::init();
    let config = AppConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        region = %config.default_region,
        "bootstrapping"
    );
    MotorDesk::open_with_config(&config)
}
