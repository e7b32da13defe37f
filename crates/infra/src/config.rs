//! Configuration loading and representation.

use std::path::PathBuf;

use motordesk_pricing::{DEFAULT_REGION, is_known_region};

pub const DATA_DIR_VAR: &str = "MOTORDESK_DATA_DIR";
pub const DEFAULT_REGION_VAR: &str = "MOTORDESK_DEFAULT_REGION";

const DEFAULT_DATA_DIR: &str = "./data";

/// Process configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the persisted JSON entries.
    pub data_dir: PathBuf,
    /// Region preselected for price breakdowns.
    pub default_region: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_region: DEFAULT_REGION.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let default_region = match lookup(DEFAULT_REGION_VAR) {
            Some(region) if is_known_region(&region) => region,
            Some(region) => {
                tracing::warn!(
                    region = %region,
                    fallback = DEFAULT_REGION,
                    "unknown default region; using fallback"
                );
                DEFAULT_REGION.to_string()
            }
            None => DEFAULT_REGION.to_string(),
        };

        Self {
            data_dir,
            default_region,
        }
    }
}
