//! Logging setup shared by every process embedding the stores.

pub mod logging;

/// Initialize process-wide logging with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    logging::init(logging::DEFAULT_FILTER);
}
