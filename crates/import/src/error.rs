use thiserror::Error;

/// Whole-file import failures. Row-level problems never surface here; they are
/// counted in [`crate::ParsedCatalog::skipped_rows`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Fewer than two non-blank lines (no header, or header only).
    #[error("the file is empty or has no data rows")]
    EmptyOrHeaderOnly,

    /// Every data row was skipped or dropped.
    #[error("no valid motor found in the file ({skipped} rows skipped)")]
    NoValidRows { skipped: usize },
}
