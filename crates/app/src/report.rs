//! Structured outcome handed to the UI: success flag, message, optional count.

use serde::Serialize;

use motordesk_infra::ImportSummary;

use crate::desk::SaveOutcome;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub success: bool,
    /// Machine-readable error code; absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Report {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            error: None,
            message: message.into(),
            count: None,
        }
    }

    pub fn ok_with_count(message: impl Into<String>, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::ok(message)
        }
    }

    pub fn failure(err: &AppError) -> Self {
        Self {
            success: false,
            error: Some(err.code()),
            message: err.to_string(),
            count: None,
        }
    }

    /// Fold a facade result into a report, rendering success with `on_ok`.
    ///
    /// Results whose success type converts into a report can use `Report::from`
    /// instead.
    pub fn from_result<T>(result: Result<T, AppError>, on_ok: impl FnOnce(T) -> Report) -> Self {
        match result {
            Ok(value) => on_ok(value),
            Err(err) => {
                tracing::debug!(error = %err, code = err.code(), "operation failed");
                Self::failure(&err)
            }
        }
    }
}

impl From<ImportSummary> for Report {
    fn from(summary: ImportSummary) -> Self {
        let message = match summary.skipped_rows {
            0 => format!("import completed: {} motors", summary.imported),
            skipped => format!(
                "import completed: {} motors (skipped rows: {})",
                summary.imported, skipped
            ),
        };
        Self::ok_with_count(message, summary.imported)
    }
}

impl From<SaveOutcome> for Report {
    fn from(outcome: SaveOutcome) -> Self {
        match outcome {
            SaveOutcome::Added => Self::ok("motor added"),
            SaveOutcome::Updated => Self::ok("motor updated"),
        }
    }
}

impl<T: Into<Report>> From<Result<T, AppError>> for Report {
    fn from(result: Result<T, AppError>) -> Self {
        Self::from_result(result, Into::into)
    }
}
