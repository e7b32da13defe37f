use thiserror::Error;

use motordesk_auth::{AuthError, AuthzError};
use motordesk_core::{DomainError, MotorCode};
use motordesk_import::ImportError;
use motordesk_infra::{AccountError, CatalogError, ImportFailure, StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("a motor with code '{0}' already exists")]
    DuplicateCode(MotorCode),

    /// Saving would overwrite another motor; repeat with overwrite confirmed.
    #[error("a motor with code '{0}' already exists; confirm to overwrite it")]
    OverwriteNotConfirmed(MotorCode),

    #[error("motor '{0}' not found")]
    MotorNotFound(MotorCode),

    #[error("the admin username is reserved")]
    AdminNameReserved,

    #[error("user '{0}' already exists")]
    UserExists(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    /// Stable machine-readable code for the UI layer.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "unauthenticated",
            AppError::Forbidden(_) => "forbidden",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::Validation(_) => "validation_error",
            AppError::DuplicateCode(_) => "duplicate_code",
            AppError::OverwriteNotConfirmed(_) => "confirm_overwrite",
            AppError::MotorNotFound(_) => "not_found",
            AppError::AdminNameReserved => "admin_name_reserved",
            AppError::UserExists(_) => "user_exists",
            AppError::Import(ImportError::EmptyOrHeaderOnly) => "empty_or_header_only",
            AppError::Import(ImportError::NoValidRows { .. }) => "no_valid_rows",
            AppError::Store(_) => "store_error",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<AuthzError> for AppError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::Unauthenticated => AppError::Unauthenticated,
            forbidden @ AuthzError::Forbidden { .. } => AppError::Forbidden(forbidden.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::AdminNameReserved => AppError::AdminNameReserved,
            AuthError::AlreadyExists(name) => AppError::UserExists(name),
            AuthError::Invalid(e) => e.into(),
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Auth(e) => e.into(),
            AccountError::Store(e) => e.into(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::DuplicateCode(code) => AppError::DuplicateCode(code),
            CatalogError::Invalid(e) => e.into(),
            CatalogError::Store(e) => e.into(),
        }
    }
}

impl From<ImportFailure> for AppError {
    fn from(err: ImportFailure) -> Self {
        match err {
            ImportFailure::Parse(e) => e.into(),
            ImportFailure::Store(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_distinct_codes() {
        assert_eq!(AppError::from(AuthError::InvalidCredentials).code(), "invalid_credentials");
        assert_eq!(AppError::from(AuthError::AdminNameReserved).code(), "admin_name_reserved");
        assert_eq!(
            AppError::from(AuthError::Invalid(DomainError::validation("x"))).code(),
            "validation_error"
        );
    }

    #[test]
    fn import_errors_keep_their_kind() {
        let err: AppError = ImportFailure::Parse(ImportError::NoValidRows { skipped: 3 }).into();
        assert_eq!(err.code(), "no_valid_rows");
    }

    #[test]
    fn duplicate_code_survives_mapping() {
        let code = MotorCode::new("M1").unwrap();
        let err: AppError = CatalogError::DuplicateCode(code.clone()).into();
        assert!(matches!(err, AppError::DuplicateCode(c) if c == code));
    }
}
