use thiserror::Error;

use crate::identity::User;
use crate::roles::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("forbidden: '{username}' lacks role '{required}'")]
    Forbidden { username: String, required: Role },
}

/// Check that the session user (if any) holds `required`.
///
/// - No IO
/// - No panics
pub fn authorize(user: Option<&User>, required: Role) -> Result<&User, AuthzError> {
    let user = user.ok_or(AuthzError::Unauthenticated)?;
    if user.role.grants(required) {
        Ok(user)
    } else {
        Err(AuthzError::Forbidden {
            username: user.username.clone(),
            required,
        })
    }
}

pub fn require_admin(user: Option<&User>) -> Result<&User, AuthzError> {
    authorize(user, Role::Admin)
}
