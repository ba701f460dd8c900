// Error types for the authentication flow

use crate::store::models::Role;

/// Errors produced by the authentication state machine.
///
/// All of these are recoverable: the flow stays on the current screen and
/// the caller renders the message inline. Nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("no account found for {0}")]
    NotFound(String),

    #[error("this account is registered as {actual}, not {selected}")]
    RoleMismatch { selected: Role, actual: Role },

    #[error("incorrect password")]
    InvalidCredentials,

    #[error("incorrect verification code")]
    InvalidCode,

    #[error("an account with this email already exists")]
    DuplicateEmail,
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation(message.into())
    }
}

/// Helper to convert a failed ValidationResult into an AuthError
impl From<super::validation::ValidationResult> for AuthError {
    fn from(result: super::validation::ValidationResult) -> Self {
        AuthError::Validation(result.summary())
    }
}
