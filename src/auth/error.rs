//! Error types for the auth store and its storage port.

use thiserror::Error;

/// Failure reading or writing the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed")]
    Io(#[from] std::io::Error),

    #[error("store contents are not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// Failure of an auth operation.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("failed to persist user")]
    Storage(#[from] StoreError),
}

impl AuthError {
    /// Returns true for errors caused by the supplied password.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::PasswordTooShort { .. }
        )
    }
}
