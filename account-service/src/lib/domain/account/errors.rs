use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Top-level error for all account operations
///
/// Only `Validation` and `EmailAlreadyExists` carry detail meant for the end
/// user. Credential and token failures stay generic.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Input errors
    #[error("{0}")]
    Validation(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Authentication errors
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("token has expired")]
    ExpiredToken,

    // Internal errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AccountError {
    /// Whether the error reflects a server-side failure rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AccountError::Password(_)
                | AccountError::TokenIssuance(_)
                | AccountError::DatabaseError(_)
                | AccountError::Unknown(_)
        )
    }
}

impl From<TokenError> for AccountError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken => AccountError::InvalidToken,
            TokenError::ExpiredToken => AccountError::ExpiredToken,
            TokenError::InvalidKeySize { .. }
            | TokenError::DurationOutOfRange(_)
            | TokenError::EncodingFailed(_) => {
                AccountError::TokenIssuance(err.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}
