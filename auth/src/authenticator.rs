use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Payload;
use crate::token::SymmetricTokenMaker;
use crate::token::TokenError;
use crate::token::TokenMaker;

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and access token handling.
pub struct Authenticator<M: TokenMaker = SymmetricTokenMaker> {
    password_hasher: PasswordHasher,
    token_maker: M,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Encrypted access token
    pub access_token: String,

    /// Claims sealed in the token
    pub payload: Payload,
}

impl AuthenticationResult {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.payload.expires_at
    }
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator<SymmetricTokenMaker> {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `symmetric_key` - Token encryption key, exactly 32 bytes
    ///
    /// # Errors
    /// * `InvalidKeySize` - Key has the wrong length
    pub fn new(symmetric_key: &[u8]) -> Result<Self, TokenError> {
        Ok(Self::with_parts(
            PasswordHasher::new(),
            SymmetricTokenMaker::new(symmetric_key)?,
        ))
    }
}

impl<M: TokenMaker> Authenticator<M> {
    /// Create an authenticator from an explicit hasher and token maker.
    pub fn with_parts(password_hasher: PasswordHasher, token_maker: M) -> Self {
        Self {
            password_hasher,
            token_maker,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity the token is bound to
    /// * `duration` - Token lifetime
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or the stored hash is unusable
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        duration: Duration,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let (access_token, payload) = self.token_maker.create_token(subject, duration)?;

        Ok(AuthenticationResult {
            access_token,
            payload,
        })
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token failed authentication
    /// * `ExpiredToken` - Token is authentic but expired
    pub fn validate_token(&self, token: &str) -> Result<Payload, TokenError> {
        self.token_maker.validate_token(token)
    }
}
