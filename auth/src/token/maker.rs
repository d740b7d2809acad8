use chrono::Duration;

use super::errors::TokenError;
use super::payload::Payload;

/// Issues and validates access tokens.
///
/// Implementations hold only read-only key material, so a single instance is
/// shared by every request handler.
pub trait TokenMaker: Send + Sync {
    /// Mint a token for `subject` that expires after `duration`.
    ///
    /// # Returns
    /// The opaque token string and the payload it carries
    ///
    /// # Errors
    /// * `EncodingFailed` - Payload serialization or encryption failed
    fn create_token(&self, subject: &str, duration: Duration)
        -> Result<(String, Payload), TokenError>;

    /// Authenticate a token and return its payload.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, tampered with or sealed by another key
    /// * `ExpiredToken` - Token is authentic but past its expiry
    fn validate_token(&self, token: &str) -> Result<Payload, TokenError>;
}
