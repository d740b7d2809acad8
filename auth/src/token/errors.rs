use thiserror::Error;

/// Error type for token operations.
///
/// `InvalidToken` deliberately carries no detail: a wrong key, a corrupted
/// ciphertext and a malformed string are indistinguishable to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Invalid key size: must be exactly {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("Token duration out of range: {0}")]
    DurationOutOfRange(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("invalid token")]
    InvalidToken,

    #[error("token has expired")]
    ExpiredToken,
}
