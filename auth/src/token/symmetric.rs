use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::aead::AeadCore;
use chacha20poly1305::aead::KeyInit;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::aead::Payload as AeadPayload;
use chacha20poly1305::XChaCha20Poly1305;
use chacha20poly1305::XNonce;
use chrono::Duration;

use super::errors::TokenError;
use super::maker::TokenMaker;
use super::payload::Payload;

/// Required symmetric key length in bytes.
pub const KEY_SIZE: usize = 32;

const NONCE_SIZE: usize = 24;
const TAG_SIZE: usize = 16;

/// Version and purpose prefix. Also bound as associated data.
const HEADER: &str = "v1.local.";

/// Token maker sealing payloads with XChaCha20-Poly1305.
///
/// Token layout: `v1.local.` followed by base64url (no padding) of
/// `nonce || ciphertext || tag`. The whole payload is inside the ciphertext,
/// so the subject, issue time and expiry are all authenticated together.
pub struct SymmetricTokenMaker {
    cipher: XChaCha20Poly1305,
}

impl SymmetricTokenMaker {
    /// Create a token maker from a symmetric key.
    ///
    /// # Arguments
    /// * `key` - Secret key, exactly [`KEY_SIZE`] bytes
    ///
    /// # Errors
    /// * `InvalidKeySize` - Key length differs from [`KEY_SIZE`]
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let key = key.as_ref();
        let size_error = TokenError::InvalidKeySize {
            expected: KEY_SIZE,
            actual: key.len(),
        };

        if key.len() != KEY_SIZE {
            return Err(size_error);
        }

        let cipher = XChaCha20Poly1305::new_from_slice(key).map_err(|_| size_error)?;

        Ok(Self { cipher })
    }

    fn seal(&self, plaintext: &[u8]) -> Result<String, TokenError> {
        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);

        let ciphertext = self
            .cipher
            .encrypt(
                &nonce,
                AeadPayload {
                    msg: plaintext,
                    aad: HEADER.as_bytes(),
                },
            )
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        Ok(format!("{HEADER}{}", URL_SAFE_NO_PAD.encode(sealed)))
    }

    /// Decrypt and decode a token. The error is a log reason only.
    fn open(&self, token: &str) -> Result<Payload, &'static str> {
        let body = token.strip_prefix(HEADER).ok_or("unsupported header")?;

        let sealed = URL_SAFE_NO_PAD
            .decode(body)
            .map_err(|_| "malformed encoding")?;

        if sealed.len() < NONCE_SIZE + TAG_SIZE {
            return Err("truncated token");
        }

        let (nonce, ciphertext) = sealed.split_at(NONCE_SIZE);

        let plaintext = self
            .cipher
            .decrypt(
                XNonce::from_slice(nonce),
                AeadPayload {
                    msg: ciphertext,
                    aad: HEADER.as_bytes(),
                },
            )
            .map_err(|_| "authentication failed")?;

        serde_json::from_slice(&plaintext).map_err(|_| "malformed payload")
    }
}

impl TokenMaker for SymmetricTokenMaker {
    fn create_token(
        &self,
        subject: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(subject, duration)?;

        let plaintext =
            serde_json::to_vec(&payload).map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let token = self.seal(&plaintext)?;

        Ok((token, payload))
    }

    fn validate_token(&self, token: &str) -> Result<Payload, TokenError> {
        let payload = self.open(token).map_err(|reason| {
            tracing::debug!(reason, "Token rejected");
            TokenError::InvalidToken
        })?;

        // Expiry is only meaningful once the payload is known to be authentic.
        if payload.is_expired() {
            tracing::debug!(token_id = %payload.id, "Token expired");
            return Err(TokenError::ExpiredToken);
        }

        Ok(payload)
    }
}

impl fmt::Debug for SymmetricTokenMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricTokenMaker")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
