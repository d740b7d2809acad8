//! Authentication credential library
//!
//! Provides the credential pipeline shared by account-facing services:
//! - Input sanitization before policy checks and storage
//! - Password strength policy
//! - Password hashing (Argon2id)
//! - Encrypted, time-bound access tokens (XChaCha20-Poly1305)
//! - Field validation rules and user-facing error messages
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{SymmetricTokenMaker, TokenMaker};
//! use chrono::Duration;
//!
//! let maker = SymmetricTokenMaker::new(b"an_example_key_of_exactly_32_byt").unwrap();
//! let (token, payload) = maker.create_token("alice@example.com", Duration::minutes(15)).unwrap();
//! let decoded = maker.validate_token(&token).unwrap();
//! assert_eq!(decoded, payload);
//! ```
//!
//! ## Registration Input
//! ```
//! use auth::{is_strong, sanitize};
//!
//! let password = sanitize("  Boluwatife@123 ");
//! assert!(is_strong(&password));
//! ```

pub mod authenticator;
pub mod password;
pub mod sanitize;
pub mod token;
pub mod validation;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::is_strong;
pub use password::HasherParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PolicyViolation;
pub use sanitize::sanitize;
pub use sanitize::sanitize_multiline;
pub use token::Payload;
pub use token::SymmetricTokenMaker;
pub use token::TokenError;
pub use token::TokenMaker;
