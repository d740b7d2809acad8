use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::TokenError;

/// Claims carried inside an encrypted token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payload {
    /// Unique token identifier, fresh for every issuance
    pub id: Uuid,

    /// Identity claim (account email)
    #[serde(rename = "sub")]
    pub subject: String,

    /// Issued at
    #[serde(rename = "iat")]
    pub issued_at: DateTime<Utc>,

    /// Expiration time
    #[serde(rename = "exp")]
    pub expires_at: DateTime<Utc>,
}

impl Payload {
    /// Create a payload issued now and valid for `duration`.
    ///
    /// A negative duration produces a payload that is already expired.
    ///
    /// # Errors
    /// * `DurationOutOfRange` - Expiry is not a representable instant
    pub fn new(subject: impl Into<String>, duration: Duration) -> Result<Self, TokenError> {
        Self::starting_at(subject, Utc::now(), duration)
    }

    pub(crate) fn starting_at(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        duration: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(duration)
            .ok_or_else(|| TokenError::DurationOutOfRange(duration.to_string()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            issued_at,
            expires_at,
        })
    }

    /// Check if token is expired at the given instant.
    ///
    /// The expiry instant itself is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Check if token is expired now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payload() {
        let payload = Payload::new("alice@example.com", Duration::minutes(15)).unwrap();

        assert_eq!(payload.subject, "alice@example.com");
        assert!(!payload.id.is_nil());
        assert_eq!(payload.expires_at - payload.issued_at, Duration::minutes(15));
        assert!(!payload.is_expired());
    }

    #[test]
    fn test_ids_are_unique() {
        let first = Payload::new("alice@example.com", Duration::minutes(1)).unwrap();
        let second = Payload::new("alice@example.com", Duration::minutes(1)).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_negative_duration_is_expired() {
        let payload = Payload::new("alice@example.com", -Duration::minutes(1)).unwrap();
        assert!(payload.expires_at < payload.issued_at);
        assert!(payload.is_expired());
    }

    #[test]
    fn test_is_expired_at() {
        let issued_at = Utc::now();
        let payload =
            Payload::starting_at("alice@example.com", issued_at, Duration::seconds(10)).unwrap();

        assert!(!payload.is_expired_at(issued_at + Duration::seconds(9)));
        assert!(!payload.is_expired_at(issued_at + Duration::seconds(10)));
        assert!(payload.is_expired_at(issued_at + Duration::seconds(11)));
    }

    #[test]
    fn test_unrepresentable_expiry() {
        for duration in [Duration::days(365 * 400_000), -Duration::days(365 * 400_000)] {
            assert!(matches!(
                Payload::new("alice@example.com", duration),
                Err(TokenError::DurationOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_serialized_claim_names() {
        let payload = Payload::new("alice@example.com", Duration::minutes(1)).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["sub"], "alice@example.com");
        assert!(json.get("iat").is_some());
        assert!(json.get("exp").is_some());
        assert!(json.get("id").is_some());
    }
}
