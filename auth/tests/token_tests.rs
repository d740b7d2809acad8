use auth::SymmetricTokenMaker;
use auth::TokenError;
use auth::TokenMaker;
use chrono::Duration;
use chrono::Utc;

const KEY: &str = "qwertyuiopasdfghjklzxcvbnmqwerty";

fn maker() -> SymmetricTokenMaker {
    SymmetricTokenMaker::new(KEY).expect("Failed to create maker")
}

#[test]
fn test_round_trip_preserves_subject() {
    let maker = maker();
    let long_subject = "x".repeat(1024);

    for subject in [
        "alice@example.com",
        "",
        "ünïcödé@example.com",
        "with spaces and \"quotes\"",
        long_subject.as_str(),
    ] {
        for duration in [Duration::seconds(1), Duration::minutes(15), Duration::days(30)] {
            let issued_after = Utc::now();
            let (token, payload) = maker
                .create_token(subject, duration)
                .expect("Failed to create token");

            let decoded = maker.validate_token(&token).expect("Failed to validate token");

            assert_eq!(decoded.subject, subject);
            assert_eq!(decoded, payload);
            assert!(decoded.issued_at >= issued_after);
            assert_eq!(decoded.expires_at - decoded.issued_at, duration);
        }
    }
}

#[test]
fn test_negative_durations_are_expired() {
    let maker = maker();

    for duration in [Duration::seconds(-1), Duration::minutes(-1), Duration::days(-365)] {
        let (token, _) = maker
            .create_token("alice@example.com", duration)
            .expect("Failed to create token");

        assert_eq!(maker.validate_token(&token), Err(TokenError::ExpiredToken));
    }
}

#[test]
fn test_out_of_range_duration_is_an_error() {
    let maker = maker();

    for duration in [Duration::days(365 * 400_000), Duration::MAX, Duration::MIN] {
        let result = maker.create_token("alice@example.com", duration);
        assert!(
            matches!(result, Err(TokenError::DurationOutOfRange(_))),
            "accepted {duration:?}"
        );
    }
}

#[test]
fn test_any_single_byte_flip_is_rejected() {
    let maker = maker();
    let (token, _) = maker
        .create_token("alice@example.com", Duration::minutes(15))
        .expect("Failed to create token");

    for position in 0..token.len() {
        for mask in [0x01u8, 0x20] {
            let mut bytes = token.clone().into_bytes();
            bytes[position] ^= mask;
            let tampered = String::from_utf8_lossy(&bytes);

            assert_eq!(
                maker.validate_token(&tampered),
                Err(TokenError::InvalidToken),
                "flip at {} with mask {:#04x} was accepted",
                position,
                mask
            );
        }
    }
}

#[test]
fn test_expired_token_with_flipped_byte_is_invalid() {
    let maker = maker();
    let (token, _) = maker
        .create_token("alice@example.com", -Duration::minutes(1))
        .expect("Failed to create token");

    for position in 0..token.len() {
        let mut bytes = token.clone().into_bytes();
        bytes[position] ^= 0x01;
        let tampered = String::from_utf8_lossy(&bytes);

        assert_eq!(maker.validate_token(&tampered), Err(TokenError::InvalidToken));
    }
}

#[test]
fn test_appended_data_is_rejected() {
    let maker = maker();
    let (token, _) = maker
        .create_token("alice@example.com", Duration::minutes(15))
        .expect("Failed to create token");

    assert_eq!(
        maker.validate_token(&format!("{token}AA")),
        Err(TokenError::InvalidToken)
    );
    assert_eq!(
        maker.validate_token(&format!(" {token}")),
        Err(TokenError::InvalidToken)
    );
}

#[test]
fn test_key_must_be_exactly_32_bytes() {
    for key in ["a".repeat(31), "a".repeat(33)] {
        assert!(matches!(
            SymmetricTokenMaker::new(&key),
            Err(TokenError::InvalidKeySize { expected: 32, .. })
        ));
    }
    assert!(SymmetricTokenMaker::new("a".repeat(32)).is_ok());
}

#[test]
fn test_error_messages_do_not_reveal_cause() {
    let maker = maker();
    let other = SymmetricTokenMaker::new("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").unwrap();
    let (token, _) = other
        .create_token("alice@example.com", Duration::minutes(15))
        .unwrap();

    let wrong_key = maker.validate_token(&token).unwrap_err();
    let garbage = maker.validate_token("garbage").unwrap_err();

    assert_eq!(wrong_key.to_string(), garbage.to_string());
    assert_eq!(wrong_key.to_string(), "invalid token");
}

#[test]
fn test_maker_is_shareable_across_threads() {
    let maker = std::sync::Arc::new(maker());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let maker = std::sync::Arc::clone(&maker);
            std::thread::spawn(move || {
                let subject = format!("user{i}@example.com");
                let (token, _) = maker.create_token(&subject, Duration::minutes(1)).unwrap();
                maker.validate_token(&token).unwrap().subject
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("user{i}@example.com"));
    }
}
