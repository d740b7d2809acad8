use auth::is_strong;
use auth::sanitize;
use auth::validation::translate;
use auth::validation::validate;
use auth::validation::FieldRules;
use auth::validation::Rule;
use auth::HasherParams;
use auth::PasswordHasher;

fn hasher() -> PasswordHasher {
    PasswordHasher::with_params(HasherParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build hasher")
}

#[test]
fn test_strength_policy_cases() {
    assert!(!is_strong("234"));
    assert!(!is_strong("BOLUWATIFE123"));
    assert!(!is_strong("boluwatife@123"));
    assert!(!is_strong("Boluwatife@"));
    assert!(!is_strong("Boluwatife123"));
    assert!(is_strong("Boluwatife@123"));
}

#[test]
fn test_sanitized_invisible_character_is_not_a_symbol() {
    for password in ["Password1\u{200B}", "Password1\u{0301}", "Password1\u{FEFF}"] {
        assert!(!is_strong(&sanitize(password)), "{password:?}");
    }
}

#[test]
fn test_sanitize_cases() {
    assert_eq!(sanitize("   hello world   "), "hello world");
    assert_eq!(sanitize("hi\x00there\x1F"), "hithere");
    assert_eq!(sanitize(&sanitize("  a\u{0301}\x00 ")), sanitize("  a\u{0301}\x00 "));
}

#[test]
fn test_hash_compare_properties() {
    let hasher = hasher();

    let passwords = ["Boluwatife@123", "another-Secret9", "", "pässwörd"];
    let hashes: Vec<String> = passwords
        .iter()
        .map(|p| hasher.hash(p).expect("Failed to hash password"))
        .collect();

    for (i, password) in passwords.iter().enumerate() {
        for (j, hash) in hashes.iter().enumerate() {
            assert_eq!(hasher.verify(password, hash), i == j);
        }
    }
}

#[test]
fn test_same_password_hashes_differently() {
    let hasher = hasher();

    let first = hasher.hash("Boluwatife@123").unwrap();
    let second = hasher.hash("Boluwatife@123").unwrap();

    assert_ne!(first, second);
    assert!(hasher.verify("Boluwatife@123", &first));
    assert!(hasher.verify("Boluwatife@123", &second));
}

#[test]
fn test_registration_pipeline() {
    let hasher = hasher();

    // Decomposed and composed forms sanitize to the same stored credential.
    let registered = sanitize("  Caf\u{00e9}@Secret1 ");
    let login = sanitize("Cafe\u{0301}@Secret1");
    assert_eq!(registered, login);

    let password_rules = FieldRules::new("Password", [Rule::Required, Rule::Strong]);
    assert!(validate(&[(&password_rules, &registered)]).is_empty());

    let hash = hasher.hash(&registered).unwrap();
    assert!(hasher.verify(&login, &hash));
}

#[test]
fn test_registration_rejects_weak_password_with_message() {
    let password_rules = FieldRules::new("Password", [Rule::Required, Rule::Strong]);
    let violations = validate(&[(&password_rules, "boluwatife@123")]);

    assert_eq!(translate(&violations), ["Password is not strong enough"]);
}
