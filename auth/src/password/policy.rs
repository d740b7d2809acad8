use unicode_general_category::get_general_category;
use unicode_general_category::GeneralCategory;

use super::errors::PolicyViolation;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in characters. Bounds the cost of hashing.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Check whether a password satisfies the strength policy.
///
/// A strong password has between [`MIN_PASSWORD_LENGTH`] and
/// [`MAX_PASSWORD_LENGTH`] characters and contains at least one lowercase
/// letter, one uppercase letter, one digit and one punctuation or symbol
/// character.
pub fn is_strong(password: &str) -> bool {
    check(password).is_ok()
}

/// Evaluate the strength policy and report the first violated rule.
///
/// # Arguments
/// * `password` - Candidate password
///
/// # Errors
/// * `TooShort` / `TooLong` - Length outside the allowed range
/// * `MissingLowercase`, `MissingUppercase`, `MissingDigit`, `MissingSymbol` -
///   A required character class is absent
pub fn check(password: &str) -> Result<(), PolicyViolation> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(PolicyViolation::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(PolicyViolation::TooLong {
            max: MAX_PASSWORD_LENGTH,
            actual: length,
        });
    }

    let classes = CharacterClasses::of(password);

    if !classes.lower {
        return Err(PolicyViolation::MissingLowercase);
    }
    if !classes.upper {
        return Err(PolicyViolation::MissingUppercase);
    }
    if !classes.digit {
        return Err(PolicyViolation::MissingDigit);
    }
    if !classes.symbol {
        return Err(PolicyViolation::MissingSymbol);
    }

    Ok(())
}

#[derive(Debug, Default)]
struct CharacterClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
}

impl CharacterClasses {
    fn of(password: &str) -> Self {
        let mut classes = Self::default();

        for c in password.chars() {
            match get_general_category(c) {
                GeneralCategory::LowercaseLetter => classes.lower = true,
                GeneralCategory::UppercaseLetter => classes.upper = true,
                GeneralCategory::DecimalNumber => classes.digit = true,
                category if is_symbol(category) => classes.symbol = true,
                _ => {}
            }
        }

        classes
    }
}

/// Punctuation (P*) and symbols (S*) count as one class.
fn is_symbol(category: GeneralCategory) -> bool {
    use GeneralCategory::*;

    matches!(
        category,
        ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}
