use auth::validation::translate;
use auth::validation::validate;
use auth::validation::FieldRules;
use auth::validation::Rule;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;

const NAME_RULES: [Rule; 4] = [Rule::Required, Rule::Alpha, Rule::Min(3), Rule::Max(50)];

/// Validate registration input, reporting the first translated violation.
pub fn check_registration(command: &RegisterCommand) -> Result<(), AccountError> {
    let first_name = FieldRules::new("FirstName", NAME_RULES);
    let last_name = FieldRules::new("LastName", NAME_RULES);
    let email = FieldRules::new("Email", [Rule::Required, Rule::Email, Rule::Max(100)]);
    let password = FieldRules::new("Password", [Rule::Required, Rule::Strong]);

    first_message(&[
        (&first_name, command.first_name.as_str()),
        (&last_name, command.last_name.as_str()),
        (&email, command.email.as_str()),
        (&password, command.password.as_str()),
    ])
}

/// Validate login input, reporting the first translated violation.
pub fn check_login(command: &LoginCommand) -> Result<(), AccountError> {
    let email = FieldRules::new("Email", [Rule::Email]);
    let password = FieldRules::new("Password", [Rule::Required]);

    first_message(&[
        (&email, command.email.as_str()),
        (&password, command.password.as_str()),
    ])
}

fn first_message(fields: &[(&FieldRules, &str)]) -> Result<(), AccountError> {
    match translate(&validate(fields)).into_iter().next() {
        Some(message) => Err(AccountError::Validation(message)),
        None => Ok(()),
    }
}
