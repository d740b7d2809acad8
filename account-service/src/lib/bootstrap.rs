use std::sync::Arc;

use auth::PasswordHasher;
use auth::SymmetricTokenMaker;

use crate::config::Config;
use crate::domain::account::ports::UserRepository;
use crate::domain::account::service::AccountService;

/// Build the account service from loaded configuration.
///
/// Any unusable configured value, such as a key of the wrong size, is a fatal
/// configuration error.
pub fn build_account_service<UR: UserRepository>(
    config: &Config,
    repository: Arc<UR>,
) -> anyhow::Result<AccountService<UR, SymmetricTokenMaker>> {
    let token_maker = SymmetricTokenMaker::new(config.token.symmetric_key.as_bytes())?;
    let password_hasher = PasswordHasher::with_params(config.hasher)?;
    let access_token_duration = config.token.access_token_duration()?;

    tracing::info!(
        access_token_duration_minutes = config.token.access_token_duration_minutes,
        argon2_memory_kib = config.hasher.memory_kib,
        argon2_iterations = config.hasher.iterations,
        argon2_parallelism = config.hasher.parallelism,
        "Account service configured"
    );

    Ok(AccountService::new(
        repository,
        Arc::new(token_maker),
        password_hasher,
        access_token_duration,
    ))
}
