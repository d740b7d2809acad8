use std::sync::Arc;

use async_trait::async_trait;
use auth::sanitize;
use auth::PasswordHasher;
use auth::TokenMaker;
use chrono::Duration;
use chrono::Utc;
use tokio::sync::OnceCell;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AuthenticatedSession;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::User;
use crate::domain::account::models::UserId;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::ports::UserRepository;
use crate::domain::account::rules;

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
/// Password hashing and verification run on the blocking thread pool.
/// Logins for unknown emails verify against a decoy hash built with the same
/// parameters, so both rejections cost one Argon2 verification.
pub struct AccountService<UR, TM>
where
    UR: UserRepository,
    TM: TokenMaker + 'static,
{
    repository: Arc<UR>,
    token_maker: Arc<TM>,
    password_hasher: PasswordHasher,
    access_token_duration: Duration,
    decoy_hash: OnceCell<String>,
}

impl<UR, TM> AccountService<UR, TM>
where
    UR: UserRepository,
    TM: TokenMaker + 'static,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_maker` - Access token issuer
    /// * `password_hasher` - Credential hasher
    /// * `access_token_duration` - Lifetime of tokens issued at login
    pub fn new(
        repository: Arc<UR>,
        token_maker: Arc<TM>,
        password_hasher: PasswordHasher,
        access_token_duration: Duration,
    ) -> Self {
        Self {
            repository,
            token_maker,
            password_hasher,
            access_token_duration,
            decoy_hash: OnceCell::new(),
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(AccountError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AccountError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))
    }

    /// Burn one verification for a login that has no stored hash to check.
    async fn verify_decoy(&self, password: String) -> Result<(), AccountError> {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| self.hash_password(DECOY_PASSWORD.to_string()))
            .await?
            .clone();

        self.verify_password(password, decoy).await?;

        Ok(())
    }
}

#[async_trait]
impl<UR, TM> AccountServicePort for AccountService<UR, TM>
where
    UR: UserRepository,
    TM: TokenMaker + 'static,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AccountError> {
        let command = RegisterCommand {
            first_name: sanitize(&command.first_name),
            last_name: sanitize(&command.last_name),
            email: sanitize(&command.email),
            password: sanitize(&command.password),
        };

        rules::check_registration(&command)?;

        let password_hash = self.hash_password(command.password).await.map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            e
        })?;

        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            is_email_verified: false,
            profile_picture_url: None,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "Account registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError> {
        let command = LoginCommand {
            email: sanitize(&command.email),
            password: sanitize(&command.password),
        };

        rules::check_login(&command)?;

        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            self.verify_decoy(command.password).await?;
            tracing::debug!("Login rejected: unknown email");
            return Err(AccountError::InvalidCredentials);
        };

        let matched = self
            .verify_password(command.password, user.password_hash.clone())
            .await?;
        if !matched {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AccountError::InvalidCredentials);
        }

        let (token, payload) = self
            .token_maker
            .create_token(&user.email, self.access_token_duration)
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Token issuance failed");
                AccountError::from(e)
            })?;

        tracing::info!(user_id = %user.id, token_id = %payload.id, "Access token issued");

        Ok(LoginOutcome {
            user,
            token,
            expires_at: payload.expires_at,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<AuthenticatedSession, AccountError> {
        self.token_maker
            .validate_token(token)
            .map(AuthenticatedSession::from)
            .map_err(AccountError::from)
    }
}
