use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AuthenticatedSession;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::User;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Raw registration input
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Validation` - A field failed its rules (first message only)
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AccountError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Raw login input
    ///
    /// # Returns
    /// The user, the access token and its expiry
    ///
    /// # Errors
    /// * `Validation` - Email or password failed its rules
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `TokenIssuance` - Token could not be created
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError>;

    /// Establish the caller identity from an access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token failed authentication
    /// * `ExpiredToken` - Token is authentic but expired
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedSession, AccountError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AccountError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;
}
