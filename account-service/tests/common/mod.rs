use std::collections::HashMap;
use std::sync::Arc;

use account_service::account::errors::AccountError;
use account_service::account::models::User;
use account_service::account::ports::UserRepository;
use account_service::account::service::AccountService;
use account_service::build_account_service;
use account_service::config::Config;
use account_service::config::TokenConfig;
use async_trait::async_trait;
use auth::HasherParams;
use auth::SymmetricTokenMaker;
use tokio::sync::RwLock;

pub const TEST_KEY: &str = "integration_test_key_32_bytes_!!";

/// In-memory stand-in for the persistence layer, keyed by email.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AccountError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AccountError::EmailAlreadyExists(user.email));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

pub fn test_config(symmetric_key: &str) -> Config {
    Config {
        token: TokenConfig {
            symmetric_key: symmetric_key.to_string(),
            access_token_duration_minutes: 15,
        },
        hasher: HasherParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
    }
}

pub struct TestApp {
    pub repository: Arc<InMemoryUserRepository>,
    pub service: AccountService<InMemoryUserRepository, SymmetricTokenMaker>,
}

impl TestApp {
    pub fn new() -> Self {
        account_service::telemetry::init();

        let repository = Arc::new(InMemoryUserRepository::default());
        let service = build_account_service(&test_config(TEST_KEY), Arc::clone(&repository))
            .expect("Failed to build account service");

        Self {
            repository,
            service,
        }
    }
}
