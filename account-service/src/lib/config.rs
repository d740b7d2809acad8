use std::env;

use auth::HasherParams;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub token: TokenConfig,
    #[serde(default)]
    pub hasher: HasherParams,
}

#[derive(Deserialize, Clone)]
pub struct TokenConfig {
    pub symmetric_key: String,
    pub access_token_duration_minutes: i64,
}

impl TokenConfig {
    /// Lifetime of access tokens issued at login.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Minutes are not positive or overflow a duration
    pub fn access_token_duration(&self) -> Result<Duration, ConfigError> {
        let minutes = self.access_token_duration_minutes;

        Duration::try_minutes(minutes)
            .filter(|duration| *duration > Duration::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "access_token_duration_minutes must be positive and in range, got {}",
                    minutes
                ))
            })
    }
}

// The key never reaches logs, even through `{:?}` on the whole config.
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("symmetric_key", &"[REDACTED]")
            .field(
                "access_token_duration_minutes",
                &self.access_token_duration_minutes,
            )
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TOKEN__SYMMETRIC_KEY, HASHER__MEMORY_KIB, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: TOKEN__SYMMETRIC_KEY=... overrides token.symmetric_key
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.token.access_token_duration()?;

        Ok(config)
    }
}
