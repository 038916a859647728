//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Service configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Telegram Bot API token.
    pub bot_token: SecretString,
    /// Path to the local database file.
    pub db_path: String,
    /// Port for the admin REST server.
    pub admin_port: u16,
    /// Long-poll timeout for getUpdates, in seconds.
    pub poll_timeout_secs: u64,
}

impl AppConfig {
    /// Build configuration from environment variables.
    ///
    /// `FITMATCH_BOT_TOKEN` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var("FITMATCH_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("FITMATCH_BOT_TOKEN".to_string()))?;

        let db_path = std::env::var("FITMATCH_DB_PATH")
            .unwrap_or_else(|_| "./data/fitmatch.db".to_string());

        let admin_port = match std::env::var("FITMATCH_ADMIN_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "FITMATCH_ADMIN_PORT".to_string(),
                message: format!("not a port number: {raw}"),
            })?,
            Err(_) => 8090,
        };

        Ok(Self {
            bot_token: SecretString::from(bot_token),
            db_path,
            admin_port,
            poll_timeout_secs: 30,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_an_error() {
        // Only meaningful when the variable is absent in the test environment.
        if std::env::var("FITMATCH_BOT_TOKEN").is_err() {
            assert!(matches!(
                AppConfig::from_env(),
                Err(ConfigError::MissingEnvVar(_))
            ));
        }
    }
}
