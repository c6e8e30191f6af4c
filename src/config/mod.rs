use crate::core::{AppError, Result};
use std::env;

pub mod api;

pub use api::ApiConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` switches the log output to JSON lines
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            },
            api: ApiConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.app.log_format.as_str(), "text" | "json") {
            return Err(AppError::Configuration(format!(
                "LOG_FORMAT must be `text` or `json`, got: {}",
                self.app.log_format
            )));
        }

        self.api.validate()
    }
}
