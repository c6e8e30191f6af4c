use crate::core::{AppError, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Connection settings for the REST backend
#[derive(Clone)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://erp.example.com`; the API lives under `/api/`
    pub base_url: String,
    pub access_token: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout_secs: 30,
            max_retries: 2,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(ApiConfig {
            base_url: env::var("API_BASE_URL")
                .map_err(|_| AppError::Configuration("API_BASE_URL not set".to_string()))?,
            access_token: env::var("API_ACCESS_TOKEN")
                .map_err(|_| AppError::Configuration("API_ACCESS_TOKEN not set".to_string()))?,
            timeout_secs: env::var("API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid API_TIMEOUT_SECS".to_string()))?,
            max_retries: env::var("API_MAX_RETRIES")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid API_MAX_RETRIES".to_string()))?,
        })
    }

    /// Root every endpoint path is joined onto, always ending in `/api/`
    pub fn api_root(&self) -> String {
        format!("{}/api/", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Configuration(format!(
                "API_BASE_URL must be an http(s) URL, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "API timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// Keep the credential out of logs
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
