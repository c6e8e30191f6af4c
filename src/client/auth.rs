use async_trait::async_trait;

use crate::core::Result;

/// Source of the bearer credential attached to every API request.
///
/// Session handling (storage, expiry, refresh endpoint) lives behind this
/// trait. The client only asks for the current token and, after a 401,
/// whether a refresh produced a new one.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Current access token
    async fn access_token(&self) -> Result<String>;

    /// Try to obtain a fresh token; `true` means a retry is worthwhile
    async fn refresh(&self) -> Result<bool> {
        Ok(false)
    }
}

/// Fixed token taken from configuration; never refreshes
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
