use reqwest::StatusCode;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Local business-rule rejections (caught before any network call)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend did not answer within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-success response from the REST backend
    #[error("API error {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// Credential rejected even after a refresh attempt
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Errors raised inside the retry middleware stack
    #[error("HTTP middleware error: {0}")]
    Middleware(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest_middleware::Error> for AppError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => {
                AppError::Timeout(e.to_string())
            }
            reqwest_middleware::Error::Reqwest(e) => AppError::HttpClient(e),
            reqwest_middleware::Error::Middleware(e) => AppError::Middleware(e.to_string()),
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True when the failure was a request timeout, so callers can show a
    /// dedicated message instead of the generic one.
    pub fn is_timeout(&self) -> bool {
        match self {
            AppError::Timeout(_) => true,
            AppError::HttpClient(e) => e.is_timeout(),
            AppError::Api { status, .. } => {
                *status == StatusCode::REQUEST_TIMEOUT || *status == StatusCode::GATEWAY_TIMEOUT
            }
            _ => false,
        }
    }

    /// Message suitable for a user-facing notification
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Unauthorized(msg) => msg.clone(),
            AppError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
