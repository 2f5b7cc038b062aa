/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::fmt;

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// The token endpoint rejected the refresh-token grant
    Auth {
        /// OAuth error code, e.g. `invalid_grant`
        error: Option<String>,
        /// Human readable description returned by the token endpoint
        error_description: Option<String>,
    },
    /// An SP-API resource endpoint answered with a status >= 400
    Api {
        /// Synthesized code, `HTTP <status>`
        code: String,
        /// Raw response body
        description: String,
    },
    /// The country code has no entry in the marketplace table
    UnknownCountry(String),
    /// Missing or invalid input
    InvalidInput(String),
    /// A value could not be used as an HTTP header
    InvalidHeader(String),
    /// All attempts of a retried SP-API call failed
    RetryLimitExceeded {
        /// Number of attempts made
        attempts: u32,
        /// Distinct `(code, description)` pairs collected while retrying
        errors: Vec<(String, String)>,
    },
    /// Transport error
    Network(reqwest::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
}

impl AppError {
    /// Returns `true` for errors reported by the SP-API itself (token or resource endpoint)
    #[must_use]
    pub fn is_sp_api_error(&self) -> bool {
        matches!(self, AppError::Auth { .. } | AppError::Api { .. })
    }

    /// Error code of an SP-API error
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            AppError::Auth { error, .. } => error.as_deref(),
            AppError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Error description of an SP-API error
    #[must_use]
    pub fn error_description(&self) -> Option<&str> {
        match self {
            AppError::Auth {
                error_description, ..
            } => error_description.as_deref(),
            AppError::Api { description, .. } => Some(description),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth {
                error,
                error_description,
            } => write!(
                f,
                "authorization failed: {} ({})",
                error.as_deref().unwrap_or("unknown"),
                error_description.as_deref().unwrap_or("no description")
            ),
            AppError::Api { code, description } => write!(f, "api error: {code}: {description}"),
            AppError::UnknownCountry(code) => write!(f, "unknown country code: {code}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            AppError::RetryLimitExceeded { attempts, .. } => {
                write!(f, "retry limit exceeded after {attempts} attempts")
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}
