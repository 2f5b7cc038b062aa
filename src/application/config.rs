/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{AUTH_URL, DEFAULT_COUNTRY_CODE, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_env_non_empty, get_env_or_default, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// OAuth credentials of a selling partner
pub struct Credentials {
    /// Login with Amazon client identifier
    pub client_id: String,
    /// Login with Amazon client secret
    pub client_secret: String,
    /// Long-lived refresh token
    pub refresh_token: String,
    /// Selling country, resolves the marketplace
    pub country_code: String,
}

impl Credentials {
    /// Creates credentials for the default country
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    /// Sets the selling country
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Checks that every OAuth field is set
    ///
    /// # Errors
    /// `AppError::InvalidInput` naming the first blank field
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::InvalidInput(format!("{name} must be set")));
            }
        }
        Ok(())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// AWS credentials accepted for compatibility with signed clients, never used for requests
pub struct LegacyAwsCredentials {
    /// IAM role ARN
    pub iam_arn: String,
    /// AWS access key
    pub aws_access_key: String,
    /// AWS secret key
    pub aws_secret_key: String,
}

impl LegacyAwsCredentials {
    /// Keeps the triple only when all three parts are present and non-blank
    pub fn from_parts(
        iam_arn: Option<String>,
        aws_access_key: Option<String>,
        aws_secret_key: Option<String>,
    ) -> Option<Self> {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Some(Self {
            iam_arn: non_blank(iam_arn)?,
            aws_access_key: non_blank(aws_access_key)?,
            aws_secret_key: non_blank(aws_secret_key)?,
        })
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Transport configuration of the SP-API client
pub struct RestApiConfig {
    /// Token endpoint of the refresh-token grant
    pub auth_url: String,
    /// Overrides the marketplace endpoint, e.g. for the sandbox
    pub endpoint: Option<String>,
    /// Timeout in seconds for each HTTP request, 0 disables it
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            auth_url: AUTH_URL.to_string(),
            endpoint: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RestApiConfig {
    /// Configuration pointing both the token and resource endpoints at `base_url`
    ///
    /// The token endpoint becomes `<base_url>/auth/o2/token`.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            auth_url: format!("{base_url}/auth/o2/token"),
            endpoint: Some(base_url.to_string()),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration of the SP-API client
pub struct Config {
    /// OAuth credentials
    pub credentials: Credentials,
    /// Inert AWS credentials
    pub legacy: Option<LegacyAwsCredentials>,
    /// Transport configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `SP_API_CLIENT_ID`,
    /// `SP_API_CLIENT_SECRET`, `SP_API_REFRESH_TOKEN`, `SP_API_COUNTRY_CODE`,
    /// `SP_API_IAM_ARN`, `SP_API_AWS_ACCESS_KEY`, `SP_API_AWS_SECRET_KEY`,
    /// `SP_API_AUTH_URL`, `SP_API_ENDPOINT` and `SP_API_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            client_id: get_env_required("SP_API_CLIENT_ID"),
            client_secret: get_env_required("SP_API_CLIENT_SECRET"),
            refresh_token: get_env_required("SP_API_REFRESH_TOKEN"),
            country_code: get_env_or_default(
                "SP_API_COUNTRY_CODE",
                String::from(DEFAULT_COUNTRY_CODE),
            ),
        };

        let legacy = LegacyAwsCredentials::from_parts(
            get_env_non_empty("SP_API_IAM_ARN"),
            get_env_non_empty("SP_API_AWS_ACCESS_KEY"),
            get_env_non_empty("SP_API_AWS_SECRET_KEY"),
        );

        Config {
            credentials,
            legacy,
            rest_api: RestApiConfig {
                auth_url: get_env_or_default("SP_API_AUTH_URL", String::from(AUTH_URL)),
                endpoint: get_env_non_empty("SP_API_ENDPOINT"),
                timeout: get_env_or_default("SP_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration from explicit credentials and the default transport
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            legacy: None,
            rest_api: RestApiConfig::default(),
        }
    }

    /// Replaces the transport configuration
    #[must_use]
    pub fn with_rest_api(mut self, rest_api: RestApiConfig) -> Self {
        self.rest_api = rest_api;
        self
    }
}
