/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::REFRESH_TOKEN_GRANT;
use serde::{Deserialize, Serialize};

/// Form body of the refresh-token grant
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenRequest<'a> {
    /// Always `refresh_token`
    pub grant_type: &'a str,
    /// LWA client identifier
    pub client_id: &'a str,
    /// LWA client secret
    pub client_secret: &'a str,
    /// Long-lived refresh token of the selling partner
    pub refresh_token: &'a str,
}

impl<'a> RefreshTokenRequest<'a> {
    /// Creates the grant body for the given credentials
    pub fn new(client_id: &'a str, client_secret: &'a str, refresh_token: &'a str) -> Self {
        Self {
            grant_type: REFRESH_TOKEN_GRANT,
            client_id,
            client_secret,
            refresh_token,
        }
    }
}

/// Successful response of the token endpoint
///
/// Only `access_token` is used. It is optional because the endpoint contract is not
/// validated: a 200 without a token is still a success.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    /// Short-lived access token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, usually `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Error response of the token endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenErrorResponse {
    /// OAuth error code
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable description
    #[serde(default)]
    pub error_description: Option<String>,
}

impl TokenErrorResponse {
    /// Parses an error body, falling back to empty fields when it is not JSON
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
