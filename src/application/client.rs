/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::{Config, Credentials, LegacyAwsCredentials, RestApiConfig};
use crate::application::interfaces::request::SpApiRequest;
use crate::constants::{ACCESS_TOKEN_HEADER, CONTENT_TYPE_JSON, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{RefreshTokenRequest, TokenErrorResponse, TokenResponse};
use crate::model::marketplace::{MarketplaceInfo, get_marketplace_data};
use crate::model::utils::{remove_empty, strip_value, to_query_pairs};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// OAuth-only client for the Selling Partner API
///
/// The client authenticates with a refresh-token grant and sends the resulting access
/// token in the `x-amz-access-token` header. Requests are never signed with AWS
/// credentials.
///
/// The access token is cached for the lifetime of the instance, there is no expiry
/// check. Create one client per logical session (e.g. per sync job).
pub struct SpApiClient {
    credentials: Credentials,
    legacy: Option<LegacyAwsCredentials>,
    marketplace: MarketplaceInfo,
    auth_url: String,
    http_client: Client,
    access_token: Mutex<Option<String>>,
}

impl SpApiClient {
    /// Creates a client with the default transport configuration
    ///
    /// # Arguments
    /// * `credentials` - OAuth credentials and selling country
    /// * `legacy` - Inert AWS credentials, kept for compatibility
    ///
    /// # Returns
    /// * `Ok(SpApiClient)` - Client bound to the country's marketplace
    /// * `Err(AppError)` - Blank credentials or unknown country
    pub fn new(
        credentials: Credentials,
        legacy: Option<LegacyAwsCredentials>,
    ) -> Result<Self, AppError> {
        Self::with_rest_api(credentials, legacy, &RestApiConfig::default())
    }

    /// Creates a client from a full configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::with_rest_api(
            config.credentials.clone(),
            config.legacy.clone(),
            &config.rest_api,
        )
    }

    /// Creates a client with an explicit transport configuration
    ///
    /// Construction resolves the marketplace and builds the HTTP client but never
    /// contacts the network.
    pub fn with_rest_api(
        credentials: Credentials,
        legacy: Option<LegacyAwsCredentials>,
        rest_api: &RestApiConfig,
    ) -> Result<Self, AppError> {
        credentials.validate()?;

        let mut marketplace = get_marketplace_data(&credentials.country_code)?;
        if let Some(endpoint) = &rest_api.endpoint {
            marketplace.endpoint = endpoint.trim_end_matches('/').to_string();
        }

        let mut builder = Client::builder();
        if rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(rest_api.timeout));
        }
        let http_client = builder.build()?;

        debug!(
            "SP-API client for {} ({}) at {}",
            credentials.country_code, marketplace.marketplace_id, marketplace.endpoint
        );

        Ok(Self {
            credentials,
            legacy,
            marketplace,
            auth_url: rest_api.auth_url.clone(),
            http_client,
            access_token: Mutex::new(None),
        })
    }

    /// Gets the resolved marketplace
    pub fn marketplace(&self) -> &MarketplaceInfo {
        &self.marketplace
    }

    /// Gets the credentials the client was built with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Gets the inert AWS credentials, if all three parts were supplied
    pub fn legacy_credentials(&self) -> Option<&LegacyAwsCredentials> {
        self.legacy.as_ref()
    }

    /// Returns the cached access token, requesting one on first use
    ///
    /// The cache lock is held while the token is requested, so concurrent first calls
    /// on a shared client produce a single grant.
    ///
    /// A 200 response without `access_token` yields an empty token that is not
    /// cached.
    ///
    /// # Errors
    /// * `AppError::Auth` - The token endpoint answered with a status other than 200
    /// * `AppError::Json` - A 200 response whose body is not JSON
    /// * `AppError::Network` - Transport failure
    pub async fn get_access_token(&self) -> Result<String, AppError> {
        let mut cached = self.access_token.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let form = RefreshTokenRequest::new(
            &self.credentials.client_id,
            &self.credentials.client_secret,
            &self.credentials.refresh_token,
        );

        debug!("Requesting access token from: {}", self.auth_url);
        let response = self
            .http_client
            .post(&self.auth_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Token response status: {}", status);

        if status != StatusCode::OK {
            let error = TokenErrorResponse::from_body(&body);
            return Err(AppError::Auth {
                error: error.error,
                error_description: error.error_description,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        match token.access_token.filter(|t| !t.is_empty()) {
            Some(access_token) => {
                info!("Access token acquired");
                *cached = Some(access_token.clone());
                Ok(access_token)
            }
            None => {
                warn!("Token endpoint answered 200 without an access_token");
                Ok(String::new())
            }
        }
    }

    /// Builds the headers of an SP-API request
    ///
    /// Always exactly three headers: the access token, the user agent and the JSON
    /// content type.
    pub async fn get_headers(&self) -> Result<HeaderMap, AppError> {
        let access_token = self.get_access_token().await?;

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(
            HeaderName::from_static(ACCESS_TOKEN_HEADER),
            HeaderValue::from_str(&access_token)?,
        );
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_JSON),
        );
        Ok(headers)
    }

    /// Sends a request to `endpoint + path`
    ///
    /// Empty entries of `params` and of an object `body` are dropped before sending.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path appended to the marketplace endpoint
    /// * `params` - Query parameters
    /// * `body` - JSON body
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed JSON body of a response with status < 400
    /// * `Err(AppError::Api)` - Status >= 400, code `HTTP <status>` and raw body
    pub async fn make_request(
        &self,
        method: Method,
        path: &str,
        params: Option<Map<String, Value>>,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        let params = params.map(|p| remove_empty(&p));
        let body = body.map(strip_value);
        let url = format!("{}{}", self.marketplace.endpoint, path);
        let headers = self.get_headers().await?;

        debug!("{} {}", method, url);

        let mut request = self.http_client.request(method, &url).headers(headers);
        if let Some(params) = params.as_ref().filter(|p| !p.is_empty()) {
            request = request.query(&to_query_pairs(params));
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("Response status: {}", status);

        if status.as_u16() >= 400 {
            return Err(AppError::Api {
                code: format!("HTTP {}", status.as_u16()),
                description: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl SpApiRequest for SpApiClient {
    fn marketplace(&self) -> &MarketplaceInfo {
        &self.marketplace
    }

    async fn make_request(
        &self,
        method: Method,
        path: &str,
        params: Option<Map<String, Value>>,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        SpApiClient::make_request(self, method, path, params, body).await
    }
}
