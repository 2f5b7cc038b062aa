/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::marketplace::MarketplaceInfo;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};

/// Capability to send authenticated SP-API requests
///
/// Implemented by [`SpApiClient`](crate::application::client::SpApiClient). Resource
/// clients hold an implementation instead of inheriting from it.
#[async_trait]
pub trait SpApiRequest: Send + Sync {
    /// Marketplace the requests are sent to
    fn marketplace(&self) -> &MarketplaceInfo;

    /// Sends a request to `endpoint + path` and returns the parsed JSON body
    async fn make_request(
        &self,
        method: Method,
        path: &str,
        params: Option<Map<String, Value>>,
        body: Option<Value>,
    ) -> Result<Value, AppError>;
}

/// A resource family of the SP-API, rooted at a fixed base URI
#[async_trait]
pub trait SpApiResource: Send + Sync {
    /// Client used to send the requests
    type Client: SpApiRequest;

    /// Path prefix of every request of the resource
    const BASE_URI: &'static str;

    /// Gets the underlying client
    fn client(&self) -> &Self::Client;

    /// Sends a request to `endpoint + BASE_URI + suffix`
    async fn make_request(
        &self,
        method: Method,
        suffix: &str,
        params: Option<Map<String, Value>>,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        let path = format!("{}{}", Self::BASE_URI, suffix);
        self.client().make_request(method, &path, params, body).await
    }
}
