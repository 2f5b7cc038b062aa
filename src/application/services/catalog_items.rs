/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::SpApiClient;
use crate::application::interfaces::catalog_items::CatalogItemsService;
use crate::application::interfaces::request::{SpApiRequest, SpApiResource};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Catalog Items API client
pub struct CatalogItems<T: SpApiRequest = SpApiClient> {
    client: Arc<T>,
}

impl<T: SpApiRequest> CatalogItems<T> {
    /// Creates a Catalog Items client on top of a shared request client
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

impl<T: SpApiRequest> SpApiResource for CatalogItems<T> {
    type Client = T;
    const BASE_URI: &'static str = "/catalog/v0";

    fn client(&self) -> &T {
        &self.client
    }
}

#[async_trait]
impl<T: SpApiRequest + 'static> CatalogItemsService for CatalogItems<T> {
    async fn get_catalog_item(
        &self,
        asin: &str,
        marketplace_id: Option<&str>,
    ) -> Result<Value, AppError> {
        debug!("Getting catalog item {}", asin);

        let marketplace_id = marketplace_id
            .map(str::to_string)
            .unwrap_or_else(|| self.client.marketplace().marketplace_id.clone());
        let mut params = Map::new();
        params.insert("MarketplaceId".into(), Value::from(marketplace_id));

        self.make_request(Method::GET, &format!("/items/{asin}"), Some(params), None)
            .await
    }
}
