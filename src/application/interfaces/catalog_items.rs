use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the Catalog Items API
#[async_trait]
pub trait CatalogItemsService: Send + Sync {
    /// Gets a catalog item by ASIN
    ///
    /// `marketplace_id` defaults to the client's marketplace.
    async fn get_catalog_item(
        &self,
        asin: &str,
        marketplace_id: Option<&str>,
    ) -> Result<Value, AppError>;
}
