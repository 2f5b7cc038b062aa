use crate::error::AppError;
use crate::model::requests::GetOrdersRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the Orders API
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Gets the orders matching the filters, in the client's marketplace
    async fn get_orders(&self, request: &GetOrdersRequest) -> Result<Value, AppError>;

    /// Gets a single order
    async fn get_order(&self, order_id: &str) -> Result<Value, AppError>;

    /// Gets the items of an order
    ///
    /// # Arguments
    /// * `order_id` - Amazon order id
    /// * `next_token` - Pagination token from a previous page
    async fn get_order_items(
        &self,
        order_id: &str,
        next_token: Option<&str>,
    ) -> Result<Value, AppError>;
}
