use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the Finances API
#[async_trait]
pub trait FinancesService: Send + Sync {
    /// Lists the financial events of an order
    ///
    /// # Arguments
    /// * `order_id` - Amazon order id, e.g. `902-3159896-1390916`
    /// * `max_results` - Page size, 1 to 100
    /// * `next_token` - Pagination token from a previous page
    async fn list_financial_events_by_order_id(
        &self,
        order_id: &str,
        max_results: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<Value, AppError>;
}
