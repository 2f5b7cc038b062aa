use chrono::{Duration, Utc};
use sp_api_client::application::client::SpApiClient;
use sp_api_client::application::interfaces::orders::OrdersService;
use sp_api_client::application::services::Orders;
use sp_api_client::config::Config;
use sp_api_client::model::requests::GetOrdersRequest;
use sp_api_client::utils::setup_logger;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Credentials come from SP_API_* environment variables or a .env file
    let config = Config::new();
    let client = Arc::new(SpApiClient::from_config(&config)?);
    info!(
        "Client created for marketplace {}",
        client.marketplace().marketplace_id
    );

    let orders = Orders::new(client);
    let created_after = (Utc::now() - Duration::days(7))
        .format("%Y-%m-%dT00:00:00Z")
        .to_string();

    let request = GetOrdersRequest::created_after(created_after).with_max_results(20);
    let response = orders.get_orders(&request).await?;

    let count = response["payload"]["Orders"]
        .as_array()
        .map_or(0, Vec::len);
    info!("Fetched {} orders", count);
    info!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
