use sp_api_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let asin = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "B07FZ8S74R".to_string());

    let config = Config::new();
    let catalog = CatalogItems::new(Arc::new(SpApiClient::from_config(&config)?));

    let item = catalog.get_catalog_item(&asin, None).await?;
    info!("Catalog item {}: {}", asin, item);

    Ok(())
}
