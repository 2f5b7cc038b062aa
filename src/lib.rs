/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # SP-API Client
//!
//! An OAuth-only client for the Amazon Selling Partner API (SP-API).
//!
//! The client exchanges a long-lived refresh token for an access token, caches it
//! for the lifetime of the client instance and sends it in the `x-amz-access-token`
//! header. No AWS signature credentials are required.
//!
//! ## Features
//!
//! - Refresh-token grant against the Login with Amazon token endpoint
//! - Region aware endpoints resolved from the seller's country code
//! - Resource clients for Finances, Orders and Catalog Items
//! - Settings validation and order fetch scheduling glue for host applications
//!
//! ## Example
//!
//! ```rust,no_run
//! use sp_api_client::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     let config = Config::new();
//!     let client = Arc::new(SpApiClient::from_config(&config)?);
//!     let orders = Orders::new(client);
//!
//!     let request = GetOrdersRequest::created_after("2026-10-01T00:00:00Z");
//!     let response = orders.get_orders(&request).await?;
//!     info!("Orders: {}", response);
//!     Ok(())
//! }
//! ```

/// Application layer: client, resource services, settings and jobs
pub mod application;

/// Global constants
pub mod constants;

/// Error type shared across the crate
pub mod error;

/// Data models: marketplaces, token payloads, requests and retry configuration
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Configuration re-export
pub mod config {
    pub use crate::application::config::*;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
