/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # SP-API Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use sp_api_client::prelude::*;
//!
//! let credentials = Credentials::new("client-id", "client-secret", "refresh-token");
//! let client = SpApiClient::new(credentials.with_country_code("DE"), None).unwrap();
//! assert_eq!(client.marketplace().region, "eu-west-1");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the SP-API client
pub use crate::application::config::{Config, Credentials, LegacyAwsCredentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND RESOURCES
// ============================================================================

/// Authenticated client
pub use crate::application::client::SpApiClient;

/// Request capability and resource traits
pub use crate::application::interfaces::request::{SpApiRequest, SpApiResource};

/// Resource service traits
pub use crate::application::services::{CatalogItemsService, FinancesService, OrdersService};

/// Resource clients
pub use crate::application::services::{CatalogItems, Finances, Orders};

// ============================================================================
// SETTINGS AND JOBS
// ============================================================================

/// Settings record of a seller account
pub use crate::application::settings::SpApiSettings;

/// Background order fetch glue
pub use crate::application::jobs::{
    JobDescriptor, JobQueue, MessageSink, OrderDetailsOutcome, OrderFetcher, SpApiOrderFetcher,
    get_order_details, schedule_get_order_details,
};

/// Retry helper
pub use crate::application::retry::call_with_retry;

// ============================================================================
// MODELS
// ============================================================================

/// Marketplace lookup
pub use crate::model::marketplace::{MarketplaceInfo, get_marketplace_data};

/// Request models
pub use crate::model::requests::GetOrdersRequest;

/// Retry configuration
pub use crate::model::retry::RetryConfig;

/// Value stripping
pub use crate::model::utils::remove_empty;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Map, Value};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::NaiveDate;

/// Re-export reqwest for HTTP methods
pub use reqwest::Method;
