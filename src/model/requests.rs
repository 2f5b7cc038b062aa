/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filters of the `getOrders` operation
///
/// Dates are ISO 8601 strings. List filters are sent comma separated. Unset filters
/// are dropped before the request is sent.
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GetOrdersRequest {
    /// Orders created at or after this date
    pub created_after: Option<String>,
    /// Orders created at or before this date
    pub created_before: Option<String>,
    /// Orders updated at or after this date
    pub last_updated_after: Option<String>,
    /// Orders updated at or before this date
    pub last_updated_before: Option<String>,
    /// Order statuses, e.g. `Unshipped`, `Shipped`
    pub order_statuses: Vec<String>,
    /// Fulfillment channels, `AFN` or `MFN`
    pub fulfillment_channels: Vec<String>,
    /// Payment methods, e.g. `COD`, `Other`
    pub payment_methods: Vec<String>,
    /// Buyer email filter
    pub buyer_email: Option<String>,
    /// Seller order identifier filter
    pub seller_order_id: Option<String>,
    /// Page size, at most 100
    pub max_results: Option<u32>,
    /// Pagination token from a previous page
    pub next_token: Option<String>,
    /// Explicit order ids
    pub amazon_order_ids: Vec<String>,
}

impl GetOrdersRequest {
    /// Creates a request for the orders created after the given date
    pub fn created_after(date: impl Into<String>) -> Self {
        Self {
            created_after: Some(date.into()),
            ..Self::default()
        }
    }

    /// Sets the pagination token
    #[must_use]
    pub fn with_next_token(mut self, next_token: Option<String>) -> Self {
        self.next_token = next_token;
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Sets the order status filter
    #[must_use]
    pub fn with_order_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the query parameters for the given marketplace
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when neither `created_after` nor
    /// `last_updated_after` is set, the API requires one of them.
    pub fn to_params(&self, marketplace_id: &str) -> Result<Map<String, Value>, AppError> {
        if self.created_after.is_none() && self.last_updated_after.is_none() {
            return Err(AppError::InvalidInput(
                "either created_after or last_updated_after must be set".to_string(),
            ));
        }

        let mut params = Map::new();
        params.insert("CreatedAfter".into(), opt(&self.created_after));
        params.insert("CreatedBefore".into(), opt(&self.created_before));
        params.insert("LastUpdatedAfter".into(), opt(&self.last_updated_after));
        params.insert("LastUpdatedBefore".into(), opt(&self.last_updated_before));
        params.insert("OrderStatuses".into(), joined(&self.order_statuses));
        params.insert("MarketplaceIds".into(), Value::from(marketplace_id));
        params.insert(
            "FulfillmentChannels".into(),
            joined(&self.fulfillment_channels),
        );
        params.insert("PaymentMethods".into(), joined(&self.payment_methods));
        params.insert("BuyerEmail".into(), opt(&self.buyer_email));
        params.insert("SellerOrderId".into(), opt(&self.seller_order_id));
        params.insert(
            "MaxResultsPerPage".into(),
            self.max_results.map(Value::from).unwrap_or(Value::Null),
        );
        params.insert("NextToken".into(), opt(&self.next_token));
        params.insert("AmazonOrderIds".into(), joined(&self.amazon_order_ids));
        Ok(params)
    }
}

fn opt(value: &Option<String>) -> Value {
    value.as_deref().map(Value::from).unwrap_or(Value::Null)
}

fn joined(values: &[String]) -> Value {
    if values.is_empty() {
        Value::Null
    } else {
        Value::from(values.join(","))
    }
}
