/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::SpApiClient;
use crate::application::interfaces::finances::FinancesService;
use crate::application::interfaces::request::{SpApiRequest, SpApiResource};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Finances API client
pub struct Finances<T: SpApiRequest = SpApiClient> {
    client: Arc<T>,
}

impl<T: SpApiRequest> Finances<T> {
    /// Creates a Finances client on top of a shared request client
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

impl<T: SpApiRequest> SpApiResource for Finances<T> {
    type Client = T;
    const BASE_URI: &'static str = "/finances/v0/";

    fn client(&self) -> &T {
        &self.client
    }
}

#[async_trait]
impl<T: SpApiRequest + 'static> FinancesService for Finances<T> {
    async fn list_financial_events_by_order_id(
        &self,
        order_id: &str,
        max_results: Option<u32>,
        next_token: Option<&str>,
    ) -> Result<Value, AppError> {
        debug!("Listing financial events of order {}", order_id);

        let mut params = Map::new();
        params.insert(
            "MaxResultsPerPage".into(),
            max_results.map(Value::from).unwrap_or(Value::Null),
        );
        params.insert(
            "NextToken".into(),
            next_token.map(Value::from).unwrap_or(Value::Null),
        );

        self.make_request(
            Method::GET,
            &format!("orders/{order_id}/financialEvents"),
            Some(params),
            None,
        )
        .await
    }
}
