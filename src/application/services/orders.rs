/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::SpApiClient;
use crate::application::interfaces::orders::OrdersService;
use crate::application::interfaces::request::{SpApiRequest, SpApiResource};
use crate::error::AppError;
use crate::model::requests::GetOrdersRequest;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Orders API client
pub struct Orders<T: SpApiRequest = SpApiClient> {
    client: Arc<T>,
}

impl<T: SpApiRequest> Orders<T> {
    /// Creates an Orders client on top of a shared request client
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

impl<T: SpApiRequest> SpApiResource for Orders<T> {
    type Client = T;
    const BASE_URI: &'static str = "/orders/v0/orders";

    fn client(&self) -> &T {
        &self.client
    }
}

#[async_trait]
impl<T: SpApiRequest + 'static> OrdersService for Orders<T> {
    async fn get_orders(&self, request: &GetOrdersRequest) -> Result<Value, AppError> {
        let params = request.to_params(&self.client.marketplace().marketplace_id)?;
        info!(
            "Getting orders created after {}",
            request.created_after.as_deref().unwrap_or("-")
        );
        self.make_request(Method::GET, "", Some(params), None).await
    }

    async fn get_order(&self, order_id: &str) -> Result<Value, AppError> {
        debug!("Getting order {}", order_id);
        self.make_request(Method::GET, &format!("/{order_id}"), None, None)
            .await
    }

    async fn get_order_items(
        &self,
        order_id: &str,
        next_token: Option<&str>,
    ) -> Result<Value, AppError> {
        debug!("Getting items of order {}", order_id);

        let mut params = Map::new();
        params.insert(
            "NextToken".into(),
            next_token.map(Value::from).unwrap_or(Value::Null),
        );

        self.make_request(
            Method::GET,
            &format!("/{order_id}/orderItems"),
            Some(params),
            None,
        )
        .await
    }
}
