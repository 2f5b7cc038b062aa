/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Background order fetching
//!
//! The job queue, the message display and the order synchronization itself belong to
//! the host application and are reached through [`JobQueue`], [`MessageSink`] and
//! [`OrderFetcher`].

use crate::application::config::RestApiConfig;
use crate::application::interfaces::orders::OrdersService;
use crate::application::retry::call_with_retry;
use crate::application::settings::SpApiSettings;
use crate::constants::{DEFAULT_RETRY_DELAY_SECS, ORDER_JOB_METHOD, ORDER_JOB_TIMEOUT_SECS};
use crate::error::AppError;
use crate::model::requests::GetOrdersRequest;
use crate::model::retry::RetryConfig;
use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Message shown when a fetch job is already queued or running
pub const MSG_ALREADY_RUNNING: &str =
    "The order details are currently being fetched in the background.";
/// Message shown after a fetch job is queued
pub const MSG_ENQUEUED: &str = "Order details will be fetched in the background.";

/// Background job to enqueue
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobDescriptor {
    /// Unique job name, a second job with the same name is not queued
    pub job_name: String,
    /// Entry point of the job
    pub method: String,
    /// Settings record the job runs for
    pub settings_name: String,
    /// Orders created after this date are fetched
    pub created_after: NaiveDate,
    /// Timeout of the job in seconds
    pub timeout_secs: u64,
    /// Run immediately instead of queueing
    pub now: bool,
}

impl JobDescriptor {
    /// Order fetch job of a settings record
    pub fn order_fetch(settings: &SpApiSettings, now: bool) -> Self {
        Self {
            job_name: order_job_name(&settings.name),
            method: ORDER_JOB_METHOD.to_string(),
            settings_name: settings.name.clone(),
            created_after: settings.after_date,
            timeout_secs: ORDER_JOB_TIMEOUT_SECS,
            now,
        }
    }
}

/// Name of the order fetch job of a settings record
#[must_use]
pub fn order_job_name(settings_name: &str) -> String {
    format!("Get Amazon Orders - {settings_name}")
}

/// Host job queue
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Whether a job with this name is queued or started
    async fn is_job_pending(&self, job_name: &str) -> Result<bool, AppError>;

    /// Queues a job
    async fn enqueue(&self, job: JobDescriptor) -> Result<(), AppError>;
}

/// Displays messages to the user
pub trait MessageSink: Send + Sync {
    /// Shows a message
    fn msgprint(&self, message: &str);
}

/// Fetches the orders of a settings record, host side
#[async_trait]
pub trait OrderFetcher: Send + Sync {
    /// Fetches the orders created after `created_after`
    async fn get_orders(
        &self,
        settings: &SpApiSettings,
        created_after: NaiveDate,
    ) -> Result<Vec<Value>, AppError>;
}

/// Result of [`get_order_details`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderDetailsOutcome {
    /// The job was queued
    Enqueued(JobDescriptor),
    /// A job with the same name is already queued or running
    AlreadyRunning,
    /// The settings record is not active
    Inactive,
}

/// Queues the order fetch job of a settings record
///
/// Nothing is queued for an inactive record or when the job is already pending. Each
/// outcome sends one message to `sink`.
///
/// # Arguments
/// * `settings` - Record to fetch orders for
/// * `queue` - Host job queue
/// * `sink` - Host message display
/// * `now` - Ask the queue to run the job immediately
pub async fn get_order_details(
    settings: &SpApiSettings,
    queue: &dyn JobQueue,
    sink: &dyn MessageSink,
    now: bool,
) -> Result<OrderDetailsOutcome, AppError> {
    if !settings.is_active {
        sink.msgprint(&format!(
            "Please enable the Amazon SP API Settings {}.",
            settings.name
        ));
        return Ok(OrderDetailsOutcome::Inactive);
    }

    let job = JobDescriptor::order_fetch(settings, now);
    if queue.is_job_pending(&job.job_name).await? {
        debug!("Job {} already pending", job.job_name);
        sink.msgprint(MSG_ALREADY_RUNNING);
        return Ok(OrderDetailsOutcome::AlreadyRunning);
    }

    info!("Enqueuing job {}", job.job_name);
    queue.enqueue(job.clone()).await?;
    sink.msgprint(MSG_ENQUEUED);
    Ok(OrderDetailsOutcome::Enqueued(job))
}

/// Runs the order fetch of every active settings record with sync enabled
///
/// Meant to be triggered hourly by the host scheduler. The first failing record stops
/// the run.
///
/// # Returns
/// Number of records processed
pub async fn schedule_get_order_details(
    settings: &[SpApiSettings],
    fetcher: &dyn OrderFetcher,
) -> Result<usize, AppError> {
    let mut processed = 0;
    for record in settings.iter().filter(|s| s.is_active && s.enable_sync) {
        let orders = fetcher.get_orders(record, record.after_date).await?;
        info!("Fetched {} orders for {}", orders.len(), record.name);
        processed += 1;
    }
    Ok(processed)
}

/// Order fetcher backed by the Orders API
///
/// Pages through `getOrders` with `NextToken`, each page retried up to the record's
/// `max_retry_limit`.
pub struct SpApiOrderFetcher {
    rest_api: RestApiConfig,
    sink: Arc<dyn MessageSink>,
    retry_delay_secs: u64,
}

impl SpApiOrderFetcher {
    /// Creates a fetcher using the given transport and message sink
    pub fn new(rest_api: RestApiConfig, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            rest_api,
            sink,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }

    /// Sets the delay between attempts
    #[must_use]
    pub fn with_retry_delay_secs(mut self, retry_delay_secs: u64) -> Self {
        self.retry_delay_secs = retry_delay_secs;
        self
    }
}

#[async_trait]
impl OrderFetcher for SpApiOrderFetcher {
    async fn get_orders(
        &self,
        settings: &SpApiSettings,
        created_after: NaiveDate,
    ) -> Result<Vec<Value>, AppError> {
        let orders_client = settings.orders(&self.rest_api)?;
        let retry = RetryConfig::with_max_retries_and_delay(
            settings.max_retry_limit,
            self.retry_delay_secs,
        );
        let created_after = format!("{}T00:00:00Z", created_after.format("%Y-%m-%d"));

        let mut orders = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let request =
                GetOrdersRequest::created_after(created_after.clone()).with_next_token(next_token);
            let payload = call_with_retry(&retry, self.sink.as_ref(), || {
                orders_client.get_orders(&request)
            })
            .await?;

            if let Some(page) = payload.get("Orders").and_then(Value::as_array) {
                debug!("Received page of {} orders", page.len());
                orders.extend(page.iter().cloned());
            }

            next_token = payload
                .get("NextToken")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        Ok(orders)
    }
}
