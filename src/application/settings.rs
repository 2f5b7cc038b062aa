/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Settings record driving the SP-API integration of a seller account
//!
//! The host application owns persistence; this module only holds the record and the
//! rules it must satisfy before it is saved.

use crate::application::client::SpApiClient;
use crate::application::config::{Credentials, RestApiConfig};
use crate::application::services::Orders;
use crate::constants::{AFTER_DATE_MAX_AGE_DAYS, MAX_RETRY_LIMIT};
use crate::error::AppError;
use chrono::{Duration, NaiveDate};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// SP-API settings of one seller account
pub struct SpApiSettings {
    /// Unique name of the record
    pub name: String,
    /// Whether the integration is enabled
    pub is_active: bool,
    /// Whether the hourly order sync runs for this record
    pub enable_sync: bool,
    /// OAuth credentials and selling country
    pub credentials: Credentials,
    /// Orders created after this date are fetched
    pub after_date: NaiveDate,
    /// Attempts per SP-API call made by the order fetch job
    pub max_retry_limit: u32,
}

impl SpApiSettings {
    /// Creates an active record with sync enabled and a single attempt per call
    pub fn new(name: impl Into<String>, credentials: Credentials, after_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            enable_sync: true,
            credentials,
            after_date,
            max_retry_limit: 1,
        }
    }

    /// Validates the record before it is saved
    ///
    /// 1. `after_date` must be within the last 30 days of `today`.
    /// 2. An active record must hold credentials accepted by the token endpoint. An
    ///    inactive record has its sync disabled.
    /// 3. A retry limit of 0 becomes 1, above 5 is rejected.
    ///
    /// # Arguments
    /// * `rest_api` - Transport used to check the credentials
    /// * `today` - Reference date of the `after_date` check
    pub async fn validate(
        &mut self,
        rest_api: &RestApiConfig,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        self.validate_after_date(today)?;

        if self.is_active {
            self.validate_credentials(rest_api).await?;
        } else {
            debug!("Settings {} inactive, disabling sync", self.name);
            self.enable_sync = false;
        }

        self.validate_retry_limit()
    }

    /// Rejects an `after_date` older than 30 days
    pub fn validate_after_date(&self, today: NaiveDate) -> Result<(), AppError> {
        let oldest = today - Duration::days(AFTER_DATE_MAX_AGE_DAYS);
        if self.after_date < oldest {
            return Err(AppError::InvalidInput(
                "The date must be within the last 30 days.".to_string(),
            ));
        }
        Ok(())
    }

    /// Normalizes and bounds `max_retry_limit`
    pub fn validate_retry_limit(&mut self) -> Result<(), AppError> {
        if self.max_retry_limit == 0 {
            self.max_retry_limit = 1;
        } else if self.max_retry_limit > MAX_RETRY_LIMIT {
            return Err(AppError::InvalidInput(format!(
                "Value for Max Retry Limit must be less than or equal to {MAX_RETRY_LIMIT}."
            )));
        }
        Ok(())
    }

    /// Checks the OAuth credentials by requesting an access token
    pub async fn validate_credentials(&self, rest_api: &RestApiConfig) -> Result<(), AppError> {
        let client = self.client(rest_api)?;
        client.get_access_token().await?;
        info!("Credentials of {} accepted", self.name);
        Ok(())
    }

    /// Builds a client for this record
    pub fn client(&self, rest_api: &RestApiConfig) -> Result<SpApiClient, AppError> {
        SpApiClient::with_rest_api(self.credentials.clone(), None, rest_api)
    }

    /// Builds an Orders client for this record
    pub fn orders(&self, rest_api: &RestApiConfig) -> Result<Orders, AppError> {
        Ok(Orders::new(Arc::new(self.client(rest_api)?)))
    }
}
