/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_RETRY_DELAY_SECS, MAX_RETRY_LIMIT};
use crate::utils::config::get_env_or_none;

/// Configuration of the retries performed around SP-API calls
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (None = one attempt)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between attempts (None = use default 1 second)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a new retry configuration from the environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration with a maximum number of attempts
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Creates a retry configuration with both max attempts and custom delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Gets the number of attempts, clamped to `1..=MAX_RETRY_LIMIT`
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(1).clamp(1, MAX_RETRY_LIMIT)
    }

    /// Gets the retry delay in seconds (default: 1)
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_retry_count: Option<u32> = get_env_or_none("MAX_RETRY_COUNT");
        let retry_delay_secs: Option<u64> = get_env_or_none("RETRY_DELAY_SECS");

        Self {
            max_retry_count,
            retry_delay_secs,
        }
    }
}
