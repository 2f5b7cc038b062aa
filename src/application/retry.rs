/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::jobs::MessageSink;
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use serde_json::Value;
use std::future::Future;
use tracing::{error, warn};

/// Calls an SP-API operation, retrying SP-API errors
///
/// Runs `operation` up to `config.max_retries()` times, waiting `config.delay_secs()`
/// between attempts. Only `AppError::Auth` and `AppError::Api` are retried, any
/// other error is returned at once.
///
/// # Arguments
/// * `config` - Attempts and delay
/// * `sink` - Receives one message per distinct error code once attempts run out
/// * `operation` - Produces a fresh request future per attempt
///
/// # Returns
/// * `Ok(Value)` - The `payload` field of the first successful response, `Null` when absent
/// * `Err(AppError::RetryLimitExceeded)` - Every attempt failed with an SP-API error
pub async fn call_with_retry<F, Fut>(
    config: &RetryConfig,
    sink: &dyn MessageSink,
    mut operation: F,
) -> Result<Value, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value, AppError>>,
{
    let attempts = config.max_retries();
    let mut errors: Vec<(String, String)> = Vec::new();

    for attempt in 1..=attempts {
        match operation().await {
            Ok(response) => {
                return Ok(response.get("payload").cloned().unwrap_or(Value::Null));
            }
            Err(e) if e.is_sp_api_error() => {
                warn!("SP-API call failed (attempt {}/{}): {}", attempt, attempts, e);
                let code = e.error_code().unwrap_or_default().to_string();
                if !errors.iter().any(|(known, _)| *known == code) {
                    let description = e.error_description().unwrap_or_default().to_string();
                    errors.push((code, description));
                }
                if attempt < attempts {
                    tokio::time::sleep(tokio::time::Duration::from_secs(config.delay_secs()))
                        .await;
                }
            }
            Err(e) => return Err(e),
        }
    }

    for (code, description) in &errors {
        sink.msgprint(&format!("Error: {code}\nError Description: {description}"));
    }
    error!("SP-API call failed after {} attempts", attempts);

    Err(AppError::RetryLimitExceeded { attempts, errors })
}
