use chrono::{Duration, NaiveDate, Utc};
use sp_api_client::application::config::{Credentials, RestApiConfig};
use sp_api_client::application::settings::SpApiSettings;
use sp_api_client::error::AppError;

// Nothing listens here; only active records contact the token endpoint.
const UNUSED_BASE_URL: &str = "http://127.0.0.1:9";

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn inactive_settings(after_date: NaiveDate) -> SpApiSettings {
    let mut settings = SpApiSettings::new(
        "Main",
        Credentials::new("id", "secret", "refresh"),
        after_date,
    );
    settings.is_active = false;
    settings
}

#[test]
fn test_new_settings_defaults() {
    let settings = SpApiSettings::new(
        "Main",
        Credentials::new("id", "secret", "refresh"),
        today(),
    );
    assert!(settings.is_active);
    assert!(settings.enable_sync);
    assert_eq!(settings.max_retry_limit, 1);
    assert_eq!(settings.credentials.country_code, "US");
}

#[tokio::test]
async fn test_validate_inactive_disables_sync() {
    let mut settings = inactive_settings(today());
    settings.max_retry_limit = 0;

    settings
        .validate(&RestApiConfig::with_base_url(UNUSED_BASE_URL), today())
        .await
        .unwrap();

    assert!(!settings.enable_sync);
    assert_eq!(settings.max_retry_limit, 1);
}

#[tokio::test]
async fn test_validate_rejects_old_after_date() {
    let mut settings = inactive_settings(today() - Duration::days(31));

    let err = settings
        .validate(&RestApiConfig::with_base_url(UNUSED_BASE_URL), today())
        .await
        .unwrap_err();

    assert!(
        matches!(err, AppError::InvalidInput(msg) if msg == "The date must be within the last 30 days.")
    );
    assert!(settings.enable_sync);
}

#[tokio::test]
async fn test_validate_accepts_boundary_after_date() {
    let mut settings = inactive_settings(today() - Duration::days(30));
    assert!(
        settings
            .validate(&RestApiConfig::with_base_url(UNUSED_BASE_URL), today())
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_validate_rejects_retry_limit_above_five() {
    let mut settings = inactive_settings(today());
    settings.max_retry_limit = 6;

    let err = settings
        .validate(&RestApiConfig::with_base_url(UNUSED_BASE_URL), today())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid input: Value for Max Retry Limit must be less than or equal to 5."
    );
}

#[test]
fn test_client_uses_settings_country() {
    let mut settings = inactive_settings(today());
    settings.credentials = settings.credentials.with_country_code("JP");

    let client = settings.client(&RestApiConfig::default()).unwrap();
    assert_eq!(client.marketplace().marketplace_id, "A1VC38T7YXB528");
    assert_eq!(client.marketplace().region, "us-west-2");
}

#[test]
fn test_client_rejects_unknown_country() {
    let mut settings = inactive_settings(today());
    settings.credentials = settings.credentials.with_country_code("ZZ");

    assert!(matches!(
        settings.orders(&RestApiConfig::default()),
        Err(AppError::UnknownCountry(_))
    ));
}

#[test]
fn test_settings_serialization() {
    let settings = inactive_settings(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["after_date"], "2026-10-01");
    let back: SpApiSettings = serde_json::from_value(json).unwrap();
    assert_eq!(back, settings);
}
