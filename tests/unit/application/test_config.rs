use sp_api_client::application::config::{Config, Credentials, LegacyAwsCredentials, RestApiConfig};
use sp_api_client::constants::{AUTH_URL, DEFAULT_TIMEOUT_SECS};
use sp_api_client::error::AppError;

#[test]
fn test_credentials_default_country() {
    let credentials = Credentials::new("id", "secret", "refresh");
    assert_eq!(credentials.country_code, "US");
    assert_eq!(credentials.with_country_code("JP").country_code, "JP");
}

#[test]
fn test_credentials_validate() {
    assert!(Credentials::new("id", "secret", "refresh").validate().is_ok());

    let err = Credentials::new("", "secret", "refresh").validate().unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(msg) if msg == "client_id must be set"));

    let err = Credentials::new("id", "secret", "  ").validate().unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(msg) if msg == "refresh_token must be set"));
}

#[test]
fn test_legacy_credentials_need_all_parts() {
    let full = LegacyAwsCredentials::from_parts(
        Some("arn:aws:iam::123:role/sp".to_string()),
        Some("AKIA".to_string()),
        Some("secret".to_string()),
    );
    assert_eq!(full.map(|l| l.aws_access_key), Some("AKIA".to_string()));

    assert!(
        LegacyAwsCredentials::from_parts(
            Some("arn".to_string()),
            Some(" ".to_string()),
            Some("secret".to_string())
        )
        .is_none()
    );
    assert!(LegacyAwsCredentials::from_parts(None, None, None).is_none());
}

#[test]
fn test_rest_api_config_default() {
    let rest_api = RestApiConfig::default();
    assert_eq!(rest_api.auth_url, AUTH_URL);
    assert_eq!(rest_api.endpoint, None);
    assert_eq!(rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_rest_api_config_with_base_url() {
    let rest_api = RestApiConfig::with_base_url("http://127.0.0.1:8080/");
    assert_eq!(rest_api.auth_url, "http://127.0.0.1:8080/auth/o2/token");
    assert_eq!(rest_api.endpoint.as_deref(), Some("http://127.0.0.1:8080"));
}

#[test]
fn test_config_with_credentials() {
    let credentials = Credentials::new("id", "secret", "refresh").with_country_code("FR");
    let config = Config::with_credentials(credentials.clone())
        .with_rest_api(RestApiConfig::with_base_url("http://localhost:1"));
    assert_eq!(config.credentials, credentials);
    assert!(config.legacy.is_none());
    assert_eq!(config.rest_api.endpoint.as_deref(), Some("http://localhost:1"));
}

#[test]
fn test_config_serialization() {
    let config = Config::with_credentials(Credentials::new("id", "secret", "refresh"));
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
