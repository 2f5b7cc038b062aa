// Common utilities for integration tests

use mockito::{Mock, ServerGuard};
use serde_json::json;
use sp_api_client::prelude::*;

/// Path of the token endpoint on the mock server
pub const TOKEN_PATH: &str = "/auth/o2/token";

/// Credentials accepted by the mock token endpoint
pub fn test_credentials() -> Credentials {
    Credentials::new("test-client-id", "test-client-secret", "test-refresh-token")
}

/// Transport configuration pointing at the mock server
pub fn rest_api(server: &ServerGuard) -> RestApiConfig {
    setup_logger();
    RestApiConfig::with_base_url(&server.url())
}

/// Creates a US client talking to the mock server
pub fn create_test_client(server: &ServerGuard) -> SpApiClient {
    SpApiClient::with_rest_api(test_credentials(), None, &rest_api(server))
        .expect("Failed to create client")
}

/// Token endpoint granting `token`, expected to be called `hits` times
pub async fn mock_token(server: &mut ServerGuard, token: &str, hits: usize) -> Mock {
    server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": token,
                "token_type": "bearer",
                "expires_in": 3600
            })
            .to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}
