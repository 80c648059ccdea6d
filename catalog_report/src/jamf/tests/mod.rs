//! Unit tests for the Jamf Pro API module.

mod apps_tests;

use std::time::Duration;

use super::JamfClient;

/// Client pointed at a mock server, with no pause between retries.
pub(super) fn client_with_mock(mock_uri: &str) -> JamfClient {
    JamfClient::new(
        format!("{mock_uri}/JSSResource"),
        "api_user".to_string(),
        "api_pass".to_string(),
    )
    .with_retry_delay(Duration::ZERO)
}
