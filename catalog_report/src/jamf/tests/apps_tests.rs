//! Tests for app listing and detail lookup.

use wiremock::matchers::{basic_auth, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client_with_mock;
use crate::error::ReportError;

fn app_detail_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "mobile_device_application": {
            "general": {
                "id": id,
                "name": name,
                "bundle_id": "com.example.app",
                "category": { "id": 2, "name": "Education" },
                "itunes_store_url": "https://itunes.apple.com/us/app/example/id123456?mt=8"
            },
            "self_service": { "feature_on_main_page": false, "self_service_categories": [] },
            "vpp": { "assign_vpp_device_based_licenses": true, "total_vpp_licenses": 10 }
        }
    })
}

// ── list_app_ids ─────────────────────────────────────────────────────

#[tokio::test]
async fn lists_app_ids_in_numeric_order() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications"))
        .and(basic_auth("api_user", "api_pass"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "mobile_device_applications": [
                { "id": 110, "name": "Pages", "bundle_id": "com.apple.Pages" },
                { "id": 9, "name": "Keynote", "bundle_id": "com.apple.Keynote" },
                { "id": 101, "name": "Numbers", "bundle_id": "com.apple.Numbers" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let ids = client.list_app_ids().await.unwrap();
    assert_eq!(ids, vec!["9", "101", "110"]);
}

#[tokio::test]
async fn lists_no_apps_for_empty_catalog() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "mobile_device_applications": []
        })))
        .mount(&mock_server)
        .await;

    assert!(client.list_app_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_reports_http_status_on_auth_failure() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    match client.list_app_ids().await.unwrap_err() {
        ReportError::HttpStatus { status, url } => {
            assert_eq!(status.as_u16(), 401);
            assert!(url.ends_with("/JSSResource/mobiledeviceapplications"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ── get_app ──────────────────────────────────────────────────────────

#[tokio::test]
async fn fetches_app_detail() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications/id/101"))
        .and(basic_auth("api_user", "api_pass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_detail_json(101, "Numbers")))
        .mount(&mock_server)
        .await;

    let app = client.get_app("101").await.unwrap();
    assert_eq!(app.general.name, "Numbers");
    assert!(app.has_device_licenses());
    assert_eq!(app.vpp.total_vpp_licenses, Some(10));
}

#[tokio::test]
async fn get_app_rejects_malformed_body() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications/id/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = client.get_app("5").await.unwrap_err();
    assert!(matches!(err, ReportError::Parse(_)));
}

#[tokio::test]
async fn get_app_with_retry_recovers_from_transient_error() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications/id/101"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications/id/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_detail_json(101, "Numbers")))
        .mount(&mock_server)
        .await;

    let app = client.get_app_with_retry("101", 3).await;
    tokio_test::assert_ok!(&app);
    assert_eq!(app.unwrap().general.name, "Numbers");
}

#[tokio::test]
async fn get_app_with_retry_gives_up() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/JSSResource/mobiledeviceapplications/id/404"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&mock_server)
        .await;

    let err = client.get_app_with_retry("404", 2).await.unwrap_err();
    assert!(matches!(err, ReportError::HttpStatus { .. }));
}
