use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use httpmock::prelude::*;
use papex_site::adapters::ImgBbHost;
use papex_site::{ImageFile, ImageHost, SiteError};

fn sample_image() -> ImageFile {
    ImageFile {
        filename: "cover.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
    }
}

#[tokio::test]
async fn test_upload_returns_hosted_url() {
    let server = MockServer::start();

    let upload_mock = server.mock(|when, then| {
        when.method(POST).path("/1/upload");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": {
                    "url": "https://i.ibb.co/abc123/cover.jpg",
                    "display_url": "https://ibb.co/abc123"
                },
                "success": true,
                "status": 200
            }));
    });

    let host = ImgBbHost::with_endpoint("test-key", server.url("/1/upload"));
    let url = host.upload(&sample_image()).await.unwrap();

    upload_mock.assert();
    assert_eq!(url, "https://i.ibb.co/abc123/cover.jpg");
}

#[tokio::test]
async fn test_upload_sends_key_and_base64_image() {
    let server = MockServer::start();
    let encoded = BASE64.encode([0xffu8, 0xd8, 0xff, 0xe0]);

    let upload_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/1/upload")
            .body_contains("test-key")
            .body_contains(&encoded);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": { "url": "https://i.ibb.co/abc123/cover.jpg" }
            }));
    });

    let host = ImgBbHost::with_endpoint("test-key", server.url("/1/upload"));
    host.upload(&sample_image()).await.unwrap();

    upload_mock.assert();
}

#[tokio::test]
async fn test_upload_falls_back_to_display_url() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/1/upload");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": { "display_url": "https://ibb.co/fallback" }
            }));
    });

    let host = ImgBbHost::with_endpoint("test-key", server.url("/1/upload"));
    let url = host.upload(&sample_image()).await.unwrap();
    assert_eq!(url, "https://ibb.co/fallback");
}

#[tokio::test]
async fn test_upload_without_url_in_response_errors() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/1/upload");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "success": false }));
    });

    let host = ImgBbHost::with_endpoint("test-key", server.url("/1/upload"));
    let err = host.upload(&sample_image()).await.unwrap_err();
    assert!(matches!(err, SiteError::UploadError { .. }));
}

#[tokio::test]
async fn test_upload_propagates_http_error_status() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/1/upload");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "error": { "message": "Invalid API key" }
            }));
    });

    let host = ImgBbHost::with_endpoint("bad-key", server.url("/1/upload"));
    let err = host.upload(&sample_image()).await.unwrap_err();
    match err {
        SiteError::UploadError { message } => assert!(message.contains("400")),
        other => panic!("unexpected error: {:?}", other),
    }
}
