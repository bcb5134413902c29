mod common;

use common::serve_once;
use panorama_client::config::ApiConfig;
use panorama_client::transport::{
    HttpTransport, RequestDescriptor, ResponseBody, ResponseType, Transport, TransportError,
};

fn transport_for(base_url: &str) -> HttpTransport {
    HttpTransport::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        user_agent: Some("panorama-client-test".to_string()),
        ..ApiConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_json_body_without_response_type() {
    let (base, server) = serve_once("200 OK", br#"{"code":200,"data":[{"id":1}]}"#.to_vec()).await;
    let transport = transport_for(&format!("{}/prod-api/", base));

    let body = transport
        .request(RequestDescriptor::get("/panorama/pano/getLocation"))
        .await
        .unwrap();

    assert_eq!(
        body,
        ResponseBody::Json(serde_json::json!({"code": 200, "data": [{"id": 1}]}))
    );

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /prod-api/panorama/pano/getLocation HTTP/1.1"));
    assert!(head.to_lowercase().contains("user-agent: panorama-client-test"));
}

#[tokio::test]
async fn test_blob_body_is_kept_as_bytes() {
    let image = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
    let (base, server) = serve_once("200 OK", image.clone()).await;
    let transport = transport_for(&base);

    let body = transport
        .request(RequestDescriptor::get("/panorama/pano/getPano?id=42").with_response_type(ResponseType::Blob))
        .await
        .unwrap();

    assert_eq!(body, ResponseBody::Binary(image));
    let head = server.await.unwrap();
    assert!(head.starts_with("GET /panorama/pano/getPano?id=42 HTTP/1.1"));
}

#[tokio::test]
async fn test_non_json_body_falls_back_to_text() {
    let (base, server) = serve_once("200 OK", b"pong".to_vec()).await;
    let transport = transport_for(&base);

    let body = transport.request(RequestDescriptor::get("/ping")).await.unwrap();

    assert_eq!(body, ResponseBody::Text("pong".to_string()));
    server.await.unwrap();
}

#[tokio::test]
async fn test_strict_json_reports_decode_error() {
    let (base, server) = serve_once("200 OK", b"<html>".to_vec()).await;
    let transport = transport_for(&base);

    let err = transport
        .request(RequestDescriptor::get("/panorama/pano/1").with_response_type(ResponseType::Json))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_error_status_carries_body_text() {
    let (base, server) = serve_once("404 Not Found", b"no such photo".to_vec()).await;
    let transport = transport_for(&base);

    let err = transport
        .request(RequestDescriptor::get("/panorama/pano/missing"))
        .await
        .unwrap_err();

    match err {
        TransportError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such photo");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.await.unwrap();
}
