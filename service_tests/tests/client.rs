//! End-to-end tests driving both bundled transports against the live
//! mock API.

use std::collections::HashMap;

use courier_core::{
    ApiClient, ApiRequest, BlockingApiClient, Error, JsonErrorParser, Method, NoDomainErrors,
    ReqwestTransport, UreqTransport,
};
use serde::Deserialize;
use service_tests::{base_url, spawn_mock_api};

#[derive(Debug, Deserialize, PartialEq)]
struct Item {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Echo {
    query: HashMap<String, String>,
}

fn async_client(addr: std::net::SocketAddr) -> ApiClient<ReqwestTransport> {
    ApiClient::new(base_url(addr), ReqwestTransport::new(), JsonErrorParser::default()).unwrap()
}

#[tokio::test]
async fn get_parameters_arrive_as_query_string() {
    let addr = spawn_mock_api();
    let client = async_client(addr);

    let request = ApiRequest::new(Method::Get, "echo")
        .param("q", "test")
        .param("page", 2);
    let echo: Echo = client.execute(&request).await.unwrap();

    assert_eq!(echo.query.get("q").map(String::as_str), Some("test"));
    assert_eq!(echo.query.get("page").map(String::as_str), Some("2"));
}

#[tokio::test]
async fn post_parameters_arrive_as_json_body() {
    let addr = spawn_mock_api();
    let client = async_client(addr);

    let request = ApiRequest::new(Method::Post, "items").param("name", "a");
    let item: Item = client.execute(&request).await.unwrap();

    assert_eq!(item.name, "a");
}

#[tokio::test]
async fn created_item_can_be_fetched_and_deleted() {
    let addr = spawn_mock_api();
    let client = async_client(addr);

    let request = ApiRequest::new(Method::Post, "items").param("name", "lifecycle");
    let created: Item = client.execute(&request).await.unwrap();

    let request = ApiRequest::new(Method::Get, format!("items/{}", created.id));
    let fetched: Item = client.execute(&request).await.unwrap();
    assert_eq!(fetched, created);

    let request = ApiRequest::new(Method::Delete, format!("items/{}", created.id));
    let deleted: Item = client.execute(&request).await.unwrap();
    assert_eq!(deleted, fetched);

    let request = ApiRequest::new(Method::Get, format!("items/{}", created.id));
    let error = client.execute::<Item>(&request).await.unwrap_err();
    assert!(matches!(error, Error::Status { status: 404, .. }));
}

#[tokio::test]
async fn missing_item_is_a_status_error() {
    let addr = spawn_mock_api();
    let client = async_client(addr);

    let request = ApiRequest::new(Method::Get, "items/999");
    let error = client.execute::<Item>(&request).await.unwrap_err();
    assert!(matches!(error, Error::Status { status: 404, .. }));
}

#[tokio::test]
async fn embedded_domain_error_fails_a_200_response() {
    let addr = spawn_mock_api();
    let client = async_client(addr);

    let request = ApiRequest::new(Method::Get, "flagged");
    let error = client.execute::<serde_json::Value>(&request).await.unwrap_err();

    match error {
        Error::Api(api) => {
            assert_eq!(api.code, Some(5));
            assert_eq!(api.message, "flagged");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn flagged_body_passes_with_an_indifferent_parser() {
    let addr = spawn_mock_api();
    let client =
        ApiClient::new(base_url(addr), ReqwestTransport::new(), NoDomainErrors).unwrap();

    let request = ApiRequest::new(Method::Get, "flagged");
    let body: serde_json::Value = client.execute(&request).await.unwrap();
    assert_eq!(body["error_code"], 5);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let addr = spawn_mock_api();
    let client = async_client(addr);

    let request = ApiRequest::new(Method::Get, "broken");
    let error = client.execute::<serde_json::Value>(&request).await.unwrap_err();
    assert!(matches!(error, Error::Decode(_)));
}

#[test]
fn blocking_client_round_trip_over_ureq() {
    let addr = spawn_mock_api();
    let client = BlockingApiClient::new(
        base_url(addr),
        UreqTransport::new(),
        JsonErrorParser::default(),
    )
    .unwrap();

    let request = ApiRequest::new(Method::Post, "items").param("name", "from-ureq");
    let item: Item = client.execute(&request).unwrap();
    assert_eq!(item.name, "from-ureq");

    let request = ApiRequest::new(Method::Get, format!("items/{}", item.id));
    let fetched: Item = client.execute(&request).unwrap();
    assert_eq!(fetched, item);
}

#[test]
fn blocking_client_surfaces_status_errors() {
    let addr = spawn_mock_api();
    let client = BlockingApiClient::new(base_url(addr), UreqTransport::new(), NoDomainErrors)
        .unwrap();

    let request = ApiRequest::new(Method::Get, "items/999");
    let error = client.execute::<Item>(&request).unwrap_err();
    assert!(matches!(error, Error::Status { status: 404, .. }));
}

#[test]
fn blocking_client_detects_embedded_domain_errors() {
    let addr = spawn_mock_api();
    let client = BlockingApiClient::new(
        base_url(addr),
        UreqTransport::new(),
        JsonErrorParser::default(),
    )
    .unwrap();

    let request = ApiRequest::new(Method::Get, "flagged");
    let error = client.execute::<serde_json::Value>(&request).unwrap_err();
    assert!(matches!(error, Error::Api(_)));
}
