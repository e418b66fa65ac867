use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{
    services::maps_client::types::google_geocode_response::{
        GoogleAddressComponent, GoogleGeocodeResponse, GoogleGeocodeResult,
    },
    types::address_form_response::AddressFormResponse,
};

pub async fn send_json(app: &Router, method: &str, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn send_empty(app: &Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn create_form(app: &Router) -> u64 {
    let response = send_json(app, "POST", "/address-forms", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    read_json::<AddressFormResponse>(response).await.data.id
}

pub fn springfield_geocode() -> GoogleGeocodeResponse {
    let component = |long_name: &str, types: &[&str]| GoogleAddressComponent {
        long_name: long_name.to_string(),
        short_name: long_name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
    };

    GoogleGeocodeResponse {
        results: vec![GoogleGeocodeResult {
            formatted_address: "1 Main St, Springfield, IL 62704".to_string(),
            address_components: vec![
                component("1 Main St", &["street_number", "route"]),
                component("Springfield", &["locality", "political"]),
                component("IL", &["administrative_area_level_1", "political"]),
                component("62704", &["postal_code"]),
            ],
        }],
        status: "OK".to_string(),
        error_message: None,
    }
}

pub async fn mock_geocode(
    server: &mut mockito::ServerGuard,
    response: &GoogleGeocodeResponse,
) -> mockito::Mock {
    server
        .mock("GET", "/maps/api/geocode/json")
        .match_query(mockito::Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(response).unwrap())
        .create_async()
        .await
}
