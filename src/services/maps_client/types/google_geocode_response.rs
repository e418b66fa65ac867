#![allow(dead_code)]
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeometry {
    pub location: GoogleLatLng,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleAddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResult {
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<GoogleAddressComponent>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponse {
    #[serde(default)]
    pub results: Vec<GoogleGeocodeResult>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
