use serde::{Deserialize, Serialize};

use super::google_geocode_response::GoogleGeometry;

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResult {
    pub formatted_address: Option<String>,
    pub geometry: Option<GoogleGeometry>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResponse {
    pub result: Option<GooglePlaceDetailsResult>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
