use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use super::types::{
    google_autocomplete_response::GoogleAutocompleteResponse,
    google_geocode_response::GoogleGeocodeResponse,
    google_place_details_response::GooglePlaceDetailsResponse,
    maps_service_error::MapsServiceError,
};
use crate::{
    services::{
        address_forms::place_search_service::{Place, PlacePrediction, PlaceSearchService},
        address_resolution::geocoding_service::{
            AddressComponent, GeocodeCandidate, GeocodingService,
        },
    },
    types::coordinate::Coordinate,
};

const AUTOCOMPLETE_RADIUS_METERS: u32 = 500;

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub api_key: String,
    pub host: String,
    pub timeout: Duration,
}

/// Google Maps web services client: geocoding, place autocomplete and place details.
#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Result<Self, MapsServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MapsServiceError::Internal(format!("Failed to build client: {}", e)))?;

        Ok(Self { config, client })
    }

    // reqwest errors carry the request URL, which includes the API key.
    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, MapsServiceError> {
        let url = format!(
            "{}{}&key={}",
            self.config.host, path_and_query, self.config.api_key
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                MapsServiceError::Internal(format!("Failed to send request: {}", e.without_url()))
            })?;

        resp.json::<T>().await.map_err(|e| {
            MapsServiceError::Internal(format!(
                "Failed to get response body: {}",
                e.without_url()
            ))
        })
    }
}

fn status_error(status: String, message: Option<String>) -> MapsServiceError {
    MapsServiceError::Status {
        status,
        message: message.unwrap_or_default(),
    }
}

#[async_trait]
impl GeocodingService for MapsService {
    async fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<Vec<GeocodeCandidate>, MapsServiceError> {
        debug!("Reverse geocoding {}", coordinate);

        let body = self
            .get_json::<GoogleGeocodeResponse>(&format!(
                "/maps/api/geocode/json?latlng={}",
                coordinate
            ))
            .await?;

        match body.status.as_str() {
            "OK" => Ok(body
                .results
                .into_iter()
                .map(|r| GeocodeCandidate {
                    formatted_address: r.formatted_address,
                    address_components: r
                        .address_components
                        .into_iter()
                        .map(|c| AddressComponent {
                            long_name: c.long_name,
                            types: c.types,
                        })
                        .collect(),
                })
                .collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(status_error(body.status, body.error_message)),
        }
    }
}

#[async_trait]
impl PlaceSearchService for MapsService {
    async fn autocomplete(
        &self,
        input: &str,
        near: Option<Coordinate>,
    ) -> Result<Vec<PlacePrediction>, MapsServiceError> {
        let mut path = format!("/maps/api/place/autocomplete/json?input={}", encode(input));

        if let Some(near) = near {
            path.push_str(&format!(
                "&location={}&radius={}",
                near, AUTOCOMPLETE_RADIUS_METERS
            ));
        }

        let body = self.get_json::<GoogleAutocompleteResponse>(&path).await?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(body
                .predictions
                .into_iter()
                .map(|p| PlacePrediction {
                    main_text: p.structured_formatting.main_text,
                    secondary_text: p.structured_formatting.secondary_text,
                    place_id: p.place_id,
                })
                .collect()),
            _ => Err(status_error(body.status, body.error_message)),
        }
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<Place>, MapsServiceError> {
        let body = self
            .get_json::<GooglePlaceDetailsResponse>(&format!(
                "/maps/api/place/details/json?place_id={}&fields=formatted_address,geometry",
                encode(place_id)
            ))
            .await?;

        match body.status.as_str() {
            "OK" => Ok(body.result.map(|r| Place {
                formatted_address: r.formatted_address.unwrap_or_default(),
                coordinate: r
                    .geometry
                    .and_then(|g| Coordinate::new(g.location.lat, g.location.lng).ok()),
            })),
            "NOT_FOUND" | "ZERO_RESULTS" => Ok(None),
            _ => Err(status_error(body.status, body.error_message)),
        }
    }
}
