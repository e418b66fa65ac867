use async_trait::async_trait;

use crate::{
    services::maps_client::types::maps_service_error::MapsServiceError,
    types::coordinate::Coordinate,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacePrediction {
    pub place_id: String,
    pub main_text: String,
    pub secondary_text: String,
}

/// A place picked from the search box. `coordinate` is absent when the place has no geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub formatted_address: String,
    pub coordinate: Option<Coordinate>,
}

#[async_trait]
pub trait PlaceSearchService: Send + Sync {
    async fn autocomplete(
        &self,
        input: &str,
        near: Option<Coordinate>,
    ) -> Result<Vec<PlacePrediction>, MapsServiceError>;

    async fn place_details(&self, place_id: &str) -> Result<Option<Place>, MapsServiceError>;
}
