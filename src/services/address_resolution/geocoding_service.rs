use async_trait::async_trait;

use crate::{
    services::maps_client::types::maps_service_error::MapsServiceError,
    types::coordinate::Coordinate,
};

/// One token of a formatted address, tagged with the geocoder's type labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressComponent {
    pub long_name: String,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub formatted_address: String,
    pub address_components: Vec<AddressComponent>,
}

/// Reverse geocoder. Candidates are returned in the provider's order.
#[async_trait]
pub trait GeocodingService: Send + Sync {
    async fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<Vec<GeocodeCandidate>, MapsServiceError>;
}
