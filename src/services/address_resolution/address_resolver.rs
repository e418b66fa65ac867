use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::geocoding_service::{AddressComponent, GeocodingService};
use crate::types::{coordinate::Coordinate, structured_address::StructuredAddress};

#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("No address found for this location")]
    NoCandidates,
    #[error("Geocoding service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AddressField {
    Building,
    Landmark,
    City,
    State,
    Pincode,
}

// First match wins, so a component lands in at most one field.
const FIELD_TAGS: [(AddressField, &[&str]); 5] = [
    (AddressField::Building, &["street_number", "route"]),
    (AddressField::Landmark, &["sublocality", "neighborhood"]),
    (AddressField::City, &["locality"]),
    (AddressField::State, &["administrative_area_level_1"]),
    (AddressField::Pincode, &["postal_code"]),
];

fn classify(types: &[String]) -> Option<AddressField> {
    FIELD_TAGS
        .iter()
        .find(|(_, tags)| types.iter().any(|t| tags.contains(&t.as_str())))
        .map(|(field, _)| *field)
}

/// Folds a candidate's components into a [`StructuredAddress`].
///
/// `building` accumulates every street number and route in input order, each
/// followed by a space. The other fields keep the last matching component.
pub fn map_address_components(
    formatted_address: &str,
    components: &[AddressComponent],
) -> StructuredAddress {
    let mut address = StructuredAddress {
        formatted_address: formatted_address.to_string(),
        ..Default::default()
    };

    for component in components {
        let name = component.long_name.clone();

        match classify(&component.types) {
            Some(AddressField::Building) => {
                address.building.push_str(&name);
                address.building.push(' ');
            }
            Some(AddressField::Landmark) => address.landmark = name,
            Some(AddressField::City) => address.city = name,
            Some(AddressField::State) => address.state = name,
            Some(AddressField::Pincode) => address.pincode = name,
            None => {}
        }
    }

    address
}

/// Turns a coordinate into a [`StructuredAddress`] through the geocoder.
///
/// Map clicks, marker drags and place selections all come through
/// [`AddressResolver::resolve`]. The first candidate wins.
#[derive(Clone)]
pub struct AddressResolver {
    geocoder: Arc<dyn GeocodingService>,
}

impl AddressResolver {
    pub fn new(geocoder: Arc<dyn GeocodingService>) -> Self {
        Self { geocoder }
    }

    pub async fn resolve(&self, coordinate: Coordinate) -> Result<StructuredAddress, ResolveError> {
        debug!("Resolving address for {}", coordinate);

        let candidates = self
            .geocoder
            .reverse_geocode(coordinate)
            .await
            .map_err(|e| {
                warn!("Reverse geocoding {} failed: {}", coordinate, e);
                ResolveError::ServiceUnavailable(e.to_string())
            })?;

        let Some(first) = candidates.first() else {
            info!("No results found for {}", coordinate);
            return Err(ResolveError::NoCandidates);
        };

        Ok(map_address_components(
            &first.formatted_address,
            &first.address_components,
        ))
    }
}
