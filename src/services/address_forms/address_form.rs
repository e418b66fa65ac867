use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::place_search_service::Place;
use crate::{
    services::address_resolution::address_resolver::{AddressResolver, ResolveError},
    types::{
        coordinate::Coordinate,
        map_view::MapView,
        structured_address::{StructuredAddress, StructuredAddressEdits},
    },
};

#[derive(Debug, Error, PartialEq)]
pub enum AddressFormError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("Superseded by a newer location change")]
    Superseded,
    #[error("{0}")]
    Validation(String),
    #[error("Place not found")]
    PlaceNotFound,
    #[error("Place lookup failed: {0}")]
    PlaceLookup(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationTrigger {
    MapClick,
    MarkerDrag,
    PlaceSelection,
}

pub type AddressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Notified with the formatted address only, never the full record.
#[derive(Clone)]
pub struct AddressFormCallbacks {
    pub on_address_update: AddressCallback,
    pub on_submit: AddressCallback,
}

impl Default for AddressFormCallbacks {
    fn default() -> Self {
        Self {
            on_address_update: Arc::new(|_: &str| {}),
            on_submit: Arc::new(|_: &str| {}),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressFormSnapshot {
    pub id: u64,
    pub address: StructuredAddress,
    pub map: MapView,
    pub created_at: DateTime<Utc>,
}

struct AddressFormState {
    address: StructuredAddress,
    map: MapView,
    ticket: u64,
    in_flight: Option<CancellationToken>,
}

impl AddressFormState {
    /// Cancels the resolution in flight and returns the new change's ticket.
    fn supersede(&mut self, next: Option<CancellationToken>) -> u64 {
        if let Some(previous) = std::mem::replace(&mut self.in_flight, next) {
            previous.cancel();
        }

        self.ticket += 1;
        self.ticket
    }
}

/// State behind one address form: the current address and the map around it.
///
/// Location changes are sequenced cancel-and-replace. Each one takes a new
/// ticket and cancels the resolution still in flight, so the visible address
/// always belongs to the most recently triggered change.
pub struct AddressForm {
    id: u64,
    created_at: DateTime<Utc>,
    resolver: AddressResolver,
    callbacks: AddressFormCallbacks,
    state: Mutex<AddressFormState>,
}

impl AddressForm {
    pub fn new(
        id: u64,
        resolver: AddressResolver,
        callbacks: AddressFormCallbacks,
        map: MapView,
    ) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            resolver,
            callbacks,
            state: Mutex::new(AddressFormState {
                address: StructuredAddress::default(),
                map,
                ticket: 0,
                in_flight: None,
            }),
        }
    }

    fn snapshot_of(&self, state: &AddressFormState) -> AddressFormSnapshot {
        AddressFormSnapshot {
            id: self.id,
            address: state.address.clone(),
            map: state.map,
            created_at: self.created_at,
        }
    }

    pub async fn snapshot(&self) -> AddressFormSnapshot {
        let state = self.state.lock().await;
        self.snapshot_of(&state)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub async fn change_location(
        &self,
        trigger: LocationTrigger,
        coordinate: Coordinate,
    ) -> Result<AddressFormSnapshot, AddressFormError> {
        self.relocate(trigger, coordinate, None).await
    }

    async fn relocate(
        &self,
        trigger: LocationTrigger,
        coordinate: Coordinate,
        chosen_text: Option<String>,
    ) -> Result<AddressFormSnapshot, AddressFormError> {
        let (ticket, token) = {
            let mut state = self.state.lock().await;
            let token = CancellationToken::new();

            let ticket = state.supersede(Some(token.clone()));
            match trigger {
                LocationTrigger::PlaceSelection => state.map.pan_to(coordinate),
                LocationTrigger::MapClick | LocationTrigger::MarkerDrag => {
                    state.map.move_marker(coordinate)
                }
            }
            if let Some(text) = chosen_text {
                state.address.formatted_address = text;
            }

            (ticket, token)
        };

        debug!(
            "Form {} location change #{} ({:?}) to {}",
            self.id, ticket, trigger, coordinate
        );

        let resolved = tokio::select! {
            _ = token.cancelled() => {
                debug!("Form {} location change #{} cancelled", self.id, ticket);
                return Err(AddressFormError::Superseded);
            }
            resolved = self.resolver.resolve(coordinate) => resolved,
        };

        let snapshot = {
            let mut state = self.state.lock().await;

            if state.ticket != ticket {
                debug!("Form {} discarding stale location change #{}", self.id, ticket);
                return Err(AddressFormError::Superseded);
            }

            state.in_flight = None;
            state.address = resolved?;
            self.snapshot_of(&state)
        };

        (self.callbacks.on_address_update)(&snapshot.address.formatted_address);

        Ok(snapshot)
    }

    /// The place's own text shows while it is geocoded, and stays if geocoding
    /// fails. A place without geometry only fills the address text.
    pub async fn select_place(&self, place: Place) -> Result<AddressFormSnapshot, AddressFormError> {
        match place.coordinate {
            Some(coordinate) => {
                self.relocate(
                    LocationTrigger::PlaceSelection,
                    coordinate,
                    Some(place.formatted_address),
                )
                .await
            }
            None => {
                let mut state = self.state.lock().await;
                state.supersede(None);
                state.address.formatted_address = place.formatted_address;
                Ok(self.snapshot_of(&state))
            }
        }
    }

    pub async fn edit_fields(&self, edits: StructuredAddressEdits) -> AddressFormSnapshot {
        let mut state = self.state.lock().await;
        state.address.apply_edits(edits);
        self.snapshot_of(&state)
    }

    pub async fn submit(&self) -> Result<StructuredAddress, AddressFormError> {
        let address = {
            let state = self.state.lock().await;

            if state.address.formatted_address.trim().is_empty() {
                return Err(AddressFormError::Validation(
                    "Address is required".to_string(),
                ));
            }

            state.address.clone()
        };

        (self.callbacks.on_submit)(&address.formatted_address);

        Ok(address)
    }
}
