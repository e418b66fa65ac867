use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

pub const ADDRESS_FORM_ZOOM: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub marker: Option<Coordinate>,
}

impl MapView {
    /// Centres on the user's location when known, placing the marker there.
    pub fn new(default_center: Coordinate, user_location: Option<Coordinate>, zoom: u8) -> Self {
        match user_location {
            Some(location) => MapView {
                center: location,
                zoom,
                marker: Some(location),
            },
            None => MapView {
                center: default_center,
                zoom,
                marker: None,
            },
        }
    }

    pub fn move_marker(&mut self, position: Coordinate) {
        self.marker = Some(position);
    }

    pub fn pan_to(&mut self, position: Coordinate) {
        self.center = position;
        self.marker = Some(position);
    }
}
