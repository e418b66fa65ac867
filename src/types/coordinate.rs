use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Coordinate must be finite, got ({latitude}, {longitude})")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Map centre used when no user location is available.
    pub const FALLBACK: Coordinate = Coordinate {
        latitude: 40.7128,
        longitude: -74.0060,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    pub fn within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_values() {
        assert!(Coordinate::new(f64::NAN, 1.0).is_err());
        assert!(Coordinate::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn bounds_check() {
        assert!(Coordinate::FALLBACK.within_bounds());
        assert!(!Coordinate::new(91.0, 0.0).unwrap().within_bounds());
        assert!(!Coordinate::new(0.0, -180.5).unwrap().within_bounds());
    }

    #[test]
    fn displays_as_lat_lng_pair() {
        let coordinate = Coordinate::new(41.5, -87.25).unwrap();

        assert_eq!(coordinate.to_string(), "41.5,-87.25");
    }
}
