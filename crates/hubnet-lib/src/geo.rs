//! Great-circle distance between geographic coordinates.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Error, Result};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a validated coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Whether both components are finite and inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Haversine distance to another coordinate pair, in kilometres.
    ///
    /// Both pairs are assumed valid; use [`distance_km`] for unchecked input.
    pub fn distance_to(&self, other: &Self) -> f64 {
        // Canonical ordering keeps the floating point evaluation identical
        // for (a, b) and (b, a).
        let (from, to) = match compare(self, other) {
            Ordering::Greater => (other, self),
            _ => (self, other),
        };

        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();
        let delta_lat = (to.latitude - from.latitude).to_radians();
        let delta_lon = (to.longitude - from.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Great-circle distance between two coordinate pairs in kilometres.
///
/// Returns [`Error::InvalidCoordinate`] when either pair is non-finite or out
/// of range. The result is symmetric bit-for-bit and zero for identical input.
pub fn distance_km(a: Coordinates, b: Coordinates) -> Result<f64> {
    a.validate()?;
    b.validate()?;
    Ok(a.distance_to(&b))
}

fn compare(a: &Coordinates, b: &Coordinates) -> Ordering {
    a.latitude
        .total_cmp(&b.latitude)
        .then_with(|| a.longitude.total_cmp(&b.longitude))
}
