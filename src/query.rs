//! Request validation and the response envelope around a bundle.

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::LocationBundle;
use crate::generation::bundle::{DEFAULT_RADIUS_KM, NearbyGenerator};
use crate::utils::error::Error;
use crate::utils::geometry::{is_world_coordinate, validate_coordinates};

pub const MIN_RADIUS_KM: f64 = 0.5;
pub const MAX_RADIUS_KM: f64 = 20.0;

pub const BOUNDS_HINT: &str =
    "India's approximate bounds: Latitude: 6.4°N to 37.6°N, Longitude: 68.7°E to 97.25°E";

fn default_radius() -> f64 {
    DEFAULT_RADIUS_KM
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometres. Echoed in the response, never applied to jitter.
    #[serde(default = "default_radius")]
    pub radius: f64,
}

impl LocationQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: DEFAULT_RADIUS_KM,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// World ranges and radius first, then the India bounding box.
    pub fn validate(&self) -> Result<(), Error> {
        if !is_world_coordinate(self.latitude, self.longitude) {
            return Err(Error::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&self.radius) {
            return Err(Error::InvalidRadius(self.radius));
        }
        if !validate_coordinates(self.latitude, self.longitude) {
            return Err(Error::OutOfBounds {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
}

impl From<&LocationQuery> for QueryCoordinates {
    fn from(query: &LocationQuery) -> Self {
        Self {
            latitude: query.latitude,
            longitude: query.longitude,
            radius: query.radius,
        }
    }
}

/// Successful reply to a nearby-locations query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyResponse {
    pub success: bool,
    pub message: String,
    pub data: LocationBundle,
    pub coordinates: QueryCoordinates,
}

impl NearbyResponse {
    pub fn new(query: &LocationQuery, data: LocationBundle) -> Self {
        let message = format!(
            "Found {} locations within {}km",
            data.total_results().sum(),
            query.radius
        );
        Self {
            success: true,
            message,
            data,
            coordinates: query.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProvidedCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Client-facing body for a rejected or failed query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provided: Option<ProvidedCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        match err {
            Error::OutOfBounds {
                latitude,
                longitude,
            } => Self {
                message: err.to_string(),
                provided: Some(ProvidedCoordinates {
                    latitude: *latitude,
                    longitude: *longitude,
                }),
                hint: Some(BOUNDS_HINT.to_string()),
            },
            Error::InvalidCoordinates { .. } | Error::InvalidRadius(_) => Self {
                message: "Invalid coordinates provided".to_string(),
                provided: None,
                hint: Some(err.to_string()),
            },
            _ => Self {
                message: "Failed to generate location data".to_string(),
                provided: None,
                hint: None,
            },
        }
    }
}

/// Validates `query` and, only if it passes, generates its bundle.
pub fn handle_nearby_query<R: Rng + ?Sized>(
    generator: &NearbyGenerator,
    rng: &mut R,
    query: &LocationQuery,
) -> Result<NearbyResponse, Error> {
    if let Err(err) = query.validate() {
        warn!(
            "Rejected query ({}, {}) radius {}: {}",
            query.latitude, query.longitude, query.radius, err
        );
        return Err(err);
    }
    let bundle = generator.generate(rng, query.latitude, query.longitude, query.radius);
    Ok(NearbyResponse::new(query, bundle))
}
