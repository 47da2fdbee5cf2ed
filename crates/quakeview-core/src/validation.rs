//! Input validation for user-supplied epicenter parameters.
//!
//! Runs at the request boundary, before anything reaches the geometry
//! engine or the network. Non-finite values are always rejected.

use thiserror::Error;

use crate::constants::{MAX_DEPTH_KM, MAX_MAGNITUDE, MIN_DEPTH_KM, MIN_MAGNITUDE};
use crate::protocol::SimulationRequest;

/// Rejected user input. Surfaced as a user-visible message; never sent to
/// the geometry engine or the simulation service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
    #[error("magnitude {0} out of range [{MIN_MAGNITUDE}, {MAX_MAGNITUDE}]")]
    Magnitude(f64),
    #[error("depth {0} km out of range [{MIN_DEPTH_KM}, {MAX_DEPTH_KM}]")]
    Depth(f64),
    #[error("city {index} ({name:?}) has invalid coordinates")]
    City { index: usize, name: String },
}

pub fn validate_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

pub fn validate_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}

pub fn validate_magnitude(mag: f64) -> bool {
    mag.is_finite() && (MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&mag)
}

pub fn validate_depth_km(depth: f64) -> bool {
    depth.is_finite() && (MIN_DEPTH_KM..=MAX_DEPTH_KM).contains(&depth)
}

/// Validate a full simulation request, including every city coordinate.
pub fn validate_request(request: &SimulationRequest) -> Result<(), InvalidInput> {
    if !validate_latitude(request.lat) {
        return Err(InvalidInput::Latitude(request.lat));
    }
    if !validate_longitude(request.lon) {
        return Err(InvalidInput::Longitude(request.lon));
    }
    if !validate_magnitude(request.magnitude) {
        return Err(InvalidInput::Magnitude(request.magnitude));
    }
    if !validate_depth_km(request.depth_km) {
        return Err(InvalidInput::Depth(request.depth_km));
    }
    for (index, city) in request.cities.iter().enumerate() {
        if !validate_latitude(city.lat) || !validate_longitude(city.lon) {
            return Err(InvalidInput::City {
                index,
                name: city.name.clone(),
            });
        }
    }
    Ok(())
}
