//! Spherical-Earth coordinate functions.
//!
//! One colatitude/longitude convention is used everywhere in the system:
//! `x = sinφ·cosθ, y = cosφ, z = sinφ·sinθ` with φ the colatitude and
//! θ the longitude plus a configurable texture-seam offset. Accuracy is
//! spherical only; no ellipsoidal correction.

use glam::DVec3;

use quakeview_core::constants::{EARTH_RADIUS_KM, POLE_EPSILON};
use quakeview_core::types::GeoPoint;

/// Map a geographic point onto the unit sphere.
///
/// `lon_offset_deg` compensates for the seam of the paired globe texture
/// and must be the same value wherever lat/lon meets render space.
/// Colatitude is clamped to `[ε, π−ε]` so points at the poles map to a
/// well-defined vector instead of producing NaN downstream.
pub fn to_unit_vector(point: GeoPoint, lon_offset_deg: f64) -> DVec3 {
    let phi = (90.0 - point.lat_deg)
        .to_radians()
        .clamp(POLE_EPSILON, std::f64::consts::PI - POLE_EPSILON);
    let theta = (point.lon_deg + lon_offset_deg).to_radians();

    DVec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

/// Direct geodesic problem on the sphere: the point reached by traveling
/// `angular_distance_rad` from `origin` along the given initial bearing
/// (degrees clockwise from north).
///
/// Zero distance returns `origin` unchanged. The resulting longitude is
/// NOT normalized to [-180, 180]; callers needing display-safe longitude
/// must wrap it themselves.
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, angular_distance_rad: f64) -> GeoPoint {
    if angular_distance_rad == 0.0 {
        return origin;
    }

    let phi1 = origin.lat_deg.to_radians();
    let lambda1 = origin.lon_deg.to_radians();
    let theta = bearing_deg.to_radians();

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_ad, cos_ad) = angular_distance_rad.sin_cos();

    let sin_phi2 = sin_phi1 * cos_ad + cos_phi1 * sin_ad * theta.cos();
    let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
    let y = theta.sin() * sin_ad * cos_phi1;
    let x = cos_ad - sin_phi1 * sin_phi2;
    let lambda2 = lambda1 + y.atan2(x);

    GeoPoint::new(phi2.to_degrees(), lambda2.to_degrees())
}

/// Great-circle distance between two geographic points (km), haversine form.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat_deg.to_radians();
    let phi2 = b.lat_deg.to_radians();
    let d_phi = (b.lat_deg - a.lat_deg).to_radians();
    let d_lambda = (b.lon_deg - a.lon_deg).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().clamp(-1.0, 1.0).asin()
}
