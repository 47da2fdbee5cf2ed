//! Geodesic ring construction: closed polylines approximating circles of
//! constant angular distance around a center point.
//!
//! Rings are parameterized on an orthonormal tangent basis at the center
//! rather than looping `destination_point` over bearings; the bearing loop
//! degenerates when the center sits near a pole, the basis form does not.

use glam::DVec3;

use quakeview_core::constants::{
    DEFAULT_RING_SEGMENTS, EARTH_RADIUS_KM, MIN_RING_SEGMENTS, SURFACE_LIFT,
    TEXTURE_LON_OFFSET_DEG,
};
use quakeview_core::types::{GeodesicRing, GeoPoint};

use crate::geodesic::to_unit_vector;

/// Builds geodesic rings in render space.
///
/// Carries the two render-facing knobs (texture-seam longitude offset and
/// surface lift) so the geodesic math itself stays free of them. For a
/// fixed `(center, radius_km, segments)` the output is bit-identical on
/// every call.
#[derive(Debug, Clone)]
pub struct RingProjector {
    /// Longitude offset in degrees, matching the paired globe texture.
    pub lon_offset_deg: f64,
    /// Radial lift above the unit sphere, keeping rings from z-fighting
    /// with the globe surface.
    pub surface_lift: f64,
}

impl Default for RingProjector {
    fn default() -> Self {
        Self {
            lon_offset_deg: TEXTURE_LON_OFFSET_DEG,
            surface_lift: SURFACE_LIFT,
        }
    }
}

impl RingProjector {
    pub fn new(lon_offset_deg: f64, surface_lift: f64) -> Self {
        Self {
            lon_offset_deg,
            surface_lift,
        }
    }

    /// Build a ring of `segments` points at great-circle radius `radius_km`
    /// around `center`.
    ///
    /// `segments` is clamped to a minimum of 8. A zero radius collapses
    /// every sample onto the lifted center vector rather than failing;
    /// negative radii are treated as zero.
    pub fn project(&self, center: GeoPoint, radius_km: f64, segments: usize) -> GeodesicRing {
        let segments = segments.max(MIN_RING_SEGMENTS);
        let angular_radius = radius_km.max(0.0) / EARTH_RADIUS_KM;

        let center_unit = to_unit_vector(center, self.lon_offset_deg);
        let (u, v) = tangent_basis(center_unit);

        let (sin_r, cos_r) = angular_radius.sin_cos();
        let scale = 1.0 + self.surface_lift;

        let points = (0..segments)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / segments as f64;
                let direction = u * t.cos() + v * t.sin();
                (center_unit * cos_r + direction * sin_r) * scale
            })
            .collect();

        GeodesicRing::new(points)
    }

    /// Ring at the default resolution (2° steps).
    pub fn project_default(&self, center: GeoPoint, radius_km: f64) -> GeodesicRing {
        self.project(center, radius_km, DEFAULT_RING_SEGMENTS)
    }
}

/// Orthonormal basis `(u, v)` of the tangent plane at `normal`.
///
/// The reference axis switches from y to x when `normal` is close to the
/// poles, so the cross product never degenerates.
fn tangent_basis(normal: DVec3) -> (DVec3, DVec3) {
    let reference = if normal.y.abs() > 0.9 {
        DVec3::X
    } else {
        DVec3::Y
    };
    let u = normal.cross(reference).normalize();
    let v = normal.cross(u);
    (u, v)
}
