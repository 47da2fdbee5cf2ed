//! Geodesic math for QUAKEVIEW.
//!
//! Spherical-Earth coordinate conversion and geodesic ring construction.
//! Everything here is pure and deterministic: no I/O, no hidden state,
//! and no errors for well-typed numeric input.

pub use quakeview_core as core;

pub mod geodesic;
pub mod ring;

// Re-export key items for convenience.
pub use geodesic::{destination_point, haversine_km, to_unit_vector};
pub use ring::RingProjector;
