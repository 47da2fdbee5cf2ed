//! Wire protocol for the external simulation service.
//!
//! Field names match the service JSON exactly (camelCase). Every top-level
//! response field is optional; absence degrades per documented fallbacks
//! rather than failing deserialization.

use serde::{Deserialize, Serialize};

use crate::enums::WaveKind;
use crate::types::RingSample;

/// Request body for `POST /api/simulate/seismic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub lat: f64,
    pub lon: f64,
    pub depth_km: f64,
    pub magnitude: f64,
    pub cities: Vec<City>,
}

/// A populated place the service computes wave arrivals for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Response body from the simulation service.
///
/// Missing `rings` means: no static rings, no velocity estimate, and the
/// default 60-minute playback bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rings: Option<RingSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrivals: Option<Vec<Arrival>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<IntensityResult>,
}

/// Ring samples per wave class, ordered by arrival. Order matters only for
/// the "first usable sample" velocity fit, not for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RingSet {
    #[serde(rename = "P", default)]
    pub p: Vec<RingSample>,
    #[serde(rename = "S", default)]
    pub s: Vec<RingSample>,
}

impl RingSet {
    /// Samples for the given wave class.
    pub fn samples(&self, kind: WaveKind) -> &[RingSample] {
        match kind {
            WaveKind::P => &self.p,
            WaveKind::S => &self.s,
        }
    }

    /// Latest finite arrival time across both wave classes, if any.
    pub fn last_arrival_minutes(&self) -> Option<f64> {
        self.p
            .iter()
            .chain(self.s.iter())
            .map(|sample| sample.minutes)
            .filter(|minutes| minutes.is_finite())
            .fold(None, |acc, minutes| match acc {
                Some(best) if best >= minutes => Some(best),
                _ => Some(minutes),
            })
    }
}

/// Predicted wave arrival at a named place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    pub place: String,
    #[serde(rename = "type")]
    pub kind: WaveKind,
    pub minutes: f64,
}

/// Shaking-intensity overlay metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityResult {
    pub grid_id: String,
    pub legend: Vec<LegendItem>,
}

/// One entry of the intensity color legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub label: String,
    pub color_hex: String,
}
