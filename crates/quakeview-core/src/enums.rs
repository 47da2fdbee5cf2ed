//! Enumeration types used throughout the visualization.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_P_KM_PER_SEC, DEFAULT_S_KM_PER_SEC};
use crate::types::WaveVelocity;

/// Seismic body-wave class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveKind {
    /// Primary (compressional) wave — fastest arrival.
    #[default]
    P,
    /// Secondary (shear) wave.
    S,
}

impl WaveKind {
    /// Fallback propagation velocity used when a response carries no usable
    /// ring samples for this wave class.
    pub fn default_velocity(self) -> WaveVelocity {
        match self {
            WaveKind::P => WaveVelocity::new(DEFAULT_P_KM_PER_SEC),
            WaveKind::S => WaveVelocity::new(DEFAULT_S_KM_PER_SEC),
        }
    }
}
