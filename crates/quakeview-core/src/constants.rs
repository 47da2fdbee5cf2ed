//! Visualization constants and tuning parameters.

/// Mean Earth radius in kilometers (spherical model).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// --- Wave propagation defaults ---

/// Default P-wave velocity when no usable ring samples exist (km/s).
pub const DEFAULT_P_KM_PER_SEC: f64 = 6.0;

/// Default S-wave velocity when no usable ring samples exist (km/s).
pub const DEFAULT_S_KM_PER_SEC: f64 = 3.5;

// --- Timeline ---

/// Playback bound when a response carries no ring samples (minutes).
pub const DEFAULT_TIMELINE_MINUTES: f64 = 60.0;

/// Headroom factor applied to the last sample arrival so the final static
/// ring is not flush against the right edge of the timeline.
pub const TIMELINE_MARGIN: f64 = 1.1;

/// Default playback speed, in simulated minutes per real second.
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

// --- Ring geometry ---

/// Default number of samples on a geodesic ring (2° steps).
pub const DEFAULT_RING_SEGMENTS: usize = 180;

/// Minimum acceptable ring resolution.
pub const MIN_RING_SEGMENTS: usize = 8;

/// Radial lift applied to ring points above the unit sphere, to keep ring
/// polylines from z-fighting with the globe surface. Render concern; kept
/// out of the geodesic math itself.
pub const SURFACE_LIFT: f64 = 0.001;

/// Longitude offset (degrees) compensating for the seam of the paired
/// globe texture. Applied uniformly wherever lat/lon maps to 3D.
pub const TEXTURE_LON_OFFSET_DEG: f64 = 180.0;

/// Colatitude clamp keeping pole input away from the singularity (radians).
pub const POLE_EPSILON: f64 = 1e-9;

// --- Frame loop ---

/// Frame loop rate for the headless driver (Hz).
pub const FRAME_RATE: u32 = 60;

// --- Input limits ---

/// Minimum valid earthquake magnitude.
pub const MIN_MAGNITUDE: f64 = 0.0;

/// Maximum valid earthquake magnitude.
pub const MAX_MAGNITUDE: f64 = 10.0;

/// Minimum valid hypocenter depth (km).
pub const MIN_DEPTH_KM: f64 = 0.0;

/// Maximum valid hypocenter depth (km).
pub const MAX_DEPTH_KM: f64 = 1000.0;
