//! Wavefront velocity estimation from simulation ring samples.

use quakeview_core::enums::WaveKind;
use quakeview_core::types::{RingSample, WaveVelocity};

/// Fit a propagation velocity to a set of (time, radius) ring samples.
///
/// Uses the earliest non-degenerate arrival: the sample with the smallest
/// `minutes` strictly greater than zero. Ties on arrival time resolve to
/// the smallest radius, which yields the slower (conservative) estimate
/// and keeps the result deterministic. Returns `None` for an empty set or
/// when every sample is degenerate; velocity absence is an expected
/// condition for sparse responses, not an error.
pub fn estimate_velocity(samples: &[RingSample]) -> Option<WaveVelocity> {
    let earliest = samples
        .iter()
        .filter(|s| s.minutes.is_finite() && s.minutes > 0.0)
        .filter(|s| s.radius_km.is_finite() && s.radius_km >= 0.0)
        .min_by(|a, b| {
            a.minutes
                .total_cmp(&b.minutes)
                .then(a.radius_km.total_cmp(&b.radius_km))
        })?;

    Some(WaveVelocity::new(
        earliest.radius_km / (earliest.minutes * 60.0),
    ))
}

/// Fitted velocity, or the documented default for the wave class when no
/// usable sample exists.
pub fn velocity_or_default(samples: &[RingSample], kind: WaveKind) -> WaveVelocity {
    estimate_velocity(samples).unwrap_or_else(|| kind.default_velocity())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples_absent() {
        assert_eq!(estimate_velocity(&[]), None);
    }

    #[test]
    fn test_zero_time_sample_excluded() {
        let samples = [RingSample::new(0.0, 100.0)];
        assert_eq!(estimate_velocity(&samples), None);
    }

    #[test]
    fn test_negative_time_sample_excluded() {
        let samples = [RingSample::new(-1.0, 100.0)];
        assert_eq!(estimate_velocity(&samples), None);
    }

    #[test]
    fn test_single_sample_velocity() {
        // 720 km in 2 minutes = 6 km/s.
        let samples = [RingSample::new(2.0, 720.0)];
        assert_eq!(estimate_velocity(&samples), Some(WaveVelocity::new(6.0)));
    }

    #[test]
    fn test_earliest_sample_wins() {
        let samples = [
            RingSample::new(4.0, 840.0),
            RingSample::new(2.0, 720.0),
            RingSample::new(8.0, 2880.0),
        ];
        assert_eq!(estimate_velocity(&samples), Some(WaveVelocity::new(6.0)));
    }

    #[test]
    fn test_tie_break_prefers_smaller_radius() {
        let samples = [
            RingSample::new(2.0, 900.0),
            RingSample::new(2.0, 720.0),
        ];
        assert_eq!(estimate_velocity(&samples), Some(WaveVelocity::new(6.0)));
    }

    #[test]
    fn test_non_finite_samples_ignored() {
        let samples = [
            RingSample::new(f64::NAN, 500.0),
            RingSample::new(2.0, f64::INFINITY),
            RingSample::new(2.0, 720.0),
        ];
        assert_eq!(estimate_velocity(&samples), Some(WaveVelocity::new(6.0)));
    }

    #[test]
    fn test_default_fallback_per_class() {
        assert_eq!(
            velocity_or_default(&[], WaveKind::P),
            WaveVelocity::new(6.0)
        );
        assert_eq!(
            velocity_or_default(&[], WaveKind::S),
            WaveVelocity::new(3.5)
        );
        // A usable sample beats the class default.
        assert_eq!(
            velocity_or_default(&[RingSample::new(2.0, 720.0)], WaveKind::S),
            WaveVelocity::new(6.0)
        );
    }
}
