//! Circular dead zone for absolute stick inputs

use std::hash::{Hash, Hasher};

use bevy::math::FloatOrd;
use bevy::prelude::{Reflect, Vec2};
use serde::{Deserialize, Serialize};

/// Stick magnitudes below this value are treated as hardware noise.
pub const NOISE_FLOOR: f32 = 1e-4;

/// Specifies a circular dead zone with an inner and an outer radius,
/// rescaling the magnitude of stick inputs in between into `[0.0, 1.0]`
/// while leaving the direction untouched.
///
/// - Magnitudes at or below `inner` are treated as zero, filtering out stick drift.
/// - Magnitudes at or above `outer` are treated as full deflection.
/// - If `outer <= inner`, any input outside the inner radius becomes a unit vector.
///
/// ```rust
/// use bevy::prelude::*;
/// use camera_look_shaping::prelude::*;
///
/// let deadzone = StickDeadZone::new(0.1, 0.9);
///
/// assert_eq!(deadzone.normalize(Vec2::new(0.05, 0.0)), Vec2::ZERO);
/// assert!(deadzone.normalize(Vec2::new(0.5, 0.0)).abs_diff_eq(Vec2::new(0.5, 0.0), 0.00001));
/// assert_eq!(deadzone.normalize(Vec2::new(0.0, -0.95)), Vec2::new(0.0, -1.0));
/// ```
#[doc(alias = "DeadZoneConfig")]
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct StickDeadZone {
    /// The radius below which inputs are ignored.
    pub inner: f32,

    /// The radius at which inputs reach their maximum magnitude.
    pub outer: f32,
}

impl StickDeadZone {
    /// A [`StickDeadZone`] with no inner dead zone and no outer dead zone.
    pub const ZERO: Self = Self {
        inner: 0.0,
        outer: 1.0,
    };

    /// Creates a [`StickDeadZone`] with the given radii.
    ///
    /// Out-of-range radii are accepted; see [`StickDeadZone::normalize`] for how they degrade.
    #[inline]
    pub const fn new(inner: f32, outer: f32) -> Self {
        Self { inner, outer }
    }

    /// Is this dead zone misconfigured, leaving no live zone between the two radii?
    #[must_use]
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.outer <= self.inner
    }

    /// Maps a raw stick `magnitude` to the normalized magnitude in `[0.0, 1.0]`.
    #[must_use]
    pub fn magnitude_scale(&self, magnitude: f32) -> f32 {
        if magnitude < NOISE_FLOOR || magnitude <= self.inner {
            return 0.0;
        }

        if self.is_degenerate() {
            return 1.0;
        }

        ((magnitude - self.inner) / (self.outer - self.inner)).clamp(0.0, 1.0)
    }

    /// Normalizes the raw stick vector `input_value` into the live zone.
    #[must_use]
    #[inline]
    pub fn normalize(&self, input_value: Vec2) -> Vec2 {
        let magnitude = input_value.length();
        let scale = self.magnitude_scale(magnitude);
        if scale == 0.0 {
            return Vec2::ZERO;
        }

        input_value / magnitude * scale
    }
}

impl Default for StickDeadZone {
    /// Creates a [`StickDeadZone`] that leaves the full range live.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Eq for StickDeadZone {}

impl Hash for StickDeadZone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        FloatOrd(self.inner).hash(state);
        FloatOrd(self.outer).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same_direction(a: Vec2, b: Vec2) {
        let delta = (a.normalize() - b.normalize()).abs();
        assert!(delta.x <= 0.00001 && delta.y <= 0.00001, "{a:?} vs {b:?}");
    }

    #[test]
    fn test_noise_floor_is_zero() {
        let deadzone = StickDeadZone::ZERO;
        assert_eq!(deadzone.normalize(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(deadzone.normalize(Vec2::new(0.00005, 0.00005)), Vec2::ZERO);
        assert_eq!(deadzone.normalize(Vec2::new(-0.00009, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn test_scaled_live_zone() {
        let deadzone = StickDeadZone::new(0.1, 0.9);
        let normalized = deadzone.normalize(Vec2::new(0.5, 0.0));
        assert!((normalized - Vec2::new(0.5, 0.0)).length() <= 0.00001);
    }

    #[test]
    fn test_sweep() {
        let deadzone = StickDeadZone::new(0.2, 0.8);

        for x in -300..300 {
            let x = x as f32 * 0.01;
            for y in -300..300 {
                let y = y as f32 * 0.01;
                let value = Vec2::new(x, y);
                let normalized = deadzone.normalize(value);
                let length = normalized.length();

                assert!((0.0..=1.00001).contains(&length));

                if value.length() <= 0.2 {
                    assert_eq!(normalized, Vec2::ZERO);
                } else {
                    assert_same_direction(normalized, value);
                }

                if value.length() >= 0.8 {
                    assert!((length - 1.0).abs() <= 0.00001);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_magnitude() {
        let deadzone = StickDeadZone::new(0.15, 0.95);

        let mut previous = 0.0;
        for magnitude in 0..=150 {
            let scale = deadzone.magnitude_scale(magnitude as f32 * 0.01);
            assert!(scale >= previous);
            assert!((0.0..=1.0).contains(&scale));
            previous = scale;
        }
    }

    #[test]
    fn test_degenerate_passes_direction_through() {
        let deadzone = StickDeadZone::new(0.5, 0.3);
        assert!(deadzone.is_degenerate());

        assert_eq!(deadzone.normalize(Vec2::new(0.4, 0.0)), Vec2::ZERO);
        assert_eq!(deadzone.normalize(Vec2::new(0.29, -0.39)), Vec2::ZERO);

        let value = Vec2::new(0.36, -0.48);
        let normalized = deadzone.normalize(value);
        assert!((normalized.length() - 1.0).abs() <= 0.00001);
        assert_same_direction(normalized, value);
    }
}
