//! Response curves remapping the magnitude of dual-axis inputs

use std::hash::{Hash, Hasher};

use bevy::math::{FloatExt, FloatOrd};
use bevy::prelude::{Reflect, Vec2};
use serde::{Deserialize, Serialize};

/// The shape of a [`ResponseCurve`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ResponseCurveKind {
    /// Raises the magnitude to the curve exponent,
    /// trading speed at small deflections for precision.
    #[default]
    Standard,

    /// Leaves the magnitude untouched.
    Linear,

    /// Follows [`ResponseCurveKind::Standard`] below the dynamic threshold,
    /// then blends towards [`ResponseCurveKind::Linear`] as the stick approaches full deflection.
    Dynamic,
}

/// Remaps the magnitude of dual-axis inputs while preserving their direction.
///
/// ```rust
/// use bevy::prelude::*;
/// use camera_look_shaping::prelude::*;
///
/// let curve = ResponseCurve::standard(2.0);
/// assert!(curve.apply(Vec2::new(0.0, 0.5)).abs_diff_eq(Vec2::new(0.0, 0.25), 0.00001));
///
/// let value = Vec2::new(0.3, 0.4);
/// assert!(ResponseCurve::LINEAR.apply(value).abs_diff_eq(value, 0.00001));
/// ```
#[doc(alias = "CurveConfig")]
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct ResponseCurve {
    /// The shape of the curve.
    pub kind: ResponseCurveKind,

    /// The exponent used by the standard and dynamic curves, expected in `[1.0, 3.0]`.
    pub exponent: f32,

    /// The magnitude at which the dynamic curve starts blending into a linear response,
    /// expected in `[0.0, 1.0]`.
    pub dynamic_threshold: f32,
}

impl ResponseCurve {
    /// A 1:1 [`ResponseCurve`].
    pub const LINEAR: Self = Self {
        kind: ResponseCurveKind::Linear,
        exponent: 1.0,
        dynamic_threshold: 0.0,
    };

    /// Creates a [`ResponseCurve`] of the given `kind`.
    #[inline]
    pub const fn new(kind: ResponseCurveKind, exponent: f32, dynamic_threshold: f32) -> Self {
        Self {
            kind,
            exponent,
            dynamic_threshold,
        }
    }

    /// Creates a [`ResponseCurveKind::Standard`] curve with the given `exponent`.
    #[inline]
    pub const fn standard(exponent: f32) -> Self {
        Self::new(ResponseCurveKind::Standard, exponent, 0.5)
    }

    /// Creates a [`ResponseCurveKind::Dynamic`] curve.
    #[inline]
    pub const fn dynamic(exponent: f32, dynamic_threshold: f32) -> Self {
        Self::new(ResponseCurveKind::Dynamic, exponent, dynamic_threshold)
    }

    /// Raises `magnitude` to the exponent, saturating at [`f32::MAX`]
    /// where a negative exponent would overflow.
    #[inline]
    fn standard_magnitude(&self, magnitude: f32) -> f32 {
        magnitude.powf(self.exponent).min(f32::MAX)
    }

    /// Remaps a non-negative `magnitude` through the curve.
    #[must_use]
    pub fn curve_magnitude(&self, magnitude: f32) -> f32 {
        match self.kind {
            ResponseCurveKind::Linear => magnitude,
            ResponseCurveKind::Standard => self.standard_magnitude(magnitude),
            ResponseCurveKind::Dynamic => {
                let standard = self.standard_magnitude(magnitude);
                if magnitude < self.dynamic_threshold {
                    return standard;
                }

                // A threshold at or above full deflection leaves no room to blend.
                let t = if self.dynamic_threshold >= 1.0 {
                    1.0
                } else {
                    f32::inverse_lerp(self.dynamic_threshold, 1.0, magnitude).clamp(0.0, 1.0)
                };
                standard.lerp(magnitude, t)
            }
        }
    }

    /// Remaps the magnitude of `input_value`, keeping its direction.
    #[must_use]
    #[inline]
    pub fn apply(&self, input_value: Vec2) -> Vec2 {
        let magnitude = input_value.length();
        if magnitude <= 0.0 {
            return Vec2::ZERO;
        }

        input_value / magnitude * self.curve_magnitude(magnitude)
    }
}

impl Default for ResponseCurve {
    /// Creates a quadratic [`ResponseCurveKind::Standard`] curve.
    #[inline]
    fn default() -> Self {
        Self::standard(2.0)
    }
}

impl Eq for ResponseCurve {}

impl Hash for ResponseCurve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        FloatOrd(self.exponent).hash(state);
        FloatOrd(self.dynamic_threshold).hash(state);
    }
}
