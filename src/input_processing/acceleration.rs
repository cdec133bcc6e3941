//! Time-based turn acceleration for single look axes

use std::hash::{Hash, Hasher};

use bevy::math::{FloatExt, FloatOrd};
use bevy::prelude::Reflect;
use serde::{Deserialize, Serialize};

/// Parameters of the turn acceleration ramp for one look axis.
///
/// Holding the axis at or beyond `stick_threshold` for longer than `start_delay` seconds
/// raises its sensitivity multiplier from `1.0` to `max_multiplier` over `ramp_up_time` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct TurnAcceleration {
    /// The raw deflection at which the axis counts as held, expected in `[0.0, 1.0]`.
    pub stick_threshold: f32,

    /// Seconds the axis must be held before the ramp starts.
    pub start_delay: f32,

    /// Seconds the ramp takes to reach `max_multiplier`.
    pub ramp_up_time: f32,

    /// The multiplier at the top of the ramp, expected in `[1.0, 3.0]`.
    pub max_multiplier: f32,
}

impl TurnAcceleration {
    /// Creates a [`TurnAcceleration`] with the given parameters.
    #[inline]
    pub const fn new(
        stick_threshold: f32,
        start_delay: f32,
        ramp_up_time: f32,
        max_multiplier: f32,
    ) -> Self {
        Self {
            stick_threshold,
            start_delay,
            ramp_up_time,
            max_multiplier,
        }
    }

    /// The multiplier reached after the axis has been held for `held_for` seconds.
    ///
    /// Never less than `1.0`, never more than `max_multiplier` (when that is at least `1.0`).
    #[must_use]
    pub fn multiplier_after(&self, held_for: f32) -> f32 {
        if held_for <= self.start_delay {
            return 1.0;
        }

        let t = if self.ramp_up_time <= 0.0 {
            1.0
        } else {
            ((held_for - self.start_delay) / self.ramp_up_time).clamp(0.0, 1.0)
        };
        1.0_f32.lerp(self.max_multiplier.max(1.0), t)
    }
}

impl Default for TurnAcceleration {
    #[inline]
    fn default() -> Self {
        Self::new(0.9, 0.2, 0.3, 2.0)
    }
}

impl Eq for TurnAcceleration {}

impl Hash for TurnAcceleration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        FloatOrd(self.stick_threshold).hash(state);
        FloatOrd(self.start_delay).hash(state);
        FloatOrd(self.ramp_up_time).hash(state);
        FloatOrd(self.max_multiplier).hash(state);
    }
}

/// The turn acceleration ramp of a single look axis, along with its progress.
///
/// Each axis owns its own [`AccelerationState`]; the ramp builds gradually while the axis is held
/// and drops back to `1.0` on the first frame it is released.
///
/// ```rust
/// use camera_look_shaping::prelude::*;
///
/// let mut state = AccelerationState::new(TurnAcceleration::new(0.9, 0.2, 0.3, 2.0));
///
/// assert_eq!(state.apply(1.0, 0.5, 0.2), 0.5);
/// assert!((state.apply(1.0, 0.5, 0.15) - 0.75).abs() <= 0.0001);
///
/// // Released for a single frame
/// assert_eq!(state.apply(0.2, 0.5, 0.016), 0.5);
/// assert_eq!(state.timer(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
#[must_use]
pub struct AccelerationState {
    settings: TurnAcceleration,
    timer: f32,
    current_multiplier: f32,
}

impl AccelerationState {
    /// Creates an idle [`AccelerationState`] driven by `settings`.
    #[inline]
    pub const fn new(settings: TurnAcceleration) -> Self {
        Self {
            settings,
            timer: 0.0,
            current_multiplier: 1.0,
        }
    }

    /// The parameters of the ramp.
    #[inline]
    pub fn settings(&self) -> &TurnAcceleration {
        &self.settings
    }

    /// Replaces the parameters of the ramp, keeping its progress.
    #[inline]
    pub fn set_settings(&mut self, settings: TurnAcceleration) {
        self.settings = settings;
    }

    /// Seconds the axis has been held beyond the threshold.
    #[must_use]
    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// The multiplier computed by the latest [`AccelerationState::apply`].
    #[must_use]
    #[inline]
    pub fn current_multiplier(&self) -> f32 {
        self.current_multiplier
    }

    /// Returns the ramp to its idle state.
    #[inline]
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.current_multiplier = 1.0;
    }

    /// Advances the ramp by `delta_seconds` and scales `shaped_value` by the resulting multiplier.
    ///
    /// `raw_value` is the axis deflection before any shaping, used to decide whether the axis is held.
    /// Negative `delta_seconds` is treated as zero.
    #[must_use]
    pub fn apply(&mut self, raw_value: f32, shaped_value: f32, delta_seconds: f32) -> f32 {
        if raw_value.abs() >= self.settings.stick_threshold {
            self.timer += delta_seconds.max(0.0);
            self.current_multiplier = self.settings.multiplier_after(self.timer);
        } else {
            self.reset();
        }

        shaped_value * self.current_multiplier
    }
}

impl Default for AccelerationState {
    #[inline]
    fn default() -> Self {
        Self::new(TurnAcceleration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AccelerationState {
        AccelerationState::new(TurnAcceleration::new(0.9, 0.2, 0.3, 2.0))
    }

    #[test]
    fn test_within_start_delay() {
        let mut state = state();
        assert_eq!(state.apply(1.0, 1.0, 0.2), 1.0);
        assert_eq!(state.current_multiplier(), 1.0);
        assert_eq!(state.timer(), 0.2);
    }

    #[test]
    fn test_ramp_midpoint_and_top() {
        let mut state = state();
        let _ = state.apply(1.0, 1.0, 0.35);
        assert!((state.current_multiplier() - 1.5).abs() <= 0.0001);

        let _ = state.apply(1.0, 1.0, 0.15);
        assert!((state.current_multiplier() - 2.0).abs() <= 0.0001);

        let _ = state.apply(1.0, 1.0, 10.0);
        assert_eq!(state.current_multiplier(), 2.0);
    }

    #[test]
    fn test_held_full_ramp_in_frames() {
        let mut state = state();
        let mut previous = 1.0;
        for _ in 0..60 {
            let value = state.apply(-1.0, -0.5, 1.0 / 60.0);
            let multiplier = state.current_multiplier();

            assert!(multiplier >= previous);
            assert!((1.0..=2.0).contains(&multiplier));
            assert_eq!(value, -0.5 * multiplier);
            previous = multiplier;
        }

        assert!((state.current_multiplier() - 2.0).abs() <= 0.0001);
    }

    #[test]
    fn test_instant_reset() {
        let mut state = state();
        let _ = state.apply(0.95, 1.0, 0.4);
        assert!(state.current_multiplier() > 1.0);

        assert_eq!(state.apply(0.5, 0.3, 0.016), 0.3);
        assert_eq!(state.timer(), 0.0);
        assert_eq!(state.current_multiplier(), 1.0);
    }

    #[test]
    fn test_stale_delta_stalls() {
        let mut state = state();
        let _ = state.apply(1.0, 1.0, 0.3);
        let multiplier = state.current_multiplier();

        let _ = state.apply(1.0, 1.0, 0.0);
        assert_eq!(state.current_multiplier(), multiplier);

        let _ = state.apply(1.0, 1.0, -5.0);
        assert_eq!(state.current_multiplier(), multiplier);
        assert!(state.timer() >= 0.0);
    }

    #[test]
    fn test_degenerate_parameters() {
        let instant = TurnAcceleration::new(0.9, 0.0, 0.0, 3.0);
        assert_eq!(instant.multiplier_after(0.01), 3.0);

        let shrinking = TurnAcceleration::new(0.9, 0.0, 0.5, 0.5);
        assert_eq!(shrinking.multiplier_after(1.0), 1.0);
    }

    #[test]
    fn test_set_settings_keeps_progress() {
        let mut state = state();
        let _ = state.apply(1.0, 1.0, 0.35);
        state.set_settings(TurnAcceleration::new(0.9, 0.2, 0.3, 3.0));
        assert!((state.timer() - 0.35).abs() <= 0.00001);

        let _ = state.apply(1.0, 1.0, 0.0);
        assert!((state.current_multiplier() - 2.0).abs() <= 0.0001);
    }
}
