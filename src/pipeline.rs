//! Per-frame composition of the shaping stages into camera look deltas

use bevy::log::debug;
use bevy::prelude::{Component, Reflect, Vec2};
use serde::{Deserialize, Serialize};

use crate::input_processing::AccelerationState;
use crate::settings::{LookAxis, LookSettings};

/// Which input signal drives the camera this frame.
///
/// Deciding this is left to the host, which knows which devices were used last.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum InputSource {
    /// A relative signal, such as mouse motion, that already represents a per-frame delta.
    #[default]
    Pointer,

    /// An absolute signal, such as an analog stick, that represents a position in `[-1.0, 1.0]`.
    Stick,
}

/// The raw look signals supplied by the host for one frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Reflect)]
pub struct LookInput {
    /// The pointer motion since the previous frame.
    pub pointer_delta: Vec2,

    /// The stick position, before any dead zone.
    pub stick: Vec2,

    /// The signal to use this frame.
    pub source: InputSource,
}

impl LookInput {
    /// Creates a [`LookInput`] driven by the pointer.
    #[inline]
    pub const fn pointer(delta: Vec2) -> Self {
        Self {
            pointer_delta: delta,
            stick: Vec2::ZERO,
            source: InputSource::Pointer,
        }
    }

    /// Creates a [`LookInput`] driven by the stick.
    #[inline]
    pub const fn stick(position: Vec2) -> Self {
        Self {
            pointer_delta: Vec2::ZERO,
            stick: position,
            source: InputSource::Stick,
        }
    }
}

/// The amount to add to the camera look axes this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Reflect)]
pub struct LookDelta {
    /// Added to the yaw.
    pub horizontal: f32,

    /// Added to the pitch; already signed according to [`LookSettings::invert_y`].
    pub vertical: f32,
}

/// Turns raw look input into camera look deltas, one frame at a time.
///
/// Stick input passes through the [`StickDeadZone`](crate::input_processing::StickDeadZone),
/// the [`ResponseCurve`](crate::input_processing::ResponseCurve)
/// and a per-axis [`AccelerationState`] before being integrated over the frame time.
/// Pointer input is only scaled by its sensitivity.
///
/// Each camera needs its own pipeline, as the acceleration ramps carry state between frames.
///
/// ```rust
/// use bevy::prelude::*;
/// use camera_look_shaping::prelude::*;
///
/// let mut pipeline = LookInputPipeline::new(LookSettings::default());
/// let mut axes = LookAxes::UNBOUNDED;
///
/// // Mouse moved right and up
/// let delta = pipeline.step(&LookInput::pointer(Vec2::new(10.0, 5.0)), 0.016);
/// axes.apply(delta);
///
/// assert_eq!(axes.horizontal, 2.0);
/// assert_eq!(axes.vertical, -1.0);
/// ```
#[derive(Component, Debug, Default, Clone, PartialEq, Reflect)]
pub struct LookInputPipeline {
    settings: LookSettings,
    horizontal: AccelerationState,
    vertical: AccelerationState,
}

impl LookInputPipeline {
    /// Creates a [`LookInputPipeline`] with idle acceleration ramps.
    pub fn new(settings: LookSettings) -> Self {
        Self {
            settings,
            horizontal: AccelerationState::new(settings.acceleration.horizontal),
            vertical: AccelerationState::new(settings.acceleration.vertical),
        }
    }

    /// The settings currently in use.
    #[must_use]
    #[inline]
    pub fn settings(&self) -> &LookSettings {
        &self.settings
    }

    /// Replaces the settings between frames.
    ///
    /// Progress of the acceleration ramps is kept, the new ramp parameters apply from the next step.
    pub fn reconfigure(&mut self, settings: LookSettings) {
        debug!("Reconfiguring look input pipeline: {:?}", settings);

        self.horizontal.set_settings(settings.acceleration.horizontal);
        self.vertical.set_settings(settings.acceleration.vertical);
        if !settings.acceleration.enabled {
            self.horizontal.reset();
            self.vertical.reset();
        }
        self.settings = settings;
    }

    /// The acceleration ramp of the given `axis`.
    #[must_use]
    #[inline]
    pub fn acceleration(&self, axis: LookAxis) -> &AccelerationState {
        match axis {
            LookAxis::Horizontal => &self.horizontal,
            LookAxis::Vertical => &self.vertical,
        }
    }

    /// Applies the dead zone, the response curve and turn acceleration to a raw stick position.
    ///
    /// The result is not yet integrated over time nor scaled by sensitivity.
    #[must_use]
    pub fn shape_stick(&mut self, raw: Vec2, delta_seconds: f32) -> Vec2 {
        let normalized = self.settings.deadzone.normalize(raw);
        let curved = self.settings.curve.apply(normalized);

        if !self.settings.acceleration.enabled {
            return curved;
        }

        Vec2::new(
            self.horizontal.apply(raw.x, curved.x, delta_seconds),
            self.vertical.apply(raw.y, curved.y, delta_seconds),
        )
    }

    /// Computes the look delta for one frame lasting `delta_seconds`.
    #[must_use]
    pub fn step(&mut self, input: &LookInput, delta_seconds: f32) -> LookDelta {
        let sensitivity = self.settings.sensitivity;

        let delta = match input.source {
            InputSource::Pointer => input.pointer_delta * sensitivity.pointer,
            InputSource::Stick => {
                let delta_seconds = delta_seconds.max(0.0);
                let shaped = self.shape_stick(input.stick, delta_seconds);
                let scaled = shaped * delta_seconds * sensitivity.stick;
                Vec2::new(scaled.x, scaled.y * sensitivity.vertical_multiplier)
            }
        };

        LookDelta {
            horizontal: delta.x,
            vertical: if self.settings.invert_y {
                delta.y
            } else {
                -delta.y
            },
        }
    }
}

/// The persistent yaw and pitch of a camera, in degrees.
///
/// Pitch is clamped to `[min_vertical, max_vertical]`,
/// and yaw wraps into `[-180.0, 180.0)` when `wrap_horizontal` is set.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct LookAxes {
    /// The yaw.
    pub horizontal: f32,

    /// The pitch.
    pub vertical: f32,

    /// The lowest reachable pitch.
    pub min_vertical: f32,

    /// The highest reachable pitch.
    pub max_vertical: f32,

    /// Whether yaw wraps around a full turn.
    pub wrap_horizontal: bool,
}

impl LookAxes {
    /// [`LookAxes`] without any limit or wrapping.
    pub const UNBOUNDED: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
        min_vertical: f32::MIN,
        max_vertical: f32::MAX,
        wrap_horizontal: false,
    };

    /// Adds `delta` to both axes, then applies the pitch limits and yaw wrapping.
    ///
    /// Non-finite deltas, and yaw sums that would overflow, leave their axis unchanged.
    pub fn apply(&mut self, delta: LookDelta) {
        let horizontal = self.horizontal + delta.horizontal;
        if horizontal.is_finite() {
            self.horizontal = if self.wrap_horizontal {
                (horizontal + 180.0).rem_euclid(360.0) - 180.0
            } else {
                horizontal
            };
        }

        if delta.vertical.is_finite() {
            self.vertical = (self.vertical + delta.vertical)
                .min(self.max_vertical)
                .max(self.min_vertical);
        }
    }
}

impl Default for LookAxes {
    /// Creates [`LookAxes`] limiting pitch to `[-70.0, 70.0]` and wrapping yaw.
    fn default() -> Self {
        Self {
            min_vertical: -70.0,
            max_vertical: 70.0,
            wrap_horizontal: true,
            ..Self::UNBOUNDED
        }
    }
}
