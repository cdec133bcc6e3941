//! The configuration surface of camera look shaping
//!
//! [`LookSettings`] is plain data: it can be deserialized from any serde format,
//! edited through reflection, or built in code.
//! Changes are picked up between frames by [`LookInputPipeline::reconfigure`](crate::pipeline::LookInputPipeline::reconfigure).

use bevy::prelude::{Component, Reflect};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::errors::LookSettingsError;
use crate::input_processing::{ResponseCurve, StickDeadZone, TurnAcceleration};

/// One of the two camera look axes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum LookAxis {
    /// Yaw.
    #[display(fmt = "horizontal")]
    Horizontal,

    /// Pitch.
    #[display(fmt = "vertical")]
    Vertical,
}

/// Look sensitivities for each input source.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensitivity {
    /// Multiplier applied to pointer deltas on both axes.
    pub pointer: f32,

    /// Multiplier applied to integrated stick input on both axes.
    pub stick: f32,

    /// Extra multiplier applied to the vertical stick axis only.
    pub vertical_multiplier: f32,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            pointer: 0.2,
            stick: 1.0,
            vertical_multiplier: 1.0,
        }
    }
}

/// Turn acceleration parameters for both look axes.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelerationSettings {
    /// Whether stick input is accelerated at all.
    pub enabled: bool,

    /// The ramp of the horizontal axis.
    pub horizontal: TurnAcceleration,

    /// The ramp of the vertical axis.
    pub vertical: TurnAcceleration,
}

impl AccelerationSettings {
    /// The ramp parameters of the given `axis`.
    #[inline]
    pub fn axis(&self, axis: LookAxis) -> &TurnAcceleration {
        match axis {
            LookAxis::Horizontal => &self.horizontal,
            LookAxis::Vertical => &self.vertical,
        }
    }
}

impl Default for AccelerationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            horizontal: TurnAcceleration::default(),
            vertical: TurnAcceleration::default(),
        }
    }
}

/// Everything that tunes how raw look input turns into camera motion.
///
/// ```rust
/// use camera_look_shaping::prelude::*;
///
/// let settings = LookSettings {
///     deadzone: StickDeadZone::new(0.1, 0.95),
///     curve: ResponseCurve::dynamic(2.0, 0.6),
///     invert_y: true,
///     ..Default::default()
/// };
///
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct LookSettings {
    /// The dead zone applied to stick input.
    pub deadzone: StickDeadZone,

    /// Sensitivities for each input source.
    pub sensitivity: Sensitivity,

    /// The response curve applied to stick input after the dead zone.
    pub curve: ResponseCurve,

    /// Turn acceleration applied to stick input after the response curve.
    pub acceleration: AccelerationSettings,

    /// When set, pushing up raises the vertical look axis instead of lowering it.
    pub invert_y: bool,
}

impl LookSettings {
    /// Checks every value against its supported range, returning the first violation.
    pub fn validate(&self) -> Result<(), LookSettingsError> {
        let StickDeadZone { inner, outer } = self.deadzone;
        for value in [inner, outer] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LookSettingsError::DeadZoneOutOfRange { value });
            }
        }
        if outer <= inner {
            return Err(LookSettingsError::EmptyLiveZone { inner, outer });
        }

        let Sensitivity {
            pointer,
            stick,
            vertical_multiplier,
        } = self.sensitivity;
        for value in [pointer, stick, vertical_multiplier] {
            if !value.is_finite() {
                return Err(LookSettingsError::NonFiniteSensitivity { value });
            }
        }

        if !(1.0..=3.0).contains(&self.curve.exponent) {
            return Err(LookSettingsError::ExponentOutOfRange {
                value: self.curve.exponent,
            });
        }
        if !(0.0..=1.0).contains(&self.curve.dynamic_threshold) {
            return Err(LookSettingsError::DynamicThresholdOutOfRange {
                value: self.curve.dynamic_threshold,
            });
        }

        for axis in [LookAxis::Horizontal, LookAxis::Vertical] {
            validate_acceleration(axis, self.acceleration.axis(axis))?;
        }

        Ok(())
    }
}

fn validate_acceleration(
    axis: LookAxis,
    acceleration: &TurnAcceleration,
) -> Result<(), LookSettingsError> {
    let TurnAcceleration {
        stick_threshold,
        start_delay,
        ramp_up_time,
        max_multiplier,
    } = *acceleration;

    if !(0.0..=1.0).contains(&stick_threshold) {
        return Err(LookSettingsError::AccelerationThresholdOutOfRange {
            axis,
            value: stick_threshold,
        });
    }
    if start_delay.is_nan() || start_delay < 0.0 {
        return Err(LookSettingsError::NegativeStartDelay {
            axis,
            value: start_delay,
        });
    }
    if ramp_up_time.is_nan() || ramp_up_time <= 0.0 {
        return Err(LookSettingsError::NonPositiveRampUpTime {
            axis,
            value: ramp_up_time,
        });
    }
    if !(1.0..=3.0).contains(&max_multiplier) {
        return Err(LookSettingsError::MultiplierOutOfRange {
            axis,
            value: max_multiplier,
        });
    }

    Ok(())
}
