//! Errors that may occur when validating look settings

use derive_more::{Display, Error};

use crate::settings::LookAxis;

/// A [`LookSettings`](crate::settings::LookSettings) value lies outside its supported range
///
/// The pipeline tolerates every finite value, so these errors are advisory:
/// configuration loaders should surface them, and may choose to keep the previous settings.
#[derive(Debug, Clone, Copy, Error, Display, PartialEq)]
pub enum LookSettingsError {
    /// A dead zone radius lies outside `[0.0, 1.0]`.
    #[display(fmt = "dead zone radius {} is outside [0, 1]", value)]
    DeadZoneOutOfRange {
        /// The offending radius.
        value: f32,
    },

    /// The outer dead zone does not exceed the inner one, leaving no live zone.
    #[display(fmt = "outer dead zone {} does not exceed inner dead zone {}", outer, inner)]
    EmptyLiveZone {
        /// The inner radius.
        inner: f32,
        /// The outer radius.
        outer: f32,
    },

    /// The response curve exponent lies outside `[1.0, 3.0]`.
    #[display(fmt = "response curve exponent {} is outside [1, 3]", value)]
    ExponentOutOfRange {
        /// The offending exponent.
        value: f32,
    },

    /// The dynamic curve threshold lies outside `[0.0, 1.0]`.
    #[display(fmt = "dynamic curve threshold {} is outside [0, 1]", value)]
    DynamicThresholdOutOfRange {
        /// The offending threshold.
        value: f32,
    },

    /// A sensitivity is not a finite number.
    #[display(fmt = "sensitivity {} is not finite", value)]
    NonFiniteSensitivity {
        /// The offending sensitivity.
        value: f32,
    },

    /// A turn acceleration stick threshold lies outside `[0.0, 1.0]`.
    #[display(fmt = "{} turn acceleration threshold {} is outside [0, 1]", axis, value)]
    AccelerationThresholdOutOfRange {
        /// The axis being configured.
        axis: LookAxis,
        /// The offending threshold.
        value: f32,
    },

    /// A turn acceleration start delay is negative.
    #[display(fmt = "{} turn acceleration start delay {} is negative", axis, value)]
    NegativeStartDelay {
        /// The axis being configured.
        axis: LookAxis,
        /// The offending delay.
        value: f32,
    },

    /// A turn acceleration ramp time is not positive.
    #[display(fmt = "{} turn acceleration ramp time {} is not positive", axis, value)]
    NonPositiveRampUpTime {
        /// The axis being configured.
        axis: LookAxis,
        /// The offending ramp time.
        value: f32,
    },

    /// A turn acceleration multiplier lies outside `[1.0, 3.0]`.
    #[display(fmt = "{} turn acceleration multiplier {} is outside [1, 3]", axis, value)]
    MultiplierOutOfRange {
        /// The axis being configured.
        axis: LookAxis,
        /// The offending multiplier.
        value: f32,
    },
}
