//! Processors for look input values
//!
//! Stick input is refined in three stages before it reaches the camera:
//!
//! ## Dead Zone
//!
//! [`StickDeadZone`] ignores stick positions within an inner radius,
//! treats positions beyond an outer radius as full deflection,
//! and scales the magnitude of positions in between linearly into `[0.0, 1.0]`.
//!
//! ## Response Curve
//!
//! [`ResponseCurve`] remaps the magnitude of the normalized input
//! to tune how sensitive the stick feels at small versus large deflections.
//! See [`ResponseCurveKind`] for the available shapes.
//!
//! ## Turn Acceleration
//!
//! [`AccelerationState`] raises the sensitivity of a single axis
//! the longer it is held near full deflection, as described by its [`TurnAcceleration`].
//! It carries state between frames, so each axis of each camera owns one.
//!
//! Every stage keeps the direction of the input: only magnitudes change.

pub use self::acceleration::*;
pub use self::curve::*;
pub use self::deadzone::*;

mod acceleration;
mod curve;
mod deadzone;
