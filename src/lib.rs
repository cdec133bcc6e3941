#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
//! Camera look input shaping for Bevy.
//!
//! Raw pointer deltas and analog stick positions are turned into yaw and pitch deltas:
//! stick input goes through a dead zone, a response curve and per-axis turn acceleration,
//! is integrated over the frame time and scaled by sensitivity,
//! while pointer input is only scaled.
//!
//! The shaping stages live in [`input_processing`] and can be used on their own.
//! [`LookInputPipeline`](pipeline::LookInputPipeline) composes them frame by frame,
//! and [`LookInputPlugin`](plugin::LookInputPlugin) runs the pipelines of every camera entity.
//!
//! ```rust
//! use bevy::prelude::*;
//! use camera_look_shaping::prelude::*;
//!
//! fn spawn_camera(mut commands: Commands) {
//!     commands.spawn(LookInputBundle::new(LookSettings {
//!         deadzone: StickDeadZone::new(0.1, 0.95),
//!         ..Default::default()
//!     }));
//! }
//!
//! App::new()
//!     .add_plugins(MinimalPlugins)
//!     .add_plugins(LookInputPlugin)
//!     .add_systems(Startup, spawn_camera)
//!     .update();
//! ```

use bevy::ecs::prelude::*;

use crate::pipeline::{LookAxes, LookInput, LookInputPipeline};
use crate::settings::LookSettings;

pub mod errors;
pub mod input_processing;
pub mod pipeline;
pub mod plugin;
pub mod settings;
pub mod systems;

/// Everything you need to get started
pub mod prelude {
    pub use crate::errors::LookSettingsError;
    pub use crate::input_processing::*;
    pub use crate::pipeline::{InputSource, LookAxes, LookDelta, LookInput, LookInputPipeline};
    pub use crate::plugin::{LookInputPlugin, LookInputSystem};
    pub use crate::settings::{AccelerationSettings, LookAxis, LookSettings, Sensitivity};

    pub use crate::LookInputBundle;
}

/// This [`Bundle`] gives an entity everything [`LookInputPlugin`](plugin::LookInputPlugin) needs
/// to drive its look axes.
#[derive(Bundle, Default)]
pub struct LookInputBundle {
    /// The [`LookSettings`] component, edit it to reconfigure the pipeline
    pub settings: LookSettings,
    /// The [`LookInputPipeline`] component
    pub pipeline: LookInputPipeline,
    /// The [`LookInput`] component, written by the host every frame
    pub input: LookInput,
    /// The [`LookAxes`] component, read by the camera
    pub axes: LookAxes,
}

impl LookInputBundle {
    /// Creates a [`LookInputBundle`] with the given settings and centered look axes.
    pub fn new(settings: LookSettings) -> Self {
        Self {
            settings,
            pipeline: LookInputPipeline::new(settings),
            ..Default::default()
        }
    }
}
