//! Contains the main plugin exported by this crate.

use bevy::app::{App, Plugin, Update};
use bevy::ecs::prelude::*;

use crate::input_processing::{ResponseCurve, ResponseCurveKind, StickDeadZone, TurnAcceleration};
use crate::pipeline::{InputSource, LookAxes, LookInput, LookInputPipeline};
use crate::settings::{AccelerationSettings, LookSettings, Sensitivity};

/// A [`Plugin`] that turns the [`LookInput`] of each camera entity into motion of its [`LookAxes`].
///
/// Spawn a [`LookInputBundle`](crate::LookInputBundle) on every camera that should be driven,
/// and write its [`LookInput`] each frame before [`LookInputSystem::Reload`] runs.
/// Choosing the active [`InputSource`] is up to you.
///
/// ## Systems
///
/// Both systems run during [`Update`], in this order:
///
/// - [`reload_look_settings`](crate::systems::reload_look_settings), which reconfigures pipelines whose [`LookSettings`] changed
///     - labeled [`LookInputSystem::Reload`]
/// - [`update_look_axes`](crate::systems::update_look_axes), which steps every pipeline and accumulates into [`LookAxes`]
///     - labeled [`LookInputSystem::Apply`]
#[derive(Debug, Default)]
pub struct LookInputPlugin;

impl Plugin for LookInputPlugin {
    fn build(&self, app: &mut App) {
        use crate::systems::*;

        app.configure_sets(
            Update,
            LookInputSystem::Reload.before(LookInputSystem::Apply),
        )
        .add_systems(
            Update,
            (
                reload_look_settings.in_set(LookInputSystem::Reload),
                update_look_axes.in_set(LookInputSystem::Apply),
            ),
        );

        app.register_type::<LookSettings>()
            .register_type::<Sensitivity>()
            .register_type::<AccelerationSettings>()
            .register_type::<StickDeadZone>()
            .register_type::<ResponseCurve>()
            .register_type::<ResponseCurveKind>()
            .register_type::<TurnAcceleration>()
            .register_type::<InputSource>()
            .register_type::<LookInput>()
            .register_type::<LookInputPipeline>()
            .register_type::<LookAxes>();
    }
}

/// [`SystemSet`]s for the systems added by [`LookInputPlugin`].
#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookInputSystem {
    /// Applies changed [`LookSettings`] to their pipelines
    Reload,
    /// Steps the pipelines and moves the [`LookAxes`]
    Apply,
}
