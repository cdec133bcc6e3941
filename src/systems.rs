//! The systems that power the [`LookInputPlugin`](crate::plugin::LookInputPlugin).

use bevy::ecs::prelude::*;
use bevy::log::warn;
use bevy::time::Time;

use crate::pipeline::{LookAxes, LookInput, LookInputPipeline};
use crate::settings::LookSettings;

/// Hands changed [`LookSettings`] to the pipeline of the same entity.
///
/// Settings that fail [`LookSettings::validate`] are still applied, as the pipeline tolerates them.
pub fn reload_look_settings(
    mut query: Query<(Entity, &LookSettings, &mut LookInputPipeline), Changed<LookSettings>>,
) {
    for (entity, settings, mut pipeline) in query.iter_mut() {
        if pipeline.settings() == settings {
            continue;
        }

        if let Err(error) = settings.validate() {
            warn!("Look settings of {:?} are out of range: {}", entity, error);
        }

        pipeline.reconfigure(*settings);
    }
}

/// Steps each [`LookInputPipeline`] with the [`LookInput`] of its entity,
/// accumulating the result into its [`LookAxes`].
pub fn update_look_axes(
    time: Res<Time>,
    mut query: Query<(&LookInput, &mut LookInputPipeline, &mut LookAxes)>,
) {
    let delta_seconds = time.delta_seconds();

    for (input, mut pipeline, mut axes) in query.iter_mut() {
        let delta = pipeline.step(input, delta_seconds);
        axes.apply(delta);
    }
}
