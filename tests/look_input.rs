use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use camera_look_shaping::prelude::*;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LookInputPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            50,
        )));

    // The first update only starts the clock
    app.update();
    app
}

fn linear_settings() -> LookSettings {
    let mut settings = LookSettings {
        curve: ResponseCurve::LINEAR,
        ..Default::default()
    };
    settings.acceleration.enabled = false;
    settings
}

fn delta_seconds(app: &App) -> f32 {
    app.world().resource::<Time>().delta_seconds()
}

#[test]
fn pointer_moves_axes_regardless_of_frame_time() {
    let mut app = test_app();
    let camera = app
        .world_mut()
        .spawn(LookInputBundle {
            input: LookInput::pointer(Vec2::new(10.0, 5.0)),
            axes: LookAxes::UNBOUNDED,
            ..Default::default()
        })
        .id();

    app.update();

    let axes = app.world().get::<LookAxes>(camera).unwrap();
    assert_eq!(axes.horizontal, 2.0);
    assert_eq!(axes.vertical, -1.0);
}

#[test]
fn stick_is_integrated_over_frames() {
    let mut app = test_app();
    let mut settings = linear_settings();
    settings.sensitivity.stick = 90.0;

    let camera = app
        .world_mut()
        .spawn(LookInputBundle {
            input: LookInput::stick(Vec2::new(1.0, 0.0)),
            axes: LookAxes::UNBOUNDED,
            ..LookInputBundle::new(settings)
        })
        .id();

    let mut elapsed = 0.0;
    for _ in 0..4 {
        app.update();
        elapsed += delta_seconds(&app);
    }
    assert!(elapsed > 0.0);

    let axes = app.world().get::<LookAxes>(camera).unwrap();
    assert!((axes.horizontal - 90.0 * elapsed).abs() <= 0.001);
    assert_eq!(axes.vertical, 0.0);
}

#[test]
fn changed_settings_reach_the_pipeline() {
    let mut app = test_app();
    let camera = app
        .world_mut()
        .spawn(LookInputBundle {
            input: LookInput::stick(Vec2::new(0.0, 1.0)),
            axes: LookAxes::UNBOUNDED,
            ..LookInputBundle::new(linear_settings())
        })
        .id();

    app.update();
    let lowered = app.world().get::<LookAxes>(camera).unwrap().vertical;
    assert!(lowered < 0.0);

    app.world_mut()
        .get_mut::<LookSettings>(camera)
        .unwrap()
        .invert_y = true;
    app.update();

    let pipeline = app.world().get::<LookInputPipeline>(camera).unwrap();
    assert!(pipeline.settings().invert_y);

    // The second frame raised the pitch by as much as the first lowered it
    let vertical = app.world().get::<LookAxes>(camera).unwrap().vertical;
    assert!(vertical.abs() <= 0.0001);
}

#[test]
fn cameras_accelerate_independently() {
    let mut app = test_app();
    let held = app
        .world_mut()
        .spawn(LookInputBundle {
            input: LookInput::stick(Vec2::new(1.0, 0.0)),
            ..Default::default()
        })
        .id();
    let idle = app
        .world_mut()
        .spawn(LookInputBundle {
            input: LookInput::stick(Vec2::new(0.2, 0.0)),
            ..Default::default()
        })
        .id();

    let mut elapsed = 0.0;
    for _ in 0..10 {
        app.update();
        elapsed += delta_seconds(&app);
    }

    let held = app.world().get::<LookInputPipeline>(held).unwrap();
    let held = held.acceleration(LookAxis::Horizontal);
    assert!((held.timer() - elapsed).abs() <= 0.0001);
    assert!(held.current_multiplier() > 1.0);

    let idle = app.world().get::<LookInputPipeline>(idle).unwrap();
    let idle = idle.acceleration(LookAxis::Horizontal);
    assert_eq!(idle.timer(), 0.0);
    assert_eq!(idle.current_multiplier(), 1.0);
}
