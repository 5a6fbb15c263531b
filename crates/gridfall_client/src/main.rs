use bevy::prelude::*;
use gridfall_simulation::SimulationPlugin;

mod camera;
mod input;
mod rendering;

use camera::CameraPlugin;
use input::InputBridgePlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "GRIDFALL - Arena Demo".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic: controller, picking, shooting, arena)
        .add_plugins(SimulationPlugin::default())
        // Keyboard/mouse → InputEvent bridge
        .add_plugins(InputBridgePlugin)
        // Free-look camera (orientation ТОЛЬКО здесь, позицию пишет симуляция)
        .add_plugins(CameraPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Setup scene
        .add_systems(Startup, setup_scene)
        .run();
}

/// Свет + render камера (вся геометрия приходит из симуляции
/// через ShapeDesc дескрипторы)
fn setup_scene(mut commands: Commands) {
    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Камера: позиция придёт из CameraRig после первого tick'а
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 3.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
        camera::FreeLookCamera::default(),
    ));
}
