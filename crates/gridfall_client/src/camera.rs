//! Free-look камера
//!
//! Ориентация камеры принадлежит клиенту: mouse motion крутит yaw/pitch.
//! Позицию камеры пишет симуляция (CameraRig.position следует за
//! персонажем после physics step) — здесь её только читаем.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use gridfall_simulation::CameraRig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (free_look_controls, write_rig_orientation, update_render_camera).chain(),
        );
    }
}

#[derive(Component)]
pub struct FreeLookCamera {
    pub yaw: f32,   // Horizontal rotation (radians)
    pub pitch: f32, // Vertical rotation (radians)
    pub sensitivity: f32,
}

impl Default for FreeLookCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.003,
        }
    }
}

/// Mouse motion → yaw/pitch
fn free_look_controls(
    mut query: Query<&mut FreeLookCamera>,
    mut mouse_motion: EventReader<MouseMotion>,
) {
    let Ok(mut camera) = query.single_mut() else {
        return;
    };

    for motion in mouse_motion.read() {
        camera.yaw -= motion.delta.x * camera.sensitivity;
        camera.pitch -= motion.delta.y * camera.sensitivity;

        // Clamp pitch to avoid gimbal lock
        camera.pitch = camera.pitch.clamp(
            -std::f32::consts::FRAC_PI_2 + 0.1,
            std::f32::consts::FRAC_PI_2 - 0.1,
        );
    }
}

/// Ориентация → CameraRig (forward/left читает контроллер симуляции)
fn write_rig_orientation(query: Query<&FreeLookCamera>, mut rig: ResMut<CameraRig>) {
    let Ok(camera) = query.single() else {
        return;
    };

    let oriented = CameraRig::from_angles(rig.position, camera.yaw, camera.pitch);
    rig.forward = oriented.forward;
    rig.left = oriented.left;
}

/// CameraRig → render камера (позиция из симуляции, углы из free-look)
fn update_render_camera(
    rig: Res<CameraRig>,
    mut query: Query<(&FreeLookCamera, &mut Transform), With<Camera3d>>,
) {
    let Ok((camera, mut transform)) = query.single_mut() else {
        return;
    };

    transform.translation = rig.position;
    transform.rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
}
