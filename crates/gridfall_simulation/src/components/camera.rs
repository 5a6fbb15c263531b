//! Camera rig resource
//!
//! Ядро не владеет ориентацией камеры (free-look живёт в клиенте).
//! Ядро читает position/forward/left каждый tick и пишет position
//! обратно после physics step (камера следует за персонажем).

use bevy::prelude::*;

/// Позиция + ориентация камеры, общая точка между клиентом и симуляцией
///
/// Контракт:
/// - Клиент пишет forward/left каждый frame (mouse look)
/// - Симуляция пишет position после physics step (sync_camera_to_player)
/// - forward/left — единичные векторы, forward НЕ обязан быть горизонтальным
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraRig {
    pub position: Vec3,
    pub forward: Vec3,
    pub left: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        // Стартовый ракурс: чуть позади арены, смотрим вдоль -Z
        Self {
            position: Vec3::new(0.0, 3.0, 15.0),
            forward: Vec3::NEG_Z,
            left: Vec3::NEG_X,
        }
    }
}

impl CameraRig {
    /// Rig из yaw/pitch (радианы), как его считает клиентский free-look
    ///
    /// Bevy конвенция: forward = -Z, left = -X при нулевых углах.
    pub fn from_angles(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
        Self {
            position,
            forward: rotation * Vec3::NEG_Z,
            left: rotation * Vec3::NEG_X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rig_axes_are_orthonormal() {
        let rig = CameraRig::default();
        assert!((rig.forward.length() - 1.0).abs() < 1e-6);
        assert!((rig.left.length() - 1.0).abs() < 1e-6);
        assert!(rig.forward.dot(rig.left).abs() < 1e-6);
    }

    #[test]
    fn test_from_angles_zero_matches_default_axes() {
        let rig = CameraRig::from_angles(Vec3::ZERO, 0.0, 0.0);
        assert!((rig.forward - Vec3::NEG_Z).length() < 1e-6);
        assert!((rig.left - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_from_angles_yaw_quarter_turn() {
        // yaw = 90° против часовой: forward -Z → -X
        let rig = CameraRig::from_angles(Vec3::ZERO, std::f32::consts::FRAC_PI_2, 0.0);
        assert!((rig.forward - Vec3::NEG_X).length() < 1e-5);
        assert!((rig.left - Vec3::Z).length() < 1e-5);
    }
}
