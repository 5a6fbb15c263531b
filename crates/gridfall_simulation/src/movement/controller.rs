//! Kinematic контроллер игрока
//!
//! Архитектура:
//! - Rapier KinematicCharacterController (скольжение вдоль коллизий)
//! - walk direction пересчитывается с нуля каждый tick из InputState
//!   и ориентации камеры — НИКОГДА не аккумулируется между тиками
//! - После physics step позиция персонажа копируется в CameraRig
//!
//! Веса осей асимметричны (0.6 forward vs 0.4 strafe) — осознанный
//! tunable, сохранён как именованные константы в config.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{CameraRig, CharacterMotion, Player, ShapeDesc, SurfaceColor};
use crate::config::{PlayerConfig, CHARACTER_GRAVITY};

/// Желаемое горизонтальное смещение за tick
///
/// forwardAxis = camera_forward * forward_weight,
/// lateralAxis = camera_left * lateral_weight.
/// Зажатые противоположные клавиши сокращаются ТОЧНО (векторное
/// сложение, без clamp) — ноль по соответствующей оси.
pub fn walk_direction(
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    camera_forward: Vec3,
    camera_left: Vec3,
    forward_weight: f32,
    lateral_weight: f32,
) -> Vec3 {
    let forward_axis = camera_forward * forward_weight;
    let lateral_axis = camera_left * lateral_weight;

    let mut walk = Vec3::ZERO;
    if left {
        walk += lateral_axis;
    }
    if right {
        walk -= lateral_axis;
    }
    if forward {
        walk += forward_axis;
    }
    if backward {
        walk -= forward_axis;
    }
    walk
}

/// Система вычисления и подачи walk direction в rapier
///
/// Работает в FixedUpdate ДО physics step (before SyncBackend).
/// Вектор подаётся КАЖДЫЙ tick, даже нулевой — именно это позволяет
/// rapier непрерывно разрешать скользящие коллизии.
///
/// Вертикаль: kinematic controller не применяет гравитацию сам,
/// копим vertical_velocity в CharacterMotion (сбрасывается на земле).
pub fn update_walk_direction(
    input: Res<crate::input::InputState>,
    rig: Res<CameraRig>,
    config: Res<PlayerConfig>,
    time: Res<Time>,
    mut query: Query<
        (
            &mut KinematicCharacterController,
            &mut CharacterMotion,
            Option<&KinematicCharacterControllerOutput>,
        ),
        With<Player>,
    >,
) {
    // Guard: нет player entity — precondition violation, не паникуем
    let Ok((mut controller, mut motion, output)) = query.single_mut() else {
        return;
    };

    let walk = walk_direction(
        input.forward,
        input.backward,
        input.left,
        input.right,
        rig.forward,
        rig.left,
        config.forward_weight,
        config.lateral_weight,
    );

    let delta = time.delta_secs();
    let grounded = output.map(|o| o.grounded).unwrap_or(false);
    if grounded {
        motion.vertical_velocity = 0.0;
    } else {
        motion.vertical_velocity += CHARACTER_GRAVITY * delta;
    }

    controller.translation = Some(walk + Vec3::Y * motion.vertical_velocity * delta);
}

/// Система синхронизации камеры с персонажем
///
/// Работает ПОСЛЕ physics step (after Writeback): читает результат
/// разрешения коллизий и копирует позицию в CameraRig. Ориентацию
/// камеры ядро не трогает (free-look в клиенте).
pub fn sync_camera_to_player(
    mut rig: ResMut<CameraRig>,
    query: Query<&Transform, With<Player>>,
) {
    let Ok(transform) = query.single() else {
        return;
    };
    rig.position = transform.translation;
}

/// Spawn helper для персонажа
///
/// Создаёт entity с полным набором компонентов:
/// - Transform (spawn position из config)
/// - Player + CharacterMotion
/// - Rapier: KinematicPositionBased + capsule + KinematicCharacterController
/// - ShapeDesc + SurfaceColor (визуальный дескриптор для клиента)
pub fn spawn_player(commands: &mut Commands, config: &PlayerConfig) -> Entity {
    commands
        .spawn((
            Transform::from_translation(Vec3::from(config.spawn_position)),
            Player,
            CharacterMotion::default(),
            // Rapier physics
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(config.capsule_half_height, config.capsule_radius),
            KinematicCharacterController::default(),
            // Визуальный дескриптор
            ShapeDesc::Capsule {
                half_height: config.capsule_half_height,
                radius: config.capsule_radius,
            },
            SurfaceColor::RED,
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FORWARD_WEIGHT, LATERAL_WEIGHT};

    const CAM_FORWARD: Vec3 = Vec3::NEG_Z;
    const CAM_LEFT: Vec3 = Vec3::NEG_X;

    fn walk(forward: bool, backward: bool, left: bool, right: bool) -> Vec3 {
        walk_direction(
            forward,
            backward,
            left,
            right,
            CAM_FORWARD,
            CAM_LEFT,
            FORWARD_WEIGHT,
            LATERAL_WEIGHT,
        )
    }

    #[test]
    fn test_no_keys_gives_exact_zero() {
        assert_eq!(walk(false, false, false, false), Vec3::ZERO);
    }

    #[test]
    fn test_forward_uses_forward_weight() {
        // forward = (0,0,-1) * 0.6 — ровно, без нормализации
        assert_eq!(walk(true, false, false, false), Vec3::new(0.0, 0.0, -0.6));
    }

    #[test]
    fn test_strafe_uses_lateral_weight() {
        assert_eq!(walk(false, false, true, false), Vec3::new(-0.4, 0.0, 0.0));
        assert_eq!(walk(false, false, false, true), Vec3::new(0.4, 0.0, 0.0));
    }

    #[test]
    fn test_opposite_keys_cancel_exactly() {
        // Векторное сокращение, не clamp: точный ноль по оси
        assert_eq!(walk(true, true, false, false), Vec3::ZERO);
        assert_eq!(walk(false, false, true, true), Vec3::ZERO);
        assert_eq!(walk(true, true, true, true), Vec3::ZERO);
    }

    #[test]
    fn test_diagonal_is_componentwise_sum() {
        let diagonal = walk(true, false, true, false);
        assert_eq!(diagonal, Vec3::new(-0.4, 0.0, -0.6));
    }

    #[test]
    fn test_magnitude_bounded_by_weight_sum() {
        // Неравенство треугольника над фиксированным базисом
        let bound = FORWARD_WEIGHT + LATERAL_WEIGHT + 1e-6;
        for mask in 0..16u8 {
            let walk = walk(
                mask & 1 != 0,
                mask & 2 != 0,
                mask & 4 != 0,
                mask & 8 != 0,
            );
            assert!(
                walk.length() <= bound,
                "mask {:04b}: |walk| = {} > {}",
                mask,
                walk.length(),
                bound
            );
        }
    }

    #[test]
    fn test_rotated_camera_basis() {
        // Камера повёрнута на 90° (forward = -X, left = +Z)
        let walk = walk_direction(
            true,
            false,
            false,
            false,
            Vec3::NEG_X,
            Vec3::Z,
            FORWARD_WEIGHT,
            LATERAL_WEIGHT,
        );
        assert_eq!(walk, Vec3::new(-0.6, 0.0, 0.0));
    }
}
