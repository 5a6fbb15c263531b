//! Projectile spawner — выстрел на fire edge
//!
//! Fire латчится на release (debounce-on-release): зажатая кнопка не
//! даёт потока снарядов, один release — ровно один spawn.
//!
//! Снаряд — dynamic sphere в позиции камеры, linvel вдоль camera
//! forward * MUZZLE_SPEED. Фильтрации коллизий против стрелявшего
//! НЕТ: снаряд рождается внутри капсулы и выталкивается наружу.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{CameraRig, Projectile, ShapeDesc, SurfaceColor};
use crate::config::PlayerConfig;

/// Event: снаряд создан и передан физическому миру
///
/// # Архитектура
/// - Emit: spawn_projectile_on_fire
/// - Consume: клиентский rendering sync (attach mesh), тесты
#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectileSpawned {
    pub entity: Entity,
}

/// Начальная скорость снаряда
///
/// camera_forward * muzzle_speed, покомпонентно точно:
/// forward (0,0,-1) при muzzle_speed 25 даёт ровно (0,0,-25).
pub fn muzzle_velocity(camera_forward: Vec3, muzzle_speed: f32) -> Vec3 {
    camera_forward * muzzle_speed
}

/// Система спавна снаряда на fire edge
///
/// Работает после physics step; владение телом переходит rapier
/// сразу при spawn. Despawn политики в ядре нет.
pub fn spawn_projectile_on_fire(
    mut commands: Commands,
    input: Res<crate::input::InputState>,
    rig: Res<CameraRig>,
    config: Res<PlayerConfig>,
    mut spawned_events: EventWriter<ProjectileSpawned>,
) {
    if !input.fire {
        return;
    }

    let velocity = muzzle_velocity(rig.forward, config.muzzle_speed);

    let entity = commands
        .spawn((
            Transform::from_translation(rig.position),
            Projectile {
                muzzle_velocity: velocity,
            },
            // Rapier physics: dynamic sphere, фиксированные масса и радиус
            RigidBody::Dynamic,
            Collider::ball(config.projectile_radius),
            ColliderMassProperties::Mass(config.projectile_mass),
            Velocity::linear(velocity),
            // Визуальный дескриптор
            ShapeDesc::Ball {
                radius: config.projectile_radius,
            },
            SurfaceColor::YELLOW,
        ))
        .id();

    spawned_events.write(ProjectileSpawned { entity });

    crate::logger::log(&format!(
        "Projectile {:?} spawned, velocity {:?}",
        entity, velocity
    ));
}

/// Plugin shooting подсистемы
pub struct ShootingPlugin;

impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ProjectileSpawned>();
    }
}
