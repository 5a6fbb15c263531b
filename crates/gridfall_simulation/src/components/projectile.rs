//! Projectile component

use bevy::prelude::*;

/// Снаряд — dynamic sphere body, созданный ProjectileSpawner'ом
///
/// Начальная скорость выставляется ровно один раз при spawn;
/// дальше телом владеет rapier. Core снаряды не despawn'ит
/// (lifetime — забота внешней cleanup политики).
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    /// Скорость, присвоенная при spawn (camera_forward * muzzle_speed)
    pub muzzle_velocity: Vec3,
}
