//! Конфигурация симуляции (tunables)
//!
//! Все скорости/размеры — именованные константы, собранные в PlayerConfig.
//! Валидация fatal при старте: контроллер не должен запускаться
//! с несогласованным телом (нулевая скорость, вырожденная капсула).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Вес движения вперёд/назад (метры за tick при зажатой клавише)
///
/// НЕ равен LATERAL_WEIGHT — асимметрия осознанная (tunable, не баг).
pub const FORWARD_WEIGHT: f32 = 0.6;

/// Вес бокового движения (strafe)
pub const LATERAL_WEIGHT: f32 = 0.4;

/// Начальная скорость снаряда вдоль направления камеры (m/s)
pub const MUZZLE_SPEED: f32 = 25.0;

/// Радиус снаряда (m)
pub const PROJECTILE_RADIUS: f32 = 0.2;

/// Масса снаряда (kg)
pub const PROJECTILE_MASS: f32 = 1.0;

/// Радиус капсулы игрока (m)
pub const CAPSULE_RADIUS: f32 = 1.5;

/// Полувысота цилиндрической части капсулы игрока (m)
pub const CAPSULE_HALF_HEIGHT: f32 = 3.0;

/// Максимальная дистанция pick raycast (m)
pub const PICK_MAX_DISTANCE: f32 = 100.0;

/// Гравитация для kinematic персонажа (m/s²)
pub const CHARACTER_GRAVITY: f32 = -9.81;

/// Ошибки конфигурации — fatal на старте, recovery нет
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("movement weight must be positive: forward={forward}, lateral={lateral}")]
    InvalidMovementWeights { forward: f32, lateral: f32 },

    #[error("capsule dimensions must be positive: radius={radius}, half_height={half_height}")]
    InvalidCapsule { radius: f32, half_height: f32 },

    #[error("muzzle speed must be positive, got {0}")]
    InvalidMuzzleSpeed(f32),

    #[error("projectile radius={radius} and mass={mass} must be positive")]
    InvalidProjectile { radius: f32, mass: f32 },
}

/// Tunables игрока и снарядов
///
/// Default = константы выше.
/// Вставляется как Resource, системы читают через Res<PlayerConfig>.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Скаляр forward/backward движения (за tick)
    pub forward_weight: f32,
    /// Скаляр strafe движения (за tick)
    pub lateral_weight: f32,
    /// Капсула персонажа (upright, fixed)
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
    /// Стартовая позиция персонажа (массив — Vec3 без serde feature
    /// не сериализуется, а config должен уметь в файл)
    pub spawn_position: [f32; 3],
    /// Скорость снаряда при spawn (m/s)
    pub muzzle_speed: f32,
    pub projectile_radius: f32,
    pub projectile_mass: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            forward_weight: FORWARD_WEIGHT,
            lateral_weight: LATERAL_WEIGHT,
            capsule_radius: CAPSULE_RADIUS,
            capsule_half_height: CAPSULE_HALF_HEIGHT,
            spawn_position: [0.0, 5.0, 0.0],
            muzzle_speed: MUZZLE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_mass: PROJECTILE_MASS,
        }
    }
}

impl PlayerConfig {
    /// Проверка инвариантов конфигурации
    ///
    /// Нулевые/отрицательные скорости и размеры — programming error,
    /// симуляция с ними не стартует.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forward_weight <= 0.0 || self.lateral_weight <= 0.0 {
            return Err(ConfigError::InvalidMovementWeights {
                forward: self.forward_weight,
                lateral: self.lateral_weight,
            });
        }
        if self.capsule_radius <= 0.0 || self.capsule_half_height <= 0.0 {
            return Err(ConfigError::InvalidCapsule {
                radius: self.capsule_radius,
                half_height: self.capsule_half_height,
            });
        }
        if self.muzzle_speed <= 0.0 {
            return Err(ConfigError::InvalidMuzzleSpeed(self.muzzle_speed));
        }
        if self.projectile_radius <= 0.0 || self.projectile_mass <= 0.0 {
            return Err(ConfigError::InvalidProjectile {
                radius: self.projectile_radius,
                mass: self.projectile_mass,
            });
        }
        Ok(())
    }
}
