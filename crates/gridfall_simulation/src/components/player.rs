//! Player control marker + вертикальное движение персонажа

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Ровно один entity в сессии несёт этот компонент (создаётся на старте,
/// живёт до shutdown). Системы контроллера используют `With<Player>` filter,
/// pick raycast исключает это тело из запроса.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Вертикальная составляющая движения kinematic персонажа
///
/// Rapier kinematic controller не применяет гравитацию сам — копим
/// вертикальную скорость здесь и добавляем к walk direction каждый tick.
/// Сбрасывается в ноль когда персонаж grounded.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CharacterMotion {
    /// Текущая вертикальная скорость (m/s, отрицательная = падение)
    pub vertical_velocity: f32,
}
