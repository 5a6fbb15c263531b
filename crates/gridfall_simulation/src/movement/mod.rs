//! Character controller — движение персонажа через rapier
//!
//! Kinematic капсула + walk direction, пересчитываемый каждый tick.
//! Rapier разрешает скольжение вдоль препятствий (sliding, не телепорт).

pub mod controller;

// Re-export основных типов
pub use controller::{
    spawn_player, sync_camera_to_player, update_walk_direction, walk_direction,
};
