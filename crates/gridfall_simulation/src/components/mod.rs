//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - player: player control marker + вертикальная скорость (Player, CharacterMotion)
//! - projectile: снаряды (Projectile)
//! - scene: статичная геометрия и визуальные дескрипторы (ShapeDesc, SurfaceColor, Selected)
//! - camera: camera rig resource (CameraRig)

pub mod camera;
pub mod player;
pub mod projectile;
pub mod scene;

// Re-exports для удобного импорта
pub use camera::*;
pub use player::*;
pub use projectile::*;
pub use scene::*;
