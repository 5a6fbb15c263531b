//! Арена — декларативная статичная сцена
//!
//! Замкнутая коробка: пол, четыре стены по периметру, ряд колонн и
//! сетка кубов. Вся геометрия RigidBody::Fixed (mass 0 — симуляция
//! никогда не двигает эти тела) + коллайдер, так что персонаж
//! сталкивается, а pick raycast видит каждый объект.
//!
//! Размеры/позиции — фиксированные константы (half-extent конвенция).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{ShapeDesc, StaticGeometry, SurfaceColor};

/// Пол: половинные размеры и позиция (верхняя грань на y = 0)
pub const GROUND_HALF_EXTENTS: Vec3 = Vec3::new(20.0, 1.0, 20.0);
pub const GROUND_POSITION: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Стена: плоская коробка 20×6×0.2 (половинные размеры)
pub const WALL_HALF_EXTENTS: Vec3 = Vec3::new(10.0, 3.0, 0.1);

/// Колонна: вертикальный цилиндр
pub const PILLAR_HALF_HEIGHT: f32 = 0.5;
pub const PILLAR_RADIUS: f32 = 0.5;

/// Куб сетки
pub const BOX_HALF_EXTENT: f32 = 0.5;

/// Четыре стены периметра: (позиция, поворот вокруг Y)
pub fn wall_placements() -> [(Vec3, Quat); 4] {
    use std::f32::consts::{FRAC_PI_2, PI};
    [
        // Задняя
        (Vec3::new(0.0, 1.0, -10.0), Quat::IDENTITY),
        // Левая
        (Vec3::new(-10.0, 1.0, 0.0), Quat::from_rotation_y(FRAC_PI_2)),
        // Правая
        (Vec3::new(10.0, 1.0, 0.0), Quat::from_rotation_y(-FRAC_PI_2)),
        // Передняя
        (Vec3::new(0.0, 1.0, 10.0), Quat::from_rotation_y(PI)),
    ]
}

/// Ряд колонн вдоль X: x = -8..=8 шаг 4, на оси z = 0
pub fn pillar_positions() -> Vec<Vec3> {
    (-8..=8)
        .step_by(4)
        .map(|i| Vec3::new(i as f32, 1.5, 0.0))
        .collect()
}

/// Сетка кубов: i, j = -5..=5 шаг 2
pub fn box_positions() -> Vec<Vec3> {
    let mut positions = Vec::new();
    for i in (-5..=5).step_by(2) {
        for j in (-5..=5).step_by(2) {
            positions.push(Vec3::new(i as f32, 0.5, j as f32));
        }
    }
    positions
}

/// Startup система: спавнит всю статичную геометрию
pub fn spawn_arena(mut commands: Commands) {
    // Пол
    commands.spawn((
        Transform::from_translation(GROUND_POSITION),
        StaticGeometry,
        RigidBody::Fixed,
        Collider::cuboid(
            GROUND_HALF_EXTENTS.x,
            GROUND_HALF_EXTENTS.y,
            GROUND_HALF_EXTENTS.z,
        ),
        ShapeDesc::Cuboid {
            half_extents: GROUND_HALF_EXTENTS,
        },
        SurfaceColor::BRICK,
    ));

    // Стены
    for (position, rotation) in wall_placements() {
        commands.spawn((
            Transform::from_translation(position).with_rotation(rotation),
            StaticGeometry,
            RigidBody::Fixed,
            Collider::cuboid(
                WALL_HALF_EXTENTS.x,
                WALL_HALF_EXTENTS.y,
                WALL_HALF_EXTENTS.z,
            ),
            ShapeDesc::Cuboid {
                half_extents: WALL_HALF_EXTENTS,
            },
            SurfaceColor::BRICK,
        ));
    }

    // Колонны
    for position in pillar_positions() {
        commands.spawn((
            Transform::from_translation(position),
            StaticGeometry,
            RigidBody::Fixed,
            Collider::cylinder(PILLAR_HALF_HEIGHT, PILLAR_RADIUS),
            ShapeDesc::Cylinder {
                half_height: PILLAR_HALF_HEIGHT,
                radius: PILLAR_RADIUS,
            },
            SurfaceColor::GRAY,
        ));
    }

    // Сетка кубов
    for position in box_positions() {
        commands.spawn((
            Transform::from_translation(position),
            StaticGeometry,
            RigidBody::Fixed,
            Collider::cuboid(BOX_HALF_EXTENT, BOX_HALF_EXTENT, BOX_HALF_EXTENT),
            ShapeDesc::Cuboid {
                half_extents: Vec3::splat(BOX_HALF_EXTENT),
            },
            SurfaceColor::BLUE,
        ));
    }

    crate::logger::log_info("Arena spawned: ground, 4 walls, pillars, box grid");
}

/// Plugin арены (статичная геометрия на старте)
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_row_count_and_bounds() {
        let pillars = pillar_positions();
        assert_eq!(pillars.len(), 5);
        assert_eq!(pillars.first().unwrap().x, -8.0);
        assert_eq!(pillars.last().unwrap().x, 8.0);
        assert!(pillars.iter().all(|p| p.z == 0.0 && p.y == 1.5));
    }

    #[test]
    fn test_box_grid_count() {
        // 6×6 сетка
        assert_eq!(box_positions().len(), 36);
    }

    #[test]
    fn test_boxes_inside_walls() {
        // Вся сетка строго внутри периметра ±10
        for position in box_positions() {
            assert!(position.x.abs() < 10.0 - BOX_HALF_EXTENT);
            assert!(position.z.abs() < 10.0 - BOX_HALF_EXTENT);
        }
    }

    #[test]
    fn test_walls_enclose_arena() {
        let placements = wall_placements();
        assert_eq!(placements.len(), 4);
        // Каждая стена на периметре: ровно одна координата = ±10
        for (position, _) in placements {
            let on_x = position.x.abs() == 10.0;
            let on_z = position.z.abs() == 10.0;
            assert!(on_x ^ on_z);
        }
    }

    #[test]
    fn test_ground_top_face_at_origin_level() {
        assert_eq!(GROUND_POSITION.y + GROUND_HALF_EXTENTS.y, 0.0);
    }
}
