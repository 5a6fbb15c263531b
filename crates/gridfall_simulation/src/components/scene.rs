//! Дескрипторы сцены: формы, цвета, selection state
//!
//! Симуляция headless — никаких Mesh/Material здесь нет.
//! ShapeDesc + SurfaceColor описывают как entity ДОЛЖЕН выглядеть,
//! клиент читает их и строит визуальное представление сам.

use bevy::prelude::*;

/// Форма entity (для коллайдера уже есть rapier Collider,
/// это описание для визуального слоя)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum ShapeDesc {
    /// Половинные размеры по осям (конвенция half-extent, как у rapier cuboid)
    Cuboid { half_extents: Vec3 },
    /// Вертикальный цилиндр
    Cylinder { half_height: f32, radius: f32 },
    /// Сфера
    Ball { radius: f32 },
    /// Вертикальная капсула
    Capsule { half_height: f32, radius: f32 },
}

/// Базовый цвет поверхности (sRGB, без alpha)
///
/// Храним как [f32; 3] а не bevy Color — headless ядро не тянет
/// рендерные типы, клиент конвертирует сам.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceColor(pub [f32; 3]);

impl SurfaceColor {
    pub const RED: Self = Self([0.8, 0.1, 0.1]);
    pub const BLUE: Self = Self([0.1, 0.1, 0.8]);
    pub const GRAY: Self = Self([0.5, 0.5, 0.5]);
    pub const YELLOW: Self = Self([0.9, 0.9, 0.1]);
    pub const BRICK: Self = Self([0.6, 0.3, 0.2]);
}

/// Marker статичной геометрии арены (mass 0, rapier никогда её не двигает)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct StaticGeometry;

/// Marker: entity был выбран pick raycast'ом
///
/// Единственный эффект picking'а — косметический (перекраска).
/// Никакого физического воздействия на entity нет.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Selected;
