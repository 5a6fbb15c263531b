//! Rendering sync: simulation entities → визуальные entities
//!
//! Симуляция описывает внешность через ShapeDesc/SurfaceColor,
//! здесь строим Mesh3d/StandardMaterial и синхронизируем transforms.

use bevy::prelude::*;
use gridfall_simulation::{ObjectPicked, ShapeDesc, SurfaceColor};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_visuals_for_new_entities,
                sync_transforms,
                apply_picked_colors,
            )
                .chain(),
        );
    }
}

/// Link: visual entity → simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Link: simulation entity → visual entity
#[derive(Component)]
pub struct HasVisual(pub Entity);

/// Spawn visual representation для новых simulation entities
///
/// Срабатывает на Added<ShapeDesc>: арена на старте, персонаж,
/// каждый новый снаряд.
fn spawn_visuals_for_new_entities(
    mut commands: Commands,
    query: Query<(Entity, &ShapeDesc, &SurfaceColor, &Transform), Added<ShapeDesc>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (sim_entity, shape, color, sim_transform) in query.iter() {
        let visual_entity = commands
            .spawn((
                Mesh3d(meshes.add(build_mesh(shape))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: to_bevy_color(color),
                    ..default()
                })),
                *sim_transform,
                VisualOf(sim_entity),
            ))
            .id();

        commands
            .entity(sim_entity)
            .insert(HasVisual(visual_entity));
    }
}

/// Sync simulation transforms → visual transforms
fn sync_transforms(
    sim_query: Query<(&Transform, &HasVisual), Changed<Transform>>,
    mut visual_query: Query<&mut Transform, (With<VisualOf>, Without<HasVisual>)>,
) {
    for (sim_transform, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            *visual_transform = *sim_transform;
        }
    }
}

/// Перекраска выбранного объекта (единственный видимый эффект pick'а)
fn apply_picked_colors(
    mut picked_events: EventReader<ObjectPicked>,
    links: Query<&HasVisual>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for picked in picked_events.read() {
        let Ok(has_visual) = links.get(picked.entity) else {
            continue;
        };
        let Ok(handle) = material_handles.get(has_visual.0) else {
            continue;
        };
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = Color::srgb(picked.color[0], picked.color[1], picked.color[2]);
        }
    }
}

/// ShapeDesc → Bevy mesh primitive (дескрипторы в half-extent
/// конвенции, примитивы Bevy — в полных размерах)
fn build_mesh(shape: &ShapeDesc) -> Mesh {
    match *shape {
        ShapeDesc::Cuboid { half_extents } => Mesh::from(Cuboid::new(
            half_extents.x * 2.0,
            half_extents.y * 2.0,
            half_extents.z * 2.0,
        )),
        ShapeDesc::Cylinder {
            half_height,
            radius,
        } => Mesh::from(Cylinder::new(radius, half_height * 2.0)),
        ShapeDesc::Ball { radius } => Mesh::from(Sphere::new(radius)),
        ShapeDesc::Capsule {
            half_height,
            radius,
        } => Mesh::from(Capsule3d::new(radius, half_height * 2.0)),
    }
}

fn to_bevy_color(color: &SurfaceColor) -> Color {
    Color::srgb(color.0[0], color.0[1], color.0[2])
}
