//! Pick raycaster — определение объекта под указателем
//!
//! На select edge кастуем луч из камеры через pointer в rapier context.
//! Ближайшее пересечение побеждает (nearest-hit policy). Промах —
//! нормальный None результат, не ошибка.
//!
//! Единственный эффект попадания — косметический: Selected marker +
//! перекраска в случайный цвет (seeded RNG, воспроизводимо при replay).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::components::{Player, Selected, SurfaceColor};
use crate::config::PICK_MAX_DISTANCE;
use crate::input::{InputState, PointerRay};
use crate::DeterministicRng;

/// Результат pick запроса: ближайший entity на луче + дистанция
///
/// Дистанция нужна для tie-breaking (nearest wins); точные ничьи —
/// measure-zero, порядок у rapier не специфицирован.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Event: объект выбран pick raycast'ом
///
/// # Архитектура
/// - Emit: pick_on_select (симуляция)
/// - Consume: клиентский rendering sync (перекраска material)
#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectPicked {
    pub entity: Entity,
    pub distance: f32,
    /// Новый цвет выбранного объекта (sRGB)
    pub color: [f32; 3],
}

/// Pick запрос к rapier context
///
/// Solid cast до PICK_MAX_DISTANCE; rapier возвращает минимальный TOI,
/// что и реализует nearest-hit policy без ручной сортировки.
pub fn pick(context: &RapierContext, ray: PointerRay, filter: QueryFilter) -> Option<PickHit> {
    context
        .cast_ray(ray.origin, ray.direction, PICK_MAX_DISTANCE, true, filter)
        .map(|(entity, toi)| PickHit {
            entity,
            distance: toi,
        })
}

/// Система обработки select edge
///
/// Работает ПОСЛЕ physics step (rapier query pipeline актуален).
/// Select латчится на release — ровно один pick за нажатие.
/// Тело игрока исключается из запроса (луч начинается внутри капсулы).
pub fn pick_on_select(
    mut commands: Commands,
    input: Res<InputState>,
    rapier: ReadRapierContext,
    player_query: Query<Entity, With<Player>>,
    mut rng: ResMut<DeterministicRng>,
    mut picked_events: EventWriter<ObjectPicked>,
) {
    if !input.select {
        return;
    }
    let Some(ray) = input.pointer_ray else {
        return;
    };
    let Ok(context) = rapier.single() else {
        return;
    };

    let mut filter = QueryFilter::new();
    if let Ok(player) = player_query.single() {
        filter = filter.exclude_rigid_body(player);
    }

    let Some(hit) = pick(&context, ray, filter) else {
        // Промах — no-op, состояние мира не меняется
        return;
    };

    // Косметика: случайный цвет из детерминированного RNG
    let color = [
        rng.rng.gen_range(0.0..1.0),
        rng.rng.gen_range(0.0..1.0),
        rng.rng.gen_range(0.0..1.0),
    ];

    commands
        .entity(hit.entity)
        .insert((Selected, SurfaceColor(color)));

    picked_events.write(ObjectPicked {
        entity: hit.entity,
        distance: hit.distance,
        color,
    });

    crate::logger::log(&format!(
        "Picked {:?} at distance {:.2}",
        hit.entity, hit.distance
    ));
}

/// Plugin picking подсистемы (event + ничего больше,
/// порядок системы задаёт SimulationPlugin)
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ObjectPicked>();
    }
}
