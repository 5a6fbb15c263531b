//! Input системы (ECS)
//!
//! apply_input_events — первая система tick'а (до контроллера),
//! reset_edge_triggers — последняя (после pick/fire обработчиков).
//! Между ними edge флаги видны ровно одному циклу.

use bevy::prelude::*;

use super::state::{InputEvent, InputState};

/// Применяет накопленные InputEvent'ы к InputState snapshot'у
///
/// # Архитектура
/// - Читает: InputEvent (от клиентского bridge или теста)
/// - Пишет: InputState (единственный писатель флагов движения)
///
/// События обрабатываются по порядку — press+release одного действия
/// внутри одного tick'а даёт корректный edge (release латчится).
pub fn apply_input_events(
    mut events: EventReader<InputEvent>,
    mut state: ResMut<InputState>,
) {
    for event in events.read() {
        state.apply(event);
    }
}

/// Сбрасывает fire/select edges в конце tick'а
///
/// Выполняется строго ПОСЛЕ pick/spawn обработчиков (chain в
/// SimulationPlugin) — каждый edge потребляется ровно один раз.
pub fn reset_edge_triggers(mut state: ResMut<InputState>) {
    state.clear_edges();
}
