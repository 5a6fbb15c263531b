//! Input domain — состояние клавиш и edge-triggered действия
//!
//! Содержит:
//! - InputState (snapshot resource: movement flags + fire/select edges)
//! - InputAction / InputEvent ((action, pressed) пары от input слоя)
//! - apply_input_events / reset_edge_triggers системы
//!
//! # Архитектура
//! Симуляция НЕ читает клавиатуру напрямую. Клиент (или тест) шлёт
//! InputEvent'ы, системы ниже превращают их в InputState snapshot,
//! который явно передаётся в контроллер/обработчики через Res.
//! Никакого скрытого глобального input объекта.

pub mod state;
pub mod systems;

pub use state::{InputAction, InputEvent, InputState, PointerRay};
pub use systems::{apply_input_events, reset_edge_triggers};

use bevy::prelude::*;

/// Plugin input подсистемы
///
/// Регистрирует только событие и resource. Системы добавляет
/// SimulationPlugin — им нужен строгий порядок относительно physics step.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InputEvent>()
            .init_resource::<InputState>();
    }
}
