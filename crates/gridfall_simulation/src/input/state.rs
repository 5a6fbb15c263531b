//! InputState snapshot + события input слоя

use bevy::prelude::*;

/// Именованные действия игрока
///
/// Движение — level-triggered (флаг держится пока клавиша зажата).
/// Fire/Select — edge-triggered: срабатывают ТОЛЬКО на переходе
/// pressed → released (см. apply_input_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Forward,
    Backward,
    Left,
    Right,
    Fire,
    Select,
}

/// Событие input слоя: (action, pressed) пара
///
/// # Архитектура
/// - Emit: клиентский input bridge (каждый press И release), либо тест
/// - Consume: apply_input_events (единственный потребитель)
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}

/// Луч от камеры через позицию указателя (world space)
///
/// Строится клиентом (projection матрица живёт там):
/// origin на near plane, direction к far plane, нормализован.
/// Headless ядру для pick'а достаточно origin + direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Snapshot состояния input за текущий tick
///
/// Движение — текущее состояние клавиш. fire/select — true ровно
/// один fixed-update цикл после release соответствующего действия
/// (сбрасывает reset_edge_triggers в конце цепочки).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,

    /// Edge: выстрел запрошен (release перехода Fire)
    pub fire: bool,
    /// Edge: pick запрошен (release перехода Select)
    pub select: bool,

    /// Последний известный pointer ray (обновляется клиентом каждый frame)
    pub pointer_ray: Option<PointerRay>,
}

impl InputState {
    /// Применить одно (action, pressed) событие
    ///
    /// Движение пишется как есть. Fire/Select латчатся только
    /// на release — зажатая кнопка не даёт потока срабатываний.
    pub fn apply(&mut self, event: &InputEvent) {
        match event.action {
            InputAction::Forward => self.forward = event.pressed,
            InputAction::Backward => self.backward = event.pressed,
            InputAction::Left => self.left = event.pressed,
            InputAction::Right => self.right = event.pressed,
            InputAction::Fire => {
                if !event.pressed {
                    self.fire = true;
                }
            }
            InputAction::Select => {
                if !event.pressed {
                    self.select = true;
                }
            }
        }
    }

    /// Сбросить edge флаги (конец tick'а)
    pub fn clear_edges(&mut self) {
        self.fire = false;
        self.select = false;
    }
}
