//! Keyboard/mouse → InputEvent bridge
//!
//! Симуляция не читает устройства напрямую: здесь сэмплируем Bevy
//! input и шлём (action, pressed) пары. Fire/Select латчатся ядром
//! на release — мы честно передаём оба перехода.
//!
//! Маппинг:
//! - WASD → Forward/Left/Backward/Right
//! - LMB → Fire (выстрел на отпускание)
//! - RMB → Select (pick на отпускание)

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use gridfall_simulation::{InputAction, InputEvent, InputState, PointerRay};

pub struct InputBridgePlugin;

impl Plugin for InputBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (sample_devices, update_pointer_ray));
    }
}

const KEY_BINDINGS: [(KeyCode, InputAction); 4] = [
    (KeyCode::KeyW, InputAction::Forward),
    (KeyCode::KeyS, InputAction::Backward),
    (KeyCode::KeyA, InputAction::Left),
    (KeyCode::KeyD, InputAction::Right),
];

const MOUSE_BINDINGS: [(MouseButton, InputAction); 2] = [
    (MouseButton::Left, InputAction::Fire),
    (MouseButton::Right, InputAction::Select),
];

/// Переходы клавиш/кнопок → InputEvent
fn sample_devices(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut events: EventWriter<InputEvent>,
) {
    for (key, action) in KEY_BINDINGS {
        if keys.just_pressed(key) {
            events.write(InputEvent {
                action,
                pressed: true,
            });
        }
        if keys.just_released(key) {
            events.write(InputEvent {
                action,
                pressed: false,
            });
        }
    }

    for (button, action) in MOUSE_BINDINGS {
        if buttons.just_pressed(button) {
            events.write(InputEvent {
                action,
                pressed: true,
            });
        }
        if buttons.just_released(button) {
            events.write(InputEvent {
                action,
                pressed: false,
            });
        }
    }
}

/// Pointer ray для pick'а: near plane → far plane через позицию курсора
///
/// Projection живёт здесь (у headless ядра нет матрицы камеры).
/// Без курсора (captured mouse) — луч вдоль forward камеры.
fn update_pointer_ray(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut input_state: ResMut<InputState>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let cursor_ray = window_query
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok());

    input_state.pointer_ray = match cursor_ray {
        Some(ray) => Some(PointerRay {
            origin: ray.origin,
            direction: ray.direction.as_vec3(),
        }),
        // Fallback: курсор вне окна — целимся по центру экрана
        None => Some(PointerRay {
            origin: camera_transform.translation(),
            direction: camera_transform.forward().as_vec3(),
        }),
    };
}
