//! Интеграционные тесты контроллера (headless)
//!
//! Полный стек: InputEvent → InputState → walk direction → rapier step →
//! camera sync. Каждый app.update() = ровно один fixed tick
//! (TimeUpdateStrategy::ManualDuration).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;
use gridfall_simulation::{
    create_headless_app, CameraRig, InputAction, InputEvent, Player, PlayerConfig,
    SimulationPlugin, StaticGeometry,
};
use std::time::Duration;

const TICK: f64 = 1.0 / 60.0;

/// Headless app: арена + персонаж, spawn в свободном коридоре z = 8
/// (ряд кубов кончается на |z| = 5, колонны на z = 0)
fn create_sim_app() -> App {
    let mut app = create_headless_app(42);
    let config = PlayerConfig {
        spawn_position: [0.0, 5.0, 8.0],
        ..default()
    };
    app.add_plugins(SimulationPlugin::new(config).unwrap());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        TICK,
    )));

    // Камера смотрит вдоль +X: путь до правой стены свободен
    let mut rig = app.world_mut().resource_mut::<CameraRig>();
    rig.forward = Vec3::X;
    rig.left = Vec3::NEG_Z;

    app
}

fn send(app: &mut App, action: InputAction, pressed: bool) {
    app.world_mut().send_event(InputEvent { action, pressed });
}

fn player_position(app: &mut App) -> Vec3 {
    let mut query = app.world_mut().query_filtered::<&Transform, With<Player>>();
    query.single(app.world()).unwrap().translation
}

#[test]
fn test_forward_moves_player_along_camera_forward() {
    let mut app = create_sim_app();

    send(&mut app, InputAction::Forward, true);
    for _ in 0..5 {
        app.update();
    }

    let position = player_position(&mut app);
    // 5 тиков * 0.6 m/tick вдоль +X
    assert!(
        (position.x - 3.0).abs() < 0.2,
        "expected x ~ 3.0, got {}",
        position.x
    );
    // Никакого бокового сноса
    assert!((position.z - 8.0).abs() < 1e-3, "z drifted: {}", position.z);
}

#[test]
fn test_no_input_keeps_player_horizontally_still() {
    let mut app = create_sim_app();

    for _ in 0..60 {
        app.update();
    }

    let position = player_position(&mut app);
    // Гравитация двигает только по Y
    assert!(position.x.abs() < 1e-4);
    assert!((position.z - 8.0).abs() < 1e-4);
    // Персонаж осел на пол, а не провалился сквозь него
    assert!(position.y < 5.0);
    assert!(position.y > 0.0);
}

#[test]
fn test_opposite_keys_cancel_in_full_stack() {
    let mut app = create_sim_app();

    send(&mut app, InputAction::Forward, true);
    send(&mut app, InputAction::Backward, true);
    send(&mut app, InputAction::Left, true);
    send(&mut app, InputAction::Right, true);

    for _ in 0..60 {
        app.update();
    }

    let position = player_position(&mut app);
    assert!(position.x.abs() < 1e-4, "x = {}", position.x);
    assert!((position.z - 8.0).abs() < 1e-4, "z = {}", position.z);
}

#[test]
fn test_walk_direction_submitted_every_tick() {
    let mut app = create_sim_app();

    // Даём персонажу осесть на пол
    for _ in 0..120 {
        app.update();
    }

    send(&mut app, InputAction::Forward, true);
    app.update();

    let mut query = app
        .world_mut()
        .query_filtered::<&KinematicCharacterController, With<Player>>();
    let controller = query.single(app.world()).unwrap();
    let translation = controller.translation.expect("walk direction submitted");

    // Горизонталь — ровно forward_weight вдоль +X (камера повёрнута)
    assert!((translation.x - 0.6).abs() < 1e-6, "x = {}", translation.x);
    assert!(translation.z.abs() < 1e-6);
    // Вертикаль — только гравитационная добавка (на земле ~0)
    assert!(translation.y.abs() < 0.01);
}

#[test]
fn test_wall_stops_player_without_tunneling() {
    let mut app = create_sim_app();

    send(&mut app, InputAction::Forward, true);
    for _ in 0..300 {
        app.update();
    }

    let position = player_position(&mut app);
    // Правая стена на x = 10: персонаж дошёл и упёрся (sliding, не телепорт)
    assert!(position.x > 5.0, "player never reached the wall: {}", position.x);
    assert!(
        position.x < 10.0,
        "player tunneled through the wall: {}",
        position.x
    );
}

#[test]
fn test_camera_follows_player_position() {
    let mut app = create_sim_app();

    send(&mut app, InputAction::Forward, true);
    for _ in 0..30 {
        app.update();
    }

    let position = player_position(&mut app);
    let rig = *app.world().resource::<CameraRig>();
    // Позиция копируется после physics step — точное равенство
    assert_eq!(rig.position, position);
}

#[test]
fn test_static_geometry_never_moves() {
    let mut app = create_sim_app();

    // Снимок позиций статики после первого tick'а (spawn завершён)
    app.update();
    let before: Vec<(Entity, Vec3)> = {
        let mut query = app
            .world_mut()
            .query_filtered::<(Entity, &Transform), With<StaticGeometry>>();
        query
            .iter(app.world())
            .map(|(e, t)| (e, t.translation))
            .collect()
    };
    assert!(!before.is_empty());

    // Толкаемся в стены и стреляем — mass 0 тела не должны сдвинуться
    send(&mut app, InputAction::Forward, true);
    send(&mut app, InputAction::Fire, true);
    send(&mut app, InputAction::Fire, false);
    for _ in 0..300 {
        app.update();
    }

    for (entity, old_position) in before {
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(
            transform.translation, old_position,
            "static body {:?} moved",
            entity
        );
    }
}
