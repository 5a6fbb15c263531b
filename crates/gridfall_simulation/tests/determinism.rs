//! Тесты детерминизма симуляции
//!
//! Одинаковый seed + одинаковый input script ⇒ идентичные снепшоты
//! мира (позиции персонажа, снарядов, статики).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use gridfall_simulation::{
    create_headless_app, world_snapshot, InputAction, InputEvent, SimulationPlugin,
};
use std::time::Duration;

const TICK: f64 = 1.0 / 60.0;

/// Запускает симуляцию со скриптованным input'ом и возвращает snapshot
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::default());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        TICK,
    )));

    // Скрипт: идём вперёд всю дорогу, один выстрел на 50-м тике
    app.world_mut().send_event(InputEvent {
        action: InputAction::Forward,
        pressed: true,
    });

    for tick in 0..tick_count {
        if tick == 50 {
            app.world_mut().send_event(InputEvent {
                action: InputAction::Fire,
                pressed: true,
            });
            app.world_mut().send_event(InputEvent {
                action: InputAction::Fire,
                pressed: false,
            });
        }
        app.update();
    }

    world_snapshot::<Transform>(app.world_mut())
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICKS: usize = 200;

    let snapshot1 = run_simulation(SEED, TICKS);
    let snapshot2 = run_simulation(SEED, TICKS);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICKS: usize = 120;

    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICKS)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}
