//! Headless прогон GRIDFALL
//!
//! Запускает Bevy App без рендера: арена + персонаж, синтетический
//! input (вперёд + один выстрел), печатает статистику по тикам.

use bevy::prelude::*;
use gridfall_simulation::{
    create_headless_app, InputAction, InputEvent, Projectile, SimulationPlugin, DEFAULT_SEED,
};

fn main() {
    println!("Starting GRIDFALL headless simulation (seed: {})", DEFAULT_SEED);

    let mut app = create_headless_app(DEFAULT_SEED);
    app.add_plugins(SimulationPlugin::default());

    // Синтетический input: держим "вперёд" всю сессию
    app.world_mut().send_event(InputEvent {
        action: InputAction::Forward,
        pressed: true,
    });

    for tick in 0..600 {
        // Один выстрел на 100-м тике (press + release = один edge)
        if tick == 100 {
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

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            let projectile_count = app
                .world_mut()
                .query::<&Projectile>()
                .iter(app.world())
                .count();
            println!(
                "Tick {}: {} entities, {} projectiles",
                tick, entity_count, projectile_count
            );
        }
    }

    println!("Simulation complete!");
}
