//! GRIDFALL Simulation Core
//!
//! Headless ECS-симуляция арены на Bevy 0.16 + rapier:
//! input state → character controller → physics step → pick/fire →
//! camera sync. Строго последовательная цепочка внутри одного tick'а.
//!
//! Рендер живёт в gridfall_client: ядро отдаёт ShapeDesc/SurfaceColor
//! дескрипторы и позиции, пикселей не касается.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod arena;
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod movement;
pub mod picking;
pub mod shooting;

// Re-export базовых типов для удобства
pub use arena::ArenaPlugin;
pub use components::*;
pub use config::{ConfigError, PlayerConfig};
pub use input::{InputAction, InputEvent, InputPlugin, InputState, PointerRay};
pub use logger::init_logger;
pub use movement::{spawn_player, walk_direction};
pub use picking::{ObjectPicked, PickHit, PickingPlugin};
pub use shooting::{ProjectileSpawned, ShootingPlugin};

/// Seed по умолчанию (детерминированные цвета picking'а)
pub const DEFAULT_SEED: u64 = 42;

/// Частота fixed timestep (Hz)
pub const TICK_RATE: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Порядок внутри FixedUpdate:
/// 1. apply_input_events → update_walk_direction (до rapier step)
/// 2. rapier physics step (SyncBackend → StepSimulation → Writeback)
/// 3. sync_camera_to_player → pick_on_select →
///    spawn_projectile_on_fire → reset_edge_triggers
///
/// Конструируется только из валидной конфигурации: `new` проверяет
/// инварианты и отказывает до первого tick'а.
pub struct SimulationPlugin {
    config: PlayerConfig,
}

impl SimulationPlugin {
    /// Plugin с кастомной конфигурацией (fatal при невалидной)
    pub fn new(config: PlayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        // Default конфигурация валидна по построению
        Self {
            config: PlayerConfig::default(),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE))
            .insert_resource(self.config)
            .init_resource::<CameraRig>();

        // Детерминистичный RNG (не затираем seed, выставленный снаружи)
        if app.world().get_resource::<DeterministicRng>().is_none() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        // Подсистемы
        app.add_plugins((InputPlugin, PickingPlugin, ShootingPlugin, ArenaPlugin));

        // Rapier как black box: body registry, step, ray queries.
        // Step в FixedUpdate — один синхронный шаг на tick.
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
            .insert_resource(TimestepMode::Fixed {
                dt: 1.0 / TICK_RATE as f32,
                substeps: 1,
            });

        app.add_systems(Startup, spawn_player_at_startup);

        // Input + контроллер ДО rapier step
        app.add_systems(
            FixedUpdate,
            (input::apply_input_events, movement::update_walk_direction)
                .chain()
                .before(PhysicsSet::SyncBackend),
        );

        // Camera sync + discrete события ПОСЛЕ rapier step
        app.add_systems(
            FixedUpdate,
            (
                movement::sync_camera_to_player,
                picking::pick_on_select,
                shooting::spawn_projectile_on_fire,
                input::reset_edge_triggers,
            )
                .chain()
                .after(PhysicsSet::Writeback),
        );
    }
}

/// Startup: персонаж создаётся один раз и живёт всю сессию
fn spawn_player_at_startup(mut commands: Commands, config: Res<PlayerConfig>) {
    let player = movement::spawn_player(&mut commands, &config);
    logger::log_info(&format!("Player spawned: {:?}", player));
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// MinimalPlugins + TransformPlugin (rapier читает GlobalTransform).
/// SimulationPlugin добавляет вызывающий — тесты собирают свой набор.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает компоненты типа T в байтовый слепок, отсортированный
/// по Entity ID (детерминированный порядок).
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализация через Debug — простейший стабильный формат
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
