//! GREYMARCH Simulation Core
//!
//! Headless ECS-симуляция third-person пешки на Bevy 0.16:
//! capsule collision, spring-arm camera rig, move-and-slide движение.
//!
//! Архитектура:
//! - ECS = вся логика (input events → pawn системы → camera rig)
//! - Rapier = только collision sweeps (kinematic, без динамики:
//!   ни сил, ни гравитации — пешка position-driven)
//! - Host слой (рендер, устройства ввода) подключается снаружи:
//!   пишет MoveInput/LookInput, читает Transform'ы

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;

// Публичные модули
pub mod camera;
pub mod collision;
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod pawn;
pub mod world;

// Re-export базовых типов для удобства
pub use camera::CameraRigPlugin;
pub use components::*;
pub use config::SimulationConfig;
pub use input::{LookInput, MoveInput};
pub use pawn::{spawn_player_pawn, PawnPlugin};
pub use world::spawn_test_arena;

/// Главный plugin симуляции (game mode: статическая конфигурация, без логики)
///
/// Связывает пешку, camera rig и Rapier в fixed schedule. Порядок тика:
/// FixedUpdate (pawn системы + rig) → FixedPostUpdate (rapier step,
/// обновляет query pipeline для sweep'ов следующего тика).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Rapier в fixed schedule (детерминизм, без рендер-зависимостей)
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
            // Подсистемы
            .add_plugins((PawnPlugin, CameraRigPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// MinimalPlugins не содержит TransformPlugin — добавляем сами,
/// Rapier читает GlobalTransform коллайдеров.
pub fn create_headless_app() -> App {
    logger::init_logger();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TransformPlugin)
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot состояния пешек для сравнения детерминизма
///
/// Transform + Kinematics каждой пешки, отсортировано по Entity ID,
/// сериализовано через Debug (простейший стабильный формат).
pub fn pawn_snapshot(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &Transform, &Kinematics)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _, _)| entity.index());

    for (entity, transform, kinematics) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}{:?}", transform, kinematics).as_bytes());
    }

    snapshot
}
