//! Headless симуляция GREYMARCH
//!
//! Запускает Bevy App без рендера: тестовая арена + пешка игрока,
//! синтетический input (ходьба вперёд + периодический поворот камеры),
//! телеметрия пешки раз в секунду.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use greymarch_simulation::{
    create_headless_app, spawn_player_pawn, spawn_test_arena, Kinematics, LookInput, MoveInput,
    SimulationConfig, SimulationPlugin,
};

/// Длительность одного тика (детерминированный manual clock)
const TICK: Duration = Duration::from_micros(16_667);

fn main() {
    println!("Starting GREYMARCH headless simulation");

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);
    // Manual clock: каждый update ровно один fixed tick, воспроизводимо
    app.insert_resource(Time::<Fixed>::from_duration(TICK));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));

    let config = SimulationConfig::load_or_default("greymarch.toml");

    let pawn = {
        let world = app.world_mut();
        let mut commands = world.commands();
        spawn_test_arena(&mut commands);
        // Spawn с небольшим зазором над полом (кинематика, гравитации нет)
        spawn_player_pawn(
            &mut commands,
            &config,
            Vec3::new(0.0, config.capsule_half_height + 0.02, 8.0),
        )
    };
    app.insert_resource(config);

    // Первый тик: rapier регистрирует коллайдеры в query pipeline
    app.update();

    // 600 тиков (~10 сек): идём вперёд, каждые 2 сек доворачиваем камеру
    for tick in 0..600u32 {
        app.world_mut().send_event(MoveInput {
            axis: Vec2::new(0.0, 1.0),
        });
        if tick % 120 == 0 && tick > 0 {
            app.world_mut().send_event(LookInput {
                delta: Vec2::new(15.0, 0.0),
            });
        }

        app.update();

        if tick % 60 == 0 {
            let world = app.world();
            if let (Some(transform), Some(kinematics)) =
                (world.get::<Transform>(pawn), world.get::<Kinematics>(pawn))
            {
                println!(
                    "Tick {:4}: pos = ({:6.2}, {:5.2}, {:6.2}), |v| = {:5.2} m/s",
                    tick,
                    transform.translation.x,
                    transform.translation.y,
                    transform.translation.z,
                    kinematics.current_velocity.length(),
                );
            }
        }
    }

    println!("Simulation complete!");
}
