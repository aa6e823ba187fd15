//! Pawn integration test
//!
//! Headless App + Rapier: пешка ходит по тестовой арене N тиков.
//!
//! Проверяем:
//! - Движение и блокировку стеной (sweep)
//! - Wall slide (диагональ в стену → скольжение вдоль)
//! - Разворот к скорости, pitch/roll всегда ноль
//! - Finite-difference оценку скорости
//! - Pitch clamp ±80° на look input
//! - No-op без PawnController

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;

use greymarch_simulation::*;
use greymarch_simulation::components::PITCH_LIMIT_RADIANS;
use greymarch_simulation::world::ARENA_HALF_EXTENT;

/// Длительность тика: manual clock, каждый update ровно один fixed tick
const TICK: Duration = Duration::from_micros(16_667);

/// Helper: headless App с полной симуляцией и детерминированным clock'ом
fn create_sim_app() -> App {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);
    app.insert_resource(Time::<Fixed>::from_duration(TICK));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
    app
}

/// Helper: арена + пешка, один прогретый тик (регистрация коллайдеров)
fn spawn_scene(app: &mut App, position: Vec3) -> Entity {
    let config = SimulationConfig::default();
    let pawn = {
        let world = app.world_mut();
        let mut commands = world.commands();
        spawn_test_arena(&mut commands);
        spawn_player_pawn(&mut commands, &config, position)
    };
    app.insert_resource(config);
    app.update();
    pawn
}

/// Спавн-высота: капсула чуть над полом (гравитации нет, пешка кинематическая)
fn spawn_height() -> f32 {
    SimulationConfig::default().capsule_half_height + 0.02
}

fn tick_with_move(app: &mut App, axis: Vec2) {
    app.world_mut().send_event(MoveInput { axis });
    app.update();
}

#[test]
fn test_walk_forward_until_wall_blocks() {
    let mut app = create_sim_app();
    let pawn = spawn_scene(&mut app, Vec3::new(0.0, spawn_height(), 8.0));

    // Вперёд (yaw 0 → -Z), 600 тиков при 5 m/s это 50m — упрёмся в стену
    for _ in 0..600 {
        tick_with_move(&mut app, Vec2::new(0.0, 1.0));
    }

    let translation = app.world().get::<Transform>(pawn).unwrap().translation;
    let radius = SimulationConfig::default().capsule_radius;

    // Остановка у внутренней грани стены, без проникновения
    assert!(
        translation.z >= -ARENA_HALF_EXTENT + radius - 0.01,
        "пешка проникла в стену: z = {}",
        translation.z
    );
    assert!(
        translation.z < -ARENA_HALF_EXTENT + radius + 0.5,
        "пешка не дошла до стены: z = {}",
        translation.z
    );
}

#[test]
fn test_diagonal_into_wall_slides_along() {
    let mut app = create_sim_app();
    // Почти вплотную к -X стене
    let pawn = spawn_scene(&mut app, Vec3::new(-9.0, spawn_height(), 5.0));

    // Диагональ: вперёд (-Z) и влево (-X, в стену)
    for _ in 0..200 {
        tick_with_move(&mut app, Vec2::new(-1.0, 1.0));
    }

    let translation = app.world().get::<Transform>(pawn).unwrap().translation;
    let radius = SimulationConfig::default().capsule_radius;

    // X заблокирован стеной
    assert!(
        translation.x >= -ARENA_HALF_EXTENT + radius - 0.01,
        "пешка проникла в стену: x = {}",
        translation.x
    );
    // Z продолжил движение — скольжение, не полная остановка
    assert!(
        translation.z < 0.0,
        "slide не сработал: z = {}",
        translation.z
    );
}

#[test]
fn test_rotation_follows_velocity_yaw_only() {
    let mut app = create_sim_app();
    let pawn = spawn_scene(&mut app, Vec3::new(0.0, spawn_height(), 0.0));

    // Strafe вправо (+X): пешка должна довернуться лицом к движению
    for _ in 0..120 {
        tick_with_move(&mut app, Vec2::new(1.0, 0.0));
    }

    let rotation = app.world().get::<Transform>(pawn).unwrap().rotation;
    let forward = rotation * Vec3::NEG_Z;
    let up = rotation * Vec3::Y;

    assert!(
        (forward - Vec3::X).length() < 0.05,
        "пешка не смотрит по скорости: forward = {:?}",
        forward
    );
    // Pitch/roll ноль: up пешки остаётся мировым up
    assert!((up - Vec3::Y).length() < 1e-4, "up = {:?}", up);
}

#[test]
fn test_rotation_kept_when_stopped() {
    let mut app = create_sim_app();
    let pawn = spawn_scene(&mut app, Vec3::new(0.0, spawn_height(), 0.0));

    for _ in 0..120 {
        tick_with_move(&mut app, Vec2::new(1.0, 0.0));
    }
    let rotation_moving = app.world().get::<Transform>(pawn).unwrap().rotation;

    // Останавливаемся: ниже порога скорости rotation не трогается (без snap-back)
    for _ in 0..120 {
        app.update();
    }
    let rotation_stopped = app.world().get::<Transform>(pawn).unwrap().rotation;

    assert_eq!(rotation_moving, rotation_stopped);
}

#[test]
fn test_kinematics_estimate_matches_walk_speed() {
    let mut app = create_sim_app();
    let pawn = spawn_scene(&mut app, Vec3::new(0.0, spawn_height(), 0.0));

    // Открытое пространство, стационарная ходьба
    for _ in 0..60 {
        tick_with_move(&mut app, Vec2::new(0.0, 1.0));
    }

    let kinematics = app.world().get::<Kinematics>(pawn).unwrap();
    let speed = kinematics.current_velocity.length();
    let max_walk_speed = SimulationConfig::default().max_walk_speed;

    assert!(
        (speed - max_walk_speed).abs() < 0.05,
        "оценка скорости {} вместо {}",
        speed,
        max_walk_speed
    );
    // Стационарный режим: ускорение около нуля
    assert!(
        kinematics.current_acceleration.length() < 0.5,
        "a = {:?}",
        kinematics.current_acceleration
    );
}

#[test]
fn test_look_pitch_clamped_in_app() {
    let mut app = create_sim_app();
    let pawn = spawn_scene(&mut app, Vec3::new(0.0, spawn_height(), 0.0));

    // Экстремальный look вниз много тиков подряд
    for _ in 0..100 {
        app.world_mut().send_event(LookInput {
            delta: Vec2::new(0.0, 1000.0),
        });
        app.update();
    }

    let controller = app.world().get::<PawnController>(pawn).unwrap();
    assert!(
        controller.pitch >= -PITCH_LIMIT_RADIANS - 1e-6
            && controller.pitch <= PITCH_LIMIT_RADIANS + 1e-6,
        "pitch {} вне ±80°",
        controller.pitch
    );
}

#[test]
fn test_spring_arm_follows_pawn() {
    let mut app = create_sim_app();
    let pawn = spawn_scene(&mut app, Vec3::new(0.0, spawn_height(), 0.0));

    for _ in 0..60 {
        tick_with_move(&mut app, Vec2::new(0.0, 1.0));
    }

    let pawn_pos = app.world().get::<Transform>(pawn).unwrap().translation;
    let config = SimulationConfig::default();

    // Ищем rig entity по SpringArm
    let mut found = false;
    let mut query = app.world_mut().query::<(&SpringArm, &Transform)>();
    for (arm, rig_transform) in query.iter(app.world()) {
        assert_eq!(arm.target, pawn);
        let distance = (rig_transform.translation - pawn_pos).length();
        assert!(
            (distance - config.arm_length).abs() < 1e-3,
            "arm длина {} вместо {}",
            distance,
            config.arm_length
        );
        found = true;
    }
    assert!(found, "rig entity не найден");
}

#[test]
fn test_input_ignored_without_controller() {
    let mut app = create_sim_app();
    let config = SimulationConfig::default();
    let position = Vec3::new(0.0, spawn_height(), 0.0);

    // Пешка БЕЗ PawnController: собираем компоненты вручную
    let pawn = {
        let world = app.world_mut();
        let mut commands = world.commands();
        spawn_test_arena(&mut commands);
        commands
            .spawn((
                Transform::from_translation(position),
                Player,
                Kinematics::at(position),
                MovementTuning::default(),
                RigidBody::KinematicPositionBased,
                Collider::capsule_y(
                    config.capsule_half_height - config.capsule_radius,
                    config.capsule_radius,
                ),
                greymarch_simulation::collision::pawn_groups(),
            ))
            .id()
    };
    app.update();

    for _ in 0..60 {
        app.world_mut().send_event(MoveInput {
            axis: Vec2::new(0.0, 1.0),
        });
        app.world_mut().send_event(LookInput {
            delta: Vec2::new(10.0, 10.0),
        });
        app.update();
    }

    let transform = app.world().get::<Transform>(pawn).unwrap();
    // Состояние бит-в-бит как при спавне
    assert_eq!(transform.translation, position);
    assert_eq!(transform.rotation, Quat::IDENTITY);
}
