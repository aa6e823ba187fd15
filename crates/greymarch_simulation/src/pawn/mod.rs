//! Pawn domain — third-person пешка
//!
//! Архитектура:
//! - Rapier для коллизий (RigidBody::KinematicPositionBased + capsule)
//! - Движение position-based: мы двигаем Transform после sweep-проверки,
//!   никакой интеграции сил (скорость/ускорение — наблюдаемые величины)
//! - Детерминизм: fixed timestep 60Hz, enhanced-determinism у Rapier

pub mod math;
pub mod systems;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::collision;
use crate::components::{Kinematics, MovementTuning, PawnController, Player, SpringArm};
use crate::config::SimulationConfig;
use crate::input::{LookInput, MoveInput};

pub use math::{face_velocity, movement_direction, slide_vector, yaw_basis};
pub use systems::{
    align_rotation_to_velocity, apply_look_input, apply_move_input, update_kinematics,
};

/// Plugin пешки
///
/// Регистрирует input события и per-tick системы в FixedUpdate.
/// Rapier step идёт в FixedPostUpdate (см. [`crate::SimulationPlugin`]),
/// так что sweep каждого тика видит query pipeline предыдущего step'а.
pub struct PawnPlugin;

impl Plugin for PawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MoveInput>()
            .add_event::<LookInput>()
            .add_systems(
                FixedUpdate,
                (
                    apply_look_input,
                    apply_move_input,
                    update_kinematics,
                    align_rotation_to_velocity,
                )
                    .chain(), // строгий порядок: input → move → estimate → rotate
            );
    }
}

/// Spawn helper пешки игрока + camera rig
///
/// Rust-аналог конструктора pawn + game mode биндинга: один вызов
/// создаёт entity с полным набором компонентов:
/// - Transform + Player + PawnController + Kinematics + MovementTuning
/// - Rapier: KinematicPositionBased + capsule + pawn collision groups
/// - Отдельный rig entity со SpringArm на эту пешку
///
/// Capsule: `capsule_y` принимает полувысоту ЦИЛИНДРА, поэтому из полной
/// полувысоты вычитается радиус (0.88 и 0.34 дают цилиндр 0.54).
pub fn spawn_player_pawn(
    commands: &mut Commands,
    config: &SimulationConfig,
    position: Vec3,
) -> Entity {
    let cylinder_half_height = (config.capsule_half_height - config.capsule_radius).max(0.0);

    let pawn = commands
        .spawn((
            Transform::from_translation(position),
            Player,
            PawnController {
                look_sensitivity: config.look_sensitivity,
                ..default()
            },
            Kinematics::at(position),
            MovementTuning {
                max_walk_speed: config.max_walk_speed,
                rotation_speed: config.rotation_speed,
            },
            // Rapier physics
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(cylinder_half_height, config.capsule_radius),
            collision::pawn_groups(),
        ))
        .id();

    // Camera rig — отдельный entity, follow в camera::sync_spring_arm
    commands.spawn((
        Transform::from_translation(position + Vec3::new(0.0, 0.0, config.arm_length)),
        SpringArm::new(pawn, config.arm_length),
    ));

    pawn
}
