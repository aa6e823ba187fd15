//! Collision Groups Constants
//!
//! Rapier collision groups — centralised constants для всего проекта.
//!
//! ## Архитектура:
//! - **Memberships:** на каком слое находится объект
//! - **Filter:** с какими слоями объект коллидирует
//!
//! ## Слои:
//! - Group 1: Reserved
//! - Group 2: Pawns (kinematic capsules — player)
//! - Group 3: Environment (fixed cuboids — ground, walls)

use bevy_rapier3d::prelude::{CollisionGroups, Group};

/// Group 2: Pawns (kinematic capsules)
pub const GROUP_PAWN: Group = Group::GROUP_2;

/// Group 3: Environment (ground, walls, obstacles)
pub const GROUP_ENVIRONMENT: Group = Group::GROUP_3;

/// Pawn профиль: пешка коллидирует с другими пешками и окружением
pub fn pawn_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_PAWN, GROUP_PAWN | GROUP_ENVIRONMENT)
}

/// Environment профиль: статика блокирует всё
pub fn environment_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_ENVIRONMENT, Group::ALL)
}
