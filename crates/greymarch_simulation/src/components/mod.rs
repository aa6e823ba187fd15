//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - pawn: состояние пешки (Kinematics, MovementTuning, PawnController)
//! - camera: third-person rig (SpringArm)
//! - player: player control marker (Player)

pub mod camera;
pub mod pawn;
pub mod player;

// Re-exports для удобного импорта
pub use camera::*;
pub use pawn::*;
pub use player::*;
