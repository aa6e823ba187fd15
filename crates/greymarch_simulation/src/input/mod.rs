//! Input events от host слоя
//!
//! Архитектура:
//! - Host (winit app, Godot bridge, test harness) читает устройства
//!   и пишет события в ECS
//! - Симуляция устройств не касается — только события
//!
//! Flow:
//! 1. Host каждый frame emit MoveInput / LookInput
//! 2. Pawn системы (FixedUpdate) читают события и применяют движение/facing

pub mod events;

pub use events::*;
