//! Third-person camera rig component
//!
//! Rig — отдельный entity, follow логика в [`crate::camera::sync_spring_arm`].

use bevy::prelude::*;

/// Spring arm: держит камеру на фиксированном offset позади target пешки,
/// ориентация следует за controller facing (не за визуальным yaw пешки).
///
/// Collision test самого arm не делаем — это capability host-рендера,
/// headless симуляции он не нужен.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpringArm {
    /// Пешка за которой следует rig
    pub target: Entity,
    /// Длина arm (метры)
    pub arm_length: f32,
}

impl SpringArm {
    pub fn new(target: Entity, arm_length: f32) -> Self {
        Self { target, arm_length }
    }
}
