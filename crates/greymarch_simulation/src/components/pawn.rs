//! Компоненты пешки: наблюдаемая кинематика, tunables движения, controller facing

use bevy::prelude::*;

/// Предел pitch контроллера (±80°, защита от camera flip)
pub const PITCH_LIMIT_RADIANS: f32 = 80.0 * std::f32::consts::PI / 180.0;

/// Наблюдаемая кинематика пешки (finite-difference, не авторитативная)
///
/// Все поля пересчитываются каждый fixed tick из дельты позиций.
/// Источник истины по позиции — Transform после collision resolve,
/// поэтому оценка всегда отстаёт от реального движения на один тик.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Kinematics {
    /// Текущая скорость (m/s), производная от позиции
    pub current_velocity: Vec3,
    /// Текущее ускорение (m/s²), производная от скорости
    pub current_acceleration: Vec3,
    /// Позиция на предыдущем тике
    pub previous_location: Vec3,
    /// Скорость на предыдущем тике
    pub previous_velocity: Vec3,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Kinematics {
    /// Seed предыдущей позиции spawn-позицией — иначе первый тик даст
    /// огромный скачок скорости от Vec3::ZERO
    pub fn at(position: Vec3) -> Self {
        Self {
            current_velocity: Vec3::ZERO,
            current_acceleration: Vec3::ZERO,
            previous_location: position,
            previous_velocity: Vec3::ZERO,
        }
    }

    /// Один шаг finite-difference оценки
    ///
    /// V = (P - P_prev) / dt, A = (V - V_prev) / dt.
    /// dt <= 0 — строгий no-op, состояние не трогаем.
    pub fn step(&mut self, position: Vec3, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let velocity = (position - self.previous_location) / dt;
        self.current_acceleration = (velocity - self.previous_velocity) / dt;
        self.current_velocity = velocity;
        self.previous_location = position;
        self.previous_velocity = velocity;
    }
}

/// Tunables движения пешки
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MovementTuning {
    /// Максимальная скорость ходьбы (m/s)
    pub max_walk_speed: f32,
    /// Скорость интерполяции разворота к направлению движения (1/s)
    pub rotation_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_walk_speed: 5.0,  // 5 m/s (средняя скорость ходьбы)
            rotation_speed: 10.0,
        }
    }
}

/// Controller facing пешки (yaw/pitch, drives движение и spring arm)
///
/// Отдельный компонент: пешка БЕЗ PawnController не реагирует на input
/// (query-фильтр даёт guard "нет контроллера" бесплатно).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PawnController {
    /// Yaw (радианы, unbounded — wrap естественный)
    pub yaw: f32,
    /// Pitch (радианы, clamp ±[`PITCH_LIMIT_RADIANS`])
    pub pitch: f32,
    /// Чувствительность look input (rad/s на единицу input)
    pub look_sensitivity: f32,
}

impl Default for PawnController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            look_sensitivity: 2.5,
        }
    }
}

impl PawnController {
    /// Применяет look delta: yaw свободный, pitch clamp ±80°
    pub fn apply_look(&mut self, delta: Vec2, dt: f32) {
        self.yaw -= delta.x * self.look_sensitivity * dt;
        self.pitch = (self.pitch - delta.y * self.look_sensitivity * dt)
            .clamp(-PITCH_LIMIT_RADIANS, PITCH_LIMIT_RADIANS);
    }

    /// Полный facing контроллера (yaw + pitch) — для spring arm
    pub fn facing(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }
}
