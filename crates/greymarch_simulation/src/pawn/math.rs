//! Чистая математика пешки: направление движения, slide, разворот
//!
//! Все функции без ECS state — тестируются напрямую, системы в
//! `systems.rs` только тонкие обёртки над ними.

use bevy::prelude::*;

/// Порог квадрата скорости для разворота к направлению движения.
/// Квадрат — чтобы не брать корень в частом случае "стоим на месте".
pub const SPEED_ALIGN_THRESHOLD_SQ: f32 = 1.0;

/// Epsilon для отбрасывания почти нулевого move input
pub const INPUT_EPSILON_SQ: f32 = 1e-6;

/// Зазор при sweep-остановке (метры), чтобы не застревать в контакте
pub const CONTACT_SKIN: f32 = 0.001;

/// Горизонтальный базис controller yaw: (forward, right)
///
/// Bevy конвенция: forward = -Z при yaw 0.
pub fn yaw_basis(yaw: f32) -> (Vec3, Vec3) {
    let rotation = Quat::from_rotation_y(yaw);
    (rotation * Vec3::NEG_Z, rotation * Vec3::X)
}

/// Направление движения из 2D оси input и controller yaw
///
/// Взвешенная сумма forward/right базиса, нормализованная — диагональный
/// input не быстрее движения вдоль одной оси. Почти нулевая ось → ZERO.
pub fn movement_direction(axis: Vec2, yaw: f32) -> Vec3 {
    if axis.length_squared() <= INPUT_EPSILON_SQ {
        return Vec3::ZERO;
    }
    let (forward, right) = yaw_basis(yaw);
    (forward * axis.y + right * axis.x).normalize_or_zero()
}

/// Slide вектор после blocking hit
///
/// Нормаль сплющивается в горизонтальную плоскость (Y обнуляется,
/// нормализация), исходное смещение проецируется на плоскость
/// перпендикулярную ей. Вертикальная нормаль (пол/потолок) после
/// сплющивания вырождается — тогда slide нет.
pub fn slide_vector(displacement: Vec3, hit_normal: Vec3) -> Vec3 {
    let planar = Vec3::new(hit_normal.x, 0.0, hit_normal.z);
    match planar.try_normalize() {
        Some(normal) => displacement - normal * displacement.dot(normal),
        None => Vec3::ZERO,
    }
}

/// Разворот пешки к направлению скорости
///
/// Выше порога скорости — slerp текущего yaw к yaw горизонтальной
/// компоненты скорости, фактор `rotation_speed * dt` (frame-rate
/// independent). Ниже порога rotation не трогаем (без snap-back).
/// Оба кватерниона yaw-only, поэтому pitch/roll пешки всегда ноль.
pub fn face_velocity(current: Quat, velocity: Vec3, rotation_speed: f32, dt: f32) -> Quat {
    if velocity.length_squared() <= SPEED_ALIGN_THRESHOLD_SQ {
        return current;
    }
    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
    let Some(direction) = horizontal.try_normalize() else {
        return current;
    };
    let target_yaw = (-direction.x).atan2(-direction.z);
    let target = Quat::from_rotation_y(target_yaw);
    let factor = (rotation_speed * dt).clamp(0.0, 1.0);
    current.slerp(target, factor).normalize()
}
