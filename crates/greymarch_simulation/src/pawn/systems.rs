//! Per-tick системы пешки
//!
//! Порядок внутри FixedUpdate (chain в [`super::PawnPlugin`]):
//! 1. apply_look_input  — controller facing из LookInput
//! 2. apply_move_input  — move-and-slide из MoveInput (sweep через Rapier)
//! 3. update_kinematics — finite-difference оценка V/A по post-collision позиции
//! 4. align_rotation_to_velocity — разворот пешки к направлению движения
//!
//! Все guard-условия (нет контроллера, нулевой input, dt <= 0) — тихие
//! no-op'ы: ошибок и panic в этом слое нет.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{Kinematics, MovementTuning, PawnController, Player};
use crate::input::{LookInput, MoveInput};

use super::math::{
    face_velocity, movement_direction, slide_vector, CONTACT_SKIN, INPUT_EPSILON_SQ,
};

/// Система: применение look delta к controller facing
///
/// Yaw unbounded, pitch clamp ±80° внутри [`PawnController::apply_look`].
pub fn apply_look_input(
    mut events: EventReader<LookInput>,
    time: Res<Time<Fixed>>,
    mut controllers: Query<&mut PawnController, With<Player>>,
) {
    let dt = time.delta_secs();
    for event in events.read() {
        // Точный ноль по обеим осям — контракт look controller, no-op
        if event.delta == Vec2::ZERO {
            continue;
        }
        for mut controller in controllers.iter_mut() {
            controller.apply_look(event.delta, dt);
        }
    }
}

/// Система: move-and-slide resolve
///
/// Направление строится из yaw-базиса контроллера, смещение
/// `direction * max_walk_speed * dt` проверяется capsule sweep'ом.
/// При blocking hit — ровно одна slide попытка вдоль плоскости
/// перпендикулярной горизонтальной компоненте нормали. Без рекурсии:
/// вогнутый угол может съесть остаток смещения, это принятая цена
/// по сравнению с итеративным constraint solver.
pub fn apply_move_input(
    mut events: EventReader<MoveInput>,
    rapier: ReadRapierContext,
    time: Res<Time<Fixed>>,
    mut pawns: Query<
        (Entity, &mut Transform, &Collider, &PawnController, &MovementTuning),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    // Несколько MoveInput за тик суммируются в одну ось → один resolve
    let mut axis = Vec2::ZERO;
    let mut received = false;
    for event in events.read() {
        axis += event.axis;
        received = true;
    }
    if !received || axis.length_squared() <= INPUT_EPSILON_SQ {
        return;
    }

    let Ok(context) = rapier.single() else {
        return;
    };

    for (entity, mut transform, collider, controller, tuning) in pawns.iter_mut() {
        let direction = movement_direction(axis, controller.yaw);
        if direction == Vec3::ZERO {
            continue;
        }
        let displacement = direction * tuning.max_walk_speed * dt;

        let (allowed, hit_normal) = sweep(
            &context,
            entity,
            collider,
            transform.translation,
            transform.rotation,
            displacement,
        );
        transform.translation += allowed;

        // Single-slide: проекция ИСХОДНОГО смещения, одна попытка
        if let Some(normal) = hit_normal {
            let slide = slide_vector(displacement, normal);
            if slide.length_squared() > 0.0 {
                let (slide_allowed, _) = sweep(
                    &context,
                    entity,
                    collider,
                    transform.translation,
                    transform.rotation,
                    slide,
                );
                transform.translation += slide_allowed;
            }
        }
    }
}

/// Capsule sweep через Rapier query pipeline
///
/// Возвращает допустимое смещение и нормаль контакта при blocking hit
/// (`Some(Vec3::ZERO)` если rapier не дал impact geometry — slide тогда
/// вырождается в стоп). Свой коллайдер исключён из фильтра.
fn sweep(
    context: &RapierContext,
    pawn: Entity,
    collider: &Collider,
    position: Vec3,
    rotation: Quat,
    displacement: Vec3,
) -> (Vec3, Option<Vec3>) {
    let length = displacement.length();
    if length <= f32::EPSILON {
        return (Vec3::ZERO, None);
    }

    let filter = QueryFilter::default()
        .exclude_collider(pawn)
        .groups(crate::collision::pawn_groups());
    let options = ShapeCastOptions {
        max_time_of_impact: 1.0,
        target_distance: 0.0,
        stop_at_penetration: false,
        compute_impact_geometry_on_penetration: true,
    };

    match context.cast_shape(position, rotation, displacement, &*collider.raw, options, filter) {
        None => (displacement, None),
        Some((_, hit)) => {
            // Отступ на skin вдоль смещения — контакт не зажимает следующий sweep
            let free = (hit.time_of_impact - CONTACT_SKIN / length).clamp(0.0, 1.0);
            let normal = hit.details.map(|details| details.normal1).unwrap_or(Vec3::ZERO);
            (displacement * free, Some(normal))
        }
    }
}

/// Система: finite-difference оценка скорости/ускорения
///
/// Читает Transform ПОСЛЕ move resolve того же тика — оценка отражает
/// фактическое post-collision движение и отстаёт от истины на один тик.
pub fn update_kinematics(
    time: Res<Time<Fixed>>,
    mut query: Query<(&Transform, &mut Kinematics)>,
) {
    let dt = time.delta_secs();
    for (transform, mut kinematics) in query.iter_mut() {
        kinematics.step(transform.translation, dt);
    }
}

/// Система: разворот пешки к направлению движения
///
/// Только yaw — pitch и roll пешки всегда ноль (см. [`face_velocity`]).
pub fn align_rotation_to_velocity(
    time: Res<Time<Fixed>>,
    mut query: Query<(&mut Transform, &Kinematics, &MovementTuning)>,
) {
    let dt = time.delta_secs();
    for (mut transform, kinematics, tuning) in query.iter_mut() {
        transform.rotation = face_velocity(
            transform.rotation,
            kinematics.current_velocity,
            tuning.rotation_speed,
            dt,
        );
    }
}
