//! Camera domain — third-person spring arm follow
//!
//! Rig — отдельный entity со [`SpringArm`], позиция и ориентация
//! пересчитываются каждый fixed tick из controller facing target-пешки.
//! Rendering камеры нет (headless) — host слой вешает свою камеру на
//! Transform этого rig entity.

use bevy::prelude::*;

use crate::components::{PawnController, SpringArm};
use crate::pawn::systems::align_rotation_to_velocity;

/// Система: spring arm follow
///
/// Rig ставится на `arm_length` ПОЗАДИ пешки вдоль controller facing
/// (yaw + pitch), ориентация rig = facing, то есть камера всегда
/// смотрит на пешку. Facing контроллера, не визуальный yaw пешки:
/// пешка может довернуться к скорости, камера при этом не дёргается.
pub fn sync_spring_arm(
    mut rigs: Query<(&SpringArm, &mut Transform)>,
    targets: Query<(&Transform, &PawnController), Without<SpringArm>>,
) {
    for (arm, mut rig_transform) in rigs.iter_mut() {
        // Target пешки мог despawn-иться или потерять контроллер — no-op
        let Ok((target_transform, controller)) = targets.get(arm.target) else {
            continue;
        };
        let facing = controller.facing();
        rig_transform.translation =
            target_transform.translation + facing * Vec3::new(0.0, 0.0, arm.arm_length);
        rig_transform.rotation = facing;
    }
}

/// Plugin camera rig
pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        // После разворота пешки — rig видит финальное состояние тика
        app.add_systems(
            FixedUpdate,
            sync_spring_arm.after(align_rotation_to_velocity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rig_offset_behind_facing() {
        // Контроллер смотрит вдоль -Z (yaw 0) — rig должен стоять на +Z
        let controller = PawnController::default();
        let facing = controller.facing();
        let offset = facing * Vec3::new(0.0, 0.0, 3.0);
        assert!((offset - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);

        // Камера из rig смотрит на пешку: forward facing = -offset направление
        let forward = facing * Vec3::NEG_Z;
        assert!((forward + offset.normalize()).length() < 1e-5);
    }
}
