//! World domain — статическая тестовая арена
//!
//! Пол и четыре стены (fixed cuboid коллайдеры), чтобы sweep'ам пешки
//! было обо что останавливаться в headless demo и integration тестах.
//! Никакого рендера и ассетов — только collision геометрия.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::collision;

/// Полуразмер арены (метры): стены на ±[`ARENA_HALF_EXTENT`]
pub const ARENA_HALF_EXTENT: f32 = 10.0;

/// Высота стен (полувысота cuboid'а)
const WALL_HALF_HEIGHT: f32 = 2.0;

/// Толщина стен (полутолщина cuboid'а)
const WALL_HALF_THICKNESS: f32 = 0.5;

/// Marker статической геометрии арены
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ArenaGeometry;

/// Spawn тестовой арены: пол (top на y=0) + 4 стены по периметру
pub fn spawn_test_arena(commands: &mut Commands) {
    // Пол: верхняя грань на y = 0
    spawn_block(
        commands,
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(ARENA_HALF_EXTENT + WALL_HALF_THICKNESS * 2.0, 0.5, ARENA_HALF_EXTENT + WALL_HALF_THICKNESS * 2.0),
    );

    // Стены: внутренняя грань на ±ARENA_HALF_EXTENT
    let wall_offset = ARENA_HALF_EXTENT + WALL_HALF_THICKNESS;
    spawn_block(
        commands,
        Vec3::new(wall_offset, WALL_HALF_HEIGHT, 0.0),
        Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, ARENA_HALF_EXTENT),
    );
    spawn_block(
        commands,
        Vec3::new(-wall_offset, WALL_HALF_HEIGHT, 0.0),
        Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, ARENA_HALF_EXTENT),
    );
    spawn_block(
        commands,
        Vec3::new(0.0, WALL_HALF_HEIGHT, wall_offset),
        Vec3::new(ARENA_HALF_EXTENT, WALL_HALF_HEIGHT, WALL_HALF_THICKNESS),
    );
    spawn_block(
        commands,
        Vec3::new(0.0, WALL_HALF_HEIGHT, -wall_offset),
        Vec3::new(ARENA_HALF_EXTENT, WALL_HALF_HEIGHT, WALL_HALF_THICKNESS),
    );
}

fn spawn_block(commands: &mut Commands, position: Vec3, half_extents: Vec3) {
    commands.spawn((
        Transform::from_translation(position),
        ArenaGeometry,
        RigidBody::Fixed,
        Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
        collision::environment_groups(),
    ));
}
