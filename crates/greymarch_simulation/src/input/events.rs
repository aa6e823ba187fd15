//! Input события пешки

use bevy::prelude::*;

/// Event: 2D ось движения от host input слоя
///
/// Конвенция: `axis.x` = вправо, `axis.y` = вперёд (в системе координат
/// controller yaw). Host нормализацию может не делать — move resolver
/// нормализует сам (диагональ не быстрее одиночной оси).
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveInput {
    pub axis: Vec2,
}

/// Event: look delta (мышь/стик) от host input слоя
///
/// `delta.x` — горизонтальный поворот, `delta.y` — вертикальный.
/// Точный ноль по обеим осям игнорируется обработчиком.
#[derive(Event, Debug, Clone, Copy)]
pub struct LookInput {
    pub delta: Vec2,
}
