//! Player control marker component

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Input системы используют `With<Player>` filter — только помеченные
/// пешки получают Move/Look события. В single-player режиме обычно
/// один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
