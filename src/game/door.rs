use glam::UVec2;
use rand::Rng;
use strum_macros::AsRefStr;
use tracing::debug;

use crate::game::hitbox::Hitbox;

/// The arena edge the door sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// The exit. It has a fixed place from the start but only shows once every coin is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    edge: Edge,
    hitbox: Hitbox,
}

impl Door {
    /// Places a door of `size` flush against `edge`, `offset` pixels along it.
    ///
    /// The offset is clamped so the door never hangs past the end of the edge.
    pub fn on_edge(edge: Edge, offset: u32, size: UVec2, arena: UVec2) -> Self {
        let max = arena.saturating_sub(size);
        let pos = match edge {
            Edge::Top => UVec2::new(offset.min(max.x), 0),
            Edge::Bottom => UVec2::new(offset.min(max.x), max.y),
            Edge::Left => UVec2::new(0, offset.min(max.y)),
            Edge::Right => UVec2::new(max.x, offset.min(max.y)),
        };
        Self {
            edge,
            hitbox: Hitbox::new(pos.as_ivec2(), size),
        }
    }

    /// Picks an edge uniformly, then a uniform offset along it.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, size: UVec2, arena: UVec2) -> Self {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let max = arena.saturating_sub(size);
        let offset = match edge {
            Edge::Top | Edge::Bottom => rng.random_range(0..=max.x),
            Edge::Left | Edge::Right => rng.random_range(0..=max.y),
        };
        let door = Self::on_edge(edge, offset, size, arena);
        debug!(edge = edge.as_ref(), x = door.hitbox.pos.x, y = door.hitbox.pos.y, "Door placed");
        door
    }

    /// The door is visible exactly when no coins remain.
    pub fn is_visible(&self, remaining_coins: usize) -> bool {
        remaining_coins == 0
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }
}
