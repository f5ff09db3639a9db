use glam::{IVec2, UVec2};
use sdl2::rect::Rect;

/// An axis-aligned bounding box in arena pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub pos: IVec2,
    pub size: UVec2,
}

impl Hitbox {
    pub const fn new(pos: IVec2, size: UVec2) -> Self {
        Self { pos, size }
    }

    pub const fn square(pos: IVec2, side: u32) -> Self {
        Self::new(pos, UVec2::splat(side))
    }

    /// The corner opposite `pos`.
    pub fn max(&self) -> IVec2 {
        self.pos + self.size.as_ivec2()
    }

    /// Closed-interval overlap test: boxes that only share an edge or a corner still intersect.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.pos.cmple(other.max()).all() && other.pos.cmple(self.max()).all()
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}
