use glam::{IVec2, UVec2};

use crate::direction::Direction;
use crate::game::hitbox::Hitbox;
use crate::input::{HeldDirections, InputEvent};

/// The player-controlled square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pos: IVec2,
    size: u32,
    speed: i32,
    held: HeldDirections,
    /// Largest legal top-left corner.
    bounds: IVec2,
}

impl Player {
    /// Places a player of side `size` at the center of `arena`.
    pub fn new(arena: UVec2, size: u32, speed: i32) -> Self {
        Self::at((arena / 2).as_ivec2(), arena, size, speed)
    }

    /// Places a player at `pos`, clamped into `arena`.
    pub fn at(pos: IVec2, arena: UVec2, size: u32, speed: i32) -> Self {
        let bounds = (arena.as_ivec2() - IVec2::splat(size as i32)).max(IVec2::ZERO);
        Self {
            pos: pos.clamp(IVec2::ZERO, bounds),
            size,
            speed,
            held: HeldDirections::empty(),
            bounds,
        }
    }

    /// Sets or clears a held-direction flag. Only key events affect the player.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(direction) => self.held.insert(direction.into()),
            InputEvent::KeyUp(direction) => self.held.remove(direction.into()),
            InputEvent::Quit | InputEvent::ToggleMute => {}
        }
    }

    /// Moves `speed` pixels along every held direction, then clamps into the arena.
    ///
    /// Axes are independent, so diagonal movement is full speed on both.
    pub fn update(&mut self) {
        let step: IVec2 = self.held.directions().map(Direction::as_ivec2).sum();
        self.pos = (self.pos + step * self.speed).clamp(IVec2::ZERO, self.bounds);
    }

    /// Whether any movement key is held, even if the player is pinned against a wall.
    pub fn is_moving(&self) -> bool {
        !self.held.is_empty()
    }

    pub fn held(&self) -> HeldDirections {
        self.held
    }

    pub fn position(&self) -> IVec2 {
        self.pos
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::square(self.pos, self.size)
    }
}
