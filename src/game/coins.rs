use glam::{IVec2, UVec2};
use rand::Rng;
use tracing::{debug, trace};

use crate::game::hitbox::Hitbox;

/// The coins still lying in the arena. Order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinField {
    coins: Vec<IVec2>,
    size: u32,
}

impl CoinField {
    /// Builds a field from explicit positions.
    pub fn from_positions(positions: impl IntoIterator<Item = IVec2>, size: u32) -> Self {
        Self {
            coins: positions.into_iter().collect(),
            size,
        }
    }

    /// Scatters `count` coins uniformly over the arena. Coins may overlap each other.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, size: u32, arena: UVec2) -> Self {
        let max = arena.saturating_sub(UVec2::splat(size)).as_ivec2();
        let coins = (0..count)
            .map(|_| IVec2::new(rng.random_range(0..=max.x), rng.random_range(0..=max.y)))
            .collect::<Vec<_>>();
        debug!(count, "Coins scattered");
        Self { coins, size }
    }

    /// Removes every coin touching `hitbox` and returns how many were picked up.
    pub fn collect(&mut self, hitbox: &Hitbox) -> usize {
        let size = self.size;
        let before = self.coins.len();
        self.coins.retain(|&pos| {
            let touching = Hitbox::square(pos, size).intersects(hitbox);
            if touching {
                trace!(x = pos.x, y = pos.y, "Coin collected");
            }
            !touching
        });
        before - self.coins.len()
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn iter(&self) -> impl Iterator<Item = Hitbox> + '_ {
        self.coins.iter().map(|&pos| Hitbox::square(pos, self.size))
    }
}
