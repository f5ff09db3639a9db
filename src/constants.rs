//! This module contains all the constants used in the game.

use std::ops::Range;
use std::time::Duration;

use glam::UVec2;
use sdl2::pixels::Color;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the arena (and the window), in pixels.
pub const ARENA_SIZE: UVec2 = UVec2::new(800, 600);

/// The side length of the (square) player, in pixels.
pub const PLAYER_SIZE: u32 = 50;
/// How far the player moves along each held axis per tick, in pixels.
pub const PLAYER_SPEED: i32 = 5;

/// How many coins are scattered at startup.
pub const COIN_COUNT: usize = 10;
/// The side length of a coin, in pixels.
pub const COIN_SIZE: u32 = 20;

/// The footprint of the exit door. The same footprint is used on every edge.
pub const DOOR_SIZE: UVec2 = UVec2::new(60, 20);

/// How long the ambient track plays before cutting out, in milliseconds.
pub const MUSIC_PLAYING_RANGE: Range<u64> = 10_000..20_000;
/// How long the silence lasts before the track resumes, in milliseconds.
pub const MUSIC_STOPPED_RANGE: Range<u64> = 3_000..7_000;

/// How long the player may keep moving into a silence before the jumpscare fires, in milliseconds.
pub const JUMPSCARE_ARM_DELAY: u64 = 1_000;
/// How long the jumpscare image stays on screen, in milliseconds.
pub const JUMPSCARE_HOLD: u64 = 2_000;

pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::RGB(0, 0, 0);
    pub const PLAYER: Color = Color::RGB(255, 255, 255);
    pub const COIN: Color = Color::RGB(255, 215, 0);
    pub const DOOR: Color = Color::RGB(139, 69, 19);
}
