//! Runtime configuration: the tunables the game is built from, and the command-line options.

use std::ops::Range;
use std::path::PathBuf;

use glam::UVec2;

use crate::constants::{
    ARENA_SIZE, COIN_COUNT, COIN_SIZE, DOOR_SIZE, JUMPSCARE_ARM_DELAY, JUMPSCARE_HOLD, MUSIC_PLAYING_RANGE,
    MUSIC_STOPPED_RANGE, PLAYER_SIZE, PLAYER_SPEED,
};

/// Every tunable the game logic reads. Defaults come from [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub arena: UVec2,
    pub player_size: u32,
    pub player_speed: i32,
    pub coin_count: usize,
    pub coin_size: u32,
    pub door_size: UVec2,
    pub music: MusicTimings,
    pub jumpscare: JumpscareTimings,
}

/// Interval ranges (milliseconds) for each phase of the ambient music cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicTimings {
    pub playing: Range<u64>,
    pub stopped: Range<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpscareTimings {
    /// Milliseconds of silence-while-moving tolerated before firing.
    pub arm_delay: u64,
    /// Milliseconds the jumpscare holds the screen.
    pub hold: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: ARENA_SIZE,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            coin_count: COIN_COUNT,
            coin_size: COIN_SIZE,
            door_size: DOOR_SIZE,
            music: MusicTimings::default(),
            jumpscare: JumpscareTimings::default(),
        }
    }
}

impl Default for MusicTimings {
    fn default() -> Self {
        Self {
            playing: MUSIC_PLAYING_RANGE,
            stopped: MUSIC_STOPPED_RANGE,
        }
    }
}

impl Default for JumpscareTimings {
    fn default() -> Self {
        Self {
            arm_delay: JUMPSCARE_ARM_DELAY,
            hold: JUMPSCARE_HOLD,
        }
    }
}

/// Options accepted on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory the music, sounds and images are loaded from.
    pub assets: PathBuf,
    /// Seed for a reproducible run. Drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Start with every channel at zero volume.
    pub muted: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            seed: None,
            muted: false,
        }
    }
}

impl Options {
    /// Parses options from an argument list (without the program name).
    ///
    /// Unknown arguments and malformed values are ignored with a warning rather than aborting startup.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" | "-a" => match args.next() {
                    Some(dir) => options.assets = PathBuf::from(dir),
                    None => tracing::warn!("--assets requires a directory"),
                },
                "--seed" | "-s" => match args.next().map(|value| value.parse::<u64>()) {
                    Some(Ok(seed)) => options.seed = Some(seed),
                    Some(Err(e)) => tracing::warn!("Ignoring invalid seed: {e}"),
                    None => tracing::warn!("--seed requires a value"),
                },
                "--muted" | "-m" => options.muted = true,
                other => tracing::warn!(argument = other, "Ignoring unknown argument"),
            }
        }

        options
    }
}
