#![allow(dead_code)]

use glam::{IVec2, UVec2};
use hush::{
    audio::{AudioSink, Sound, Track},
    config::GameConfig,
    error::RenderError,
    game::{
        coins::CoinField,
        door::{Door, Edge},
        Game,
    },
    render::{Image, RenderSurface},
};
use rand::{rngs::StdRng, SeedableRng};
use sdl2::{pixels::Color, rect::Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Loop(Track),
    Stop,
    OneShot(Sound),
}

/// Records every audio request instead of playing it.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl RecordingAudio {
    pub fn count(&self, call: AudioCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn load_and_loop(&mut self, track: Track) {
        self.calls.push(AudioCall::Loop(track));
    }

    fn stop(&mut self) {
        self.calls.push(AudioCall::Stop);
    }

    fn play_one_shot(&mut self, sound: Sound) {
        self.calls.push(AudioCall::OneShot(sound));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Fill(Color, Rect),
    Blit(Image),
    Present,
}

/// Records every draw request instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn fills(&self, color: Color) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill(c, rect) if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, color: Color, rect: Rect) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Fill(color, rect));
        Ok(())
    }

    fn blit_fullscreen(&mut self, image: Image) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Blit(image));
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A door tucked into the top-left corner, out of everyone's way.
pub fn corner_door(config: &GameConfig) -> Door {
    Door::on_edge(Edge::Top, 0, config.door_size, config.arena)
}

/// A game with the given coins, started at time 0.
pub fn game_with_coins(config: GameConfig, coins: &[(i32, i32)], seed: u64) -> (Game<StdRng>, RecordingAudio) {
    let mut audio = RecordingAudio::default();
    let field = CoinField::from_positions(coins.iter().map(|&(x, y)| IVec2::new(x, y)), config.coin_size);
    let door = corner_door(&config);
    let game = Game::with_layout(config, rng(seed), 0, field, door, &mut audio);
    (game, audio)
}

/// A small arena where the player starts at (150, 150).
pub fn small_arena() -> GameConfig {
    GameConfig {
        arena: UVec2::new(300, 300),
        player_speed: 10,
        ..GameConfig::default()
    }
}
