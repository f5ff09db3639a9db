//! This module contains the main game logic and state.
//!
//! [`Game`] owns every piece of game state and runs one fixed-order tick:
//! input, player movement, the music cycle, the jumpscare check, then coin pickup.
//! It never touches SDL directly; audio and drawing go through [`AudioSink`] and [`RenderSurface`].

pub mod coins;
pub mod door;
pub mod hitbox;
pub mod jumpscare;
pub mod music;
pub mod player;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::audio::{AudioSink, Sound, Track};
use crate::config::GameConfig;
use crate::constants::colors;
use crate::error::RenderError;
use crate::input::InputEvent;
use crate::render::{Image, RenderSurface};

use self::coins::CoinField;
use self::door::Door;
use self::jumpscare::JumpscareManager;
use self::music::{MusicManager, MusicTransition};
use self::player::Player;

/// What the loop is doing this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// The jumpscare image is on screen; the world is frozen until `resume_at`.
    Cutscene { resume_at: u64 },
}

pub struct Game<R> {
    config: GameConfig,
    player: Player,
    music: MusicManager<R>,
    jumpscare: JumpscareManager,
    coins: CoinField,
    door: Door,
    state: LoopState,
}

impl<R: Rng> Game<R> {
    /// Lays out a fresh arena from `rng` and starts the ambient track.
    ///
    /// The same random source places the coins and the door, then drives the music cycle.
    pub fn new(config: GameConfig, mut rng: R, now: u64, audio: &mut impl AudioSink) -> Self {
        let coins = CoinField::generate(&mut rng, config.coin_count, config.coin_size, config.arena);
        let door = Door::generate(&mut rng, config.door_size, config.arena);
        Self::with_layout(config, rng, now, coins, door, audio)
    }

    /// Starts a game over a fixed coin and door layout.
    pub fn with_layout(
        config: GameConfig,
        rng: R,
        now: u64,
        coins: CoinField,
        door: Door,
        audio: &mut impl AudioSink,
    ) -> Self {
        let player = Player::new(config.arena, config.player_size, config.player_speed);
        let music = MusicManager::new(config.music.clone(), rng, now);
        let jumpscare = JumpscareManager::new(config.jumpscare.arm_delay);

        audio.load_and_loop(Track::Ambient);
        info!(coins = coins.len(), "Game started");

        Self {
            config,
            player,
            music,
            jumpscare,
            coins,
            door,
            state: LoopState::Running,
        }
    }

    /// Runs one tick at time `now` (milliseconds) with the events polled this frame.
    ///
    /// Returns `true` if the player asked to quit. Quit is honored even during the cutscene.
    pub fn tick(&mut self, now: u64, events: &[InputEvent], audio: &mut impl AudioSink) -> bool {
        let mut exit = false;
        for &event in events {
            exit |= event == InputEvent::Quit;
            // Held keys keep tracking during the cutscene so nothing sticks once it ends
            self.player.handle_input(event);
        }
        if exit {
            info!("Exit requested");
            return true;
        }

        if let LoopState::Cutscene { resume_at } = self.state {
            if now < resume_at {
                return false;
            }
            self.jumpscare.reset();
            self.state = LoopState::Running;
            debug!("Jumpscare finished, resuming");
        }

        self.player.update();

        match self.music.update(now) {
            Some(MusicTransition::Stopped) => {
                audio.stop();
                audio.play_one_shot(Sound::MusicStop);
            }
            Some(MusicTransition::Resumed) => audio.load_and_loop(Track::Ambient),
            None => {}
        }

        if self
            .jumpscare
            .update(self.music.is_playing(), self.player.is_moving(), now)
        {
            audio.play_one_shot(Sound::Jumpscare);
            self.state = LoopState::Cutscene {
                resume_at: now + self.config.jumpscare.hold,
            };
        }

        let collected = self.coins.collect(&self.player.hitbox());
        for _ in 0..collected {
            audio.play_one_shot(Sound::Pickup);
        }
        if collected > 0 {
            debug!(collected, remaining = self.coins.len(), "Coins picked up");
            if self.coins.is_empty() {
                info!(edge = self.door.edge().as_ref(), "Last coin collected, door revealed");
            }
        }

        trace!(x = self.player.position().x, y = self.player.position().y, "Tick complete");
        false
    }
}

impl<R> Game<R> {
    /// Draws the current frame and presents it.
    pub fn render(&self, surface: &mut impl RenderSurface) -> Result<(), RenderError> {
        match self.state {
            LoopState::Cutscene { .. } => surface.blit_fullscreen(Image::Jumpscare)?,
            LoopState::Running => {
                surface.clear(colors::BACKGROUND);
                surface.fill_rect(colors::PLAYER, self.player.hitbox().as_rect())?;
                if self.door_visible() {
                    surface.fill_rect(colors::DOOR, self.door.hitbox().as_rect())?;
                }
                for coin in self.coins.iter() {
                    surface.fill_rect(colors::COIN, coin.as_rect())?;
                }
            }
        }
        surface.present();
        Ok(())
    }

    pub fn door_visible(&self) -> bool {
        self.door.is_visible(self.coins.len())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn music(&self) -> &MusicManager<R> {
        &self.music
    }

    pub fn jumpscare(&self) -> &JumpscareManager {
        &self.jumpscare
    }

    pub fn coins(&self) -> &CoinField {
        &self.coins
    }

    pub fn door(&self) -> &Door {
        &self.door
    }

    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    pub fn jumpscares_fired(&self) -> u32 {
        self.jumpscare.fired()
    }
}
