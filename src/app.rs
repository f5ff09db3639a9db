use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdl2::{AudioSubsystem, EventPump, Sdl};
use tracing::{debug, error, info, trace, warn};

use crate::asset;
use crate::audio::Audio;
use crate::config::{GameConfig, Options};
use crate::constants::LOOP_TIME;
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::input::{self, Bindings, InputEvent};
use crate::platform::{self, Clock, MonotonicClock};
use crate::render::CanvasSurface;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game<StdRng>,
    audio: Audio,
    surface: CanvasSurface,
    event_pump: EventPump,
    bindings: Bindings,
    clock: MonotonicClock,
    focused: bool,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL, loads every asset, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or `GameError::Asset`
    /// if an asset is missing or unreadable. Nothing is retried.
    pub fn new(options: &Options) -> GameResult<Self> {
        let config = GameConfig::default();

        debug!(root = %options.assets.display(), "Checking assets");
        asset::verify_all(&options.assets)?;

        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = config.arena.x, height = config.arena.y, "Creating game window");
        let window = video_subsystem
            .window("Hush", config.arena.x, config.arena.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(config.arena.x, config.arena.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let surface = CanvasSurface::new(canvas, &options.assets)?;

        debug!("Initializing audio subsystem");
        let mut audio = Audio::new(&options.assets)?;
        audio.set_mute(options.muted);

        let rng = match options.seed {
            Some(seed) => {
                info!(seed, "Using fixed seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let clock = MonotonicClock::new();
        let game = Game::new(config, rng, clock.now_ms(), &mut audio);

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            audio,
            surface,
            event_pump,
            bindings: Bindings::default(),
            clock,
            focused: true,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame: poll input, tick the game, draw, then sleep out the frame.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the player asked to quit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        formatter::increment_tick();

        self.focused = self.surface.is_focused();

        let events = input::poll(&mut self.event_pump, &self.bindings);
        if events.contains(&InputEvent::ToggleMute) {
            let mute = !self.audio.is_muted();
            self.audio.set_mute(mute);
            info!(muted = mute, "Toggled audio");
        }

        if self.game.tick(self.clock.now_ms(), &events, &mut self.audio) {
            return false;
        }

        if let Err(e) = self.game.render(&mut self.surface) {
            error!("Failed to draw game: {e}");
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
