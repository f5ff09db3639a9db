//! This module handles the audio playback for the game.
//!
//! The game logic only talks to [`AudioSink`]; [`Audio`] is the SDL2_mixer implementation of it.
use std::path::Path;

use sdl2::{
    mixer::{self, Chunk, InitFlag, LoaderRWops, Music, AUDIO_S16LSB},
    rwops::RWops,
};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount, EnumIter};
use tracing::{debug, trace, warn};

use crate::asset::Asset;
use crate::error::{AssetError, GameError, GameResult};

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 4;
const DEFAULT_VOLUME: u8 = 64;

/// The looping background tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Track {
    Ambient,
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Sound {
    /// Cue played the moment the ambient track cuts out.
    MusicStop,
    Pickup,
    Jumpscare,
}

/// The audio capability the game drives.
pub trait AudioSink {
    /// Starts `track`, looping forever, replacing whatever music was playing.
    fn load_and_loop(&mut self, track: Track);
    /// Stops the music. One-shot sounds keep playing.
    fn stop(&mut self);
    fn play_one_shot(&mut self, sound: Sound);
}

/// The SDL2_mixer audio backend.
pub struct Audio {
    music: Music<'static>,
    sounds: micromap::Map<Sound, Chunk, { Sound::COUNT }>,
    state: AudioState,
    // Dropped last so the decoders outlive the music and chunks
    _mixer_context: mixer::Sdl2MixerContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
}

impl Audio {
    /// Opens the audio device and decodes every track and sound under `root`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if the device cannot be opened, or `GameError::Asset`
    /// if any file is missing or cannot be decoded. Both are fatal at startup.
    pub fn new(root: &Path) -> GameResult<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, 2, 1024)
            .map_err(|e| GameError::Sdl(format!("Failed to open audio: {e}")))?;
        mixer::allocate_channels(AUDIO_CHANNELS);

        let mixer_context = mixer::init(InitFlag::MP3 | InitFlag::OGG)
            .map_err(|e| GameError::Sdl(format!("Failed to initialize SDL2_mixer: {e}")))?;

        let music = Self::load_music(root, Track::Ambient)?;

        let mut sounds = micromap::Map::new();
        for sound in Sound::iter() {
            sounds.insert(sound, Self::load_sound(root, sound)?);
            trace!(sound = sound.as_ref(), "Loaded sound");
        }

        let mut audio = Audio {
            music,
            sounds,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
            _mixer_context: mixer_context,
        };
        audio.apply_volume(DEFAULT_VOLUME);

        debug!(sounds = Sound::COUNT, "Audio initialized");
        Ok(audio)
    }

    fn load_music(root: &Path, track: Track) -> Result<Music<'static>, AssetError> {
        let asset = Asset::Music(track);
        let path = asset.resolve(root);
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }
        Music::from_file(&path).map_err(|reason| AssetError::Decode { path, reason })
    }

    fn load_sound(root: &Path, sound: Sound) -> Result<Chunk, AssetError> {
        let asset = Asset::Sound(sound);
        let data = asset.get_bytes(root)?;
        let decode_error = |reason: String| AssetError::Decode {
            path: asset.resolve(root),
            reason,
        };
        let rwops = RWops::from_bytes(&data).map_err(decode_error)?;
        rwops.load_wav().map_err(decode_error)
    }

    fn apply_volume(&mut self, volume: u8) {
        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(volume as i32);
        }
        Music::set_volume(volume as i32);
    }

    /// Instantly mutes or unmutes the music and every channel.
    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                self.apply_volume(0);
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                self.apply_volume(previous_volume);
            }
            _ => {}
        }
    }

    pub fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }
}

impl AudioSink for Audio {
    fn load_and_loop(&mut self, track: Track) {
        match self.music.play(-1) {
            Ok(()) => debug!(track = track.as_ref(), "Looping music"),
            Err(e) => warn!(track = track.as_ref(), "Could not play music: {e}"),
        }
    }

    fn stop(&mut self) {
        Music::halt();
        debug!("Music halted");
    }

    fn play_one_shot(&mut self, sound: Sound) {
        if let Some(chunk) = self.sounds.get(&sound) {
            match mixer::Channel::all().play(chunk, 0) {
                Ok(channel) => trace!(sound = sound.as_ref(), ?channel, "Playing sound"),
                Err(e) => warn!(sound = sound.as_ref(), "Could not play sound: {e}"),
            }
        }
    }
}
