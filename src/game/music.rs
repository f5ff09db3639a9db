//! The ambient music cycle: long stretches of music broken up by short, unpredictable silences.

use rand::Rng;
use tracing::debug;

use crate::config::MusicTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicPhase {
    Playing,
    Stopped,
}

/// A phase change reported by [`MusicManager::update`]. The owner performs the audio side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTransition {
    /// The track cut out; stop it and play the stop cue.
    Stopped,
    /// The silence ended; resume looping the track.
    Resumed,
}

/// Drives the Playing ⇄ Stopped cycle purely from elapsed time and its random source.
#[derive(Debug)]
pub struct MusicManager<R> {
    phase: MusicPhase,
    last_transition: u64,
    current_interval: u64,
    timings: MusicTimings,
    rng: R,
}

impl<R: Rng> MusicManager<R> {
    /// Starts in the Playing phase at `now`.
    pub fn new(timings: MusicTimings, mut rng: R, now: u64) -> Self {
        let current_interval = rng.random_range(timings.playing.clone());
        debug!(interval_ms = current_interval, "Music cycle started");
        Self {
            phase: MusicPhase::Playing,
            last_transition: now,
            current_interval,
            timings,
            rng,
        }
    }

    /// Advances the cycle. At most one transition happens per call.
    pub fn update(&mut self, now: u64) -> Option<MusicTransition> {
        if now.saturating_sub(self.last_transition) <= self.current_interval {
            return None;
        }

        let (phase, range, transition) = match self.phase {
            MusicPhase::Playing => (MusicPhase::Stopped, self.timings.stopped.clone(), MusicTransition::Stopped),
            MusicPhase::Stopped => (MusicPhase::Playing, self.timings.playing.clone(), MusicTransition::Resumed),
        };

        self.phase = phase;
        self.last_transition = now;
        self.current_interval = self.rng.random_range(range);
        debug!(?phase, interval_ms = self.current_interval, "Music phase changed");

        Some(transition)
    }
}

impl<R> MusicManager<R> {
    pub fn is_playing(&self) -> bool {
        self.phase == MusicPhase::Playing
    }

    pub fn phase(&self) -> MusicPhase {
        self.phase
    }

    pub fn last_transition(&self) -> u64 {
        self.last_transition
    }

    /// How long the current phase lasts, in milliseconds.
    pub fn current_interval(&self) -> u64 {
        self.current_interval
    }

    /// The earliest tick time at which the current phase ends.
    pub fn next_transition(&self) -> u64 {
        self.last_transition + self.current_interval + 1
    }
}
