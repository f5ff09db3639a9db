//! Fires when the player keeps moving through a silence for longer than the arm delay.

use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpscareState {
    /// Music is playing, or no silence has been seen yet.
    Idle,
    /// Music has been stopped since `stopped_since` (recorded on the rising edge only).
    Armed { stopped_since: u64 },
    /// Fired; stays here until [`JumpscareManager::reset`] once the cutscene is over.
    Triggered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpscareManager {
    state: JumpscareState,
    arm_delay: u64,
    fired: u32,
}

impl JumpscareManager {
    pub fn new(arm_delay: u64) -> Self {
        Self {
            state: JumpscareState::Idle,
            arm_delay,
            fired: 0,
        }
    }

    /// Evaluates one tick. Returns `true` on the tick the jumpscare fires.
    ///
    /// Silence arms the timer once; music resuming disarms it. The jumpscare fires on the first
    /// tick where the player is moving and more than `arm_delay` ms have passed since the silence began.
    pub fn update(&mut self, music_playing: bool, player_moving: bool, now: u64) -> bool {
        if self.state == JumpscareState::Triggered {
            return false;
        }

        if music_playing {
            if self.state != JumpscareState::Idle {
                debug!("Music resumed, jumpscare disarmed");
            }
            self.state = JumpscareState::Idle;
        } else if self.state == JumpscareState::Idle {
            debug!(stopped_since = now, "Silence began, jumpscare armed");
            self.state = JumpscareState::Armed { stopped_since: now };
        }

        match self.state {
            JumpscareState::Armed { stopped_since } if player_moving && now.saturating_sub(stopped_since) > self.arm_delay => {
                self.state = JumpscareState::Triggered;
                self.fired += 1;
                info!(silent_for_ms = now - stopped_since, count = self.fired, "Jumpscare triggered");
                true
            }
            _ => false,
        }
    }

    /// Ends a triggered jumpscare: clears the triggered flag and the recorded stopped-time.
    pub fn reset(&mut self) {
        self.state = JumpscareState::Idle;
    }

    pub fn state(&self) -> JumpscareState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state == JumpscareState::Triggered
    }

    /// How many times the jumpscare has fired since construction.
    pub fn fired(&self) -> u32 {
        self.fired
    }
}
