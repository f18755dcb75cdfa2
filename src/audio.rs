//! Sound cues
//!
//! The simulation only emits [`GameEvent`]s; this module turns them into
//! sound effects and hands them to whatever backend the platform provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// New round
    Start,
    /// Bullet fired
    Shoot,
    /// Something got hit
    Hit,
    /// Ship destroyed
    GameOver,
    /// Engine loop while thrusting
    Thrust,
}

/// Fade applied when the thrust loop stops
pub const THRUST_FADE_MS: u32 = 500;

/// Platform sound output
pub trait AudioBackend {
    /// Fire-and-forget one-shot
    fn play(&mut self, effect: SoundEffect, volume: f32);
    /// Start a looping effect
    fn start_loop(&mut self, effect: SoundEffect, volume: f32);
    /// Stop a looping effect, fading out over `fade_ms`
    fn stop_loop(&mut self, effect: SoundEffect, fade_ms: u32);
}

/// Backend that only logs; used headless
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {:?} at {:.2}", effect, volume);
    }

    fn start_loop(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("loop {:?} at {:.2}", effect, volume);
    }

    fn stop_loop(&mut self, effect: SoundEffect, fade_ms: u32) {
        log::debug!("stop {:?} ({} ms fade)", effect, fade_ms);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volume and mute from the player's settings
    pub fn with_settings(backend: B, settings: &Settings) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// React to one simulation event
    pub fn handle(&mut self, event: GameEvent) {
        let vol = self.effective_volume();

        // Stopping must still happen while muted
        if event == GameEvent::ThrustStopped {
            self.backend.stop_loop(SoundEffect::Thrust, THRUST_FADE_MS);
            return;
        }
        if vol <= 0.0 {
            return;
        }

        match event {
            GameEvent::GameStarted => self.backend.play(SoundEffect::Start, vol),
            GameEvent::Shot => self.backend.play(SoundEffect::Shoot, vol),
            GameEvent::Hit => self.backend.play(SoundEffect::Hit, vol),
            GameEvent::GameOver => {
                // The game-over jingle shares the thrust channel and cuts it off
                self.backend.stop_loop(SoundEffect::Thrust, 0);
                self.backend.play(SoundEffect::GameOver, vol);
            }
            GameEvent::ThrustStarted => self.backend.start_loop(SoundEffect::Thrust, vol),
            GameEvent::ThrustStopped => {}
        }
    }

    pub fn handle_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }
}
