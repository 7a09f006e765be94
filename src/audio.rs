//! Audio trigger boundary
//!
//! The simulation only raises `GameEvent`s. This module maps them to named
//! sound effects and hands them to whatever backend is plugged in. With no
//! backend, or a backend that fails, playback is silently skipped.

use crate::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A creature was eaten
    Eat,
    /// The player was eaten
    Hurt,
    /// Level cleared or achievement unlocked
    LevelUp,
}

impl SoundEffect {
    /// Stable name backends use to find the sample
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Eat => "eat",
            SoundEffect::Hurt => "hurt",
            SoundEffect::LevelUp => "levelUp",
        }
    }

    /// Effect and relative volume for an event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<(SoundEffect, f32)> {
        match event {
            GameEvent::Eat { .. } => Some((SoundEffect::Eat, 1.0)),
            GameEvent::Hurt => Some((SoundEffect::Hurt, 1.0)),
            GameEvent::LevelUp { .. } => Some((SoundEffect::LevelUp, 1.0)),
            GameEvent::AchievementUnlocked(_) => Some((SoundEffect::LevelUp, 0.3)),
            GameEvent::Started | GameEvent::Restarted => None,
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    /// Fire-and-forget playback; must not block on completion
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs what it would play
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {} at {:.2}", effect.name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Apply volume and mute preferences
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect at a relative volume
    pub fn play(&mut self, effect: SoundEffect, relative: f32) {
        let vol = self.effective_volume() * relative;
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.play(effect, vol);
    }

    /// Play whatever sounds a tick's events call for
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some((effect, relative)) = SoundEffect::for_event(event) {
                self.play(effect, relative);
            }
        }
    }
}
