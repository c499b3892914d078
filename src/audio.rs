//! Sound cues
//!
//! The simulation emits discrete named cues; this collaborator decides
//! how (and whether) to play them. Playback is fire-and-forget: a missing
//! backend or muted mixer can never touch simulation state.

/// Named sound cues emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Player vulcan shot
    VulcanFire,
    /// Player missile launch
    MissileFire,
    /// AA gun, fighter, or turret shot
    EnemyFire,
    /// Warehouse / AA gun / fighter destroyed
    SmallExplosion,
    /// Player took a hit
    PlayerDamage,
    /// Boss destroyed
    BattleshipExplosion,
    /// Stage cleared
    StageClear,
    /// Run ended
    GameOver,
}

impl AudioCue {
    /// Default playback volume for the cue (0.0 - 1.0)
    pub fn default_volume(&self) -> f32 {
        match self {
            AudioCue::VulcanFire => 0.3,
            AudioCue::MissileFire => 0.6,
            AudioCue::EnemyFire => 0.3,
            AudioCue::SmallExplosion => 0.5,
            AudioCue::PlayerDamage => 0.7,
            AudioCue::BattleshipExplosion => 1.0,
            AudioCue::StageClear => 0.8,
            AudioCue::GameOver => 0.8,
        }
    }
}

/// Audio sink for the game
///
/// This build has no playback backend; cues are surfaced through the log
/// so a presenter (or a future backend) can hook them.
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
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

    fn effective_volume(&self, cue: AudioCue) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume * cue.default_volume()
        }
    }

    /// Play a cue. Never fails; a silent mixer is a no-op.
    pub fn play(&self, cue: AudioCue) {
        let vol = self.effective_volume(cue);
        if vol <= 0.0 {
            return;
        }
        log::debug!("cue {:?} at volume {:.2}", cue, vol);
    }
}
