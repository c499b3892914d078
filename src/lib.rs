//! Chopper Strike - a 2D helicopter arcade shoot-'em-up
//!
//! Core modules:
//! - `sim`: Fixed-timestep stage simulation (entities, collisions, state machine)
//! - `view`: Read-only drawable/HUD snapshots for a presenter
//! - `audio`: Named sound cues and a fire-and-forget playback collaborator
//! - `settings`: User preferences persisted as JSON

pub mod audio;
pub mod settings;
pub mod sim;
pub mod view;

pub use audio::{AudioCue, AudioManager};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Milliseconds of simulated time per tick
    pub const MS_PER_TICK: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player helicopter
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const VULCAN_COOLDOWN_MS: f64 = 100.0;
    pub const MISSILE_COOLDOWN_MS: f64 = 500.0;
    pub const INVULNERABILITY_MS: f64 = 1000.0;
    pub const HIT_FLASH_PERIOD_MS: f64 = 100.0;

    /// Projectiles (px/tick speeds)
    pub const VULCAN_SIZE: (f32, f32) = (10.0, 4.0);
    pub const VULCAN_SPEED: f32 = 15.0;
    pub const VULCAN_DAMAGE: i32 = 5;
    pub const MISSILE_SIZE: (f32, f32) = (20.0, 8.0);
    pub const MISSILE_SPEED: f32 = 8.0;
    pub const MISSILE_DAMAGE: i32 = 25;
    pub const ENEMY_ROUND_SIZE: (f32, f32) = (8.0, 8.0);
    pub const ENEMY_ROUND_SPEED: f32 = 7.0;
    pub const ENEMY_ROUND_DAMAGE: i32 = 10;

    /// Ground enemies
    pub const WAREHOUSE_WIDTH: f32 = 100.0;
    pub const WAREHOUSE_HEIGHT: f32 = 60.0;
    pub const AA_GUN_SIZE: f32 = 30.0;

    /// Fighter jet
    pub const FIGHTER_SIZE: f32 = 30.0;
    /// Rudder limit per tick (3 degrees)
    pub const FIGHTER_TURN_RATE_RAD: f32 = 3.0 * std::f32::consts::PI / 180.0;
    pub const FIGHTER_FIRE_INTERVAL_MS: f64 = 2500.0;

    /// Battleship boss
    pub const BATTLESHIP_WIDTH: f32 = PLAYFIELD_WIDTH * 0.8;
    pub const BATTLESHIP_HEIGHT: f32 = 100.0;
    pub const BATTLESHIP_SPEED: f32 = 0.5;
    /// Sweep hold before the ship reverses direction
    pub const BATTLESHIP_HOLD_MS: f64 = 5000.0;
    /// Inward stop thresholds
    pub const BATTLESHIP_STOP_LEFT: f32 = PLAYFIELD_WIDTH * 0.1;
    pub const BATTLESHIP_STOP_RIGHT: f32 = PLAYFIELD_WIDTH * 0.9;
    pub const BATTLESHIP_SPAWN_MS: f64 = 300_000.0;
    pub const BATTLESHIP_WARNING_LEAD_MS: f64 = 30_000.0;
    pub const BATTLESHIP_WARNING_DURATION_MS: f64 = 5_000.0;
    pub const TURRET_FIRE_MIN_MS: f64 = 2800.0;
    pub const TURRET_FIRE_MAX_MS: f64 = 3500.0;
    pub const TURRET_AIM_JITTER_X: f32 = 50.0;
    pub const TURRET_AIM_JITTER_Y: f32 = 20.0;

    /// Difficulty scaling: base + (stage - 1) * increment
    pub const BASE_WAREHOUSE_HEALTH: i32 = 100;
    pub const WAREHOUSE_HEALTH_PER_STAGE: i32 = 20;
    pub const BASE_AA_GUN_HEALTH: i32 = 50;
    pub const AA_GUN_HEALTH_PER_STAGE: i32 = 10;
    pub const BASE_AA_GUN_FIRE_MS: f64 = 2000.0;
    pub const AA_GUN_FIRE_DECREASE_PER_STAGE_MS: f64 = 100.0;
    pub const MIN_AA_GUN_FIRE_MS: f64 = 800.0;
    pub const BASE_FIGHTER_HEALTH: i32 = 75;
    pub const FIGHTER_HEALTH_PER_STAGE: i32 = 15;
    pub const BASE_BATTLESHIP_HEALTH: i32 = 800;
    pub const BATTLESHIP_HEALTH_PER_STAGE: i32 = 100;

    /// Score awards, paid once at the health -> 0 transition
    pub const SCORE_WAREHOUSE: u32 = 10;
    pub const SCORE_AA_GUN: u32 = 50;
    pub const SCORE_FIGHTER: u32 = 100;
    pub const SCORE_BATTLESHIP: u32 = 1000;

    /// State machine timing
    pub const GET_READY_MS: f64 = 2000.0;
    pub const STAGE_CLEAR_MS: f64 = 3000.0;
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
