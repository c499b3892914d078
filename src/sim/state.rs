//! Game session state
//!
//! The `GameState` is the single writer of stage, score and phase. It owns
//! every entity and projectile collection for the current stage outright;
//! the battleship is a session-lifetime singleton that stage resets
//! deactivate and rescale rather than recreate.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::battleship::Battleship;
use super::difficulty::StageParams;
use super::enemy::{AaGun, FighterJet, Warehouse};
use super::player::Player;
use super::projectile::Projectile;
use crate::audio::AudioCue;
use crate::consts::*;

/// Current phase of the stage/game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Stage banner; auto-advances after 2 s or on confirm
    GetReady,
    /// Active gameplay
    Playing,
    /// Clear banner; stage reset after 3 s
    StageClear,
    /// Terminal until restart
    GameOver,
}

/// Fixed stage layout (top-left corners for warehouses, centers for guns)
const WAREHOUSE_POSITIONS: [(f32, f32); 5] = [
    (150.0, PLAYFIELD_HEIGHT - 70.0),
    (400.0, PLAYFIELD_HEIGHT - 70.0),
    (650.0, PLAYFIELD_HEIGHT - 70.0),
    (250.0, PLAYFIELD_HEIGHT - 170.0),
    (550.0, PLAYFIELD_HEIGHT - 170.0),
];
const AA_GUN_POSITIONS: [(f32, f32); 3] = [
    (150.0, PLAYFIELD_HEIGHT - 30.0),
    (400.0, PLAYFIELD_HEIGHT - 30.0),
    (650.0, PLAYFIELD_HEIGHT - 30.0),
];
const FIGHTER_SPAWN: (f32, f32) = (PLAYFIELD_WIDTH / 2.0, 50.0);

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed (jitter desynchronization only, not outcome-determining)
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u32,
    /// 1-based stage counter
    pub stage: u32,
    pub phase: GamePhase,
    /// Simulated time, advanced by MS_PER_TICK per tick
    pub time_ms: f64,
    pub time_ticks: u64,
    /// When the current phase was entered
    pub phase_started_ms: f64,
    /// When `Playing` was last entered (drives the boss spawn clock)
    pub stage_started_ms: f64,
    /// One-shot boss warning bookkeeping
    pub warning_shown_this_stage: bool,
    pub warning_until_ms: f64,

    pub player: Player,
    pub warehouses: Vec<Warehouse>,
    pub aa_guns: Vec<AaGun>,
    pub fighters: Vec<FighterJet>,
    pub battleship: Battleship,
    pub enemy_shots: Vec<Projectile>,

    /// Sound cues emitted this tick, drained by the shell
    pub cues: Vec<AudioCue>,
    /// Set when the input snapshot asked to quit
    pub quit_requested: bool,
}

impl GameState {
    /// Create a fresh session at stage 1
    pub fn new(seed: u64) -> Self {
        let params = StageParams::for_stage(1);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            stage: 1,
            phase: GamePhase::GetReady,
            time_ms: 0.0,
            time_ticks: 0,
            phase_started_ms: 0.0,
            stage_started_ms: 0.0,
            warning_shown_this_stage: false,
            warning_until_ms: 0.0,
            player: Player::new(),
            warehouses: Vec::new(),
            aa_guns: Vec::new(),
            fighters: Vec::new(),
            battleship: Battleship::new(params.battleship_max_health),
            enemy_shots: Vec::new(),
            cues: Vec::new(),
            quit_requested: false,
        };
        state.populate_stage();
        state
    }

    pub fn now_ms(&self) -> f64 {
        self.time_ms
    }

    /// True while the "battleship approaching" banner should be shown
    pub fn warning_active(&self) -> bool {
        self.time_ms < self.warning_until_ms
    }

    /// Repopulate all collections for the current stage number
    pub fn populate_stage(&mut self) {
        let params = StageParams::for_stage(self.stage);
        let now = self.time_ms;

        self.player = Player::new();
        self.enemy_shots.clear();

        self.warehouses = WAREHOUSE_POSITIONS
            .iter()
            .map(|&(x, y)| Warehouse::new(Vec2::new(x, y), params.warehouse_health))
            .collect();
        self.aa_guns = AA_GUN_POSITIONS
            .iter()
            .map(|&(x, y)| {
                AaGun::new(
                    Vec2::new(x, y),
                    params.aa_gun_health,
                    params.aa_gun_fire_ms,
                    now,
                    &mut self.rng,
                )
            })
            .collect();
        self.fighters = vec![FighterJet::new(
            Vec2::new(FIGHTER_SPAWN.0, FIGHTER_SPAWN.1),
            params.fighter_health,
            now,
            &mut self.rng,
        )];

        self.battleship.reset_for_stage(params.battleship_max_health);

        self.warning_shown_this_stage = false;
        self.warning_until_ms = 0.0;
        self.phase = GamePhase::GetReady;
        self.phase_started_ms = now;
    }

    /// Stage cleared: advance the counter and rebuild the stage
    pub fn advance_stage(&mut self) {
        self.stage += 1;
        log::info!("advancing to stage {}", self.stage);
        self.populate_stage();
    }

    /// Full restart: stage 1, score 0 (from game over, or a new session)
    pub fn restart(&mut self) {
        log::info!("restarting session");
        self.score = 0;
        self.stage = 1;
        self.populate_stage();
    }

    /// Enter the `Playing` phase, resetting the stage clock and boss flags
    pub fn enter_playing(&mut self) {
        self.phase = GamePhase::Playing;
        self.stage_started_ms = self.time_ms;
        self.warning_shown_this_stage = false;
        self.warning_until_ms = 0.0;
    }

    /// Stage-clear condition: battleship status is deliberately ignored
    pub fn ground_and_air_cleared(&self) -> bool {
        self.warehouses.is_empty() && self.aa_guns.is_empty() && self.fighters.is_empty()
    }

    /// Take this tick's sound cues, leaving the queue empty
    pub fn drain_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }
}
