//! Battleship boss
//!
//! A reusable singleton: created once per session, reactivated per stage
//! instead of recreated. Sweeps horizontally between inward thresholds
//! with a 5 second hold before each reversal, and carries five turrets
//! with independently jittered fire clocks.

use glam::Vec2;
use rand::Rng;

use super::projectile::Projectile;
use super::rect::Rect;
use crate::audio::AudioCue;
use crate::consts::*;

/// Turret offsets relative to the hull's top-left corner
const TURRET_OFFSETS: [(f32, f32); 5] = [
    (0.2, 0.3),
    (0.5, 0.3),
    (0.8, 0.3),
    (0.35, 0.7),
    (0.65, 0.7),
];

/// Index-based stagger between turret fire clocks at activation
const TURRET_STAGGER_MS: f64 = 500.0;
const TURRET_JITTER_MS: f64 = 3000.0;

#[derive(Debug, Clone)]
struct Turret {
    /// Offset from the hull's top-left corner
    offset: Vec2,
    fire_interval_ms: f64,
    last_shot_ms: f64,
}

/// Horizontal sweep state
#[derive(Debug, Clone, Copy, PartialEq)]
enum Sweep {
    /// Translating at BATTLESHIP_SPEED, dir is -1 or +1
    Moving { dir: f32 },
    /// Stopped at a threshold; resumes in `resume_dir` once the hold elapses
    Holding { resume_dir: f32, until_ms: f64 },
}

#[derive(Debug, Clone)]
pub struct Battleship {
    pub rect: Rect,
    pub health: i32,
    pub max_health: i32,
    active: bool,
    sweep: Sweep,
    turrets: Vec<Turret>,
}

impl Battleship {
    pub fn new(max_health: i32) -> Self {
        let size = Vec2::new(BATTLESHIP_WIDTH, BATTLESHIP_HEIGHT);
        let turrets = TURRET_OFFSETS
            .iter()
            .map(|&(fx, fy)| Turret {
                offset: Vec2::new(size.x * fx, size.y * fy),
                fire_interval_ms: TURRET_FIRE_MIN_MS,
                last_shot_ms: 0.0,
            })
            .collect();
        Self {
            rect: Rect::from_top_left(Vec2::new(-size.x, PLAYFIELD_HEIGHT / 3.0), size),
            health: max_health,
            max_health,
            active: false,
            sweep: Sweep::Moving { dir: 1.0 },
            turrets,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Reset health, park just off the left edge, start sweeping right.
    ///
    /// Turret clocks are re-jittered and index-staggered so the opening
    /// volley isn't simultaneous.
    pub fn activate<R: Rng>(&mut self, now_ms: f64, rng: &mut R) {
        self.health = self.max_health;
        self.rect = Rect::from_top_left(
            Vec2::new(-BATTLESHIP_WIDTH, PLAYFIELD_HEIGHT / 4.0),
            self.rect.size,
        );
        self.sweep = Sweep::Moving { dir: 1.0 };
        self.active = true;
        for (i, turret) in self.turrets.iter_mut().enumerate() {
            turret.fire_interval_ms = rng.random_range(TURRET_FIRE_MIN_MS..TURRET_FIRE_MAX_MS);
            turret.last_shot_ms =
                now_ms + rng.random_range(0.0..TURRET_JITTER_MS) + i as f64 * TURRET_STAGGER_MS;
        }
        log::info!("battleship activated ({} hp)", self.max_health);
    }

    /// Stage reset: deactivate, rescale health, keep the same instance.
    pub fn reset_for_stage(&mut self, max_health: i32) {
        self.active = false;
        self.max_health = max_health;
        self.health = max_health;
        self.rect = Rect::from_top_left(
            Vec2::new(-BATTLESHIP_WIDTH, PLAYFIELD_HEIGHT / 3.0),
            self.rect.size,
        );
        self.sweep = Sweep::Moving { dir: 1.0 };
    }

    /// Deactivate without resetting health (killed, or drifted offscreen)
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn update<R: Rng>(
        &mut self,
        now_ms: f64,
        player_pos: Vec2,
        rng: &mut R,
        shots: &mut Vec<Projectile>,
        cues: &mut Vec<AudioCue>,
    ) {
        if !self.active {
            return;
        }

        match self.sweep {
            Sweep::Moving { dir } => {
                self.rect.center.x += BATTLESHIP_SPEED * dir;
                if dir > 0.0 && self.rect.left() >= BATTLESHIP_STOP_LEFT {
                    self.sweep = Sweep::Holding {
                        resume_dir: -1.0,
                        until_ms: now_ms + BATTLESHIP_HOLD_MS,
                    };
                } else if dir < 0.0 && self.rect.right() <= BATTLESHIP_STOP_RIGHT {
                    self.sweep = Sweep::Holding {
                        resume_dir: 1.0,
                        until_ms: now_ms + BATTLESHIP_HOLD_MS,
                    };
                }
            }
            Sweep::Holding {
                resume_dir,
                until_ms,
            } => {
                if now_ms >= until_ms {
                    self.sweep = Sweep::Moving { dir: resume_dir };
                }
            }
        }

        // Drifted far enough past either edge: despawn without dying
        if self.rect.right() > PLAYFIELD_WIDTH + BATTLESHIP_WIDTH / 2.0
            || self.rect.left() < -BATTLESHIP_WIDTH * 1.5
        {
            log::info!("battleship drifted offscreen, despawning");
            self.active = false;
            return;
        }

        let top_left = self.rect.top_left();
        for turret in &mut self.turrets {
            if now_ms - turret.last_shot_ms > turret.fire_interval_ms {
                turret.last_shot_ms = now_ms;
                let muzzle = top_left + turret.offset;
                let target = player_pos
                    + Vec2::new(
                        rng.random_range(-TURRET_AIM_JITTER_X..=TURRET_AIM_JITTER_X),
                        rng.random_range(-TURRET_AIM_JITTER_Y..=TURRET_AIM_JITTER_Y),
                    );
                shots.push(Projectile::enemy_round_at(muzzle, target));
                cues.push(AudioCue::EnemyFire);
            }
        }
    }

    /// Damage while inactive is a no-op
    pub fn take_damage(&mut self, amount: i32) {
        if !self.active {
            return;
        }
        self.health = (self.health - amount).max(0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}
