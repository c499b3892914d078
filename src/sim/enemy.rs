//! Stage enemies: warehouses, AA guns, fighter jets
//!
//! Each kind lives in its own homogeneous collection on the game state and
//! is updated in a single pass per tick. Fire timers are jittered at
//! creation so volleys don't synchronize across guns.

use glam::Vec2;
use rand::Rng;

use super::projectile::Projectile;
use super::rect::Rect;
use crate::audio::AudioCue;
use crate::consts::*;
use crate::normalize_angle;

/// Stationary ground target with no offensive behavior
#[derive(Debug, Clone)]
pub struct Warehouse {
    pub rect: Rect,
    pub health: i32,
    pub max_health: i32,
}

impl Warehouse {
    pub fn new(top_left: Vec2, health: i32) -> Self {
        Self {
            rect: Rect::from_top_left(top_left, Vec2::new(WAREHOUSE_WIDTH, WAREHOUSE_HEIGHT)),
            health,
            max_health: health,
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}

/// Anti-aircraft gun firing straight up on a fixed interval
#[derive(Debug, Clone)]
pub struct AaGun {
    pub rect: Rect,
    pub health: i32,
    pub max_health: i32,
    pub fire_interval_ms: f64,
    last_shot_ms: f64,
}

impl AaGun {
    pub fn new<R: Rng>(
        center: Vec2,
        health: i32,
        fire_interval_ms: f64,
        now_ms: f64,
        rng: &mut R,
    ) -> Self {
        Self {
            rect: Rect::new(center, Vec2::splat(AA_GUN_SIZE)),
            health,
            max_health: health,
            fire_interval_ms,
            // Jitter desynchronizes volleys across guns
            last_shot_ms: now_ms + rng.random_range(0.0..fire_interval_ms),
        }
    }

    pub fn update(&mut self, now_ms: f64, shots: &mut Vec<Projectile>, cues: &mut Vec<AudioCue>) {
        if now_ms - self.last_shot_ms > self.fire_interval_ms {
            self.last_shot_ms = now_ms;
            let muzzle = Vec2::new(self.rect.center.x, self.rect.top());
            shots.push(Projectile::enemy_round_up(muzzle));
            cues.push(AudioCue::EnemyFire);
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}

/// Mobile enemy that pursues the player with a limited turn rate
#[derive(Debug, Clone)]
pub struct FighterJet {
    pub rect: Rect,
    pub health: i32,
    pub max_health: i32,
    /// Current heading in radians; the sprite faces along this
    pub heading: f32,
    last_shot_ms: f64,
}

impl FighterJet {
    pub fn new<R: Rng>(center: Vec2, health: i32, now_ms: f64, rng: &mut R) -> Self {
        Self {
            rect: Rect::new(center, Vec2::splat(FIGHTER_SIZE)),
            health,
            max_health: health,
            heading: rng.random_range(0.0..std::f32::consts::TAU),
            last_shot_ms: now_ms + rng.random_range(0.0..FIGHTER_FIRE_INTERVAL_MS),
        }
    }

    /// Speed in px/tick, one faster than the player so it can close in
    fn speed() -> f32 {
        PLAYER_SPEED + 1.0
    }

    pub fn update(
        &mut self,
        now_ms: f64,
        player_pos: Vec2,
        playfield: &Rect,
        shots: &mut Vec<Projectile>,
        cues: &mut Vec<AudioCue>,
    ) {
        // Turn toward the player, at most FIGHTER_TURN_RATE_RAD per tick
        let to_player = player_pos - self.rect.center;
        let bearing = to_player.y.atan2(to_player.x);
        let diff = normalize_angle(bearing - self.heading);
        if diff > FIGHTER_TURN_RATE_RAD {
            self.heading += FIGHTER_TURN_RATE_RAD;
        } else if diff < -FIGHTER_TURN_RATE_RAD {
            self.heading -= FIGHTER_TURN_RATE_RAD;
        } else {
            self.heading = bearing;
        }
        self.heading = normalize_angle(self.heading);

        let dir = Vec2::new(self.heading.cos(), self.heading.sin());
        let mut vel = dir * Self::speed();
        self.rect.center += vel;

        // Fire along the nose on a fixed interval
        if now_ms - self.last_shot_ms > FIGHTER_FIRE_INTERVAL_MS {
            self.last_shot_ms = now_ms;
            let muzzle = self.rect.center + dir * (FIGHTER_SIZE / 2.0);
            shots.push(Projectile::enemy_round_at(muzzle, muzzle + dir));
            cues.push(AudioCue::EnemyFire);
        }

        // Bounce off playfield edges
        if self.rect.left() < playfield.left() || self.rect.right() > playfield.right() {
            vel.x = -vel.x;
            self.heading = vel.y.atan2(vel.x);
        }
        if self.rect.top() < playfield.top() || self.rect.bottom() > playfield.bottom() {
            vel.y = -vel.y;
            self.heading = vel.y.atan2(vel.x);
        }
        self.rect.clamp_within(playfield);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}
