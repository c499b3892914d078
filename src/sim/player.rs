//! Player helicopter
//!
//! 8-way movement clamped to the playfield, sticky facing direction for
//! aiming, independent vulcan/missile cooldowns, and a post-hit
//! invulnerability window with a cosmetic flash.

use glam::Vec2;

use super::projectile::{Projectile, ProjectileKind};
use super::rect::Rect;
use super::tick::TickInput;
use crate::audio::AudioCue;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Velocity in px/tick, set from input each tick
    pub vel: Vec2,
    /// Aim direction, always unit-length, sticky across idle ticks
    pub facing: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Projectiles owned by the player
    pub vulcan_bullets: Vec<Projectile>,
    pub missiles: Vec<Projectile>,
    last_vulcan_ms: f64,
    last_missile_ms: f64,
    last_hit_ms: f64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            ),
            vel: Vec2::ZERO,
            facing: Vec2::X,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            vulcan_bullets: Vec::new(),
            missiles: Vec::new(),
            last_vulcan_ms: f64::NEG_INFINITY,
            last_missile_ms: f64::NEG_INFINITY,
            last_hit_ms: f64::NEG_INFINITY,
        }
    }

    /// Sample held keys: set velocity, update facing, handle fire requests.
    ///
    /// Fire requests during cooldown are dropped, not queued.
    pub fn handle_input(&mut self, input: &TickInput, now_ms: f64, cues: &mut Vec<AudioCue>) {
        let mut dir = Vec2::ZERO;
        if input.left {
            dir.x -= 1.0;
        }
        if input.right {
            dir.x += 1.0;
        }
        if input.up {
            dir.y -= 1.0;
        }
        if input.down {
            dir.y += 1.0;
        }

        if dir != Vec2::ZERO {
            // Diagonal speed equals axis speed
            let unit = dir.normalize();
            self.vel = unit * PLAYER_SPEED;
            self.facing = unit;
        } else {
            self.vel = Vec2::ZERO;
        }

        if input.fire_vulcan && now_ms - self.last_vulcan_ms > VULCAN_COOLDOWN_MS {
            self.last_vulcan_ms = now_ms;
            self.vulcan_bullets.push(Projectile::spawn(
                ProjectileKind::VulcanBullet,
                self.rect.center,
                self.facing,
            ));
            cues.push(AudioCue::VulcanFire);
        }
        if input.fire_missile && now_ms - self.last_missile_ms > MISSILE_COOLDOWN_MS {
            self.last_missile_ms = now_ms;
            self.missiles.push(Projectile::spawn(
                ProjectileKind::Missile,
                self.rect.center,
                self.facing,
            ));
            cues.push(AudioCue::MissileFire);
        }
    }

    /// Move, clamp to the playfield, advance owned projectiles.
    pub fn update(&mut self, playfield: &Rect) {
        self.rect.center += self.vel;
        self.rect.clamp_within(playfield);

        for shot in self.vulcan_bullets.iter_mut().chain(self.missiles.iter_mut()) {
            shot.advance();
        }
        self.vulcan_bullets.retain(|s| !s.is_out_of_bounds(playfield));
        self.missiles.retain(|s| !s.is_out_of_bounds(playfield));
    }

    pub fn is_invulnerable(&self, now_ms: f64) -> bool {
        now_ms - self.last_hit_ms < INVULNERABILITY_MS
    }

    /// Apply damage unless inside the invulnerability window.
    ///
    /// Returns true if damage was accepted.
    pub fn take_damage(&mut self, amount: i32, now_ms: f64, cues: &mut Vec<AudioCue>) -> bool {
        if self.is_invulnerable(now_ms) {
            return false;
        }
        self.health = (self.health - amount).max(0);
        self.last_hit_ms = now_ms;
        cues.push(AudioCue::PlayerDamage);
        true
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Whether the sprite should be drawn this tick (flash toggle while
    /// invulnerable, 100 ms period)
    pub fn flash_visible(&self, now_ms: f64) -> bool {
        if !self.is_invulnerable(now_ms) {
            return true;
        }
        let phase = ((now_ms - self.last_hit_ms) / HIT_FLASH_PERIOD_MS) as i64;
        phase % 2 == 0
    }

    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
