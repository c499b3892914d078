//! Projectile model
//!
//! Player vulcan bullets and missiles, and enemy rounds. Straight-line
//! motion at a fixed per-tick speed; damage and velocity never change
//! after spawn. Projectiles despawn on leaving the playfield or on their
//! first collision.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

/// Projectile variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    VulcanBullet,
    Missile,
    EnemyRound,
}

impl ProjectileKind {
    pub fn side(&self) -> Side {
        match self {
            ProjectileKind::VulcanBullet | ProjectileKind::Missile => Side::Player,
            ProjectileKind::EnemyRound => Side::Enemy,
        }
    }

    fn speed(&self) -> f32 {
        match self {
            ProjectileKind::VulcanBullet => VULCAN_SPEED,
            ProjectileKind::Missile => MISSILE_SPEED,
            ProjectileKind::EnemyRound => ENEMY_ROUND_SPEED,
        }
    }

    fn size(&self) -> Vec2 {
        let (w, h) = match self {
            ProjectileKind::VulcanBullet => VULCAN_SIZE,
            ProjectileKind::Missile => MISSILE_SIZE,
            ProjectileKind::EnemyRound => ENEMY_ROUND_SIZE,
        };
        Vec2::new(w, h)
    }

    pub fn damage(&self) -> i32 {
        match self {
            ProjectileKind::VulcanBullet => VULCAN_DAMAGE,
            ProjectileKind::Missile => MISSILE_DAMAGE,
            ProjectileKind::EnemyRound => ENEMY_ROUND_DAMAGE,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub rect: Rect,
    /// Velocity in px/tick
    pub vel: Vec2,
}

impl Projectile {
    /// Spawn with a caller-normalized direction
    pub fn spawn(kind: ProjectileKind, origin: Vec2, direction: Vec2) -> Self {
        Self {
            kind,
            rect: Rect::new(origin, kind.size()),
            vel: direction * kind.speed(),
        }
    }

    /// Enemy round aimed at a target point
    ///
    /// A zero-magnitude aim vector falls back to straight up.
    pub fn enemy_round_at(origin: Vec2, target: Vec2) -> Self {
        let dir = (target - origin).normalize_or(Vec2::NEG_Y);
        Self::spawn(ProjectileKind::EnemyRound, origin, dir)
    }

    /// Enemy round fired straight up (AA gun volley)
    pub fn enemy_round_up(origin: Vec2) -> Self {
        Self::spawn(ProjectileKind::EnemyRound, origin, Vec2::NEG_Y)
    }

    pub fn damage(&self) -> i32 {
        self.kind.damage()
    }

    /// Advance one tick (velocity is expressed in px/tick)
    pub fn advance(&mut self) {
        self.rect.center += self.vel;
    }

    /// True once the projectile lies entirely outside the playfield
    pub fn is_out_of_bounds(&self, playfield: &Rect) -> bool {
        self.rect.fully_outside(playfield)
    }
}
