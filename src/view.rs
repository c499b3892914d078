//! Presentation interface
//!
//! Read-only snapshots a presenter can turn into a frame: one `Drawable`
//! per visible entity/projectile (position, bounding size, health ratio)
//! plus the HUD/banner data for the current phase. Nothing here mutates
//! simulation state.

use glam::Vec2;

use crate::sim::projectile::ProjectileKind;
use crate::sim::state::{GamePhase, GameState};

/// What a drawable represents, so the presenter can pick a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    VulcanBullet,
    Missile,
    EnemyRound,
    Warehouse,
    AaGun,
    FighterJet,
    Battleship,
}

/// One entity or projectile to draw this frame
#[derive(Debug, Clone, Copy)]
pub struct Drawable {
    pub kind: SpriteKind,
    /// Center position
    pub pos: Vec2,
    /// Bounding size
    pub size: Vec2,
    /// Health fraction for a health bar; None for projectiles
    pub health_ratio: Option<f32>,
    /// False while the player's hit flash blanks the sprite
    pub visible: bool,
    /// Heading in radians for sprites that rotate (fighter jet)
    pub heading: Option<f32>,
}

/// Banner text for the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    GetReady { stage: u32 },
    StageClear,
    GameOver { score: u32 },
}

/// HUD snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub stage: u32,
    pub banner: Option<Banner>,
    /// "Battleship approaching!" warning line
    pub boss_warning: bool,
}

fn projectile_sprite(kind: ProjectileKind) -> SpriteKind {
    match kind {
        ProjectileKind::VulcanBullet => SpriteKind::VulcanBullet,
        ProjectileKind::Missile => SpriteKind::Missile,
        ProjectileKind::EnemyRound => SpriteKind::EnemyRound,
    }
}

/// Collect everything visible this frame
pub fn drawables(state: &GameState) -> Vec<Drawable> {
    let mut out = Vec::new();
    let now = state.now_ms();

    out.push(Drawable {
        kind: SpriteKind::Player,
        pos: state.player.rect.center,
        size: state.player.rect.size,
        health_ratio: Some(state.player.health_ratio()),
        visible: state.player.flash_visible(now),
        heading: None,
    });

    for shot in state
        .player
        .vulcan_bullets
        .iter()
        .chain(state.player.missiles.iter())
        .chain(state.enemy_shots.iter())
    {
        out.push(Drawable {
            kind: projectile_sprite(shot.kind),
            pos: shot.rect.center,
            size: shot.rect.size,
            health_ratio: None,
            visible: true,
            heading: None,
        });
    }

    for w in &state.warehouses {
        out.push(Drawable {
            kind: SpriteKind::Warehouse,
            pos: w.rect.center,
            size: w.rect.size,
            health_ratio: Some(w.health_ratio()),
            visible: true,
            heading: None,
        });
    }
    for g in &state.aa_guns {
        out.push(Drawable {
            kind: SpriteKind::AaGun,
            pos: g.rect.center,
            size: g.rect.size,
            health_ratio: Some(g.health_ratio()),
            visible: true,
            heading: None,
        });
    }
    for f in &state.fighters {
        out.push(Drawable {
            kind: SpriteKind::FighterJet,
            pos: f.rect.center,
            size: f.rect.size,
            health_ratio: Some(f.health_ratio()),
            visible: true,
            heading: Some(f.heading),
        });
    }
    if state.battleship.is_active() {
        out.push(Drawable {
            kind: SpriteKind::Battleship,
            pos: state.battleship.rect.center,
            size: state.battleship.rect.size,
            health_ratio: Some(state.battleship.health_ratio()),
            visible: true,
            heading: None,
        });
    }

    out
}

/// Build the HUD snapshot for the current phase
pub fn hud(state: &GameState) -> Hud {
    let banner = match state.phase {
        GamePhase::GetReady => Some(Banner::GetReady { stage: state.stage }),
        GamePhase::StageClear => Some(Banner::StageClear),
        GamePhase::GameOver => Some(Banner::GameOver { score: state.score }),
        GamePhase::Playing => None,
    };
    Hud {
        score: state.score,
        stage: state.stage,
        banner,
        boss_warning: state.phase == GamePhase::Playing && state.warning_active(),
    }
}
