//! Collision and damage resolution
//!
//! Runs once per tick after every motion update. Player projectiles test
//! against enemy categories in strict priority order (warehouses, AA guns,
//! fighters, then the battleship); a projectile damages at most one target
//! and dies on its first hit. Score is awarded exactly once, at the tick a
//! target's health transitions to zero.

use super::battleship::Battleship;
use super::enemy::{AaGun, FighterJet, Warehouse};
use super::player::Player;
use super::projectile::Projectile;
use crate::audio::AudioCue;
use crate::consts::*;

/// Resolve one player-owned projectile list against the enemy categories.
///
/// Projectiles that hit something are removed from the list.
pub fn resolve_player_shots(
    shots: &mut Vec<Projectile>,
    warehouses: &mut [Warehouse],
    aa_guns: &mut [AaGun],
    fighters: &mut [FighterJet],
    battleship: &mut Battleship,
    score: &mut u32,
    cues: &mut Vec<AudioCue>,
) {
    shots.retain(|shot| {
        let damage = shot.damage();

        // Category precedence: warehouses shadow AA guns shadow fighters
        // shadow the battleship. Targets already at zero health are corpses
        // awaiting cleanup and absorb nothing.
        if let Some(target) = warehouses
            .iter_mut()
            .find(|w| !w.is_destroyed() && w.rect.overlaps(&shot.rect))
        {
            target.take_damage(damage);
            if target.is_destroyed() {
                *score += SCORE_WAREHOUSE;
                cues.push(AudioCue::SmallExplosion);
            }
            return false;
        }
        if let Some(target) = aa_guns
            .iter_mut()
            .find(|g| !g.is_destroyed() && g.rect.overlaps(&shot.rect))
        {
            target.take_damage(damage);
            if target.is_destroyed() {
                *score += SCORE_AA_GUN;
                cues.push(AudioCue::SmallExplosion);
            }
            return false;
        }
        if let Some(target) = fighters
            .iter_mut()
            .find(|f| !f.is_destroyed() && f.rect.overlaps(&shot.rect))
        {
            target.take_damage(damage);
            if target.is_destroyed() {
                *score += SCORE_FIGHTER;
                cues.push(AudioCue::SmallExplosion);
            }
            return false;
        }
        if battleship.is_active() && battleship.rect.overlaps(&shot.rect) {
            battleship.take_damage(damage);
            if battleship.is_destroyed() {
                *score += SCORE_BATTLESHIP;
                cues.push(AudioCue::BattleshipExplosion);
                battleship.deactivate();
                log::info!("battleship destroyed, +{} points", SCORE_BATTLESHIP);
            }
            return false;
        }
        true
    });
}

/// Resolve enemy rounds against the player.
///
/// Each overlapping round is destroyed and its damage applied through the
/// player's invulnerability gate. Returns true the moment the player's
/// health reaches zero; remaining rounds are left unprocessed.
pub fn resolve_enemy_shots(
    shots: &mut Vec<Projectile>,
    player: &mut Player,
    now_ms: f64,
    cues: &mut Vec<AudioCue>,
) -> bool {
    let mut i = 0;
    while i < shots.len() {
        if shots[i].rect.overlaps(&player.rect) {
            let damage = shots[i].damage();
            shots.swap_remove(i);
            player.take_damage(damage, now_ms, cues);
            if player.is_destroyed() {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::projectile::ProjectileKind;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn vulcan_at(pos: Vec2) -> Projectile {
        Projectile::spawn(ProjectileKind::VulcanBullet, pos, Vec2::X)
    }

    #[test]
    fn test_category_precedence_warehouse_shadows_aa_gun() {
        let mut rng = Pcg32::seed_from_u64(1);
        let pos = Vec2::new(200.0, 560.0);
        let mut warehouses = vec![Warehouse::new(pos - Vec2::new(50.0, 30.0), 100)];
        let mut aa_guns = vec![AaGun::new(pos, 50, 2000.0, 0.0, &mut rng)];
        let mut fighters: Vec<FighterJet> = Vec::new();
        let mut battleship = Battleship::new(800);
        let mut score = 0;
        let mut cues = Vec::new();
        let mut shots = vec![vulcan_at(pos)];

        resolve_player_shots(
            &mut shots,
            &mut warehouses,
            &mut aa_guns,
            &mut fighters,
            &mut battleship,
            &mut score,
            &mut cues,
        );

        assert!(shots.is_empty(), "projectile destroyed on first hit");
        assert_eq!(warehouses[0].health, 95);
        assert_eq!(aa_guns[0].health, 50, "lower-priority category untouched");
        assert_eq!(score, 0);
    }

    #[test]
    fn test_score_awarded_once_at_kill() {
        let mut warehouses = vec![Warehouse::new(Vec2::new(150.0, 530.0), VULCAN_DAMAGE)];
        let mut aa_guns: Vec<AaGun> = Vec::new();
        let mut fighters: Vec<FighterJet> = Vec::new();
        let mut battleship = Battleship::new(800);
        let mut score = 0;
        let mut cues = Vec::new();
        let center = warehouses[0].rect.center;

        // Killing shot and a second shot in the same tick
        let mut shots = vec![vulcan_at(center), vulcan_at(center)];
        resolve_player_shots(
            &mut shots,
            &mut warehouses,
            &mut aa_guns,
            &mut fighters,
            &mut battleship,
            &mut score,
            &mut cues,
        );
        assert!(warehouses[0].is_destroyed());
        assert_eq!(score, SCORE_WAREHOUSE, "corpse must not re-award");
        assert_eq!(cues, vec![AudioCue::SmallExplosion]);
        // Second shot flew past the corpse
        assert_eq!(shots.len(), 1);
    }

    #[test]
    fn test_battleship_kill_awards_and_deactivates() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut warehouses: Vec<Warehouse> = Vec::new();
        let mut aa_guns: Vec<AaGun> = Vec::new();
        let mut fighters: Vec<FighterJet> = Vec::new();
        let mut battleship = Battleship::new(MISSILE_DAMAGE);
        battleship.activate(0.0, &mut rng);
        battleship.rect.center = Vec2::new(400.0, 200.0);
        let mut score = 0;
        let mut cues = Vec::new();
        let mut shots = vec![Projectile::spawn(
            ProjectileKind::Missile,
            Vec2::new(400.0, 200.0),
            Vec2::X,
        )];

        resolve_player_shots(
            &mut shots,
            &mut warehouses,
            &mut aa_guns,
            &mut fighters,
            &mut battleship,
            &mut score,
            &mut cues,
        );

        assert_eq!(score, SCORE_BATTLESHIP);
        assert!(!battleship.is_active());
        assert_eq!(cues, vec![AudioCue::BattleshipExplosion]);

        // Further shots pass through the deactivated hull
        let mut shots = vec![vulcan_at(Vec2::new(400.0, 200.0))];
        resolve_player_shots(
            &mut shots,
            &mut warehouses,
            &mut aa_guns,
            &mut fighters,
            &mut battleship,
            &mut score,
            &mut cues,
        );
        assert_eq!(shots.len(), 1);
        assert_eq!(score, SCORE_BATTLESHIP);
    }

    #[test]
    fn test_inactive_battleship_not_collidable() {
        let mut warehouses: Vec<Warehouse> = Vec::new();
        let mut aa_guns: Vec<AaGun> = Vec::new();
        let mut fighters: Vec<FighterJet> = Vec::new();
        let mut battleship = Battleship::new(800);
        battleship.rect.center = Vec2::new(400.0, 200.0);
        let mut score = 0;
        let mut cues = Vec::new();
        let mut shots = vec![vulcan_at(Vec2::new(400.0, 200.0))];
        resolve_player_shots(
            &mut shots,
            &mut warehouses,
            &mut aa_guns,
            &mut fighters,
            &mut battleship,
            &mut score,
            &mut cues,
        );
        assert_eq!(shots.len(), 1);
        assert_eq!(battleship.health, 800);
    }

    #[test]
    fn test_enemy_round_damages_player_and_dies() {
        let mut player = Player::new();
        let mut cues = Vec::new();
        let mut shots = vec![Projectile::enemy_round_up(player.rect.center)];
        let died = resolve_enemy_shots(&mut shots, &mut player, 5000.0, &mut cues);
        assert!(!died);
        assert_eq!(player.health, PLAYER_MAX_HEALTH - ENEMY_ROUND_DAMAGE);
        assert!(shots.is_empty());
        assert_eq!(cues, vec![AudioCue::PlayerDamage]);
    }

    #[test]
    fn test_enemy_pass_stops_at_player_death() {
        let mut player = Player::new();
        player.health = ENEMY_ROUND_DAMAGE;
        let mut cues = Vec::new();
        // Three overlapping rounds; the first is lethal
        let mut shots = vec![
            Projectile::enemy_round_up(player.rect.center),
            Projectile::enemy_round_up(player.rect.center),
            Projectile::enemy_round_up(player.rect.center),
        ];
        let died = resolve_enemy_shots(&mut shots, &mut player, 5000.0, &mut cues);
        assert!(died);
        assert_eq!(shots.len(), 2, "remaining rounds unprocessed");
    }
}
