//! Fixed timestep simulation tick
//!
//! One tick = one frame at 60 Hz. Order within a tick is fixed: input
//! sampling, state-machine dispatch, entity updates, collision resolution,
//! cleanup of destroyed entities, stage-clear/game-over checks.

use super::collision::{resolve_enemy_shots, resolve_player_shots};
use super::rect::playfield;
use super::state::{GamePhase, GameState};
use crate::audio::AudioCue;
use crate::consts::*;

/// Decoded input snapshot for a single tick.
///
/// The core has no knowledge of raw input devices; the shell samples held
/// keys once per tick and hands them over.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire_vulcan: bool,
    pub fire_missile: bool,
    /// Skip the get-ready countdown
    pub confirm: bool,
    /// Restart from game over
    pub restart: bool,
    /// Quit request (escape in play, quit at game over)
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    state.time_ms += MS_PER_TICK;
    let now = state.time_ms;

    if input.quit {
        state.quit_requested = true;
    }

    // Work against a local cue queue so entity updates can borrow state
    // fields independently; restored before returning.
    let mut cues = state.drain_cues();

    match state.phase {
        GamePhase::GetReady => {
            if input.confirm || now - state.phase_started_ms > GET_READY_MS {
                state.enter_playing();
            }
        }

        GamePhase::Playing => {
            let bounds = playfield();

            state.player.handle_input(input, now, &mut cues);
            state.player.update(&bounds);
            let player_pos = state.player.rect.center;

            for gun in &mut state.aa_guns {
                gun.update(now, &mut state.enemy_shots, &mut cues);
            }
            for jet in &mut state.fighters {
                jet.update(now, player_pos, &bounds, &mut state.enemy_shots, &mut cues);
            }
            for shot in &mut state.enemy_shots {
                shot.advance();
            }
            state.enemy_shots.retain(|s| !s.is_out_of_bounds(&bounds));

            // Boss lifecycle, driven by elapsed time in this stage
            let elapsed = now - state.stage_started_ms;
            let boss_pending =
                !state.battleship.is_active() && !state.battleship.is_destroyed();
            if boss_pending && !state.warning_shown_this_stage {
                let time_to_spawn = BATTLESHIP_SPAWN_MS - elapsed;
                if time_to_spawn > 0.0 && time_to_spawn <= BATTLESHIP_WARNING_LEAD_MS {
                    state.warning_until_ms = now + BATTLESHIP_WARNING_DURATION_MS;
                    state.warning_shown_this_stage = true;
                    log::info!("battleship approaching (stage {})", state.stage);
                }
            }
            if boss_pending && elapsed > BATTLESHIP_SPAWN_MS {
                state.battleship.activate(now, &mut state.rng);
                state.warning_until_ms = 0.0;
            }
            state.battleship.update(
                now,
                player_pos,
                &mut state.rng,
                &mut state.enemy_shots,
                &mut cues,
            );

            // Collision resolution, player shots first
            resolve_player_shots(
                &mut state.player.vulcan_bullets,
                &mut state.warehouses,
                &mut state.aa_guns,
                &mut state.fighters,
                &mut state.battleship,
                &mut state.score,
                &mut cues,
            );
            resolve_player_shots(
                &mut state.player.missiles,
                &mut state.warehouses,
                &mut state.aa_guns,
                &mut state.fighters,
                &mut state.battleship,
                &mut state.score,
                &mut cues,
            );

            let player_died =
                resolve_enemy_shots(&mut state.enemy_shots, &mut state.player, now, &mut cues);
            if player_died {
                log::info!("game over at score {}", state.score);
                cues.push(AudioCue::GameOver);
                state.phase = GamePhase::GameOver;
                state.phase_started_ms = now;
                state.cues = cues;
                return;
            }

            // Cleanup of destroyed entities
            state.warehouses.retain(|w| !w.is_destroyed());
            state.aa_guns.retain(|g| !g.is_destroyed());
            state.fighters.retain(|f| !f.is_destroyed());

            if state.ground_and_air_cleared() {
                log::info!("stage {} clear, score {}", state.stage, state.score);
                cues.push(AudioCue::StageClear);
                state.phase = GamePhase::StageClear;
                state.phase_started_ms = now;
            }
        }

        GamePhase::StageClear => {
            if now - state.phase_started_ms > STAGE_CLEAR_MS {
                state.advance_stage();
            }
        }

        GamePhase::GameOver => {
            if input.restart {
                state.restart();
            }
        }
    }

    state.cues = cues;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::projectile::{Projectile, ProjectileKind};
    use glam::Vec2;

    fn ticks_for_ms(ms: f64) -> u32 {
        (ms / MS_PER_TICK).ceil() as u32 + 1
    }

    fn run_idle(state: &mut GameState, n: u32) {
        let input = TickInput::default();
        for _ in 0..n {
            tick(state, &input);
        }
    }

    fn enter_playing(state: &mut GameState) {
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(state, &confirm);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_get_ready_auto_advances() {
        let mut state = GameState::new(1);
        run_idle(&mut state, ticks_for_ms(GET_READY_MS));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_confirm_skips_get_ready() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
    }

    #[test]
    fn test_offscreen_projectile_removed_next_tick() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
        // One tick from fully exiting the left edge
        state.player.vulcan_bullets.push(Projectile::spawn(
            ProjectileKind::VulcanBullet,
            Vec2::new(2.0, 100.0),
            -Vec2::X,
        ));
        run_idle(&mut state, 1);
        assert!(state.player.vulcan_bullets.is_empty());
    }

    #[test]
    fn test_warehouse_takes_twenty_vulcan_hits() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
        // Keep the player away from enemy fire
        state.enemy_shots.clear();
        state.aa_guns.clear();
        state.fighters.clear();

        let target = state.warehouses[0].rect.center;
        let start_score = state.score;
        for hit in 1..=20u32 {
            state.player.vulcan_bullets.push(Projectile::spawn(
                ProjectileKind::VulcanBullet,
                target,
                Vec2::X,
            ));
            run_idle(&mut state, 1);
            if hit < 20 {
                assert_eq!(state.warehouses.len(), 5, "alive through hit {hit}");
                assert_eq!(state.score, start_score);
            }
        }
        assert_eq!(state.warehouses.len(), 4);
        assert_eq!(state.score, start_score + SCORE_WAREHOUSE);
    }

    #[test]
    fn test_stage_clear_then_next_stage() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
        state.warehouses.clear();
        state.aa_guns.clear();
        state.fighters.clear();
        run_idle(&mut state, 1);
        assert_eq!(state.phase, GamePhase::StageClear);
        assert!(state.cues.contains(&AudioCue::StageClear));

        run_idle(&mut state, ticks_for_ms(STAGE_CLEAR_MS));
        assert_eq!(state.phase, GamePhase::GetReady);
        assert_eq!(state.stage, 2);
        assert_eq!(state.warehouses.len(), 5);
    }

    #[test]
    fn test_player_death_is_game_over() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
        state.player.health = ENEMY_ROUND_DAMAGE;
        state
            .enemy_shots
            .push(Projectile::enemy_round_up(state.player.rect.center));
        // NB: the round advances before collision; aim from just below
        state.enemy_shots[0].rect.center.y += ENEMY_ROUND_SPEED;
        run_idle(&mut state, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.cues.contains(&AudioCue::GameOver));
        assert!(state.player.is_destroyed());
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.score = 500;
        state.stage = 3;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state.phase, GamePhase::GetReady);
        assert_eq!(state.score, 0);
        assert_eq!(state.stage, 1);
    }

    #[test]
    fn test_boss_warning_then_spawn() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);

        // Jump to 29 s before the spawn threshold
        state.stage_started_ms =
            state.time_ms - (BATTLESHIP_SPAWN_MS - BATTLESHIP_WARNING_LEAD_MS + 1000.0);
        run_idle(&mut state, 1);
        assert!(state.warning_active());
        assert!(state.warning_shown_this_stage);
        assert!(!state.battleship.is_active());

        // Warning expires after its display window
        run_idle(&mut state, ticks_for_ms(BATTLESHIP_WARNING_DURATION_MS));
        assert!(!state.warning_active());

        // Jump past the spawn threshold
        state.stage_started_ms = state.time_ms - (BATTLESHIP_SPAWN_MS + 1.0);
        run_idle(&mut state, 1);
        assert!(state.battleship.is_active());
    }

    #[test]
    fn test_warning_fires_once_per_stage() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
        state.stage_started_ms =
            state.time_ms - (BATTLESHIP_SPAWN_MS - BATTLESHIP_WARNING_LEAD_MS + 1000.0);
        run_idle(&mut state, 1);
        let first_until = state.warning_until_ms;
        run_idle(&mut state, 10);
        assert_eq!(state.warning_until_ms, first_until);
    }

    #[test]
    fn test_destroyed_boss_does_not_respawn() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
        let now = state.time_ms;
        state.battleship.activate(now, &mut state.rng.clone());
        let hp = state.battleship.health;
        state.battleship.take_damage(hp);
        state.battleship.deactivate();
        state.stage_started_ms = state.time_ms - (BATTLESHIP_SPAWN_MS + 1.0);
        run_idle(&mut state, 1);
        assert!(!state.battleship.is_active());
    }

    #[test]
    fn test_quit_flag_propagates() {
        let mut state = GameState::new(1);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit);
        assert!(state.quit_requested);
    }

    #[test]
    fn test_stage_clear_not_gated_by_battleship() {
        let mut state = GameState::new(1);
        enter_playing(&mut state);
        let now = state.time_ms;
        let mut rng = state.rng.clone();
        state.battleship.activate(now, &mut rng);
        state.warehouses.clear();
        state.aa_guns.clear();
        state.fighters.clear();
        run_idle(&mut state, 1);
        assert_eq!(state.phase, GamePhase::StageClear);
    }
}
