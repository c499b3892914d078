//! Chopper Strike entry point
//!
//! Runs a headless demo session: scripted input driving the simulation at
//! the fixed 60 Hz timestep, with HUD snapshots and audio cues reported
//! through the logger. A graphical shell would replace the script with
//! sampled device input and hand each frame's drawables to a renderer.

use std::path::Path;

use chopper_strike::audio::AudioManager;
use chopper_strike::consts::*;
use chopper_strike::settings::Settings;
use chopper_strike::sim::{GamePhase, GameState, TickInput, tick};
use chopper_strike::view;

/// Scripted pilot for the demo session.
///
/// Strafes left and right across the playfield, holds the vulcan trigger,
/// and lobs a missile once a second.
fn demo_input(tick_index: u64) -> TickInput {
    let mut input = TickInput::default();

    // 4-second strafe cycle: right, up-right, left, up-left
    match (tick_index / 60) % 4 {
        0 => input.right = true,
        1 => {
            input.right = true;
            input.up = true;
        }
        2 => input.left = true,
        _ => {
            input.left = true;
            input.up = true;
        }
    }

    input.fire_vulcan = true;
    input.fire_missile = tick_index % 60 == 0;
    input
}

fn run_demo(state: &mut GameState, audio: &AudioManager, max_ticks: u64) {
    let mut last_logged_second = u64::MAX;

    for i in 0..max_ticks {
        let input = demo_input(i);
        tick(state, &input);

        for cue in state.drain_cues() {
            audio.play(cue);
        }

        let second = state.time_ticks / 60;
        if second != last_logged_second {
            last_logged_second = second;
            let hud = view::hud(state);
            log::info!(
                "t={:>4}s score={:<6} stage={} drawables={}{}{}",
                second,
                hud.score,
                hud.stage,
                view::drawables(state).len(),
                if hud.boss_warning { " [warning]" } else { "" },
                match hud.banner {
                    Some(b) => format!(" banner={b:?}"),
                    None => String::new(),
                },
            );
        }

        if state.quit_requested {
            log::info!("Quit requested at tick {}", state.time_ticks);
            break;
        }
        if state.phase == GamePhase::GameOver {
            log::info!(
                "Game over at tick {} (score {}, stage {})",
                state.time_ticks,
                state.score,
                state.stage
            );
            break;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let demo_seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);

    let settings = Settings::load(Path::new("settings.json"));
    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    log::info!(
        "Chopper Strike starting (seed {seed}, {demo_seconds}s demo, {}x{} playfield)",
        PLAYFIELD_WIDTH,
        PLAYFIELD_HEIGHT
    );

    let mut state = GameState::new(seed);
    run_demo(&mut state, &audio, demo_seconds * 60);

    log::info!(
        "Demo finished: score {}, stage {}, {} ticks simulated",
        state.score,
        state.stage,
        state.time_ticks
    );
}
