//! Stage simulation engine
//!
//! All gameplay logic lives here. This module is headless and synchronous:
//! - Fixed timestep only (one tick = one frame at 60 Hz)
//! - Timers are elapsed-time comparisons against the state-owned clock
//! - RNG is a state-owned seeded generator (fire-timing jitter only)
//! - No rendering, audio playback, or platform dependencies

pub mod battleship;
pub mod collision;
pub mod difficulty;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use battleship::Battleship;
pub use collision::{resolve_enemy_shots, resolve_player_shots};
pub use difficulty::StageParams;
pub use enemy::{AaGun, FighterJet, Warehouse};
pub use player::Player;
pub use projectile::{Projectile, ProjectileKind, Side};
pub use rect::{Rect, playfield};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
