//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (platform generation)
//! - Single-threaded, sequential entity updates within one tick
//! - No rendering or platform dependencies

pub mod body;
pub mod camera;
pub mod field;
pub mod path;
pub mod rect;
pub mod state;
pub mod tick;

pub use body::KinematicState;
pub use field::{GenParams, Platform, generate};
pub use path::{PathRecorder, PathReplay, PathSample};
pub use rect::Rect;
pub use state::{CloneEntity, GamePhase, GameState, Player, RenderFrame};
pub use tick::{TickInput, tick};
