//! Fixed timestep session tick
//!
//! One tick runs the whole pipeline in order: player update, clone spawn
//! check, clone replay/physics, camera, score, collision check. Everything is
//! sequential within the tick, so the path append for tick N always
//! happens-before any replay read for tick N.

use serde::{Deserialize, Serialize};

use super::camera;
use super::state::{CloneEntity, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single tick (held keys, not edges)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Quit signal forwarded from the host; ends the session immediately
    pub quit: bool,
}

/// Advance the session by one tick. A no-op once the session has ended.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Ended {
        return;
    }
    if input.quit {
        log::info!("quit at tick {}; final score {}", state.time_ticks, state.score);
        state.phase = GamePhase::Ended;
        return;
    }

    state.time_ticks += 1;

    state.player.update(input, &state.platforms);

    // The clone spawns exactly once, with the path recorded up to this tick.
    // It joins the world only after this tick's camera step so its first
    // rendered position is exactly the offset spawn position.
    let mut pending_clone = None;
    if state.time_ticks == CLONE_DELAY_TICKS && state.clone.is_none() {
        match CloneEntity::spawn(state.player.recorder.snapshot()) {
            Some(clone) => {
                log::info!(
                    "clone spawned at tick {} with {} samples",
                    state.time_ticks,
                    clone.replay.len()
                );
                pending_clone = Some(clone);
            }
            None => {
                log::warn!("nothing recorded before the clone delay; no clone this session");
            }
        }
    }

    if let Some(clone) = &mut state.clone {
        clone.update(&state.platforms);
    }

    camera::scroll(state);

    // Derived, clamped at zero so descending below the start cannot mint a
    // phantom score; frozen once the session ends
    state.score = (state.camera_y.max(0.0) / SCORE_DIVISOR).floor() as u64;

    if let Some(clone) = pending_clone {
        state.clone = Some(clone);
    }

    if let Some(clone) = &state.clone
        && clone.body.rect.intersects(&state.player.body.rect)
    {
        log::info!(
            "caught by the clone at tick {}; final score {}",
            state.time_ticks,
            state.score
        );
        state.phase = GamePhase::Ended;
    }
}
