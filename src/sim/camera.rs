//! Scroll camera
//!
//! The camera keeps the player's top edge pinned near one third of the screen
//! height, realized as a bulk coordinate translation: the computed offset is
//! added to the y of the player, every platform and the clone in the same
//! tick. Recorded path samples are deliberately left alone - each one is read
//! exactly once, before any later shift could matter, so shifting them too
//! would double-apply the offset.

use crate::consts::{CAMERA_DEADZONE, SCREEN_HEIGHT};

use super::state::GameState;

/// Recenter the world around the player and return the applied offset.
///
/// Offsets inside the deadzone apply nothing (and are not accumulated), which
/// keeps the world still while the player hops in place.
pub fn scroll(state: &mut GameState) -> f32 {
    let target = SCREEN_HEIGHT / 3.0;
    let offset = target - state.player.body.rect.top();
    if offset.abs() <= CAMERA_DEADZONE {
        return 0.0;
    }

    state.player.body.rect.pos.y += offset;
    for platform in &mut state.platforms {
        platform.rect.pos.y += offset;
    }
    if let Some(clone) = &mut state.clone {
        clone.body.rect.pos.y += offset;
    }
    state.camera_y += offset;
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::path::PathSample;
    use crate::sim::state::CloneEntity;
    use glam::Vec2;

    fn session_with_player_top(top: f32) -> GameState {
        let mut state = GameState::new(1);
        state.player.body.rect.pos.y = top;
        state
    }

    #[test]
    fn offset_inside_deadzone_moves_nothing() {
        // Player's top 8 units below the target: small but nonzero offset
        let mut state = session_with_player_top(SCREEN_HEIGHT / 3.0 + 8.0);
        let before = state.clone();
        assert_eq!(scroll(&mut state), 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn offset_beyond_deadzone_shifts_every_entity() {
        let mut state = session_with_player_top(SCREEN_HEIGHT / 3.0 - 50.0);
        state.clone = CloneEntity::spawn(vec![PathSample {
            pos: Vec2::new(100.0, 300.0),
            vel_y: 0.0,
        }]);
        let platform_top = state.platforms[0].rect.top();
        let clone_top = state.clone.as_ref().unwrap().body.rect.top();

        let offset = scroll(&mut state);
        assert_eq!(offset, 50.0);
        assert_eq!(state.player.body.rect.top(), SCREEN_HEIGHT / 3.0);
        assert_eq!(state.platforms[0].rect.top(), platform_top + 50.0);
        assert_eq!(
            state.clone.as_ref().unwrap().body.rect.top(),
            clone_top + 50.0
        );
        assert_eq!(state.camera_y, 50.0);
    }

    #[test]
    fn camera_displacement_accumulates_across_ticks() {
        let mut state = session_with_player_top(SCREEN_HEIGHT / 3.0 - 30.0);
        scroll(&mut state);
        state.player.body.rect.pos.y = SCREEN_HEIGHT / 3.0 - 20.0;
        scroll(&mut state);
        assert_eq!(state.camera_y, 50.0);
    }
}
