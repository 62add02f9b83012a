//! Shared kinematics for player and clone
//!
//! Both entities fall under the same gravity, clamp to the same terminal
//! velocity and land on platforms by the same rule; they only differ in how
//! their position is produced each tick (input-driven vs replay-driven)
//! before this shared resolution runs.

use serde::{Deserialize, Serialize};

use super::field::Platform;
use super::rect::Rect;
use crate::consts::{GRAVITY, MAX_FALL_SPEED};

/// Physics state shared by every falling entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    /// Bounding box, positioned by its top-left corner
    pub rect: Rect,
    /// Vertical velocity in units/tick (positive is down)
    pub vel_y: f32,
    /// True while the bottom edge rests on a platform's top edge
    pub grounded: bool,
}

impl KinematicState {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel_y: 0.0,
            grounded: false,
        }
    }
}

/// Accelerate downward and clamp to terminal velocity.
///
/// Must run every tick before vertical integration so the clamp invariant
/// holds for both player and clone.
pub fn apply_gravity(state: &mut KinematicState) {
    state.vel_y = (state.vel_y + GRAVITY).min(MAX_FALL_SPEED);
}

/// Snap a falling body onto any platform it overlaps.
///
/// Clears grounded first, then checks platforms in iteration order; when
/// several overlap at once the last one processed wins (accepted
/// nondeterminism, bounded by generation rarely producing overlaps).
/// Upward-moving bodies pass through platforms freely.
pub fn resolve_landing(state: &mut KinematicState, platforms: &[Platform]) {
    let falling = state.vel_y > 0.0;
    state.grounded = false;
    for platform in platforms {
        if falling && state.rect.intersects(&platform.rect) {
            state.rect.set_bottom(platform.rect.top());
            state.vel_y = 0.0;
            state.grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32) -> KinematicState {
        KinematicState::new(Rect::new(x, y, 40.0, 40.0))
    }

    fn platform_at(x: f32, y: f32, w: f32) -> Platform {
        Platform::new(x, y, w)
    }

    #[test]
    fn gravity_accelerates_downward() {
        let mut body = body_at(0.0, 0.0);
        apply_gravity(&mut body);
        assert_eq!(body.vel_y, GRAVITY);
    }

    #[test]
    fn gravity_clamps_at_terminal_velocity() {
        let mut body = body_at(0.0, 0.0);
        body.vel_y = MAX_FALL_SPEED - 0.1;
        apply_gravity(&mut body);
        assert_eq!(body.vel_y, MAX_FALL_SPEED);
    }

    proptest! {
        #[test]
        fn velocity_never_exceeds_max_after_gravity(vel in -100.0f32..100.0) {
            let mut body = body_at(0.0, 0.0);
            body.vel_y = vel;
            apply_gravity(&mut body);
            prop_assert!(body.vel_y <= MAX_FALL_SPEED);
        }
    }

    #[test]
    fn falling_body_snaps_to_platform_top() {
        let mut body = body_at(0.0, 70.0);
        body.vel_y = 5.0;
        let platforms = [platform_at(0.0, 100.0, 100.0)];
        resolve_landing(&mut body, &platforms);
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.vel_y, 0.0);
        assert!(body.grounded);
    }

    #[test]
    fn rising_body_passes_through_platform() {
        let mut body = body_at(0.0, 70.0);
        body.vel_y = -5.0;
        let platforms = [platform_at(0.0, 100.0, 100.0)];
        resolve_landing(&mut body, &platforms);
        assert_eq!(body.rect.top(), 70.0);
        assert!(!body.grounded);
    }

    #[test]
    fn grounded_clears_when_no_platform_below() {
        let mut body = body_at(0.0, 0.0);
        body.grounded = true;
        resolve_landing(&mut body, &[]);
        assert!(!body.grounded);
    }

    #[test]
    fn last_overlapping_platform_wins() {
        let mut body = body_at(0.0, 70.0);
        body.vel_y = 5.0;
        let platforms = [
            platform_at(0.0, 100.0, 100.0),
            platform_at(0.0, 95.0, 100.0),
        ];
        resolve_landing(&mut body, &platforms);
        // Snapping onto the first platform leaves the body intersecting the
        // second, which is processed later and therefore wins
        assert_eq!(body.rect.bottom(), 95.0);
    }
}
