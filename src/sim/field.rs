//! Procedural platform field
//!
//! A pure random-walk generator: a full-width floor, then platforms placed
//! upward with horizontal locality (bounded drift from the previous x) and
//! bounded vertical gaps, until the generation ceiling. The field is climbable
//! as long as the maximum gap stays within jump reach; that is a tuning
//! property validated in tests rather than checked at runtime.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// A static platform. Immutable after generation except for the y-shift
/// applied by the scroll camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, PLATFORM_HEIGHT),
        }
    }
}

/// Generation parameters, exposed so climbability can be validated in tests
/// instead of discovered at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenParams {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Vertical gap range between consecutive platforms
    pub min_spacing: f32,
    pub max_spacing: f32,
    pub platform_width: f32,
    /// Maximum horizontal displacement from the previous platform's x
    pub max_drift: f32,
    /// Generate up to this far above the starting screen
    pub ceiling: f32,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            min_spacing: PLATFORM_SPACING_MIN,
            max_spacing: PLATFORM_SPACING_MAX,
            platform_width: PLATFORM_WIDTH,
            max_drift: PLATFORM_MAX_DRIFT,
            ceiling: GENERATION_CEILING,
        }
    }
}

/// Generate the platform field for one session.
///
/// The first platform is always the full-width floor; every later platform's
/// x is uniform within ±`max_drift` of its predecessor, clamped to stay fully
/// on-screen. Overlap is tolerated and nothing is deduplicated.
pub fn generate(params: &GenParams, rng: &mut Pcg32) -> Vec<Platform> {
    let mut platforms = vec![Platform {
        rect: Rect::new(
            0.0,
            params.screen_height - 10.0,
            params.screen_width,
            PLATFORM_HEIGHT,
        ),
    }];

    let mut y = params.screen_height - 100.0;
    let mut last_x = params.screen_width / 2.0;
    while y > -params.ceiling {
        let lo = (last_x - params.max_drift).max(0.0);
        let hi = (last_x + params.max_drift).min(params.screen_width - params.platform_width);
        let x = rng.random_range(lo..=hi);
        platforms.push(Platform::new(x, y, params.platform_width));
        last_x = x;
        y -= rng.random_range(params.min_spacing..=params.max_spacing);
    }

    log::debug!("generated {} platforms up to y={y:.0}", platforms.len());
    platforms
}
