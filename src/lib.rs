//! Echo Climb - an endless vertical climber where your past chases you
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, path replay, game state)
//!
//! Rendering, input polling, audio and frame pacing are host concerns: the
//! host shell calls [`sim::tick`] once per fixed timestep with the currently
//! held inputs and draws whatever [`sim::GameState::frame`] returns.

pub mod sim;

/// Game configuration constants
///
/// All motion constants are in units per tick and assume a fixed 60 Hz tick;
/// hold the tick rate fixed or scale them consistently if it changes.
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;

    /// World dimensions (one screen)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player (and clone) bounding box is square
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Gravity applied every tick before vertical integration
    pub const GRAVITY: f32 = 0.8;
    /// Terminal fall speed; vertical velocity is clamped here after gravity
    pub const MAX_FALL_SPEED: f32 = 10.0;
    /// Vertical velocity set on jump (negative y is up)
    pub const JUMP_IMPULSE: f32 = -15.0;
    /// Fixed horizontal speed while a direction is held
    pub const RUN_SPEED: f32 = 5.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Vertical gap range between consecutive generated platforms
    pub const PLATFORM_SPACING_MIN: f32 = 100.0;
    pub const PLATFORM_SPACING_MAX: f32 = 120.0;
    /// Maximum horizontal displacement between consecutive platforms
    pub const PLATFORM_MAX_DRIFT: f32 = 200.0;
    /// Platforms are generated this far above the starting screen
    pub const GENERATION_CEILING: f32 = 2000.0;

    /// Ticks before the clone spawns with a copy of the recorded path
    pub const CLONE_DELAY_TICKS: u64 = 300;
    /// Visual offset of the clone's spawn position from the first sample
    pub const CLONE_SPAWN_OFFSET_X: f32 = 50.0;
    pub const CLONE_SPAWN_OFFSET_Y: f32 = -30.0;

    /// Camera pins the player's top edge near a third of the screen height;
    /// offsets inside the deadzone apply no shift (prevents jitter)
    pub const CAMERA_DEADZONE: f32 = 10.0;
    /// Score is total camera displacement divided by this
    pub const SCORE_DIVISOR: f32 = 10.0;
}
