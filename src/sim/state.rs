//! Session state and entities
//!
//! Everything a session consists of lives here: the player (input-driven,
//! recording its path), the clone (replay-driven), the platform field and the
//! accumulated camera displacement the score derives from. The whole state is
//! serializable and contains no interior RNG, so equal seeds plus equal input
//! sequences yield bit-identical states.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{self, KinematicState};
use super::field::{GenParams, Platform, generate};
use super::path::{PathRecorder, PathReplay, PathSample};
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session is ticking
    Running,
    /// Terminal: the clone caught the player (or the host quit)
    Ended,
}

/// The player: a kinematic body driven by input, recording its trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: KinematicState,
    pub recorder: PathRecorder,
}

impl Player {
    pub fn new() -> Self {
        // Centered horizontally, just above the floor
        let pos = Vec2::new(
            SCREEN_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
            SCREEN_HEIGHT - 60.0 - PLAYER_SIZE / 2.0,
        );
        Self {
            body: KinematicState::new(Rect::new(pos.x, pos.y, PLAYER_SIZE, PLAYER_SIZE)),
            recorder: PathRecorder::new(pos),
        }
    }

    /// Advance one tick: gravity, input, integration, landing, edge clamp,
    /// then record the resulting position if it changed.
    pub fn update(&mut self, input: &TickInput, platforms: &[Platform]) {
        body::apply_gravity(&mut self.body);

        let mut dx = 0.0;
        if input.left {
            dx = -RUN_SPEED;
        }
        if input.right {
            dx = RUN_SPEED;
        }

        if input.jump && self.body.grounded {
            self.body.vel_y = JUMP_IMPULSE;
            self.body.grounded = false;
        }

        // Horizontal before vertical
        self.body.rect.pos.x += dx;
        self.body.rect.pos.y += self.body.vel_y;

        body::resolve_landing(&mut self.body, platforms);

        // World-edge clamp (player only)
        self.body.rect.pos.x = self
            .body
            .rect
            .pos
            .x
            .clamp(0.0, SCREEN_WIDTH - self.body.rect.size.x);

        self.recorder.record(self.body.rect.pos, self.body.vel_y);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The clone: a kinematic body that replays the player's recorded path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneEntity {
    pub body: KinematicState,
    pub replay: PathReplay,
}

impl CloneEntity {
    /// Spawn from a copy of the path recorded so far. Returns `None` for an
    /// empty path (the player never moved before the delay elapsed).
    pub fn spawn(samples: Vec<PathSample>) -> Option<Self> {
        let replay = PathReplay::new(samples);
        let first = *replay.first()?;
        let pos = first.pos + Vec2::new(CLONE_SPAWN_OFFSET_X, CLONE_SPAWN_OFFSET_Y);
        let mut body = KinematicState::new(Rect::new(pos.x, pos.y, PLAYER_SIZE, PLAYER_SIZE));
        body.vel_y = first.vel_y;
        Some(Self { body, replay })
    }

    /// Teleport to the sample under the cursor, if any. Replay is
    /// position-authoritative: the recorded coordinates override whatever
    /// physics produced last tick.
    pub fn advance_replay(&mut self) {
        if let Some(sample) = self.replay.next() {
            self.body.rect.pos = sample.pos;
            self.body.vel_y = sample.vel_y;
        }
    }

    /// Advance one tick: replay while samples remain, then the same gravity
    /// and landing rules as the player. Once the path is exhausted the
    /// teleport becomes a no-op and the carried velocity drives free fall.
    pub fn update(&mut self, platforms: &[Platform]) {
        self.advance_replay();
        body::apply_gravity(&mut self.body);
        self.body.rect.pos.y += self.body.vel_y;
        body::resolve_landing(&mut self.body, platforms);
    }
}

/// What the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub platforms: Vec<Rect>,
    pub player: Rect,
    pub clone: Option<Rect>,
    pub score: u64,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Does not exist until the spawn delay elapses; created at most once
    pub clone: Option<CloneEntity>,
    pub platforms: Vec<Platform>,
    /// Accumulated camera displacement; the score derives from it
    pub camera_y: f32,
    /// `floor(max(camera_y, 0) / 10)`, frozen at termination
    pub score: u64,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, &GenParams::default())
    }

    /// Create a session with explicit generation parameters (tests)
    pub fn with_params(seed: u64, params: &GenParams) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = generate(params, &mut rng);
        log::info!("new session: seed={seed}, {} platforms", platforms.len());
        let mut state = Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Running,
            player: Player::new(),
            clone: None,
            platforms,
            camera_y: 0.0,
            score: 0,
        };
        // Center the world on the player before the first tick; the
        // pre-session snap does not count toward score and the recorder's
        // reference position must be the shifted one
        super::camera::scroll(&mut state);
        state.camera_y = 0.0;
        state.player.recorder = PathRecorder::new(state.player.body.rect.pos);
        state
    }

    /// Snapshot of everything the host renders this frame
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            platforms: self.platforms.iter().map(|p| p.rect).collect(),
            player: self.player.body.rect,
            clone: self.clone.as_ref().map(|c| c.body.rect),
            score: self.score,
        }
    }
}
