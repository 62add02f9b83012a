//! Echo Climb headless demo shell
//!
//! Stands in for a real host: seeds a session, feeds it a scripted input
//! sequence at the fixed tick cadence and dumps the final render frame as
//! JSON. A graphical host would drive [`echo_climb::sim::tick`] the same way
//! from its event loop and draw each [`RenderFrame`].

use echo_climb::consts::CLONE_DELAY_TICKS;
use echo_climb::sim::{GamePhase, GameState, TickInput, tick};

/// Hard stop so a session the clone never catches still terminates
const MAX_DEMO_TICKS: u64 = 5_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xEC40);
    log::info!("Echo Climb (headless) starting with seed {seed}");

    let mut state = GameState::new(seed);
    while state.phase == GamePhase::Running && state.time_ticks < MAX_DEMO_TICKS {
        let input = scripted_input(state.time_ticks);
        tick(&mut state, &input);
    }

    let frame = state.frame();
    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final frame: {err}"),
    }
    println!(
        "session over after {} ticks, final score {}",
        state.time_ticks, state.score
    );
}

/// A canned "player": hops rightward, idles a while, then climbs left, so the
/// recorded path has both dense and sparse stretches for the clone to replay.
fn scripted_input(t: u64) -> TickInput {
    let phase = t % (CLONE_DELAY_TICKS / 3);
    TickInput {
        left: phase >= 70,
        right: phase < 60,
        jump: t % 4 != 3,
        quit: false,
    }
}
