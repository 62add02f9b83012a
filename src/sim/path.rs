//! Trajectory recording and replay
//!
//! The recorder is an append-only log of the player's distinct positions: a
//! sample is written only when the position actually changed since the last
//! recorded one, so idle stretches leave no samples at all. The replay side
//! gets a value copy of the log at clone spawn plus a read cursor; once the
//! cursor runs past the end, the clone is left to normal physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One recorded snapshot of the player, emitted only on positional change.
/// Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    pub pos: Vec2,
    pub vel_y: f32,
}

/// Append-only producer side of the path, owned by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecorder {
    samples: Vec<PathSample>,
    /// Position at the end of the previous tick, including the spawn
    /// position before any sample exists
    last_pos: Vec2,
}

impl PathRecorder {
    pub fn new(start: Vec2) -> Self {
        Self {
            samples: Vec::new(),
            last_pos: start,
        }
    }

    /// Append a sample iff `pos` differs from the previously recorded
    /// position on either axis. Consecutive duplicates never occur.
    pub fn record(&mut self, pos: Vec2, vel_y: f32) {
        if pos.x != self.last_pos.x || pos.y != self.last_pos.y {
            self.samples.push(PathSample { pos, vel_y });
            self.last_pos = pos;
        }
    }

    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Value copy of everything recorded so far, for handing to the replay
    /// side at clone spawn. The recorder keeps appending independently.
    pub fn snapshot(&self) -> Vec<PathSample> {
        self.samples.clone()
    }
}

/// Consumer side: a frozen copy of the path plus a read cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReplay {
    samples: Vec<PathSample>,
    cursor: usize,
}

impl PathReplay {
    pub fn new(samples: Vec<PathSample>) -> Self {
        Self { samples, cursor: 0 }
    }

    pub fn first(&self) -> Option<&PathSample> {
        self.samples.first()
    }

    /// The sample under the cursor, advancing it; `None` once exhausted
    pub fn next(&mut self) -> Option<PathSample> {
        let sample = self.samples.get(self.cursor).copied();
        if sample.is_some() {
            self.cursor += 1;
        }
        sample
    }

    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    pub fn exhausted(&self) -> bool {
        self.cursor >= self.samples.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_position_records_nothing() {
        let start = Vec2::new(10.0, 20.0);
        let mut recorder = PathRecorder::new(start);
        recorder.record(start, 5.0);
        assert!(recorder.is_empty());
    }

    #[test]
    fn no_consecutive_duplicate_samples() {
        let mut recorder = PathRecorder::new(Vec2::ZERO);
        recorder.record(Vec2::new(5.0, 0.0), 0.8);
        recorder.record(Vec2::new(5.0, 0.0), 1.6);
        recorder.record(Vec2::new(10.0, 0.0), 2.4);
        assert_eq!(recorder.len(), 2);
        for pair in recorder.samples().windows(2) {
            assert_ne!(pair[0].pos, pair[1].pos);
        }
    }

    #[test]
    fn either_axis_change_triggers_a_sample() {
        let mut recorder = PathRecorder::new(Vec2::ZERO);
        recorder.record(Vec2::new(0.0, -1.0), -15.0);
        recorder.record(Vec2::new(1.0, -1.0), -14.2);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn replay_yields_samples_in_order_then_exhausts() {
        let mut recorder = PathRecorder::new(Vec2::ZERO);
        recorder.record(Vec2::new(1.0, 0.0), 0.8);
        recorder.record(Vec2::new(2.0, 0.0), 1.6);

        let mut replay = PathReplay::new(recorder.snapshot());
        assert_eq!(replay.next().unwrap().pos, Vec2::new(1.0, 0.0));
        assert_eq!(replay.next().unwrap().pos, Vec2::new(2.0, 0.0));
        assert!(replay.exhausted());
        assert_eq!(replay.next(), None);
        assert_eq!(replay.cursor(), 2);
    }

    #[test]
    fn snapshot_is_decoupled_from_later_recording() {
        let mut recorder = PathRecorder::new(Vec2::ZERO);
        recorder.record(Vec2::new(1.0, 0.0), 0.8);
        let replay = PathReplay::new(recorder.snapshot());
        recorder.record(Vec2::new(2.0, 0.0), 1.6);
        assert_eq!(replay.len(), 1);
        assert_eq!(recorder.len(), 2);
    }
}
