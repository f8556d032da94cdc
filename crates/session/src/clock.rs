//! Frame and turn timing.
//!
//! Both clocks are driven by explicit elapsed durations instead of reading
//! the wall clock themselves, which keeps them deterministic under test.

use std::time::Duration;

/// Fixed-timestep accumulator for the outer loop.
///
/// Real elapsed time is accumulated; one logical frame is consumed each time
/// more than a full frame has built up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    accumulated: Duration,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            accumulated: Duration::ZERO,
        }
    }

    /// Clock running at `fps` frames per second (at least 1).
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated = self.accumulated.saturating_add(elapsed);
    }

    /// Consume one frame if the accumulator holds more than a frame.
    pub fn try_step(&mut self) -> bool {
        if self.accumulated > self.frame {
            self.accumulated -= self.frame;
            true
        } else {
            false
        }
    }

    /// How long the loop may sleep before the next frame is due.
    pub fn time_to_next_frame(&self) -> Duration {
        self.frame.saturating_sub(self.accumulated)
    }
}

/// Descend cadence: emits a descend once the current turn has elapsed.
///
/// The turn restarts from zero every time a descend is emitted, so switching
/// between normal and quick cadence takes effect immediately.
#[derive(Debug, Clone)]
pub struct TurnTimer {
    standard: Duration,
    quick: Duration,
    elapsed: Duration,
}

impl TurnTimer {
    pub fn new(standard: Duration, quick: Duration) -> Self {
        Self {
            standard,
            quick,
            elapsed: Duration::ZERO,
        }
    }

    /// Turn length for the given soft-drop state
    pub fn turn(&self, soft_drop: bool) -> Duration {
        if soft_drop {
            self.quick
        } else {
            self.standard
        }
    }

    /// Advance by `dt`; returns true when a descend is due.
    pub fn advance(&mut self, dt: Duration, soft_drop: bool) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed > self.turn(soft_drop) {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
