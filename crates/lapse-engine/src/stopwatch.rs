//! Elapsed-time accumulation with lap capture.
//!
//! The stopwatch advances by the fixed per-tick increment its scheduler
//! delivers rather than re-deriving elapsed time from a wall-clock anchor.
//! At a 10 ms cadence the drift this admits is negligible over the bounded
//! 24-hour ceiling; the countdown [`Timer`](crate::timer::Timer) takes the
//! opposite trade because its end instant is a user-visible promise.

use crate::format::{format_duration, FormattedTime};
use crate::ticker::{TickGate, TickToken};

/// Default auto-stop ceiling: 24 hours.
pub const DEFAULT_CEILING_MS: u64 = 24 * 60 * 60 * 1000;

/// An immutable formatted snapshot of the elapsed time at capture.
pub type Lap = FormattedTime;

/// A stopwatch accumulating elapsed milliseconds while running.
///
/// Driven entirely by discrete calls: the host scheduler delivers
/// [`tick`](Stopwatch::tick) at a fine cadence while the stopwatch holds an
/// armed [`TickGate`], and the user-facing commands flip state between calls.
#[derive(Debug)]
pub struct Stopwatch {
    elapsed_ms: u64,
    running: bool,
    laps: Vec<Lap>,
    ceiling_ms: u64,
    gate: TickGate,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_CEILING_MS)
    }

    /// A stopwatch that auto-stops at `ceiling_ms` instead of 24 hours.
    pub fn with_ceiling(ceiling_ms: u64) -> Self {
        Self {
            elapsed_ms: 0,
            running: false,
            laps: Vec::new(),
            ceiling_ms,
            gate: TickGate::new(),
        }
    }

    /// Flip between running and paused.
    ///
    /// Returns the token the scheduler must present with each tick when the
    /// stopwatch is now running, or `None` when it is now paused (the gate is
    /// cancelled synchronously, so no in-flight tick lands after this call).
    pub fn toggle_running(&mut self) -> Option<TickToken> {
        self.running = !self.running;
        if self.running {
            Some(self.gate.arm())
        } else {
            self.gate.cancel();
            None
        }
    }

    /// Advance elapsed time by `delta_ms`.
    ///
    /// Ignored unless `token` is current and the stopwatch is running. If the
    /// increment reaches the ceiling, elapsed time clamps there, the
    /// stopwatch auto-stops, and this returns `true` — exactly once per run.
    pub fn tick(&mut self, token: TickToken, delta_ms: u64) -> bool {
        if !self.gate.admits(token) || !self.running {
            return false;
        }
        if self.elapsed_ms.saturating_add(delta_ms) >= self.ceiling_ms {
            self.elapsed_ms = self.ceiling_ms;
            self.running = false;
            self.gate.cancel();
            return true;
        }
        self.elapsed_ms += delta_ms;
        false
    }

    /// Stop, zero the elapsed time, and clear all laps. Unconditional.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
        self.laps.clear();
        self.gate.cancel();
    }

    /// Capture the current elapsed time as a lap, most recent first.
    ///
    /// Legal whether running or paused.
    pub fn record_lap(&mut self) {
        self.laps.insert(0, format_duration(self.elapsed_ms));
    }

    /// Remove the lap at `index`; out-of-range indices are a no-op.
    pub fn delete_lap(&mut self, index: usize) {
        if index < self.laps.len() {
            self.laps.remove(index);
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn ceiling_ms(&self) -> u64 {
        self.ceiling_ms
    }

    /// Whether the ceiling has been reached (elapsed time is pinned there).
    pub fn at_ceiling(&self) -> bool {
        self.elapsed_ms == self.ceiling_ms
    }

    /// The current elapsed time, broken down for display.
    pub fn formatted(&self) -> FormattedTime {
        format_duration(self.elapsed_ms)
    }
}
