//! Fixed-duration countdown anchored to an absolute end instant.
//!
//! The timer never decrements by the tick delta. The poll interval itself
//! jitters, so remaining time is always re-derived from the end anchor frozen
//! at [`start`](Timer::start): `remaining = ends_at - now`. The caller
//! supplies every `now` explicitly — the engine performs no system-clock
//! access, which keeps completion behavior reproducible in tests.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::format::{format_duration, FormattedTime};
use crate::ticker::{TickGate, TickToken};

/// Where the timer is in its run lifecycle.
///
/// `Idle` is both the initial state and the result of any stop/reset;
/// `Complete` is terminal until explicitly cleared by `reset()` or a
/// re-arming `start()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Wall-clock anchors of the current run; exists only while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerRun {
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// A countdown timer configured in minutes and seconds, each in `[0, 59]`.
#[derive(Debug, Default)]
pub struct Timer {
    minutes: u32,
    seconds: u32,
    remaining_ms: u64,
    state: TimerState,
    run: Option<TimerRun>,
    gate: TickGate,
}

/// Clamp a UI-adjacent numeric field into `[0, 59]`.
///
/// Non-finite input coerces to 0; fractional input is floored. Out-of-range
/// values are clamped rather than rejected.
fn clamp_unit(v: f64) -> u32 {
    if v.is_finite() {
        v.floor().clamp(0.0, 59.0) as u32
    } else {
        0
    }
}

impl Timer {
    /// The stock preset durations, as `(minutes, seconds)` pairs.
    ///
    /// The last entry is the "1 hour" preset, expressed as 59:59 because the
    /// per-field range caps at 59.
    pub const PRESETS: &'static [(u32, u32)] =
        &[(5, 0), (10, 0), (15, 0), (30, 0), (45, 0), (59, 59)];

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configured minutes. Ignored while running.
    pub fn set_minutes(&mut self, v: f64) {
        if self.state != TimerState::Running {
            self.minutes = clamp_unit(v);
        }
    }

    /// Set the configured seconds. Ignored while running.
    pub fn set_seconds(&mut self, v: f64) {
        if self.state != TimerState::Running {
            self.seconds = clamp_unit(v);
        }
    }

    /// Replace both configured fields at once. Ignored while running.
    pub fn set_preset(&mut self, minutes: f64, seconds: f64) {
        if self.state != TimerState::Running {
            self.minutes = clamp_unit(minutes);
            self.seconds = clamp_unit(seconds);
        }
    }

    /// The configured total, in milliseconds.
    pub fn total_ms(&self) -> u64 {
        (u64::from(self.minutes) * 60 + u64::from(self.seconds)) * 1000
    }

    /// Start (or restart) the countdown from `now`.
    ///
    /// A zero configured total is a no-op returning `None`. Otherwise the end
    /// instant is frozen, any prior run is replaced (its token goes stale),
    /// and the token for the new run's ticks is returned. Also re-arms from
    /// `Complete`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Option<TickToken> {
        let total_ms = self.total_ms();
        if total_ms == 0 {
            return None;
        }
        self.run = Some(TimerRun {
            started_at: now,
            ends_at: now + Duration::milliseconds(total_ms as i64),
        });
        self.remaining_ms = total_ms;
        self.state = TimerState::Running;
        Some(self.gate.arm())
    }

    /// Recompute remaining time from the end anchor.
    ///
    /// Ignored unless `token` is current and the timer is running. When the
    /// anchor is reached, remaining clamps to 0, the state becomes
    /// `Complete`, and the run is discarded.
    pub fn tick(&mut self, token: TickToken, now: DateTime<Utc>) {
        if !self.gate.admits(token) || self.state != TimerState::Running {
            return;
        }
        let Some(run) = self.run else {
            return;
        };
        let remaining = (run.ends_at - now).num_milliseconds();
        if remaining <= 0 {
            self.remaining_ms = 0;
            self.state = TimerState::Complete;
            self.run = None;
            self.gate.cancel();
        } else {
            self.remaining_ms = remaining as u64;
        }
    }

    /// Halt a running countdown, keeping the last remaining value.
    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Idle;
            self.run = None;
            self.gate.cancel();
        }
    }

    /// Return to `Idle` with zero remaining. Configured minutes/seconds keep
    /// their values.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining_ms = 0;
        self.run = None;
        self.gate.cancel();
    }

    /// Remaining time as a percentage of the configured total.
    ///
    /// Exactly `0.0` when the total is zero.
    pub fn progress(&self) -> f64 {
        let total = self.total_ms();
        if total == 0 {
            0.0
        } else {
            self.remaining_ms as f64 / total as f64 * 100.0
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_complete(&self) -> bool {
        self.state == TimerState::Complete
    }

    /// The current run's anchors, while one exists.
    pub fn run(&self) -> Option<TimerRun> {
        self.run
    }

    /// The remaining time, broken down for display.
    pub fn formatted(&self) -> FormattedTime {
        format_duration(self.remaining_ms)
    }
}
