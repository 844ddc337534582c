//! Handshake with the external tick scheduler.
//!
//! The periodic "wake up and recompute" mechanism lives outside this crate —
//! the host owns the actual interval timers. What the engines own is the
//! *authorization* for ticks: a [`TickGate`] per engine hands out a
//! [`TickToken`] when a run starts, and every tick must present the current
//! token. Stopping or resetting cancels the gate before returning, so a
//! stale or queued callback delivered afterwards is rejected without any
//! state change.
//!
//! Arming an already-armed gate replaces the prior authorization (the old
//! token goes stale), so restarting a run can never leak a second live
//! ticker. Cancelling is idempotent; cancelling on shutdown a second time is
//! a no-op.

/// Suggested cadence for the stopwatch and timer engines, in milliseconds.
pub const FINE_TICK_MS: u64 = 10;

/// Suggested cadence for the day/date panel, in milliseconds.
pub const COARSE_TICK_MS: u64 = 1000;

/// Proof that a tick belongs to the engine's current run.
///
/// Handed to the scheduler when a run starts; presented back with every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

/// Per-engine admission control for externally scheduled ticks.
#[derive(Debug, Default)]
pub struct TickGate {
    generation: u64,
    active: Option<u64>,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorize a new run, replacing any prior authorization.
    pub fn arm(&mut self) -> TickToken {
        self.generation += 1;
        self.active = Some(self.generation);
        TickToken(self.generation)
    }

    /// Withdraw the current authorization. Idempotent.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    /// Whether `token` belongs to the current run.
    pub fn admits(&self, token: TickToken) -> bool {
        self.active == Some(token.0)
    }
}
