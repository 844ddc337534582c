//! # lapse-engine
//!
//! Presentation-free core of an interactive time tracker: a stopwatch with
//! lap capture, a countdown timer anchored to an absolute end instant, and a
//! calendar panel that resolves "today" and parses free-form, localized date
//! text.
//!
//! The crate never reads the system clock and never renders anything. Every
//! "now"-dependent operation takes an explicit anchor from the caller, and
//! periodic recomputation is driven by an external scheduler through the
//! [`ticker`] handshake — which is what makes start/stop cycles, clamping,
//! and drift behavior reproducible in tests.
//!
//! ## Modules
//!
//! - [`stopwatch`] — elapsed-time accumulation, laps, 24-hour ceiling
//! - [`timer`] — fixed-duration countdown, anti-drift end anchor
//! - [`format`] — Duration → hours/minutes/seconds/centiseconds breakdown
//! - [`dateparse`] — free text → validated calendar date
//! - [`locale`] — month-name and weekday-name tables
//! - [`daydate`] — current-day / user-date display state
//! - [`ticker`] — tick admission control for the external scheduler
//! - [`error`] — error types

pub mod dateparse;
pub mod daydate;
pub mod error;
pub mod format;
pub mod locale;
pub mod stopwatch;
pub mod ticker;
pub mod timer;

pub use dateparse::{parse_user_date, CalendarDate};
pub use daydate::DayDatePanel;
pub use error::LapseError;
pub use format::{format_duration, FormattedTime};
pub use locale::DateLocale;
pub use stopwatch::{Lap, Stopwatch, DEFAULT_CEILING_MS};
pub use ticker::{TickGate, TickToken, COARSE_TICK_MS, FINE_TICK_MS};
pub use timer::{Timer, TimerRun, TimerState};
