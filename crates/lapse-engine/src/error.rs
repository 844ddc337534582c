//! Error types for lapse-engine operations.
//!
//! Date parsing is the only fallible surface in this crate. Everything else
//! (out-of-range timer configuration, ceiling crossings, zero totals) is
//! clamped or surfaced as state rather than returned as an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LapseError {
    #[error("Unrecognized date format: '{0}'")]
    UnrecognizedDate(String),

    #[error("Unknown month name: '{0}'")]
    UnknownMonth(String),

    #[error("No such calendar day: {year:04}-{month:02}-{day:02}")]
    NoSuchDay { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, LapseError>;
