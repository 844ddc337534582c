//! Day/date panel: "what day is it" plus a user-entered date.
//!
//! Purely derived state. The panel stores the latest "today" anchor delivered
//! by its coarse tick, a counter that only exists to force recomputation, and
//! the outcome of the most recent user-date parse. Every display value is
//! re-derived on access; nothing is cached or invalidated.

use chrono::{Datelike, NaiveDate};

use crate::dateparse::{parse_user_date, CalendarDate};
use crate::locale::DateLocale;
use crate::ticker::{TickGate, TickToken};

/// Current-day and user-date display state, recomputed from the latest tick
/// and the latest parse outcome.
#[derive(Debug)]
pub struct DayDatePanel {
    locale: DateLocale,
    today: NaiveDate,
    tick_count: u64,
    user_input: String,
    user_date: Option<CalendarDate>,
    user_error: String,
    gate: TickGate,
}

impl DayDatePanel {
    /// Create the panel anchored at `today` and arm its coarse tick gate.
    ///
    /// The returned token is what the host's 1-second ticker must present.
    pub fn new(today: NaiveDate, locale: DateLocale) -> (Self, TickToken) {
        let mut panel = Self {
            locale,
            today,
            tick_count: 0,
            user_input: String::new(),
            user_date: None,
            user_error: String::new(),
            gate: TickGate::new(),
        };
        let token = panel.gate.arm();
        (panel, token)
    }

    /// Refresh the "today" anchor. Ignored for stale tokens.
    pub fn tick(&mut self, token: TickToken, now: NaiveDate) {
        if !self.gate.admits(token) {
            return;
        }
        self.today = now;
        self.tick_count += 1;
    }

    /// Re-parse the user's date text and replace the stored outcome.
    ///
    /// The date and error fields change together; observers never see a
    /// half-updated pair.
    pub fn set_user_date_input(&mut self, text: &str) {
        self.user_input = text.to_string();
        match parse_user_date(text, &self.locale) {
            Ok(date) => {
                self.user_date = Some(date);
                self.user_error.clear();
            }
            Err(e) => {
                self.user_date = None;
                self.user_error = e.to_string();
            }
        }
    }

    /// Stop accepting coarse ticks. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.gate.cancel();
    }

    pub fn current_day_name(&self) -> &str {
        self.locale.weekday_name(self.today.weekday())
    }

    pub fn current_date_string(&self) -> String {
        CalendarDate::new(self.today).to_locale_string()
    }

    /// Weekday name of the last valid user date, or `""`.
    pub fn user_day_name(&self) -> &str {
        match self.user_date {
            Some(date) => self.locale.weekday_name(date.weekday()),
            None => "",
        }
    }

    /// Locale-rendered last valid user date, or `""`.
    pub fn user_date_string(&self) -> String {
        match self.user_date {
            Some(date) => date.to_locale_string(),
            None => String::new(),
        }
    }

    /// The rejection message for the last parse attempt, or `""`.
    pub fn user_date_error(&self) -> &str {
        &self.user_error
    }

    pub fn user_date(&self) -> Option<CalendarDate> {
        self.user_date
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
