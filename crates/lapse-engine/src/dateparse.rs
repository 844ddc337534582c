//! Free-text date parsing.
//!
//! Two formats make up the entire grammar, tried in order:
//!
//! 1. machine formats — ISO 8601 `YYYY-MM-DD`, then a full RFC 3339
//!    datetime (its date part is taken);
//! 2. a localized pattern — `<day> <month-name> <year>`, e.g.
//!    `"12 сентября 2009"`, with the month name resolved through a
//!    [`DateLocale`] table.
//!
//! No fuzzy matching. Anything else is rejected with a fixed reason, as a
//! value — parsing never panics.

use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{LapseError, Result};
use crate::locale::DateLocale;

/// A validated calendar date with a derived weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// `DD.MM.YYYY`, the rendering the stock locale displays.
    pub fn to_locale_string(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}

/// Parse free text into a [`CalendarDate`].
///
/// # Errors
///
/// [`LapseError::UnrecognizedDate`] when the text matches neither format,
/// [`LapseError::UnknownMonth`] when the localized pattern names a month the
/// locale table does not know, and [`LapseError::NoSuchDay`] when the
/// components name a day that does not exist (`"31 февраля 2020"`).
///
/// # Examples
///
/// ```
/// use lapse_engine::{parse_user_date, DateLocale};
///
/// let locale = DateLocale::russian();
/// let date = parse_user_date("12 сентября 2009", &locale).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2009, 9, 12));
/// ```
pub fn parse_user_date(input: &str, locale: &DateLocale) -> Result<CalendarDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LapseError::UnrecognizedDate(input.to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(CalendarDate::new(date));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(CalendarDate::new(dt.date_naive()));
    }

    parse_localized(trimmed, locale)
}

/// Parse `<day:1-2 digits> <month-name> <year:4 digits>`.
fn parse_localized(s: &str, locale: &DateLocale) -> Result<CalendarDate> {
    let lowered = s.to_lowercase();
    let mut parts = lowered.split_whitespace();
    let (Some(day_text), Some(month_text), Some(year_text), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(LapseError::UnrecognizedDate(s.to_string()));
    };

    let day_ok = (1..=2).contains(&day_text.len()) && day_text.bytes().all(|b| b.is_ascii_digit());
    let year_ok = year_text.len() == 4 && year_text.bytes().all(|b| b.is_ascii_digit());
    let month_ok = !month_text.is_empty()
        && month_text.chars().all(|c| c.is_alphabetic() || c == '-');
    if !(day_ok && year_ok && month_ok) {
        return Err(LapseError::UnrecognizedDate(s.to_string()));
    }

    let month = locale
        .month_number(month_text)
        .ok_or_else(|| LapseError::UnknownMonth(month_text.to_string()))?;
    let day: u32 = day_text
        .parse()
        .map_err(|_| LapseError::UnrecognizedDate(s.to_string()))?;
    let year: i32 = year_text
        .parse()
        .map_err(|_| LapseError::UnrecognizedDate(s.to_string()))?;

    // from_ymd_opt rejects days the month does not have, so a construction
    // that would silently roll over elsewhere fails here instead.
    NaiveDate::from_ymd_opt(year, month, day)
        .map(CalendarDate::new)
        .ok_or(LapseError::NoSuchDay { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale() -> DateLocale {
        DateLocale::russian()
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_user_date("2009-09-12", &locale()).unwrap();
        assert_eq!(date.year(), 2009);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 12);
    }

    #[test]
    fn test_parse_rfc3339_datetime_takes_date_part() {
        let date = parse_user_date("2009-09-12T15:30:00Z", &locale()).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2009, 9, 12));
    }

    #[test]
    fn test_parse_localized_genitive() {
        let date = parse_user_date("12 сентября 2009", &locale()).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2009, 9, 12));
    }

    #[test]
    fn test_localized_and_iso_agree() {
        let a = parse_user_date("2009-09-12", &locale()).unwrap();
        let b = parse_user_date("12 сентября 2009", &locale()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_localized_nominative() {
        let date = parse_user_date("12 сентябрь 2009", &locale()).unwrap();
        assert_eq!(date.month(), 9);
    }

    #[test]
    fn test_parse_tolerates_case_and_whitespace() {
        let date = parse_user_date("  1 Марта 2020  ", &locale()).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 3, 1));
    }

    #[test]
    fn test_nonexistent_day_rejected() {
        let err = parse_user_date("31 февраля 2020", &locale()).unwrap_err();
        assert!(matches!(err, LapseError::NoSuchDay { .. }), "got: {err}");
    }

    #[test]
    fn test_leap_day_valid_only_in_leap_years() {
        assert!(parse_user_date("29 февраля 2020", &locale()).is_ok());
        assert!(parse_user_date("29 февраля 2021", &locale()).is_err());
    }

    #[test]
    fn test_unknown_month_rejected() {
        let err = parse_user_date("12 тыквы 2009", &locale()).unwrap_err();
        assert!(matches!(err, LapseError::UnknownMonth(_)), "got: {err}");
    }

    #[test]
    fn test_arbitrary_text_rejected() {
        let err = parse_user_date("явно не дата", &locale()).unwrap_err();
        assert!(matches!(err, LapseError::UnrecognizedDate(_)), "got: {err}");
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        assert!(parse_user_date("", &locale()).is_err());
        assert!(parse_user_date("   ", &locale()).is_err());
    }

    #[test]
    fn test_three_digit_day_rejected() {
        assert!(parse_user_date("123 сентября 2009", &locale()).is_err());
    }

    #[test]
    fn test_two_digit_year_rejected() {
        assert!(parse_user_date("12 сентября 09", &locale()).is_err());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(parse_user_date("12 сентября 2009 года", &locale()).is_err());
    }

    #[test]
    fn test_derived_weekday() {
        // September 12, 2009 was a Saturday.
        let date = parse_user_date("2009-09-12", &locale()).unwrap();
        assert_eq!(date.weekday(), Weekday::Sat);
        assert_eq!(locale().weekday_name(date.weekday()), "Суббота");
    }

    #[test]
    fn test_locale_string_rendering() {
        let date = parse_user_date("2009-09-12", &locale()).unwrap();
        assert_eq!(date.to_locale_string(), "12.09.2009");
    }
}
