//! Month-name and weekday-name tables for localized date handling.
//!
//! The default tables are Russian: month lookup accepts both genitive
//! ("сентября", as dates are written) and nominative ("сентябрь") forms, and
//! weekday names are indexed Sunday-first. Hosts may supply their own tables
//! through [`DateLocale::new`].

use std::collections::HashMap;

use chrono::Weekday;

/// Genitive month forms, January first.
const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

/// Nominative month forms, January first.
const MONTHS_NOMINATIVE: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];

/// Weekday names, Sunday first.
const WEEKDAYS: [&str; 7] = [
    "Воскресенье",
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
];

/// A month-name table (name → 1-based month) plus a Sunday-first weekday table.
#[derive(Debug, Clone)]
pub struct DateLocale {
    months: HashMap<String, u32>,
    weekdays: [String; 7],
}

impl Default for DateLocale {
    fn default() -> Self {
        Self::russian()
    }
}

impl DateLocale {
    /// Build a locale from custom tables. Month names are matched
    /// case-insensitively; the weekday array is Sunday-first.
    pub fn new(
        months: impl IntoIterator<Item = (String, u32)>,
        weekdays: [String; 7],
    ) -> Self {
        let months = months
            .into_iter()
            .map(|(name, number)| (name.to_lowercase(), number))
            .collect();
        Self { months, weekdays }
    }

    /// The stock Russian locale: 12 genitive + 12 nominative month forms.
    pub fn russian() -> Self {
        let mut months = HashMap::with_capacity(24);
        for (i, name) in MONTHS_GENITIVE.iter().enumerate() {
            months.insert((*name).to_string(), i as u32 + 1);
        }
        for (i, name) in MONTHS_NOMINATIVE.iter().enumerate() {
            months.insert((*name).to_string(), i as u32 + 1);
        }
        Self {
            months,
            weekdays: WEEKDAYS.map(String::from),
        }
    }

    /// Resolve a month name to its 1-based number, case-insensitively.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        self.months.get(&name.to_lowercase()).copied()
    }

    /// The display name for a weekday.
    pub fn weekday_name(&self, weekday: Weekday) -> &str {
        &self.weekdays[weekday.num_days_from_sunday() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genitive_and_nominative_resolve_to_same_month() {
        let locale = DateLocale::russian();
        assert_eq!(locale.month_number("сентября"), Some(9));
        assert_eq!(locale.month_number("сентябрь"), Some(9));
    }

    #[test]
    fn test_month_lookup_is_case_insensitive() {
        let locale = DateLocale::russian();
        assert_eq!(locale.month_number("Января"), Some(1));
        assert_eq!(locale.month_number("ДЕКАБРЬ"), Some(12));
    }

    #[test]
    fn test_unknown_month_is_none() {
        let locale = DateLocale::russian();
        assert_eq!(locale.month_number("брюмера"), None);
    }

    #[test]
    fn test_weekday_names_are_sunday_first() {
        let locale = DateLocale::russian();
        assert_eq!(locale.weekday_name(Weekday::Sun), "Воскресенье");
        assert_eq!(locale.weekday_name(Weekday::Mon), "Понедельник");
        assert_eq!(locale.weekday_name(Weekday::Sat), "Суббота");
    }

    #[test]
    fn test_custom_locale_tables() {
        let months = (1..=12).map(|n| (format!("m{n}"), n));
        let weekdays = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"].map(String::from);
        let locale = DateLocale::new(months, weekdays);
        assert_eq!(locale.month_number("M3"), Some(3));
        assert_eq!(locale.weekday_name(Weekday::Fri), "fri");
    }
}
