//! Day-precision calendar dates used as ledger keys.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A calendar day with no time-of-day component.
///
/// Two keys are the same ledger entry iff day, month and year all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateKey {
    day: u32,
    month: u32,
    year: i32,
}

impl DateKey {
    /// Build a key, rejecting dates that do not exist on the calendar.
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or(ValidationError::InvalidDate { day, month, year })
    }

    /// The current local date.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// (year, month, day), for stable on-disk ordering.
    pub(crate) fn sort_key(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day: {}, month: {}, year: {}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_structural() {
        let a = DateKey::new(16, 10, 2026).unwrap();
        let b = DateKey::new(16, 10, 2026).unwrap();
        let c = DateKey::new(17, 10, 2026).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn keys_with_equal_field_sums_stay_distinct() {
        // 1 + 2 + 2026 == 2 + 1 + 2026
        let a = DateKey::new(1, 2, 2026).unwrap();
        let b = DateKey::new(2, 1, 2026).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert_eq!(
            DateKey::new(31, 2, 2026),
            Err(ValidationError::InvalidDate { day: 31, month: 2, year: 2026 })
        );
        assert!(DateKey::new(0, 1, 2026).is_err());
        assert!(DateKey::new(1, 13, 2026).is_err());
        assert!(DateKey::new(29, 2, 2024).is_ok());
    }

    #[test]
    fn today_matches_local_calendar() {
        let now = Local::now().date_naive();
        let today = DateKey::today();
        // Guard against the test straddling midnight.
        if Local::now().date_naive() == now {
            assert_eq!(today, DateKey::from(now));
        }
    }

    #[test]
    fn display_lists_fields() {
        let key = DateKey::new(5, 3, 2018).unwrap();
        assert_eq!(key.to_string(), "day: 5, month: 3, year: 2018");
    }
}
