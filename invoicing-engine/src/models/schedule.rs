//! Holiday calendar for service-day accounting.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Set of non-service dates maintained by the calendar screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a date in or out of the set.
    ///
    /// Returns true if the date is marked after the toggle.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.holidays.insert(date) {
            true
        } else {
            self.holidays.remove(&date);
            false
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Marked dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Mark every date in the inclusive range.
    pub fn mark_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let mut day = start;
        while day <= end {
            self.holidays.insert(day);
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
    }

    /// Count the weekdays of the given month that are not marked as holidays.
    ///
    /// Returns 0 for an invalid year/month combination.
    pub fn service_days(&self, year: i32, month: u32) -> u32 {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return 0;
        };

        let mut count = 0;
        let mut day = first;
        while day.year() == year && day.month() == month {
            let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
            if !weekend && !self.holidays.contains(&day) {
                count += 1;
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        count
    }
}
