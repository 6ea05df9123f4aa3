// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Annus Novus.
//!
//! Ten months alternating 36 and 37 days (five seasons of 73 days) and a
//! five-day week running continuously through the year.  The 366th day of
//! a leap year is Leap Day; there is no Year Day.

use chrono::Datelike;

use super::{CalendarDate, WeekCycle};
use crate::gregorian::day_of_year;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SEASON: [u32; 2] = [36, 37];
const SEASONS: usize = 5;
const LEAP_DAY: u32 = 366;

/// Day of the five-day week, `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnusWeekday(u8);

impl AnnusWeekday {
    /// Wraps `index` into the week.
    pub const fn new(index: u8) -> Self {
        Self(index % <Self as WeekCycle>::DAYS)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl WeekCycle for AnnusWeekday {
    const DAYS: u8 = 5;
}

/// Months are numbered `1..=10`.
pub type AnnusDate = CalendarDate<u8, AnnusWeekday>;

/// Annus Novus date of a Gregorian date.
pub fn annus_date<D: Datelike>(date: &D) -> AnnusDate {
    let ordinal = day_of_year(date);
    if ordinal == LEAP_DAY {
        return CalendarDate::LeapDay;
    }

    let weekday = AnnusWeekday::new(((ordinal - 1) % u32::from(AnnusWeekday::DAYS)) as u8);
    let mut day = ordinal;
    let mut month = 1;
    for length in SEASON.iter().cycle().take(2 * SEASONS) {
        if day <= *length {
            break;
        }
        day -= length;
        month += 1;
    }

    CalendarDate::Date {
        weekday,
        month,
        day: day as u8,
    }
}
