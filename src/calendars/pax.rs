// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pax calendar.
//!
//! A leap-week calendar: thirteen months of 28 days, plus a seven-day *Pax*
//! week between Columbus and December in leap years.  Every year starts on
//! a Sunday and weekdays agree with the Gregorian ones.
//!
//! Pax year `y` is a leap year iff
//!
//! ```text
//! (y mod 100 mod 6 == 0  or  y mod 100 == 99)  and  y mod 400 != 0
//! ```
//!
//! which gives 71 leap years and exactly 146 097 days per 400 years, the
//! length of the Gregorian cycle.  Pax year 1 begins on proleptic Gregorian
//! 0000-12-31, so cycles stay aligned with the Gregorian ones forever.
//!
//! Conversion looks the day up in a compile-time table of year starts within
//! the cycle.

use chrono::{Datelike, Weekday};

use super::SUNDAY_FIRST;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MONTH_DAYS: u32 = 28;
const WEEK_DAYS: u32 = 7;
const COMMON_YEAR: u32 = 13 * MONTH_DAYS;
const LEAP_YEAR: u32 = COMMON_YEAR + WEEK_DAYS;
const CYCLE_YEARS: usize = 400;
const CYCLE_DAYS: i64 = 146_097;

/// First day of the Pax week in a leap year, 0-based.
const PAX_WEEK_START: u32 = 12 * MONTH_DAYS;

/// Days from the start of the cycle to the start of each year in it;
/// the last entry is the cycle length.
const YEAR_STARTS: [u32; CYCLE_YEARS + 1] = year_starts();

const fn year_starts() -> [u32; CYCLE_YEARS + 1] {
    let mut starts = [0u32; CYCLE_YEARS + 1];
    let mut i = 0;
    while i < CYCLE_YEARS {
        starts[i + 1] = starts[i] + pax_year_length(i as i32 + 1);
        i += 1;
    }
    starts
}

pub const fn is_pax_leap_year(year: i32) -> bool {
    let in_century = year.rem_euclid(100);
    (in_century % 6 == 0 || in_century == 99) && year.rem_euclid(400) != 0
}

/// 364 or 371.
pub const fn pax_year_length(year: i32) -> u32 {
    if is_pax_leap_year(year) {
        LEAP_YEAR
    } else {
        COMMON_YEAR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaxMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    Columbus,
    /// The leap week.
    Pax,
    December,
}

const REGULAR_MONTHS: [PaxMonth; 12] = [
    PaxMonth::January,
    PaxMonth::February,
    PaxMonth::March,
    PaxMonth::April,
    PaxMonth::May,
    PaxMonth::June,
    PaxMonth::July,
    PaxMonth::August,
    PaxMonth::September,
    PaxMonth::October,
    PaxMonth::November,
    PaxMonth::Columbus,
];

/// A Pax calendar date.  There are no intercalary days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaxDate {
    pub year: i32,
    pub month: PaxMonth,
    pub day: u8,
    pub weekday: Weekday,
}

impl PaxDate {
    /// 0-based day of the Pax year.
    pub fn day_of_year(&self) -> u32 {
        let day = u32::from(self.day) - 1;
        match self.month {
            PaxMonth::Pax => PAX_WEEK_START + day,
            PaxMonth::December if is_pax_leap_year(self.year) => PAX_WEEK_START + WEEK_DAYS + day,
            PaxMonth::December => PAX_WEEK_START + day,
            month => month as u32 * MONTH_DAYS + day,
        }
    }
}

/// Pax date of a Gregorian date.
pub fn pax_date<D: Datelike>(date: &D) -> PaxDate {
    // 0000-12-31 is day 0.
    let days = i64::from(date.num_days_from_ce());
    let cycle = days.div_euclid(CYCLE_DAYS);
    let in_cycle = days.rem_euclid(CYCLE_DAYS) as u32;

    let year_index = YEAR_STARTS.partition_point(|&start| start <= in_cycle) - 1;
    let year = (cycle * CYCLE_YEARS as i64 + year_index as i64 + 1) as i32;
    let doy = in_cycle - YEAR_STARTS[year_index];

    let (month, day) = if doy < PAX_WEEK_START {
        (REGULAR_MONTHS[(doy / MONTH_DAYS) as usize], doy % MONTH_DAYS)
    } else if is_pax_leap_year(year) && doy < PAX_WEEK_START + WEEK_DAYS {
        (PaxMonth::Pax, doy - PAX_WEEK_START)
    } else if is_pax_leap_year(year) {
        (PaxMonth::December, doy - PAX_WEEK_START - WEEK_DAYS)
    } else {
        (PaxMonth::December, doy - PAX_WEEK_START)
    };

    PaxDate {
        year,
        month,
        day: (day + 1) as u8,
        weekday: SUNDAY_FIRST[((doy + 1) % WEEK_DAYS) as usize],
    }
}
