// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The World Calendar.
//!
//! Four identical quarters of 31, 30 and 30 days; each quarter opens on a
//! Sunday.  Year Day follows December 30 and, in leap years, Leap Day
//! follows June 30.

use chrono::{Datelike, Month};

use super::{CalendarDate, SUNDAY_FIRST};
use crate::gregorian::{day_of_year, is_leap_year};

const QUARTER: [u32; 3] = [31, 30, 30];
/// Ordinal of Leap Day in a Gregorian leap year.
const LEAP_DAY: u32 = 183;
/// Ordinal of Year Day once Leap Day is removed.
const YEAR_DAY: u32 = 365;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub type TwcDate = CalendarDate<Month>;

/// World Calendar date of a Gregorian date.
pub fn twc_date<D: Datelike>(date: &D) -> TwcDate {
    let mut ordinal = day_of_year(date);
    if is_leap_year(date.year()) {
        match ordinal {
            366 => return CalendarDate::YearDay,
            LEAP_DAY => return CalendarDate::LeapDay,
            o if o > LEAP_DAY => ordinal -= 1,
            _ => {}
        }
    }
    if ordinal == YEAR_DAY {
        return CalendarDate::YearDay;
    }

    let weekday = SUNDAY_FIRST[(ordinal % 7) as usize];
    let mut day = ordinal;
    let mut month = 0;
    for length in QUARTER.iter().cycle().take(MONTHS.len()) {
        if day <= *length {
            break;
        }
        day -= length;
        month += 1;
    }

    CalendarDate::Date {
        weekday,
        month: MONTHS[month],
        day: day as u8,
    }
}
