// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! International Fixed Calendar.
//!
//! Thirteen months of 28 days (four whole weeks each) with Sol inserted
//! between June and July.  Every month starts on a Sunday.  Year Day closes
//! the year; in Gregorian leap years Leap Day follows June 28.

use chrono::Datelike;

use super::{CalendarDate, SUNDAY_FIRST};
use crate::gregorian::{day_of_year, is_leap_year};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MONTH_DAYS: u32 = 28;
/// Ordinal of Leap Day in a Gregorian leap year.
const LEAP_DAY: u32 = 6 * MONTH_DAYS + 1;
/// Ordinal of Year Day once Leap Day is removed.
const YEAR_DAY: u32 = 13 * MONTH_DAYS + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IfcMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    Sol,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl IfcMonth {
    pub const ALL: [IfcMonth; 13] = [
        IfcMonth::January,
        IfcMonth::February,
        IfcMonth::March,
        IfcMonth::April,
        IfcMonth::May,
        IfcMonth::June,
        IfcMonth::Sol,
        IfcMonth::July,
        IfcMonth::August,
        IfcMonth::September,
        IfcMonth::October,
        IfcMonth::November,
        IfcMonth::December,
    ];

    /// 1-based position in the year.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            IfcMonth::January => "January",
            IfcMonth::February => "February",
            IfcMonth::March => "March",
            IfcMonth::April => "April",
            IfcMonth::May => "May",
            IfcMonth::June => "June",
            IfcMonth::Sol => "Sol",
            IfcMonth::July => "July",
            IfcMonth::August => "August",
            IfcMonth::September => "September",
            IfcMonth::October => "October",
            IfcMonth::November => "November",
            IfcMonth::December => "December",
        }
    }
}

pub type IfcDate = CalendarDate<IfcMonth>;

/// International Fixed Calendar date of a Gregorian date.
pub fn ifc_date<D: Datelike>(date: &D) -> IfcDate {
    let mut ordinal = day_of_year(date);
    if is_leap_year(date.year()) {
        if ordinal == LEAP_DAY {
            return CalendarDate::LeapDay;
        }
        if ordinal > LEAP_DAY {
            ordinal -= 1;
        }
    }
    if ordinal == YEAR_DAY {
        return CalendarDate::YearDay;
    }

    let index = ordinal - 1;
    CalendarDate::Date {
        weekday: SUNDAY_FIRST[(ordinal % 7) as usize],
        month: IfcMonth::ALL[(index / MONTH_DAYS) as usize],
        day: (index % MONTH_DAYS + 1) as u8,
    }
}
