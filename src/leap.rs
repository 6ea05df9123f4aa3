// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Leap-day drift within the 400-year Gregorian cycle.
//!
//! The Gregorian calendar approximates a mean year of 365.2425 days by
//! inserting 97 leap days every 400 years.  Between insertions the calendar
//! runs ahead of or behind a uniform 365.2425-day year; [`leap_drift`]
//! measures that gap in seconds.
//!
//! The cycle is anchored on March 1 of a year divisible by 400, right after
//! the 97th leap day of the previous cycle, so the drift is zero there.
//!
//! All functions work on civil fields; no timezone is involved.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use qtty::Seconds;

use crate::gregorian::is_leap_year;
use crate::period::Interval;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MEAN_YEAR: f64 = 365.2425;
const CYCLE_YEARS: i32 = 400;
const LEAP_DAYS_PER_CYCLE: f64 = 97.0;
/// Ordinal of February 29 in a leap year.
const FEB_29: u32 = 60;

/// Leap days accumulated since the start of the current cycle.
///
/// On February 29 itself the completed fraction of the day is included.
/// The 97th leap day closes the cycle, so the count resets to zero there.
pub fn leap_age(datetime: &NaiveDateTime) -> f64 {
    let years = (datetime.year() - 1).rem_euclid(CYCLE_YEARS);
    let mut count = f64::from(years / 4 - years / 100 + years / 400);

    if is_leap_year(datetime.year()) {
        if datetime.ordinal() == FEB_29 {
            count += seconds_of_day(datetime) / SECONDS_PER_DAY;
        } else if datetime.ordinal() > FEB_29 {
            count += 1.0;
        }
    }

    if count == LEAP_DAYS_PER_CYCLE {
        0.0
    } else {
        count
    }
}

/// Signed drift between the calendar and a uniform 365.2425-day year.
///
/// ```text
/// elapsed = datetime − cycle anchor
/// drift   = leap_age · 86400 − (elapsed − elapsed · 365 / 365.2425)
/// ```
pub fn leap_drift(datetime: &NaiveDateTime) -> Seconds {
    let anchor_days = march_first_from_ce(anchor_year(datetime));
    let elapsed = (i64::from(datetime.num_days_from_ce()) - anchor_days) as f64 * SECONDS_PER_DAY
        + seconds_of_day(datetime);
    let lag = elapsed - elapsed * 365.0 / MEAN_YEAR;
    Seconds::new(leap_age(datetime) * SECONDS_PER_DAY - lag)
}

/// Earliest February 29, 00:00 strictly after `datetime`.
pub fn next_leap(datetime: &NaiveDateTime) -> Option<NaiveDateTime> {
    let mut year = datetime.year();
    if !(is_leap_year(year) && datetime.ordinal() < FEB_29) {
        year = year.checked_add(1)?;
        while !is_leap_year(year) {
            year = year.checked_add(1)?;
        }
    }
    leap_day(year)
}

/// Latest February 29, 00:00 at or before `datetime`.
pub fn prev_leap(datetime: &NaiveDateTime) -> Option<NaiveDateTime> {
    let mut year = datetime.year();
    if !(is_leap_year(year) && datetime.ordinal() >= FEB_29) {
        year = year.checked_sub(1)?;
        while !is_leap_year(year) {
            year = year.checked_sub(1)?;
        }
    }
    leap_day(year)
}

/// February 29, 00:00 of the latest year divisible by 400 not after `datetime`.
pub fn prev_cycle(datetime: &NaiveDateTime) -> Option<NaiveDateTime> {
    let year = datetime.year();
    let mut cycle_year = year - year.rem_euclid(CYCLE_YEARS);
    if year == cycle_year && datetime.ordinal() < FEB_29 {
        cycle_year = cycle_year.checked_sub(CYCLE_YEARS)?;
    }
    leap_day(cycle_year)
}

/// Everything the leap readout shows for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeapDrift {
    pub drift: Seconds,
    pub leap_age: f64,
    /// March 1 opening the current cycle.
    pub anchor: NaiveDate,
    /// Year within the 400-year cycle, `0..400`.
    pub cycle_year: i32,
    /// Year within the 4-year leap sub-cycle, `0..4`.
    pub sub_cycle_year: i32,
    pub prev_leap: NaiveDateTime,
    pub next_leap: NaiveDateTime,
    pub prev_cycle: NaiveDateTime,
}

impl LeapDrift {
    /// `None` only when a boundary falls outside chrono's date range.
    pub fn at(datetime: &NaiveDateTime) -> Option<Self> {
        let year = datetime.year();
        Some(Self {
            drift: leap_drift(datetime),
            leap_age: leap_age(datetime),
            anchor: NaiveDate::from_ymd_opt(anchor_year(datetime), 3, 1)?,
            cycle_year: year.rem_euclid(CYCLE_YEARS),
            sub_cycle_year: year.rem_euclid(4),
            prev_leap: prev_leap(datetime)?,
            next_leap: next_leap(datetime)?,
            prev_cycle: prev_cycle(datetime)?,
        })
    }

    /// `[prev_leap, next_leap)`, which always contains the queried instant.
    pub fn leap_span(&self) -> Interval<NaiveDateTime> {
        Interval::new(self.prev_leap, self.next_leap)
    }
}

/// Year whose March 1 opens the cycle containing `datetime`.
fn anchor_year(datetime: &NaiveDateTime) -> i32 {
    let year = datetime.year();
    let start = year - year.rem_euclid(CYCLE_YEARS);
    if year == start && datetime.month() < 3 {
        start - CYCLE_YEARS
    } else {
        start
    }
}

/// `num_days_from_ce` of March 1 in `year`.
fn march_first_from_ce(year: i32) -> i64 {
    let before = i64::from(year) - 1;
    let leap = i64::from(is_leap_year(year));
    365 * before + before.div_euclid(4) - before.div_euclid(100) + before.div_euclid(400)
        + 59
        + leap
        + 1
}

fn seconds_of_day(datetime: &NaiveDateTime) -> f64 {
    f64::from(datetime.num_seconds_from_midnight()) + f64::from(datetime.nanosecond()) * 1e-9
}

fn leap_day(year: i32) -> Option<NaiveDateTime> {
    Some(NaiveDate::from_ymd_opt(year, 2, 29)?.and_time(NaiveTime::MIN))
}
