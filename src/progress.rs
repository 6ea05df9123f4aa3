// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! How far through each calendar unit an instant is.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::gregorian::{day_of_year, days_in_month, days_in_year};

/// Completed fraction of the enclosing second, minute, hour, day, month,
/// year and century, each in `[0, 1)`.
///
/// Every unit nests the finer one, so the minute fraction already includes
/// the seconds and so on upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeProgress {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
    pub day: f64,
    pub month: f64,
    pub year: f64,
    pub century: f64,
}

impl TimeProgress {
    pub fn at(datetime: &NaiveDateTime) -> Self {
        let second = f64::from(datetime.nanosecond().min(999_999_999)) * 1e-9;
        let minute = (f64::from(datetime.second()) + second) / 60.0;
        let hour = (f64::from(datetime.minute()) + minute) / 60.0;
        let day = (f64::from(datetime.hour()) + hour) / 24.0;

        // A valid NaiveDateTime always has a month of 28..=31 days.
        let month_len = days_in_month(datetime.year(), datetime.month()).unwrap_or(31);
        let month = (f64::from(datetime.day() - 1) + day) / f64::from(month_len);
        let year = (f64::from(day_of_year(datetime) - 1) + day)
            / f64::from(days_in_year(datetime.year()));
        let century = (f64::from((datetime.year() - 1).rem_euclid(100)) + year) / 100.0;

        Self {
            second,
            minute,
            hour,
            day,
            month,
            year,
            century,
        }
    }

    /// Fractions from finest to coarsest.
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.second,
            self.minute,
            self.hour,
            self.day,
            self.month,
            self.year,
            self.century,
        ]
    }
}
