// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! An [`Interval`] is a pair of instants of the same kind.  The crate uses it
//! for the daylight window of a [`SolarDay`](crate::SolarDay) (a
//! [`Period<JD>`](Period)) and for the span between two leap days
//! (an `Interval<NaiveDateTime>`).

use super::instant::{Time, TimeInstant, TimeScale};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents an interval between two instants.
///
/// Intervals are half-open: `start` belongs to the interval, `end` does not.
///
/// # Examples
///
/// ```
/// use chronometer::{Interval, JulianDate};
/// use qtty::Days;
///
/// let period = Interval::new(JulianDate::new(2451545.0), JulianDate::new(2451546.5));
/// assert_eq!(period.duration(), Days::new(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias: `Period<JD>`, `Period<UnixTime>`, ...
pub type Period<S> = Interval<Time<S>>;

impl<T: TimeInstant> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the period as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Convert both endpoints to another time scale.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Period<T> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }

    /// Both endpoints as UTC instants, or `None` if either is unrepresentable.
    pub fn to_utc(&self) -> Option<Interval<DateTime<Utc>>> {
        Some(Interval::new(self.start.to_utc()?, self.end.to_utc()?))
    }
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::TimeDelta;

    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{JD, MJD};
    use crate::JulianDate;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};
    use qtty::Days;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn period_duration_in_days() {
        let period = Period::<JD>::new(JulianDate::new(2_451_545.0), JulianDate::new(2_451_545.25));
        assert_eq!(period.duration(), Days::new(0.25));
    }

    #[test]
    fn period_scale_conversion() {
        let period = Period::<JD>::new(JulianDate::new(2_451_545.0), JulianDate::new(2_451_546.0));
        let mjd = period.to::<MJD>();
        assert!((mjd.start.value() - 51_544.5).abs() < 1e-12);
        assert!((mjd.end.value() - 51_545.5).abs() < 1e-12);
    }

    #[test]
    fn period_to_utc() {
        let period = Period::<JD>::new(JulianDate::new(2_451_544.5), JulianDate::new(2_451_545.0));
        let utc = period.to_utc().unwrap();
        assert_eq!(utc.start, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(utc.end, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
        assert_eq!(utc.duration().num_hours(), 12);
    }

    #[test]
    fn contains_is_half_open() {
        let span = Interval::new(midnight(2020, 2, 29), midnight(2024, 2, 29));
        assert!(span.contains(&midnight(2020, 2, 29)));
        assert!(span.contains(&midnight(2023, 7, 1)));
        assert!(!span.contains(&midnight(2024, 2, 29)));
        assert_eq!(span.duration().num_days(), 1461);
    }

    #[test]
    fn display_joins_endpoints() {
        let span = Interval::new(midnight(2020, 2, 29), midnight(2024, 2, 29));
        assert_eq!(span.to_string(), "2020-02-29 00:00:00 to 2024-02-29 00:00:00");
    }
}
