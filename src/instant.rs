// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count instants.
//!
//! [`Time<S>`] is a [`Days`] value counted from the zero of the day count
//! `S`.  All counts in this crate are fixed offsets of the Julian Day, so a
//! conversion is a single addition and every count shares one civil
//! conversion path (see [`civil_to_julian`](crate::civil_to_julian)).
//!
//! Instants are UT on the civil axis.  ΔT and the dynamical scales are
//! outside the precision of the sunrise equation and are not modelled.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use qtty::*;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// A day count: a label and the Julian Day of its zero.
pub trait TimeScale: Copy + fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used when displaying a [`Time`].
    const LABEL: &'static str;

    /// Julian Day at which this count reads zero.
    const EPOCH: Days;

    /// Native value → Julian Day.
    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + Self::EPOCH
    }

    /// Julian Day → native value.
    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - Self::EPOCH
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// An instant expressed on day count `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            days,
            _scale: PhantomData,
        }
    }

    /// Days since the zero of `S`.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.days
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }

    /// The same instant as an absolute Julian Day.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.days)
    }

    /// Re-express on another day count.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::from_days(T::from_jd(self.julian_day()))
    }

    /// Instant whose civil fields are those of `datetime`.
    ///
    /// The fields are taken as they are.  Use [`Time::at`] for zoned input.
    #[inline]
    pub fn from_civil(datetime: &NaiveDateTime) -> Self {
        crate::julian_date_ext::civil_to_julian(datetime).to::<S>()
    }

    /// Civil fields at one millisecond resolution, `None` outside chrono's
    /// range.
    #[inline]
    pub fn to_civil(&self) -> Option<NaiveDateTime> {
        crate::julian_date_ext::julian_to_civil(self.to())
    }

    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_civil(&datetime.naive_utc())
    }

    /// Normalise a zoned instant to UTC and convert it.
    #[inline]
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::from_civil(&instant.naive_utc())
    }

    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.to_civil().map(|naive| naive.and_utc())
    }
}

impl<S: TimeScale> fmt::Display for Time<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", S::LABEL, self.days)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self {
        Self::from_days(self.days + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self {
        Self::from_days(self.days - rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        *self = *self + rhs;
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        *self = *self - rhs;
    }
}

/// Signed span between two instants.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Days {
        self.days - rhs.days
    }
}

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.days
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Endpoint type of an [`Interval`](crate::Interval).
pub trait TimeInstant: Copy + PartialEq + PartialOrd {
    type Duration;

    /// `self − other`.
    fn difference(&self, other: &Self) -> Self::Duration;

    fn add_duration(&self, duration: Self::Duration) -> Self;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

    #[inline]
    fn difference(&self, other: &Self) -> Days {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: Days) -> Self {
        *self + duration
    }
}

impl TimeInstant for NaiveDateTime {
    type Duration = TimeDelta;

    fn difference(&self, other: &Self) -> TimeDelta {
        *self - *other
    }

    fn add_duration(&self, duration: TimeDelta) -> Self {
        *self + duration
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, MJD, RJD};
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn civil(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn j2000_from_utc() {
        let noon = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = Time::<JD>::from_utc(noon);
        assert_eq!(jd.value(), 2_451_545.0);
        assert_eq!(jd.to_utc(), Some(noon));
    }

    #[test]
    fn zoned_instants_are_normalised() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = cest.with_ymd_and_hms(2024, 6, 21, 14, 0, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        assert_eq!(Time::<JD>::at(&local), Time::<JD>::from_utc(utc));
    }

    #[test]
    fn civil_fields_on_each_count() {
        let midnight = civil(2000, 1, 1, 0);
        assert_eq!(Time::<JD>::from_civil(&midnight).value(), 2_451_544.5);
        assert_eq!(Time::<RJD>::from_civil(&midnight).value(), 51_544.5);
        assert_eq!(Time::<MJD>::from_civil(&midnight).value(), 51_544.0);
        assert_eq!(Time::<MJD>::from_civil(&midnight).to_civil(), Some(midnight));
    }

    #[test]
    fn julian_day_of_reduced_counts() {
        let mjd = Time::<MJD>::new(60_482.0);
        assert_eq!(mjd.julian_day(), Days::new(2_460_482.5));
        assert_eq!(mjd.to::<JD>().value(), 2_460_482.5);
    }

    #[test]
    fn day_arithmetic() {
        let mut t = Time::<MJD>::new(60_000.0);
        t += Days::new(1.5);
        assert_eq!(t.value(), 60_001.5);
        t -= Days::new(0.5);
        assert_eq!(t.value(), 60_001.0);
        assert_eq!(t - Time::<MJD>::new(60_000.0), Days::new(1.0));

        let days: Days = t.into();
        assert_eq!(Time::<MJD>::from(days), t);
    }

    #[test]
    fn ordering_follows_the_count() {
        assert!(Time::<JD>::new(2_451_545.0) < Time::<JD>::new(2_451_545.5));
    }

    #[test]
    fn display_carries_the_label() {
        assert!(Time::<RJD>::new(51_544.5).to_string().starts_with("RJD"));
    }

    #[test]
    fn naive_datetime_is_an_instant() {
        let start = civil(2024, 2, 28, 18);
        let end = civil(2024, 3, 1, 0);
        let span = end.difference(&start);
        assert_eq!(span.num_hours(), 30);
        assert_eq!(start.add_duration(span), end);
        assert_eq!(
            Time::<JD>::new(10.0).difference(&Time::<JD>::new(12.5)),
            Days::new(-2.5)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_as_a_bare_number() {
        let jd = Time::<JD>::new(2_451_545.25);
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2451545.25");
        assert_eq!(serde_json::from_str::<Time<JD>>(&json).unwrap(), jd);
    }
}
