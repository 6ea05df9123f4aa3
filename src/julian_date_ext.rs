// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions and the civil ↔ JD converter.
//!
//! Both directions are closed-form integer decompositions over the proleptic
//! Gregorian calendar (Fliegel–Van Flandern forward, Richards inverse).  They
//! operate on *civil fields*: whatever year/month/day/hour the caller hands
//! in is taken verbatim, so timezone normalisation is the caller's job.
//!
//! ## Resolution
//! An `f64` Julian Day around 2.4 × 10⁶ resolves roughly 40 µs, so the
//! inverse rounds to the nearest millisecond.  Round trips are exact for any
//! civil instant in years 1‥=9999 whose sub-second part is a whole number of
//! milliseconds.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use chronometer::{civil_to_julian, julian_to_civil, RJD};
//!
//! let civil = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let jd = civil_to_julian(&civil);
//! assert_eq!(jd.value(), 2_451_544.5);
//! assert_eq!(jd.to::<RJD>().value(), 51_544.5);
//! assert_eq!(julian_to_civil(jd), Some(civil));
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use qtty::*;

use super::instant::Time;
use super::scales::JD;
use super::JulianDate;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;
/// Bound on `|JD|` accepted by the inverse.  Chrono's dates end near
/// JD ±10⁸, and the integer decomposition below stays well inside `i64`.
const MAX_CIVIL_JD: f64 = 1e9;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Days elapsed since J2000.0 (negative before it).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }
}

/// Julian Date of the civil fields of `datetime`.
///
/// The integer Julian Day Number comes from
///
/// ```text
/// a = (14 − month) // 12
/// y = year + 4800 − a
/// m = month + 12a − 3
/// JDN = day + (153m + 2)//5 + 365y + y//4 − y//100 + y//400 − 32045
/// ```
///
/// and the time of day is added as a fraction measured from noon.
pub fn civil_to_julian(datetime: &NaiveDateTime) -> JulianDate {
    let year = i64::from(datetime.year());
    let month = i64::from(datetime.month());
    let day = i64::from(datetime.day());

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045;

    let seconds = f64::from(datetime.num_seconds_from_midnight())
        + f64::from(datetime.nanosecond()) * 1e-9;
    JulianDate::new(jdn as f64 + (seconds - SECONDS_PER_DAY / 2.0) / SECONDS_PER_DAY)
}

/// Proleptic Gregorian civil date/time of a Julian Date.
///
/// Returns `None` for non-finite input or when chrono cannot represent the
/// resulting date.
pub fn julian_to_civil(jd: JulianDate) -> Option<NaiveDateTime> {
    let shifted = jd.value() + 0.5;
    let whole = shifted.floor();
    if !(-MAX_CIVIL_JD..=MAX_CIVIL_JD).contains(&whole) {
        return None;
    }
    let millis = ((shifted - whole) * MILLIS_PER_DAY).round() as i64;

    let z = whole as i64;
    let f = z + 1401 + ((4 * z + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (14 - month).div_euclid(12);

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::milliseconds(millis))
}
