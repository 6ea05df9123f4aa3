// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chronometer
//!
//! Pure temporal computations for a clock dashboard: Julian dates, the
//! sunrise equation, local sidereal time, perpetual calendars, leap-year
//! drift and a handful of alternative clock faces.
//!
//! Nothing here reads the system clock or holds global state.  Every
//! operation takes the instant (and, where needed, the observer's
//! [`GeoCoordinate`]) from the caller.
//!
//! # Core types
//!
//! - [`Time<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`]: type alias for `Time<JD>`.
//! - [`Interval<T>`] / [`Period<S>`]: half-open spans of time.
//! - [`SolarDay`]: transit, sunrise and sunset for one day and place.
//! - [`SiderealTime`]: local apparent sidereal time.
//! - [`CalendarDate`]: a date in one of the perpetual calendars.
//! - [`LeapDrift`]: calendar drift against the tropical year.
//! - [`TimeProgress`]: completed fraction of each calendar unit.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`RJD`] | Reduced Julian Date |
//! | [`MJD`] | Modified Julian Date |
//! | [`UnixTime`] | Unix / POSIX days |
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use chronometer::{GeoCoordinate, JulianDate, SiderealTime};
//! use qtty::Degrees;
//!
//! let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
//! assert_eq!(JulianDate::from_utc(noon), JulianDate::J2000);
//!
//! let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
//! let lst = SiderealTime::compute(&noon, london.longitude());
//! assert_eq!(SiderealTime::compute(&noon, Degrees::new(0.0)).to_string(), "18:41:50");
//! assert!(lst.seconds() < 86_400);
//! ```

pub mod calendars;
pub mod clocks;
mod config;
mod error;
pub mod gregorian;
pub(crate) mod instant;
mod julian_date_ext;
pub mod leap;
mod period;
mod progress;
pub(crate) mod scales;
mod sidereal;
mod solar;
pub mod trig;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendars::{
    annus_date, ifc_date, pax_date, twc_date, AlternativeDate, AnnusDate, AnnusWeekday,
    CalendarDate, CalendarSystem, IfcDate, IfcMonth, PaxDate, PaxMonth, TwcDate, WeekCycle,
};
pub use clocks::{hex_time, metric_time, HexTime, MetricTime, NewEarthTime, SitTime};
pub use config::{ChronoConfig, GeoCoordinate};
pub use error::{ChronoError, Result};
pub use instant::{Time, TimeInstant, TimeScale};
pub use julian_date_ext::{civil_to_julian, julian_to_civil};
pub use leap::{leap_age, leap_drift, next_leap, prev_cycle, prev_leap, LeapDrift};
pub use period::{Interval, Period};
pub use progress::TimeProgress;
pub use scales::{UnixTime, JD, MJD, RJD};
pub use sidereal::{sidereal_time, SiderealTime};
pub use solar::{sun_timers, Illumination, SolarDay, SunQuery, SunTimers, SunTracker};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date, a continuous count of days since the Julian Period.
pub type JulianDate = Time<JD>;

/// Reduced Julian Date, `JD − 2 400 000`.
pub type ReducedJulianDate = Time<RJD>;

/// Modified Julian Date, `JD − 2 400 000.5`.
pub type ModifiedJulianDate = Time<MJD>;
