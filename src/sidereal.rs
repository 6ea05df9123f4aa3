// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local apparent sidereal time from a cubic Earth-rotation polynomial.
//!
//! ```text
//! J = days since 2000-01-01T00:00 UTC
//! θ = 99.967794687 + 360.98564736628603·J + 2.907879e−13·J² − 5.302e−22·J³ + λ   (mod 360)
//! ```
//!
//! `θ/15` is the sidereal time in hours; the readout keeps whole seconds.

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone};
use qtty::Degrees;
use std::fmt;

use crate::JulianDate;

const L0: f64 = 99.967_794_687;
const L1: f64 = 360.985_647_366_286_03;
const L2: f64 = 2.907_879e-13;
const L3: f64 = -5.302e-22;

const SECONDS_PER_DAY: u32 = 86_400;
/// Sidereal seconds per degree of rotation (86 400 / 360).
const SECONDS_PER_DEGREE: f64 = 240.0;

/// Local sidereal angle in `[0°, 360°)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SiderealTime {
    angle: Degrees,
}

impl SiderealTime {
    /// Sidereal time at `instant` for an observer at `longitude` (east positive).
    ///
    /// The instant's UTC offset is removed before evaluating the polynomial.
    pub fn compute<Tz: TimeZone>(instant: &DateTime<Tz>, longitude: Degrees) -> Self {
        let jd = JulianDate::at(instant);
        let j = jd.days_since_j2000().value() + 0.5;
        let theta = L0 + L1 * j + L2 * j * j + L3 * j * j * j + longitude.value();
        Self {
            angle: Degrees::new(theta.rem_euclid(360.0)),
        }
    }

    #[inline]
    pub fn angle(&self) -> Degrees {
        self.angle
    }

    /// Whole seconds elapsed in the sidereal day, truncated.
    pub fn seconds(&self) -> u32 {
        ((self.angle.value() * SECONDS_PER_DEGREE) as u32) % SECONDS_PER_DAY
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::MIN + TimeDelta::seconds(i64::from(self.seconds()))
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.seconds();
        write!(f, "{:02}:{:02}:{:02}", s / 3600, s % 3600 / 60, s % 60)
    }
}

/// Free-function form of [`SiderealTime::compute`].
#[inline]
pub fn sidereal_time<Tz: TimeZone>(instant: &DateTime<Tz>, longitude: Degrees) -> SiderealTime {
    SiderealTime::compute(instant, longitude)
}
