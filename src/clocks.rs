// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Alternative clock faces.
//!
//! Each readout divides the day differently:
//!
//! | Readout | Day is split into | Reference day |
//! |---------|-------------------|---------------|
//! | [`MetricTime`] | 10 h × 100 min × 100 s | local |
//! | [`HexTime`] | 2²⁸ ticks, shown as `H_MM_S.SSS` | local |
//! | [`NewEarthTime`] | 360° × 60′ × 60″ | UTC |
//! | [`SitTime`] | 1000 beats | UTC+1 |
//!
//! All of them derive from [`day_fraction`], the completed fraction of the
//! day.

use chrono::{DateTime, TimeDelta, TimeZone, Timelike, Utc};
use std::fmt;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Completed fraction of the day at `time`, in `[0, 1)`.
pub fn day_fraction<T: Timelike>(time: &T) -> f64 {
    let seconds =
        f64::from(time.num_seconds_from_midnight()) + f64::from(time.nanosecond()) * 1e-9;
    seconds / SECONDS_PER_DAY
}

/// Decimal time: 10 hours of 100 minutes of 100 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl MetricTime {
    pub fn from_fraction(fraction: f64) -> Self {
        let ticks = (fraction * 100_000.0) as u32 % 100_000;
        Self {
            hours: (ticks / 10_000) as u8,
            minutes: (ticks / 100 % 100) as u8,
            seconds: (ticks % 100) as u8,
        }
    }
}

impl fmt::Display for MetricTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

pub fn metric_time<T: Timelike>(time: &T) -> MetricTime {
    MetricTime::from_fraction(day_fraction(time))
}

/// Hexadecimal time: the day as a 28-bit fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexTime {
    ticks: u32,
}

impl HexTime {
    const BITS: u32 = 28;

    pub fn from_fraction(fraction: f64) -> Self {
        let full = 1u32 << Self::BITS;
        Self {
            ticks: (fraction * f64::from(full)) as u32 % full,
        }
    }

    /// Raw 28-bit day fraction.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

impl fmt::Display for HexTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.ticks;
        write!(
            f,
            "{:X}_{:02X}_{:X}.{:03X}",
            t >> 24,
            (t >> 16) & 0xFF,
            (t >> 12) & 0xF,
            t & 0xFFF
        )
    }
}

pub fn hex_time<T: Timelike>(time: &T) -> HexTime {
    HexTime::from_fraction(day_fraction(time))
}

/// New Earth Time: the UTC day as a full turn, in whole arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NewEarthTime {
    arcseconds: u32,
}

impl NewEarthTime {
    const ARCSECONDS_PER_TURN: u32 = 360 * 3600;

    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        let fraction = day_fraction(&instant.with_timezone(&Utc));
        Self {
            arcseconds: (fraction * f64::from(Self::ARCSECONDS_PER_TURN)) as u32
                % Self::ARCSECONDS_PER_TURN,
        }
    }

    #[inline]
    pub fn arcseconds(&self) -> u32 {
        self.arcseconds
    }
}

impl fmt::Display for NewEarthTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.arcseconds;
        write!(f, "{:03}°{:02}'{:02}\"", s / 3600, s % 3600 / 60, s % 60)
    }
}

/// Swatch Internet Time: the day of UTC+1 in 1000 beats.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SitTime {
    beats: f64,
}

impl SitTime {
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        // Biel Mean Time has no DST; shifting the UTC time of day wraps at midnight.
        let biel = instant.with_timezone(&Utc).time() + TimeDelta::hours(1);
        Self {
            beats: day_fraction(&biel) * 1000.0,
        }
    }

    /// Beats in `[0, 1000)`.
    #[inline]
    pub fn beats(&self) -> f64 {
        self.beats
    }
}

impl fmt::Display for SitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{:09.5}", self.beats)
    }
}
