// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset and solar noon from the sunrise equation.
//!
//! # Algorithm
//!
//! With `n` the day number since J2000 (see [`SunQuery`]) and the observer at
//! longitude `l`, latitude `φ`:
//!
//! ```text
//! J*        = n − l/360
//! M         = 357.5291 + 0.98560028·J*                   (mod 360)
//! C         = 1.9148 sin M + 0.0200 sin 2M + 0.0003 sin 3M
//! λ         = M + C + 180 + 102.9372                     (mod 360)
//! J_transit = 2451545 + J* + 0.0053 sin M − 0.0069 sin 2λ
//! δ         = asin(sin λ · sin 23.44°)
//! cos ω0    = (cos 90.83333° − sin φ sin δ) / (cos φ cos δ)
//! ```
//!
//! Sunrise and sunset sit `ω0/360` days either side of transit.
//!
//! # Polar latitudes
//!
//! When `cos ω0` leaves `[-1, 1]` the sun does not cross the horizon that
//! day.  The hour angle is then clamped: `ω0 = 0°` (sunrise = sunset =
//! transit, no daylight) for [`Illumination::PolarNight`] and `ω0 = 180°`
//! (events 12 h either side of transit, no night) for
//! [`Illumination::PolarDay`].  No result is ever `NaN`.
//!
//! # Offset retry
//!
//! [`SolarDay`] answers for one day.  A clock that counts down to "the next
//! sunrise" and up from "the last sunset" needs a different day when both of
//! today's events lie on the same side of `now`; [`sun_timers`] and
//! [`SunTracker::sun_timers`] perform that re-query.

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use qtty::*;

use crate::config::GeoCoordinate;
use crate::period::Period;
use crate::scales::JD;
use crate::trig;
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offset of mean solar noon from the day number origin, in days.
const TRANSIT_EPOCH_OFFSET: f64 = 0.0008;
/// Altitude of the solar centre at rise/set, refraction and disc included.
const HORIZON_ZENITH: Degrees = Degrees::new(90.83333);
/// Obliquity of the ecliptic.
const OBLIQUITY: Degrees = Degrees::new(23.44);

/// Which day a [`SolarDay`] describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SunQuery {
    /// Whole days added to the day number (`-1` yesterday, `+1` tomorrow).
    pub offset: i32,
    /// Keep the day number fractional.
    ///
    /// A floored day number yields the same events all day long; a
    /// fractional one drifts continuously and suits live duration readouts.
    pub fixed: bool,
}

impl SunQuery {
    /// Fractional day number, no offset.
    pub const fn live() -> Self {
        Self {
            offset: 0,
            fixed: true,
        }
    }

    pub const fn with_offset(self, offset: i32) -> Self {
        Self { offset, ..self }
    }

    /// Day number for the UTC instant `jd`.
    fn day_number(&self, jd: JulianDate) -> f64 {
        let n = jd.days_since_j2000().value() + 0.5 + TRANSIT_EPOCH_OFFSET;
        let n = if self.fixed { n } else { n.floor() };
        n + f64::from(self.offset)
    }
}

/// Whether the sun crosses the horizon on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Illumination {
    /// The sun rises and sets.
    Normal,
    /// The sun stays above the horizon all day.
    PolarDay,
    /// The sun stays below the horizon all day.
    PolarNight,
}

/// Solar events of one day at one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    transit: JulianDate,
    hour_angle: Degrees,
    illumination: Illumination,
}

impl SolarDay {
    /// Solve the sunrise equation for the day of `instant` selected by `query`.
    ///
    /// `instant` is normalised to UTC first, so any timezone works.
    pub fn compute<Tz: TimeZone>(
        instant: &DateTime<Tz>,
        coordinate: GeoCoordinate,
        query: SunQuery,
    ) -> Self {
        let jd = JulianDate::at(instant);
        Self::for_day_number(query.day_number(jd), coordinate)
    }

    fn for_day_number(n: f64, coordinate: GeoCoordinate) -> Self {
        let latitude = coordinate.latitude();

        let j_star = n - coordinate.longitude().value() / 360.0;
        let mean_anomaly = Degrees::new((357.5291 + 0.985_600_28 * j_star).rem_euclid(360.0));
        let m = mean_anomaly.value();
        let center = 1.9148 * trig::sin(mean_anomaly)
            + 0.0200 * trig::sin(Degrees::new(2.0 * m))
            + 0.0003 * trig::sin(Degrees::new(3.0 * m));
        let ecliptic_longitude = Degrees::new((m + center + 180.0 + 102.9372).rem_euclid(360.0));
        let transit = JulianDate::J2000
            + Days::new(
                j_star + 0.0053 * trig::sin(mean_anomaly)
                    - 0.0069 * trig::sin(Degrees::new(2.0 * ecliptic_longitude.value())),
            );
        let declination = trig::asin(trig::sin(ecliptic_longitude) * trig::sin(OBLIQUITY));

        let cos_hour_angle = (trig::cos(HORIZON_ZENITH)
            - trig::sin(latitude) * trig::sin(declination))
            / (trig::cos(latitude) * trig::cos(declination));

        let (hour_angle, illumination) = if cos_hour_angle.is_nan() || cos_hour_angle >= 1.0 {
            (Degrees::new(0.0), Illumination::PolarNight)
        } else if cos_hour_angle <= -1.0 {
            (Degrees::new(180.0), Illumination::PolarDay)
        } else {
            (trig::acos(cos_hour_angle), Illumination::Normal)
        };
        if illumination != Illumination::Normal {
            tracing::debug!(
                latitude = latitude.value(),
                declination = declination.value(),
                cos_hour_angle,
                ?illumination,
                "hour angle clamped"
            );
        }

        Self {
            transit,
            hour_angle,
            illumination,
        }
    }

    // ── events ────────────────────────────────────────────────────────

    /// Solar noon.
    #[inline]
    pub fn transit(&self) -> JulianDate {
        self.transit
    }

    #[inline]
    pub fn sunrise(&self) -> JulianDate {
        self.transit - self.half_day()
    }

    #[inline]
    pub fn sunset(&self) -> JulianDate {
        self.transit + self.half_day()
    }

    /// Sunrise hour angle `ω0`, in `[0°, 180°]`.
    #[inline]
    pub fn hour_angle(&self) -> Degrees {
        self.hour_angle
    }

    #[inline]
    pub fn illumination(&self) -> Illumination {
        self.illumination
    }

    fn half_day(&self) -> Days {
        Days::new(self.hour_angle.value() / 360.0)
    }

    // ── durations ─────────────────────────────────────────────────────

    /// Time between sunrise and sunset.
    pub fn daylight(&self) -> Seconds {
        Seconds::new(2.0 * self.hour_angle.value() / 15.0 * 3600.0)
    }

    /// Time between sunset and the following sunrise.
    pub fn nighttime(&self) -> Seconds {
        Seconds::new(2.0 * (180.0 - self.hour_angle.value()) / 15.0 * 3600.0)
    }

    /// Sunrise to sunset as a period on the Julian Day axis.
    pub fn daylight_period(&self) -> Period<JD> {
        Period::new(self.sunrise(), self.sunset())
    }

    // ── relative to a reference instant ───────────────────────────────

    /// `now − sunrise`: positive once sunrise has passed.
    pub fn sunrise_offset<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Seconds {
        offset_from(now, self.sunrise())
    }

    /// `now − sunset`: positive once sunset has passed.
    pub fn sunset_offset<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Seconds {
        offset_from(now, self.sunset())
    }

    /// `now − transit`: positive after solar noon.
    pub fn noon_offset<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Seconds {
        offset_from(now, self.transit)
    }

    /// Apparent local solar time at `now`: 12:00 at transit.
    pub fn solar_time<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> NaiveTime {
        let millis = (self.noon_offset(now).value() * 1e3).round() as i64;
        NaiveTime::MIN + TimeDelta::hours(12) + TimeDelta::milliseconds(millis)
    }

    // ── absolute instants ─────────────────────────────────────────────

    pub fn transit_utc(&self) -> Option<DateTime<Utc>> {
        self.transit.to_utc()
    }

    pub fn sunrise_utc(&self) -> Option<DateTime<Utc>> {
        self.sunrise().to_utc()
    }

    pub fn sunset_utc(&self) -> Option<DateTime<Utc>> {
        self.sunset().to_utc()
    }
}

fn offset_from<Tz: TimeZone>(now: &DateTime<Tz>, event: JulianDate) -> Seconds {
    (JulianDate::at(now) - event).to::<Second>()
}

/// Countdown readout: signed offsets to the relevant sunrise and sunset plus
/// the live day/night lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimers {
    /// `now − sunrise`; negative while counting down to the next sunrise.
    pub sunrise: Seconds,
    /// `now − sunset`; positive while counting up from the last sunset.
    pub sunset: Seconds,
    pub daylight: Seconds,
    pub nighttime: Seconds,
    pub illumination: Illumination,
}

/// One-shot form of [`SunTracker::sun_timers`].
pub fn sun_timers<Tz: TimeZone>(now: &DateTime<Tz>, coordinate: GeoCoordinate) -> SunTimers {
    SunTracker::new(coordinate).sun_timers(now)
}

/// Remembers recent daily [`SolarDay`]s for one observer.
///
/// A render loop asks for the same days thousands of times.  The two most
/// recently used day numbers stay cached, which covers today together with
/// the neighbouring day [`SunTracker::sun_timers`] falls back to, so only the
/// first request per day number does the trigonometry.  Results are
/// identical to [`SolarDay::compute`].
#[derive(Debug, Clone)]
pub struct SunTracker {
    coordinate: GeoCoordinate,
    /// Most recently used first.
    cache: [Option<(i64, SolarDay)>; 2],
}

impl SunTracker {
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self {
            coordinate,
            cache: [None; 2],
        }
    }

    #[inline]
    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// [`SolarDay::compute`] for the tracked observer, memoised for
    /// non-`fixed` queries.
    pub fn solar_day<Tz: TimeZone>(&mut self, instant: &DateTime<Tz>, query: SunQuery) -> SolarDay {
        let jd = JulianDate::at(instant);
        let n = query.day_number(jd);
        if query.fixed {
            return SolarDay::for_day_number(n, self.coordinate);
        }

        let key = n as i64;
        let hit = self
            .cache
            .iter()
            .enumerate()
            .find_map(|(slot, entry)| match entry {
                Some((cached, day)) if *cached == key => Some((slot, *day)),
                _ => None,
            });
        if let Some((slot, day)) = hit {
            tracing::trace!(day_number = key, "solar day cache hit");
            self.cache[..=slot].rotate_right(1);
            return day;
        }

        tracing::trace!(day_number = key, "solar day cache miss");
        let day = SolarDay::for_day_number(n, self.coordinate);
        self.cache.rotate_right(1);
        self.cache[0] = Some((key, day));
        day
    }

    /// Offsets to the upcoming sunrise and the latest sunset (or vice versa).
    ///
    /// If both of today's events have passed, sunrise is taken from tomorrow;
    /// if neither has, sunset is taken from yesterday.
    pub fn sun_timers<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> SunTimers {
        let today = self.solar_day(now, SunQuery::default());
        let mut sunrise = today.sunrise_offset(now);
        let mut sunset = today.sunset_offset(now);

        if sunrise.value() > 0.0 && sunset.value() > 0.0 {
            sunrise = self
                .solar_day(now, SunQuery::default().with_offset(1))
                .sunrise_offset(now);
        } else if sunrise.value() < 0.0 && sunset.value() < 0.0 {
            sunset = self
                .solar_day(now, SunQuery::default().with_offset(-1))
                .sunset_offset(now);
        }

        let live = self.solar_day(now, SunQuery::live());
        SunTimers {
            sunrise,
            sunset,
            daylight: live.daylight(),
            nighttime: live.nighttime(),
            illumination: today.illumination(),
        }
    }
}
