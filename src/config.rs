// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer configuration.
//!
//! The host application loads its settings however it likes and hands the
//! resulting [`ChronoConfig`] (or just a [`GeoCoordinate`]) to each call.
//! Nothing in this crate keeps coordinates in process-wide state.
//!
//! With the `serde` feature both types deserialise from the natural shape
//!
//! ```json
//! { "coordinates": { "latitude": 40.7128, "longitude": -74.006 } }
//! ```
//!
//! and are validated on the way in.

use crate::error::{ChronoError, Result};
use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated geographic position in decimal degrees (west longitude negative).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ChronoError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ChronoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ChronoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude (φ), positive north.
    #[inline]
    pub fn latitude(&self) -> Degrees {
        Degrees::new(self.latitude)
    }

    /// Longitude, positive east.
    #[inline]
    pub fn longitude(&self) -> Degrees {
        Degrees::new(self.longitude)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = ChronoError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        GeoCoordinate::new(raw.latitude, raw.longitude)
    }
}

/// Settings the host passes into the core.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChronoConfig {
    pub coordinates: GeoCoordinate,
}

impl ChronoConfig {
    pub fn new(coordinates: GeoCoordinate) -> Self {
        tracing::debug!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "observer configured"
        );
        Self { coordinates }
    }
}
