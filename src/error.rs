// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the few fallible constructors in this crate.
//!
//! The computational core itself never fails: out-of-range conversions
//! return `Option`, polar latitudes are reported through
//! [`Illumination`](crate::Illumination) and intercalary days are ordinary
//! [`CalendarDate`](crate::CalendarDate) variants. Only validated inputs
//! (coordinates, configuration) produce a [`ChronoError`].

use thiserror::Error;

/// Validation failures for observer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ChronoError {
    #[error("latitude {0}° is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0}° is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("coordinate component is not a finite number")]
    NonFiniteCoordinate,
}

pub type Result<T> = std::result::Result<T, ChronoError>;
