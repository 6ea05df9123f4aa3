// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry.
//!
//! The sunrise equation is written in degrees throughout; these helpers keep
//! it that way by converting through [`Radians`] at the boundary.

use qtty::{Degree, Degrees, Radian, Radians};

#[inline]
pub fn sin(angle: Degrees) -> f64 {
    angle.to::<Radian>().value().sin()
}

#[inline]
pub fn cos(angle: Degrees) -> f64 {
    angle.to::<Radian>().value().cos()
}

#[inline]
pub fn tan(angle: Degrees) -> f64 {
    angle.to::<Radian>().value().tan()
}

/// Inverse sine in degrees. `NaN` outside `[-1, 1]`.
#[inline]
pub fn asin(x: f64) -> Degrees {
    Radians::new(x.asin()).to::<Degree>()
}

/// Inverse cosine in degrees. `NaN` outside `[-1, 1]`.
#[inline]
pub fn acos(x: f64) -> Degrees {
    Radians::new(x.acos()).to::<Degree>()
}

#[inline]
pub fn atan(x: f64) -> Degrees {
    Radians::new(x.atan()).to::<Degree>()
}
