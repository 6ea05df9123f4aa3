// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count markers.
//!
//! | Marker | Count | Zero (JD) |
//! |--------|-------|-----------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`RJD`] | Reduced Julian Date | 2 400 000.0 |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 |
//! | [`UnixTime`] | Days since 1970-01-01 | 2 440 587.5 |
//!
//! Any two counts convert into each other with `From`/`Into` as well as
//! [`Time::to`].

use super::instant::{Time, TimeScale};
use qtty::Days;

macro_rules! day_count {
    ($(#[$meta:meta])* $name:ident, $label:literal, $epoch:expr) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
        pub struct $name;

        impl TimeScale for $name {
            const LABEL: &'static str = $label;
            const EPOCH: Days = Days::new($epoch);
        }
    };
}

day_count!(
    /// Julian Date, the reference count.
    JD,
    "Julian Day:",
    0.0
);

day_count!(
    /// Reduced Julian Date.  Days still start at noon, unlike [`MJD`].
    RJD,
    "RJD",
    2_400_000.0
);

day_count!(
    /// Modified Julian Date, with days starting at midnight.
    MJD,
    "MJD",
    2_400_000.5
);

day_count!(
    /// Unix days.  Leap seconds are ignored, as POSIX does.
    UnixTime,
    "Unix",
    2_440_587.5
);

/// `From` in both directions between the first count and each later one,
/// then recurse on the tail.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Time<$first>> for Time<$rest> {
                #[inline]
                fn from(t: Time<$first>) -> Self {
                    t.to()
                }
            }

            impl From<Time<$rest>> for Time<$first> {
                #[inline]
                fn from(t: Time<$rest>) -> Self {
                    t.to()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, RJD, MJD, UnixTime);
