// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Alternative calendar converters.
//!
//! Each converter maps a proleptic Gregorian date onto another calendar.
//! The set is closed:
//!
//! | Calendar | Function | Result |
//! |----------|----------|--------|
//! | International Fixed | [`ifc_date`] | [`IfcDate`] |
//! | The World Calendar | [`twc_date`] | [`TwcDate`] |
//! | Pax | [`pax_date`] | [`PaxDate`] |
//! | Annus Novus | [`annus_date`] | [`AnnusDate`] |
//!
//! Intercalary days are ordinary results: a [`CalendarDate`] is either a
//! dated day or one of the [`CalendarDate::LeapDay`] /
//! [`CalendarDate::YearDay`] sentinels, which carry neither month nor
//! weekday.

mod annus;
mod ifc;
mod pax;
mod twc;

pub use annus::{annus_date, AnnusDate, AnnusWeekday};
pub use ifc::{ifc_date, IfcDate, IfcMonth};
pub use pax::{is_pax_leap_year, pax_date, pax_year_length, PaxDate, PaxMonth};
pub use twc::{twc_date, TwcDate};

use chrono::{Datelike, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A day in a calendar with intercalary days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarDate<M, W = Weekday> {
    Date { weekday: W, month: M, day: u8 },
    /// Extra day of leap years, outside any week.
    LeapDay,
    /// Extra day closing every year, outside any week.
    YearDay,
}

/// Number of days in a calendar's week.
pub trait WeekCycle {
    const DAYS: u8;
}

impl WeekCycle for Weekday {
    const DAYS: u8 = 7;
}

impl<M, W: WeekCycle> CalendarDate<M, W> {
    /// `true` for the Leap Day and Year Day sentinels.
    pub fn is_intercalary(&self) -> bool {
        !matches!(self, Self::Date { .. })
    }

    /// 1-based week of the month, `None` for intercalary days.
    pub fn week_of_month(&self) -> Option<u8> {
        match self {
            Self::Date { day, .. } => Some(day.saturating_sub(1) / W::DAYS + 1),
            _ => None,
        }
    }
}

/// Weekday table for calendars whose years open on a Sunday, indexed by
/// `ordinal mod 7`.
pub(crate) const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sat,
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Selects one of the supported alternative calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarSystem {
    InternationalFixed,
    WorldCalendar,
    Pax,
    AnnusNovus,
}

impl CalendarSystem {
    pub const ALL: [CalendarSystem; 4] = [
        CalendarSystem::InternationalFixed,
        CalendarSystem::WorldCalendar,
        CalendarSystem::Pax,
        CalendarSystem::AnnusNovus,
    ];
}

/// Result of converting into any [`CalendarSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlternativeDate {
    InternationalFixed(IfcDate),
    WorldCalendar(TwcDate),
    Pax(PaxDate),
    AnnusNovus(AnnusDate),
}

impl AlternativeDate {
    pub fn convert<D: Datelike>(system: CalendarSystem, date: &D) -> Self {
        match system {
            CalendarSystem::InternationalFixed => Self::InternationalFixed(ifc_date(date)),
            CalendarSystem::WorldCalendar => Self::WorldCalendar(twc_date(date)),
            CalendarSystem::Pax => Self::Pax(pax_date(date)),
            CalendarSystem::AnnusNovus => Self::AnnusNovus(annus_date(date)),
        }
    }

    pub fn system(&self) -> CalendarSystem {
        match self {
            Self::InternationalFixed(_) => CalendarSystem::InternationalFixed,
            Self::WorldCalendar(_) => CalendarSystem::WorldCalendar,
            Self::Pax(_) => CalendarSystem::Pax,
            Self::AnnusNovus(_) => CalendarSystem::AnnusNovus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn week_of_month_counts_from_one() {
        let first: IfcDate = CalendarDate::Date {
            weekday: Weekday::Sun,
            month: IfcMonth::March,
            day: 1,
        };
        let seventh: IfcDate = CalendarDate::Date {
            weekday: Weekday::Sat,
            month: IfcMonth::March,
            day: 7,
        };
        let eighth: IfcDate = CalendarDate::Date {
            weekday: Weekday::Sun,
            month: IfcMonth::March,
            day: 8,
        };
        assert_eq!(first.week_of_month(), Some(1));
        assert_eq!(seventh.week_of_month(), Some(1));
        assert_eq!(eighth.week_of_month(), Some(2));
        assert_eq!(IfcDate::YearDay.week_of_month(), None);
    }

    #[test]
    fn annus_weeks_are_five_days() {
        let sixth: AnnusDate = CalendarDate::Date {
            weekday: AnnusWeekday::new(0),
            month: 1,
            day: 6,
        };
        assert_eq!(sixth.week_of_month(), Some(2));
    }

    #[test]
    fn sentinels_are_intercalary() {
        assert!(TwcDate::LeapDay.is_intercalary());
        assert!(TwcDate::YearDay.is_intercalary());
        let date = twc_date(&NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
        assert!(!date.is_intercalary());
    }

    #[test]
    fn convert_dispatches_to_each_calendar() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        for system in CalendarSystem::ALL {
            assert_eq!(AlternativeDate::convert(system, &date).system(), system);
        }
        assert_eq!(
            AlternativeDate::convert(CalendarSystem::InternationalFixed, &date),
            AlternativeDate::InternationalFixed(ifc_date(&date))
        );
        assert_eq!(
            AlternativeDate::convert(CalendarSystem::Pax, &date),
            AlternativeDate::Pax(pax_date(&date))
        );
    }
}
