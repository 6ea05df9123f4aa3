use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};
use chronometer::{
    civil_to_julian, julian_to_civil, sun_timers, AlternativeDate, CalendarDate, CalendarSystem,
    GeoCoordinate, IfcMonth, Illumination, JulianDate, LeapDrift, ModifiedJulianDate, PaxMonth,
    Period, SiderealTime, SolarDay, SunQuery, SunTracker, TimeProgress, MJD,
};
use qtty::{Days, Degrees};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn utc_roundtrip_j2000_is_stable() {
    let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
    let jd = JulianDate::from_utc(datetime);
    assert_eq!(jd, JulianDate::J2000);
    let back = jd.to_utc().expect("to_utc");
    assert_eq!(back, datetime);
}

#[test]
fn civil_conversions_agree_with_time_scales() {
    let midnight = NaiveDate::from_ymd_opt(2024, 6, 21)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let jd = civil_to_julian(&midnight);
    assert_eq!(jd.value(), 2_460_482.5);
    assert_eq!(jd.to::<MJD>().quantity(), Days::new(60_482.0));
    assert_eq!(julian_to_civil(jd), Some(midnight));
    assert_eq!(ModifiedJulianDate::from_civil(&midnight).to_civil(), Some(midnight));
}

#[test]
fn daylight_period_is_a_half_open_interval() {
    let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
    let day = SolarDay::compute(&utc(2024, 6, 21, 12, 0), london, SunQuery::default());
    let period: Period<MJD> = day.daylight_period().to::<MJD>();

    let noon = ModifiedJulianDate::from_utc(day.transit_utc().unwrap());
    assert!(period.contains(&noon));
    assert!(period.contains(&period.start));
    assert!(!period.contains(&period.end));

    let utc_period = period.to_utc().unwrap();
    assert!(utc_period.start < utc_period.end);
}

#[test]
fn sunrise_in_local_time_matches_utc_query() {
    let nyc = GeoCoordinate::new(40.7128, -74.0060).unwrap();
    let est = FixedOffset::west_opt(5 * 3600).unwrap();
    let local = est.with_ymd_and_hms(2000, 1, 1, 9, 0, 0).unwrap();
    let from_local = SolarDay::compute(&local, nyc, SunQuery::default());
    let from_utc = SolarDay::compute(&local.with_timezone(&Utc), nyc, SunQuery::default());
    assert_eq!(from_local, from_utc);

    let sunrise = from_local.sunrise_utc().unwrap();
    let expected = utc(2000, 1, 1, 12, 20);
    assert!((sunrise - expected).num_minutes().abs() <= 2);
}

#[test]
fn polar_regimes_report_illumination() {
    let north = GeoCoordinate::new(80.0, 15.0).unwrap();
    let summer = SolarDay::compute(&utc(2024, 6, 21, 12, 0), north, SunQuery::default());
    let winter = SolarDay::compute(&utc(2024, 12, 21, 12, 0), north, SunQuery::default());
    assert_eq!(summer.illumination(), Illumination::PolarDay);
    assert_eq!(winter.illumination(), Illumination::PolarNight);
    assert_eq!(summer.daylight().value(), 86_400.0);
    assert_eq!(winter.daylight().value(), 0.0);

    let timers = sun_timers(&utc(2024, 12, 21, 12, 0), north);
    assert_eq!(timers.illumination, Illumination::PolarNight);
    assert!(timers.sunrise.value().is_finite());
    assert!(timers.sunset.value().is_finite());
}

#[test]
fn tracker_agrees_with_one_shot_timers() {
    let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
    let mut tracker = SunTracker::new(london);
    for hour in [1, 6, 12, 18, 23] {
        let now = utc(2024, 3, 10, hour, 30);
        assert_eq!(tracker.sun_timers(&now), sun_timers(&now, london));
    }
}

#[test]
fn sidereal_time_at_london() {
    let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
    let st = SiderealTime::compute(&utc(2024, 6, 21, 12, 0), london.longitude());
    assert_eq!(st.to_string(), "06:00:11");
    assert_eq!(
        SiderealTime::compute(&utc(2000, 1, 1, 0, 0), Degrees::new(0.0)).to_string(),
        "06:39:52"
    );
}

#[test]
fn every_calendar_converts_the_millennium() {
    let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    for system in CalendarSystem::ALL {
        let converted = AlternativeDate::convert(system, &date);
        assert_eq!(converted.system(), system);
    }

    assert_eq!(
        AlternativeDate::convert(CalendarSystem::InternationalFixed, &date),
        AlternativeDate::InternationalFixed(CalendarDate::Date {
            weekday: Weekday::Sun,
            month: IfcMonth::January,
            day: 1,
        })
    );
    match AlternativeDate::convert(CalendarSystem::Pax, &date) {
        AlternativeDate::Pax(pax) => {
            assert_eq!((pax.year, pax.month, pax.day), (1999, PaxMonth::December, 28));
            assert_eq!(pax.weekday, date.weekday());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn leap_readout_brackets_now() {
    let now = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let leap = LeapDrift::at(&now).unwrap();
    assert_eq!(leap.prev_leap.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(leap.next_leap.date(), NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    assert_eq!(leap.prev_cycle.date(), NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
    assert!(leap.leap_span().contains(&now));
    assert!(leap.drift.value().abs() < 2.0 * 86_400.0);
}

#[test]
fn progress_is_consistent_with_clock_faces() {
    let now = NaiveDate::from_ymd_opt(2024, 6, 21)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap();
    let progress = TimeProgress::at(&now);
    assert_eq!(progress.day, 0.25);
    assert_eq!(chronometer::metric_time(&now).to_string(), "02:50:00");
    assert_eq!(chronometer::hex_time(&now).to_string(), "4_00_0.000");
}

#[test]
fn results_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SolarDay>();
    assert_send_sync::<SunTracker>();
    assert_send_sync::<SiderealTime>();
    assert_send_sync::<AlternativeDate>();
    assert_send_sync::<LeapDrift>();
    assert_send_sync::<TimeProgress>();
    assert_send_sync::<GeoCoordinate>();
}

#[cfg(feature = "serde")]
#[test]
fn serde_calendar_date_and_period() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
    let json = serde_json::to_string(&chronometer::ifc_date(&date)).unwrap();
    assert_eq!(json, "\"LeapDay\"");

    let period = Period::new(
        ModifiedJulianDate::new(59_000.25),
        ModifiedJulianDate::new(59_000.75),
    );
    let json = serde_json::to_string(&period).unwrap();
    assert_eq!(json, r#"{"start":59000.25,"end":59000.75}"#);
}
