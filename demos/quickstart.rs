use chrono::{Local, Utc};
use chronometer::{
    hex_time, sun_timers, AlternativeDate, CalendarSystem, GeoCoordinate, JulianDate, LeapDrift,
    NewEarthTime, SiderealTime, SitTime, TimeProgress,
};
use tracing_subscriber::EnvFilter;

fn main() -> chronometer::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let observer = GeoCoordinate::new(40.7128, -74.0060)?;
    let now = Utc::now();
    let local = Local::now().naive_local();

    println!("{}", JulianDate::from_utc(now));
    println!("LST: {}", SiderealTime::compute(&now, observer.longitude()));

    let timers = sun_timers(&now, observer);
    println!(
        "sunrise {:+.0} s, sunset {:+.0} s ({:?})",
        timers.sunrise.value(),
        timers.sunset.value(),
        timers.illumination
    );

    for system in CalendarSystem::ALL {
        println!("{:?}", AlternativeDate::convert(system, &local));
    }

    println!(
        "hex {} | new earth {} | {}",
        hex_time(&local),
        NewEarthTime::at(&now),
        SitTime::at(&now)
    );

    if let Some(leap) = LeapDrift::at(&local) {
        println!("leap drift: {:.0} s", leap.drift.value());
    }
    println!("progress: {:?}", TimeProgress::at(&local).as_array());

    Ok(())
}
