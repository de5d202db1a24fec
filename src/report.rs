//! Human-readable text blocks for a single sun event.
//!
//! A block looks like this (the last three lines depend on what data exists):
//!
//! ```text
//! Time: 04:25:13 CEST
//! Location: Copenhagen
//! Coordinates: 55.6761, 12.5683
//! Azimuth: 48.7°
//!
//! Day length: 17h33m
//! Yesterday: 1m earlier
//! Today is the summer solstice!
//! ```

use chrono::Timelike;
use chrono_tz::Tz;

use crate::solstice::nearest_solstice;
use crate::types::{Coordinate, DaySunTimes, SolsticeCountdown, SunEvent};

/// Renders the description block for `event`, which belongs to `day`.
///
/// `previous_day` is the preceding entry of the range, if any. The
/// "Yesterday" line is left out when it is missing or has no event of the
/// same kind, and "Day length" is left out unless `day` has both events.
pub fn describe(
    event: &SunEvent,
    day: &DaySunTimes,
    previous_day: Option<&DaySunTimes>,
    coordinate: Coordinate,
    location_label: &str,
    tz: Tz,
) -> String {
    let local = event.instant.with_timezone(&tz);
    let mut lines = vec![
        format!("Time: {}", local.format("%H:%M:%S %Z")),
        format!("Location: {location_label}"),
        format!(
            "Coordinates: {:.4}, {:.4}",
            coordinate.latitude, coordinate.longitude
        ),
        format!("Azimuth: {:.1}°", event.azimuth),
        String::new(),
    ];

    if let (Some(sunrise), Some(sunset)) = (&day.sunrise, &day.sunset) {
        lines.push(format!("Day length: {}", format_day_length(sunrise, sunset)));
    }

    if let Some(previous) = previous_day.and_then(|p| p.event(event.kind)) {
        let minutes = wall_clock_delta(event, previous, tz);
        lines.push(format!("Yesterday: {}", format_delta(minutes)));
    }

    lines.push(solstice_line(nearest_solstice(day.date)));
    lines.join("\n")
}

/// `"{H}h{M}m"` between sunrise and sunset, minutes truncated.
pub fn format_day_length(sunrise: &SunEvent, sunset: &SunEvent) -> String {
    let minutes = (sunset.instant - sunrise.instant).num_minutes().max(0);
    format!("{}h{}m", minutes / 60, minutes % 60)
}

/// Signed difference in local time-of-day between two events, rounded to minutes.
///
/// Compares clock readings, not elapsed time, so a DST change between the
/// two days shows up as a jump of roughly an hour.
pub fn wall_clock_delta(today: &SunEvent, previous: &SunEvent, tz: Tz) -> i64 {
    let seconds_of_day = |event: &SunEvent| {
        i64::from(event.instant.with_timezone(&tz).num_seconds_from_midnight())
    };
    let delta = seconds_of_day(today) - seconds_of_day(previous);
    (delta as f64 / 60.0).round() as i64
}

pub fn format_delta(minutes: i64) -> String {
    match minutes {
        0 => "same time".to_string(),
        m if m > 0 => format!("{m}m later"),
        m => format!("{}m earlier", -m),
    }
}

pub fn solstice_line(countdown: SolsticeCountdown) -> String {
    if countdown.days_until == 0 {
        format!("Today is the {} solstice!", countdown.solstice)
    } else {
        format!(
            "Next solstice: {} days ({})",
            countdown.days_until, countdown.solstice
        )
    }
}
