use std::f64::consts::PI;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::angles::{self, J2000};
use crate::types::{Coordinate, DaySunTimes, SunEvent, SunEventKind};

/// Sun center altitude at apparent sunrise/sunset, degrees: refraction plus solar radius.
pub const HORIZON_ALTITUDE: f64 = -0.833;

const J0: f64 = 0.0009;

pub fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / (2.0 * PI)).round()
}

pub fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + n
}

pub fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the sun reaches altitude `h`, or `None` if it never does that day.
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> Option<f64> {
    let cos_w = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if !(-1.0..=1.0).contains(&cos_w) {
        return None;
    }
    Some(cos_w.acos())
}

/// Julian dates of (rise, set) for the given altitude around the transit nearest `instant`.
pub fn crossing_julians(
    coordinate: Coordinate,
    instant: &DateTime<Utc>,
    altitude_deg: f64,
) -> Option<(f64, f64)> {
    let lw = angles::deg_to_rad(-coordinate.longitude);
    let phi = angles::deg_to_rad(coordinate.latitude);
    let d = angles::to_days(instant);

    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);
    let m = angles::solar_mean_anomaly(ds);
    let l = angles::ecliptic_longitude(m);
    let dec = angles::declination(l, 0.0);
    let j_noon = solar_transit_j(ds, m, l);

    let w = hour_angle(angles::deg_to_rad(altitude_deg), phi, dec)?;
    let a = approx_transit(w, lw, n);
    let j_set = solar_transit_j(a, m, l);
    let j_rise = j_noon - (j_set - j_noon);
    Some((j_rise, j_set))
}

fn sun_event(kind: SunEventKind, julian: f64, coordinate: Coordinate) -> Option<SunEvent> {
    let instant = angles::from_julian(julian)?;
    let pos = angles::solar_position(coordinate, &instant);
    Some(SunEvent {
        kind,
        instant,
        azimuth: pos.azimuth,
        elevation: pos.elevation,
    })
}

const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(t) => t,
    None => panic!("12:00:00 is a valid time"),
};

pub fn noon_anchor(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NOON).and_utc()
}

pub fn compute_day(coordinate: Coordinate, date: NaiveDate) -> DaySunTimes {
    let anchor = noon_anchor(date);
    let (sunrise, sunset) = match crossing_julians(coordinate, &anchor, HORIZON_ALTITUDE) {
        Some((rise, set)) => (
            sun_event(SunEventKind::Sunrise, rise, coordinate),
            sun_event(SunEventKind::Sunset, set, coordinate),
        ),
        None => {
            debug!(%date, lat = coordinate.latitude, lng = coordinate.longitude, "sun does not cross the horizon");
            (None, None)
        }
    };

    DaySunTimes {
        date,
        sunrise,
        sunset,
    }
}

/// One entry per day from `start`, `days` entries long.
///
/// The range stops at the last date chrono can represent, so a range running
/// past `NaiveDate::MAX` is shorter than `days`.
pub fn compute_range(coordinate: Coordinate, start: NaiveDate, days: u32) -> Vec<DaySunTimes> {
    debug!(%start, days, lat = coordinate.latitude, lng = coordinate.longitude, "computing sun times");
    (0..days)
        .map_while(|offset| start.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| compute_day(coordinate, date))
        .collect()
}
