use std::f64::consts::PI;

use chrono::{DateTime, Utc};

use crate::types::Coordinate;

pub const DAY_MS: f64 = 86_400_000.0;
pub const J1970: f64 = 2_440_588.0;
pub const J2000: f64 = 2_451_545.0;
/// Obliquity of the ecliptic at J2000, degrees.
pub const EARTH_OBLIQUITY: f64 = 23.4397;
pub const PERIHELION_LONGITUDE: f64 = 102.9372;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Degrees clockwise from north, in [0, 360).
    pub azimuth: f64,
    /// Degrees above the geometric horizon.
    pub elevation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoords {
    pub declination: f64,
    pub right_ascension: f64,
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

pub fn to_julian(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / DAY_MS - 0.5 + J1970
}

pub fn from_julian(julian: f64) -> Option<DateTime<Utc>> {
    if !julian.is_finite() {
        return None;
    }
    let ms = ((julian + 0.5 - J1970) * DAY_MS).round() as i64;
    DateTime::from_timestamp_millis(ms)
}

/// Days (fractional) since J2000.0.
pub fn to_days(instant: &DateTime<Utc>) -> f64 {
    to_julian(instant) - J2000
}

pub fn right_ascension(l: f64, b: f64) -> f64 {
    let e = deg_to_rad(EARTH_OBLIQUITY);
    (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos())
}

pub fn declination(l: f64, b: f64) -> f64 {
    let e = deg_to_rad(EARTH_OBLIQUITY);
    (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin()
}

/// South-referenced azimuth in radians, (-π, π].
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    deg_to_rad(280.16 + 360.985_623_5 * d) - lw
}

pub fn solar_mean_anomaly(d: f64) -> f64 {
    deg_to_rad(357.5291 + 0.985_600_28 * d)
}

pub fn ecliptic_longitude(m: f64) -> f64 {
    let c = deg_to_rad(1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    m + c + deg_to_rad(PERIHELION_LONGITUDE) + PI
}

pub fn sun_coords(d: f64) -> SunCoords {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    SunCoords {
        declination: declination(l, 0.0),
        right_ascension: right_ascension(l, 0.0),
    }
}

pub fn solar_position(coordinate: Coordinate, instant: &DateTime<Utc>) -> SolarPosition {
    let lw = deg_to_rad(-coordinate.longitude);
    let phi = deg_to_rad(coordinate.latitude);
    let d = to_days(instant);
    let c = sun_coords(d);
    let h = sidereal_time(d, lw) - c.right_ascension;

    SolarPosition {
        // shift the south-referenced angle to a compass bearing
        azimuth: normalize_angle(rad_to_deg(azimuth(h, phi, c.declination)) + 180.0),
        elevation: rad_to_deg(altitude(h, phi, c.declination)),
    }
}
