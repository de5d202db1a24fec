use chrono::{TimeZone, Utc};

use calsun::angles::*;
use calsun::types::Coordinate;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const COPENHAGEN: Coordinate = Coordinate {
    latitude: 55.6761,
    longitude: 12.5683,
};

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_never_returns_360() {
    for input in [-1e-15, -1e-17, 360.0, 720.0, -360.0] {
        let a = normalize_angle(input);
        assert!((0.0..360.0).contains(&a), "input={} -> {}", input, a);
    }
}

#[test]
fn test_deg_rad_roundtrip() {
    for deg in [-180.0, -90.0, -0.833, 0.0, 23.4397, 90.0, 359.0] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-12);
    }
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
}

// ── Julian dates ──

#[test]
fn test_j2000_epoch() {
    let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_approx!(to_julian(&epoch), J2000, 1e-9);
    assert_approx!(to_days(&epoch), 0.0, 1e-9);
}

#[test]
fn test_unix_epoch_julian() {
    let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
    assert_approx!(to_julian(&epoch), J1970 - 0.5, 1e-9);
}

#[test]
fn test_from_julian_inverts_to_julian() {
    let t = Utc.with_ymd_and_hms(2024, 6, 21, 2, 25, 13).unwrap();
    assert_eq!(from_julian(to_julian(&t)), Some(t));
}

#[test]
fn test_from_julian_rejects_non_finite() {
    assert_eq!(from_julian(f64::NAN), None);
    assert_eq!(from_julian(f64::INFINITY), None);
}

// ── Sun coordinates ──

#[test]
fn test_declination_at_june_solstice() {
    let t = Utc.with_ymd_and_hms(2024, 6, 20, 21, 0, 0).unwrap();
    let c = sun_coords(to_days(&t));
    assert_approx!(rad_to_deg(c.declination), 23.44, 0.05);
}

#[test]
fn test_declination_at_december_solstice() {
    let t = Utc.with_ymd_and_hms(2024, 12, 21, 9, 0, 0).unwrap();
    let c = sun_coords(to_days(&t));
    assert_approx!(rad_to_deg(c.declination), -23.44, 0.05);
}

#[test]
fn test_declination_near_zero_at_equinoxes() {
    let march = Utc.with_ymd_and_hms(2024, 3, 20, 3, 0, 0).unwrap();
    let september = Utc.with_ymd_and_hms(2024, 9, 22, 13, 0, 0).unwrap();
    assert_approx!(rad_to_deg(sun_coords(to_days(&march)).declination), 0.0, 0.1);
    assert_approx!(rad_to_deg(sun_coords(to_days(&september)).declination), 0.0, 0.1);
}

// ── SolarPosition ──

#[test]
fn test_copenhagen_solar_noon_june() {
    let t = Utc.with_ymd_and_hms(2024, 6, 21, 11, 11, 0).unwrap();
    let pos = solar_position(COPENHAGEN, &t);
    assert_approx!(pos.azimuth, 180.0, 3.0);
    assert_approx!(pos.elevation, 90.0 - 55.6761 + 23.44, 0.5);
}

#[test]
fn test_copenhagen_morning_east_afternoon_west() {
    let morning = Utc.with_ymd_and_hms(2024, 3, 20, 7, 0, 0).unwrap();
    let afternoon = Utc.with_ymd_and_hms(2024, 3, 20, 15, 0, 0).unwrap();
    let am = solar_position(COPENHAGEN, &morning);
    let pm = solar_position(COPENHAGEN, &afternoon);
    assert!(am.azimuth > 90.0 && am.azimuth < 180.0, "am azimuth={}", am.azimuth);
    assert!(pm.azimuth > 180.0 && pm.azimuth < 270.0, "pm azimuth={}", pm.azimuth);
    assert!(am.elevation > 0.0 && pm.elevation > 0.0);
}

#[test]
fn test_southern_hemisphere_noon_sun_is_north() {
    let sydney = Coordinate::new(-33.8688, 151.2093);
    let t = Utc.with_ymd_and_hms(2024, 6, 21, 1, 58, 0).unwrap();
    let pos = solar_position(sydney, &t);
    assert!(
        pos.azimuth < 5.0 || pos.azimuth > 355.0,
        "azimuth={}",
        pos.azimuth
    );
    assert_approx!(pos.elevation, 90.0 - 33.8688 - 23.44, 0.5);
}

#[test]
fn test_equator_equinox_sun_near_zenith() {
    let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 7, 0).unwrap();
    let pos = solar_position(Coordinate::new(0.0, 0.0), &t);
    assert!(pos.elevation > 88.0, "elevation={}", pos.elevation);
}

#[test]
fn test_midnight_sun_below_horizon_at_night() {
    let t = Utc.with_ymd_and_hms(2024, 12, 21, 0, 0, 0).unwrap();
    let pos = solar_position(COPENHAGEN, &t);
    assert!(pos.elevation < -50.0, "elevation={}", pos.elevation);
    assert!((0.0..360.0).contains(&pos.azimuth));
}
