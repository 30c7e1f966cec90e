//! Constants module for precession and season calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian Ephemeris Day
pub const J2000: f64 = 2_451_545.0;
/// B1900.0 epoch as Julian Ephemeris Day
pub const B1900: f64 = 2_415_020.313_5;
/// B1950.0 epoch as Julian Ephemeris Day
pub const B1950: f64 = 2_433_282.423_5;
/// Days in a Julian year
pub const JULIAN_YEAR: f64 = 365.25;
/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;
/// Days in a Besselian (tropical) year at B1900
pub const BESSELIAN_YEAR: f64 = 365.242_198_781;

// Angles
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Seconds of time (of right ascension) to radians conversion factor
pub const SEC2RAD: f64 = 15.0 * ASEC2RAD;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Calendar constants
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: i32 = 2_299_161;
