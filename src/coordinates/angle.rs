//! # Angle Helpers
//!
//! All angles in this crate are plain `f64` radians. Catalogues and reference
//! tables however quote right ascension in hours, minutes and seconds of time
//! and declination in degrees, arcminutes and arcseconds, and proper motions
//! in seconds of time or arcseconds per year. This module converts those
//! sexagesimal components to radians and back to the conventional ranges.
//!
//! Parsing and formatting of angle strings is left to the caller.
//!
//! ## Examples
//!
//! ```rust
//! use starshift::coordinates::angle::{dms_to_rad, hms_to_rad};
//!
//! // Regulus, J2000.0
//! let ra = hms_to_rad(10, 8, 22.3);
//! let dec = dms_to_rad(false, 11, 58, 2.0);
//! assert!(ra > 2.65 && ra < 2.66);
//! assert!(dec > 0.20 && dec < 0.21);
//! ```

use crate::constants::{ASEC2RAD, SEC2RAD, TAU};
use std::f64::consts::PI;

/// Converts degrees, arcminutes and arcseconds to radians
///
/// The sign is carried separately so that angles such as −0°30′ can be
/// expressed without a negative zero degree component.
///
/// # Arguments
///
/// * `negative` - True for angles south of the equator / below zero
/// * `degrees` - Whole degrees
/// * `minutes` - Whole arcminutes
/// * `seconds` - Arcseconds, possibly fractional
pub fn dms_to_rad(negative: bool, degrees: u32, minutes: u32, seconds: f64) -> f64 {
    let magnitude =
        (degrees as f64 * 3600.0 + minutes as f64 * 60.0 + seconds) * ASEC2RAD;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Converts a right ascension in hours, minutes and seconds of time to radians
pub fn hms_to_rad(hours: u32, minutes: u32, seconds: f64) -> f64 {
    (hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds) * SEC2RAD
}

/// Converts seconds of time (e.g. a proper motion in RA) to radians
pub fn sec_of_time_to_rad(seconds: f64) -> f64 {
    seconds * SEC2RAD
}

/// Converts arcseconds to radians
pub fn arcsec_to_rad(arcseconds: f64) -> f64 {
    arcseconds * ASEC2RAD
}

/// Converts radians to arcseconds
pub fn rad_to_arcsec(radians: f64) -> f64 {
    radians / ASEC2RAD
}

/// Reduces an angle to the range [0, 2π)
///
/// `rem_euclid` can return exactly 2π for tiny negative inputs, which is
/// folded back to zero.
pub fn normalize_two_pi(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}

/// Reduces an angle to the range (−π, π]
///
/// Used for signed differences between longitudes, where the short way
/// round matters.
pub fn wrap_pi(angle: f64) -> f64 {
    let reduced = normalize_two_pi(angle);
    if reduced > PI {
        reduced - TAU
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dms_sign_handling() {
        let north = dms_to_rad(false, 16, 42, 57.99);
        let south = dms_to_rad(true, 16, 42, 57.99);
        assert_eq!(north, -south);
        assert_relative_eq!(north.to_degrees(), 16.716108333, epsilon = 1e-9);

        // Negative zero degrees still yields a negative angle
        assert!(dms_to_rad(true, 0, 30, 0.0) < 0.0);
    }

    #[test]
    fn test_hms_to_rad() {
        assert_relative_eq!(hms_to_rad(6, 0, 0.0), PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(hms_to_rad(12, 0, 0.0), PI, epsilon = 1e-15);
        assert_relative_eq!(hms_to_rad(10, 8, 22.3).to_degrees(), 152.092917, epsilon = 1e-6);
    }

    #[test]
    fn test_seconds_conversions() {
        // One second of time is fifteen arcseconds
        assert_relative_eq!(sec_of_time_to_rad(1.0), arcsec_to_rad(15.0), epsilon = 1e-20);
        assert_relative_eq!(rad_to_arcsec(arcsec_to_rad(20.0431)), 20.0431, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_two_pi() {
        assert_eq!(normalize_two_pi(0.0), 0.0);
        assert_relative_eq!(normalize_two_pi(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
        assert_relative_eq!(normalize_two_pi(5.0 * PI), PI, epsilon = 1e-14);
        let tiny = normalize_two_pi(-1e-300);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_wrap_pi() {
        assert_relative_eq!(wrap_pi(1.5 * PI), -0.5 * PI, epsilon = 1e-15);
        assert_relative_eq!(wrap_pi(-1.5 * PI), 0.5 * PI, epsilon = 1e-15);
        assert_relative_eq!(wrap_pi(0.25), 0.25, epsilon = 1e-15);
    }
}
