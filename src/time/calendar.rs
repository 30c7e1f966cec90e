//! Calendar date and Julian date conversion functions
//!
//! Dates carry a fractional day so that a time of day can be folded in, and
//! the year may be zero or negative (astronomical year numbering).

use crate::constants::GREGORIAN_START;

/// A calendar date with a fractional day of month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    /// Day of month, the fraction being the time of day
    pub day: f64,
}

/// Convert a proleptic Gregorian calendar date to a Julian date
pub fn calendar_gregorian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_january_february(year, month);
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    julian_base(y, m, day) + b
}

/// Convert a Julian calendar date to a Julian date
pub fn calendar_julian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_january_february(year, month);
    julian_base(y, m, day)
}

/// Convert a Julian date to a calendar date
///
/// Uses the proleptic Gregorian calendar unless `julian_before` is set to a
/// specific Julian day number, in which case the Julian calendar is used for
/// dates older than that. Pass `Some(GREGORIAN_START)` for the historical
/// 1582 reform.
pub fn jd_to_calendar(jd: f64, julian_before: Option<i32>) -> CalendarDate {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let use_gregorian = match julian_before {
        None => true,
        Some(jb) => z >= jb as f64,
    };
    let a = if use_gregorian {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;

    CalendarDate { year, month, day }
}

/// Convert a calendar date to a Julian date using the 1582 reform
///
/// Dates before 1582 October 15 are read as Julian calendar dates.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let jd = calendar_gregorian_to_jd(year, month, day);
    if jd + 0.5 < GREGORIAN_START as f64 {
        calendar_julian_to_jd(year, month, day)
    } else {
        jd
    }
}

fn shift_january_february(year: i32, month: u32) -> (f64, f64) {
    if month < 3 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    }
}

fn julian_base(y: f64, m: f64, day: f64) -> f64 {
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gregorian_to_jd() {
        assert_eq!(calendar_gregorian_to_jd(2000, 1, 1.5), 2451545.0);
        assert_eq!(calendar_gregorian_to_jd(2020, 1, 1.5), 2458850.0);
        assert_eq!(calendar_gregorian_to_jd(1969, 7, 20.0), 2440422.5);
        assert_abs_diff_eq!(calendar_gregorian_to_jd(1957, 10, 4.81), 2436116.31, epsilon = 1e-9);
        assert_eq!(calendar_gregorian_to_jd(1962, 6, 21.0), 2437836.5);
    }

    #[test]
    fn test_julian_to_jd() {
        assert_eq!(calendar_julian_to_jd(333, 1, 27.5), 1842713.0);
        assert_abs_diff_eq!(calendar_julian_to_jd(-584, 5, 28.63), 1507900.13, epsilon = 1e-9);
        assert_eq!(calendar_julian_to_jd(-4712, 1, 1.5), 0.0);
    }

    #[test]
    fn test_reform_switch() {
        // 1582 October 4 (Julian) is followed by October 15 (Gregorian)
        let before = calendar_to_jd(1582, 10, 4.0);
        let after = calendar_to_jd(1582, 10, 15.0);
        assert_eq!(after - before, 1.0);
    }

    #[test]
    fn test_jd_to_calendar() {
        let date = jd_to_calendar(2436116.31, None);
        assert_eq!((date.year, date.month), (1957, 10));
        assert_abs_diff_eq!(date.day, 4.81, epsilon = 1e-6);

        let date = jd_to_calendar(1842713.0, Some(GREGORIAN_START));
        assert_eq!((date.year, date.month), (333, 1));
        assert_abs_diff_eq!(date.day, 27.5, epsilon = 1e-9);

        let date = jd_to_calendar(1507900.13, Some(GREGORIAN_START));
        assert_eq!((date.year, date.month), (-584, 5));
        assert_abs_diff_eq!(date.day, 28.63, epsilon = 1e-6);
    }
}
