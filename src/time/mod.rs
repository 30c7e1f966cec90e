//! Epoch handling for precession and season calculations
//!
//! The numeric core works in Julian years and Julian centuries. This module
//! converts the other common epoch representations (Besselian years and
//! Julian Ephemeris Days) into that form, and provides the calendar
//! conversions used by callers to build reference instants.

pub mod calendar;

pub use calendar::{
    calendar_gregorian_to_jd, calendar_julian_to_jd, calendar_to_jd, jd_to_calendar, CalendarDate,
};

use crate::constants::{B1900, BESSELIAN_YEAR, J2000, JULIAN_CENTURY, JULIAN_YEAR};
use serde::{Deserialize, Serialize};

/// Convert a Besselian year (e.g. 1950.0) to a Julian Ephemeris Day
pub fn besselian_year_to_jde(year: f64) -> f64 {
    B1900 + BESSELIAN_YEAR * (year - 1900.0)
}

/// Convert a Julian Ephemeris Day to a Besselian year
pub fn jde_to_besselian_year(jde: f64) -> f64 {
    1900.0 + (jde - B1900) / BESSELIAN_YEAR
}

/// Convert a Julian year (e.g. 2050.0) to a Julian Ephemeris Day
pub fn julian_year_to_jde(year: f64) -> f64 {
    J2000 + JULIAN_YEAR * (year - 2000.0)
}

/// Convert a Julian Ephemeris Day to a Julian year
pub fn jde_to_julian_year(jde: f64) -> f64 {
    2000.0 + (jde - J2000) / JULIAN_YEAR
}

/// Julian centuries elapsed since J2000.0
pub fn j2000_century(jde: f64) -> f64 {
    (jde - J2000) / JULIAN_CENTURY
}

/// An epoch expressed in any of the usual representations
///
/// Catalogues quote their epochs as Besselian years (B1950), Julian years
/// (J2000) or plain Julian Ephemeris Days. The precession routines take
/// Julian years; `Epoch::julian_year` bridges the gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Epoch {
    /// Julian year, e.g. `Julian(2000.0)` for J2000.0
    Julian(f64),
    /// Besselian year, e.g. `Besselian(1950.0)` for B1950.0
    Besselian(f64),
    /// Julian Ephemeris Day
    Jde(f64),
}

impl Epoch {
    /// The epoch as a Julian Ephemeris Day
    pub fn jde(&self) -> f64 {
        match *self {
            Epoch::Julian(year) => julian_year_to_jde(year),
            Epoch::Besselian(year) => besselian_year_to_jde(year),
            Epoch::Jde(jde) => jde,
        }
    }

    /// The epoch as a fractional Julian year
    pub fn julian_year(&self) -> f64 {
        match *self {
            Epoch::Julian(year) => year,
            other => jde_to_julian_year(other.jde()),
        }
    }
}

impl From<f64> for Epoch {
    /// Bare numbers are taken to be Julian years
    fn from(year: f64) -> Self {
        Epoch::Julian(year)
    }
}
