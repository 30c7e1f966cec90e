//! Planetary ephemeris seam
//!
//! Calculations that need the position of a planet (currently only the solar
//! longitude used by the season finder) take any [`PlanetEphemeris`]. The
//! crate ships [`Vsop87`], an analytic VSOP87D evaluator; tests and callers
//! with their own data sources can supply another implementation.

use crate::coordinates::angle::normalize_two_pi;
use thiserror::Error;
use vsop87::vsop87d;

/// Error type for planetary calculations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("No ephemeris data for {0}")]
    BodyUnavailable(&'static str),

    #[error("Invalid ephemeris output: {0}")]
    InvalidData(String),

    #[error("Ephemeris data unavailable: {0}")]
    DataUnavailable(String),
}

/// Enum representing the major solar system bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

/// Heliocentric ecliptic position referred to the mean ecliptic and equinox
/// of date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    /// Ecliptic longitude in radians, in [0, 2π)
    pub longitude: f64,
    /// Ecliptic latitude in radians
    pub latitude: f64,
    /// Distance from the Sun in AU
    pub radius: f64,
}

impl HeliocentricPosition {
    fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite() && self.radius.is_finite()
    }
}

/// Source of heliocentric planetary positions
///
/// Implementations take `&self` and must be safe to call repeatedly; the
/// season finder queries the Earth once per refinement step.
pub trait PlanetEphemeris {
    /// Position of `body` at the given Julian Ephemeris Day
    fn heliocentric(&self, body: Body, jde: f64) -> Result<HeliocentricPosition, EphemerisError>;
}

impl<E: PlanetEphemeris + ?Sized> PlanetEphemeris for &E {
    fn heliocentric(&self, body: Body, jde: f64) -> Result<HeliocentricPosition, EphemerisError> {
        (**self).heliocentric(body, jde)
    }
}

/// VSOP87D analytic theory (Bretagnon & Francou 1988), heliocentric
/// spherical coordinates of date, for Mercury through Neptune
#[derive(Debug, Clone, Copy, Default)]
pub struct Vsop87;

impl Vsop87 {
    pub fn new() -> Self {
        Vsop87
    }
}

impl PlanetEphemeris for Vsop87 {
    fn heliocentric(&self, body: Body, jde: f64) -> Result<HeliocentricPosition, EphemerisError> {
        if !jde.is_finite() {
            return Err(EphemerisError::InvalidData(format!(
                "non-finite epoch {jde} for {}",
                body.name()
            )));
        }

        let coords = match body {
            Body::Mercury => vsop87d::mercury(jde),
            Body::Venus => vsop87d::venus(jde),
            Body::Earth => vsop87d::earth(jde),
            Body::Mars => vsop87d::mars(jde),
            Body::Jupiter => vsop87d::jupiter(jde),
            Body::Saturn => vsop87d::saturn(jde),
            Body::Uranus => vsop87d::uranus(jde),
            Body::Neptune => vsop87d::neptune(jde),
            Body::Sun | Body::Moon | Body::Pluto => {
                return Err(EphemerisError::BodyUnavailable(body.name()))
            }
        };

        let position = HeliocentricPosition {
            longitude: normalize_two_pi(coords.longitude()),
            latitude: coords.latitude(),
            radius: coords.distance(),
        };
        if !position.is_finite() {
            return Err(EphemerisError::InvalidData(format!(
                "{} at JDE {jde}: {position:?}",
                body.name()
            )));
        }
        Ok(position)
    }
}
