//! Orientation elements of an orbit
//!
//! Only the three angular elements change when the reference ecliptic and
//! equinox change; size, shape and timing of the orbit are unaffected and
//! are not carried here.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Inclination, argument of perihelion and longitude of the ascending node,
/// in radians, referred to the ecliptic and equinox of some epoch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Inclination to the ecliptic, in [0, π]
    pub inclination: f64,
    /// Argument of perihelion
    pub perihelion: f64,
    /// Longitude of the ascending node
    pub node: f64,
}

impl OrbitalElements {
    pub fn new(inclination: f64, perihelion: f64, node: f64) -> Self {
        OrbitalElements {
            inclination,
            perihelion,
            node,
        }
    }

    /// Create elements from values in degrees
    pub fn from_degrees(inclination: f64, perihelion: f64, node: f64) -> Self {
        Self::new(
            inclination * PI / 180.0,
            perihelion * PI / 180.0,
            node * PI / 180.0,
        )
    }
}
