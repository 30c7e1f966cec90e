//! Spherical reference frames
//!
//! Equatorial (right ascension, declination) and ecliptic (longitude,
//! latitude) positions, both referred to the mean equinox of some epoch.

pub mod inertial;

pub use inertial::{Ecliptic, Equatorial, InertialFrame};
