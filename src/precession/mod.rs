//! Precession of equatorial and ecliptic coordinates
//!
//! Two methods are provided:
//!
//! - an approximate one based on the annual rates of precession in right
//!   ascension and declination, adequate for spans of a few decades;
//! - a rigorous one which rotates the unit vector of a position through the
//!   three precession angles. For the equatorial frame these are ζ, z and θ
//!   (Lieske et al. 1977, as given by Meeus, eq. 21.2); for the ecliptic
//!   frame η, Π and p (Meeus, eq. 21.5).
//!
//! Deriving the angles is the costly step, so the rigorous method is split
//! into a [`Precessor`] (or [`EclipticPrecessor`]) built once per epoch pair
//! and reused for any number of positions. The one-shot functions
//! [`position`] and [`ecliptic_position`] construct a precessor and apply it,
//! so both routes perform the same arithmetic.
//!
//! Epochs are Julian years throughout; see [`crate::time::Epoch`] for
//! Besselian years and Julian Ephemeris Days.

mod rotation;

use crate::constants::{ASEC2RAD, SEC2RAD};
use crate::coordinates::angle::normalize_two_pi;
use crate::coordinates::{Ecliptic, Equatorial, OrbitalElements};
use crate::time::Epoch;
use log::trace;
use nalgebra::{Matrix3, Rotation3};

/// Below this, sin(i) is treated as zero when reducing orbital elements
const DEGENERATE_SINE: f64 = 1e-12;

/// Julian centuries from J2000.0 to the given Julian year
fn centuries_from_j2000(epoch: f64) -> f64 {
    (epoch - 2000.0) * 0.01
}

/// Returns the approximate annual precession in right ascension and
/// declination, in radians per year
///
/// The rates m and n (Meeus, 21.1) are evaluated at `epoch_from`; the target
/// epoch is accepted for symmetry with the rigorous routines. Accuracy
/// degrades as the span grows and is not checked.
pub fn approx_annual_precession(eq: &Equatorial, epoch_from: f64, _epoch_to: f64) -> (f64, f64) {
    let t = centuries_from_j2000(epoch_from);
    let m = (3.07496 + 0.00186 * t) * SEC2RAD;
    let n_ra = (1.33621 - 0.00057 * t) * SEC2RAD;
    let n_dec = (20.0431 - 0.0085 * t) * ASEC2RAD;

    let (sin_ra, cos_ra) = eq.ra.sin_cos();
    let d_ra = m + n_ra * sin_ra * eq.dec.tan();
    let d_dec = n_dec * cos_ra;
    (d_ra, d_dec)
}

/// Precesses a position with the annual rates, including proper motion
///
/// `mu_ra` and `mu_dec` are proper motions in radians per year. The combined
/// rates are multiplied by the elapsed years and added to the position; a
/// declination carried past a pole is folded back into [−π/2, π/2].
pub fn approx_position(
    eq: &Equatorial,
    epoch_from: f64,
    epoch_to: f64,
    mu_ra: f64,
    mu_dec: f64,
) -> Equatorial {
    let (d_ra, d_dec) = approx_annual_precession(eq, epoch_from, epoch_to);
    let years = epoch_to - epoch_from;
    Equatorial::folded(
        eq.ra + (d_ra + mu_ra) * years,
        eq.dec + (d_dec + mu_dec) * years,
    )
}

/// Equatorial precession angles ζ, z and θ in radians
fn equatorial_angles(epoch_from: f64, epoch_to: f64) -> (f64, f64, f64) {
    let big_t = centuries_from_j2000(epoch_from);
    let t = (epoch_to - epoch_from) * 0.01;

    let rate = 2306.2181 + (1.39656 - 0.000139 * big_t) * big_t;
    let zeta = (rate + ((0.30188 - 0.000344 * big_t) + 0.017998 * t) * t) * t;
    let z = (rate + ((1.09468 + 0.000066 * big_t) + 0.018203 * t) * t) * t;
    let theta = ((2004.3109 - (0.85330 + 0.000217 * big_t) * big_t)
        - ((0.42665 + 0.000217 * big_t) + 0.041833 * t) * t)
        * t;

    (zeta * ASEC2RAD, z * ASEC2RAD, theta * ASEC2RAD)
}

/// Ecliptic precession angles η, Π and p in radians
fn ecliptic_angles(epoch_from: f64, epoch_to: f64) -> (f64, f64, f64) {
    let big_t = centuries_from_j2000(epoch_from);
    let t = (epoch_to - epoch_from) * 0.01;

    let eta = ((47.0029 - (0.06603 - 0.000598 * big_t) * big_t)
        + ((-0.03302 + 0.000598 * big_t) + 0.000060 * t) * t)
        * t;
    let pi = 174.876384 * 3600.0 + (3289.4789 + 0.60622 * big_t) * big_t
        - (869.8089 + 0.50491 * big_t) * t
        + 0.03536 * t * t;
    let p = ((5029.0966 + (2.22226 - 0.000042 * big_t) * big_t)
        + ((1.11113 - 0.000042 * big_t) - 0.000006 * t) * t)
        * t;

    (eta * ASEC2RAD, pi * ASEC2RAD, p * ASEC2RAD)
}

/// Rigorous precession of equatorial coordinates between two epochs
///
/// Immutable once built, so a single instance can be shared across threads
/// and applied to whole catalogues.
///
/// # Examples
///
/// ```rust
/// use starshift::coordinates::Equatorial;
/// use starshift::precession::Precessor;
///
/// let precessor = Precessor::new(2000.0, 2050.0);
/// let vega = Equatorial::from_degrees(279.2347, 38.7837);
/// let moved = precessor.precess(&vega);
/// assert!(moved.angular_distance(&vega) < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precessor {
    epoch_from: f64,
    epoch_to: f64,
    zeta: f64,
    z: f64,
    theta: f64,
    rotation: Rotation3<f64>,
}

impl Precessor {
    /// Derives the precession angles for the Julian-year epoch pair
    pub fn new(epoch_from: f64, epoch_to: f64) -> Self {
        let (zeta, z, theta) = equatorial_angles(epoch_from, epoch_to);
        trace!(
            "equatorial precession {} -> {}: zeta={:e} z={:e} theta={:e} rad",
            epoch_from,
            epoch_to,
            zeta,
            z,
            theta
        );

        // Meeus 21.4 is Rz(z) · Ry(−θ) · Rz(ζ) acting on the unit vector
        let rotation = rotation::rot_z(z) * rotation::rot_y(-theta) * rotation::rot_z(zeta);

        Precessor {
            epoch_from,
            epoch_to,
            zeta,
            z,
            theta,
            rotation,
        }
    }

    /// Builds a precessor from epochs in any representation
    pub fn between(from: Epoch, to: Epoch) -> Self {
        Self::new(from.julian_year(), to.julian_year())
    }

    /// The precession angles (ζ, z, θ) in radians
    pub fn angles(&self) -> (f64, f64, f64) {
        (self.zeta, self.z, self.theta)
    }

    /// Elapsed Julian years from the source to the target epoch
    pub fn span_years(&self) -> f64 {
        self.epoch_to - self.epoch_from
    }

    /// The rotation matrix taking source-epoch vectors to the target epoch
    pub fn matrix(&self) -> &Matrix3<f64> {
        self.rotation.matrix()
    }

    /// Rotates a position from the mean equator and equinox of the source
    /// epoch to those of the target epoch, without proper motion
    pub fn precess(&self, eq: &Equatorial) -> Equatorial {
        rotation::rotate(&self.rotation, eq)
    }

    /// Applies proper motion over the span and then precesses
    ///
    /// Proper motions are in radians per year and refer to the source frame,
    /// which is how catalogues give them.
    pub fn apply(&self, eq: &Equatorial, mu_ra: f64, mu_dec: f64) -> Equatorial {
        let years = self.span_years();
        let moved = Equatorial {
            ra: eq.ra + mu_ra * years,
            dec: eq.dec + mu_dec * years,
        };
        self.precess(&moved)
    }
}

/// Precesses a position rigorously, including proper motion, in one call
///
/// Equivalent to `Precessor::new(epoch_from, epoch_to).apply(..)`; prefer the
/// reusable form when transforming many positions between the same epochs.
pub fn position(
    eq: &Equatorial,
    epoch_from: f64,
    epoch_to: f64,
    mu_ra: f64,
    mu_dec: f64,
) -> Equatorial {
    Precessor::new(epoch_from, epoch_to).apply(eq, mu_ra, mu_dec)
}

/// Rigorous precession of ecliptic coordinates between two epochs
///
/// Also reduces orbital elements from one equinox to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPrecessor {
    epoch_from: f64,
    epoch_to: f64,
    eta: f64,
    pi: f64,
    p: f64,
    rotation: Rotation3<f64>,
}

impl EclipticPrecessor {
    /// Derives the ecliptic precession angles for the Julian-year epoch pair
    pub fn new(epoch_from: f64, epoch_to: f64) -> Self {
        let (eta, pi, p) = ecliptic_angles(epoch_from, epoch_to);
        trace!(
            "ecliptic precession {} -> {}: eta={:e} pi={:e} p={:e} rad",
            epoch_from,
            epoch_to,
            eta,
            pi,
            p
        );

        // Meeus 21.7 is Rz(Π + p) · Rx(−η) · Rz(−Π) acting on the unit vector
        let rotation =
            rotation::rot_z(pi + p) * rotation::rot_x(-eta) * rotation::rot_z(-pi);

        EclipticPrecessor {
            epoch_from,
            epoch_to,
            eta,
            pi,
            p,
            rotation,
        }
    }

    /// Builds a precessor from epochs in any representation
    pub fn between(from: Epoch, to: Epoch) -> Self {
        Self::new(from.julian_year(), to.julian_year())
    }

    /// The precession angles (η, Π, p) in radians
    pub fn angles(&self) -> (f64, f64, f64) {
        (self.eta, self.pi, self.p)
    }

    /// Elapsed Julian years from the source to the target epoch
    pub fn span_years(&self) -> f64 {
        self.epoch_to - self.epoch_from
    }

    /// The rotation matrix taking source-epoch vectors to the target epoch
    pub fn matrix(&self) -> &Matrix3<f64> {
        self.rotation.matrix()
    }

    /// Rotates a position to the ecliptic and equinox of the target epoch
    pub fn precess(&self, ecl: &Ecliptic) -> Ecliptic {
        rotation::rotate(&self.rotation, ecl)
    }

    /// Applies proper motion (radians per year in longitude and latitude)
    /// over the span and then precesses
    pub fn apply(&self, ecl: &Ecliptic, mu_lon: f64, mu_lat: f64) -> Ecliptic {
        let years = self.span_years();
        let moved = Ecliptic {
            lon: ecl.lon + mu_lon * years,
            lat: ecl.lat + mu_lat * years,
        };
        self.precess(&moved)
    }

    /// Reduces orbital elements to the ecliptic and equinox of the target
    /// epoch (Meeus, 24.1 to 24.3)
    ///
    /// For an orbit lying in the source ecliptic with no precession to
    /// apply, the node is undefined; it is then advanced by the general
    /// precession p and the argument of perihelion is kept.
    pub fn reduce_elements(&self, elements: &OrbitalElements) -> OrbitalElements {
        let (sin_eta, cos_eta) = self.eta.sin_cos();
        let (sin_i, cos_i) = elements.inclination.sin_cos();
        let (sin_np, cos_np) = (elements.node - self.pi).sin_cos();

        let cos_i_to = (cos_i * cos_eta + sin_i * sin_eta * cos_np).clamp(-1.0, 1.0);
        let inclination = cos_i_to.acos();

        let node_y = sin_i * sin_np;
        let node_x = cos_eta * sin_i * cos_np - sin_eta * cos_i;
        let peri_y = -sin_eta * sin_np;
        let peri_x = sin_i * cos_eta - cos_i * sin_eta * cos_np;

        if node_y.hypot(node_x) < DEGENERATE_SINE || peri_y.hypot(peri_x) < DEGENERATE_SINE {
            return OrbitalElements {
                inclination,
                perihelion: elements.perihelion,
                node: normalize_two_pi(elements.node + self.p),
            };
        }

        OrbitalElements {
            inclination,
            perihelion: normalize_two_pi(elements.perihelion + peri_y.atan2(peri_x)),
            node: normalize_two_pi(node_y.atan2(node_x) + self.pi + self.p),
        }
    }
}

/// Precesses an ecliptic position rigorously, including proper motion, in
/// one call
pub fn ecliptic_position(
    ecl: &Ecliptic,
    epoch_from: f64,
    epoch_to: f64,
    mu_lon: f64,
    mu_lat: f64,
) -> Ecliptic {
    EclipticPrecessor::new(epoch_from, epoch_to).apply(ecl, mu_lon, mu_lat)
}
