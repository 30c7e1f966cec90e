use crate::coordinates::angle::normalize_two_pi;
use crate::coordinates::cartesian::Cartesian3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Shared behaviour of the spherical frames handled by the precession engine
pub trait InertialFrame: Sized {
    fn to_cartesian(&self) -> Cartesian3;
    fn from_cartesian(cart: Cartesian3) -> Self;

    fn angle_between(&self, other: &Self) -> f64 {
        self.to_cartesian().angular_distance(&other.to_cartesian())
    }
}

/// Equatorial coordinates (RA/Dec)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    pub ra: f64,  // Right ascension in radians
    pub dec: f64, // Declination in radians
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64) -> Self {
        Equatorial {
            ra: normalize_two_pi(ra),
            dec,
        }
    }

    /// Create a coordinate from a declination that may have been carried
    /// past a pole, as happens when rates are added over a span
    ///
    /// A declination beyond ±90° is reflected back over the pole and the
    /// right ascension turned by 12h. In-range input is left untouched.
    pub fn folded(ra: f64, dec: f64) -> Self {
        if dec.abs() <= FRAC_PI_2 {
            return Self::new(ra, dec);
        }
        let dec = dec.sin().atan2(dec.cos());
        if dec > FRAC_PI_2 {
            Self::new(ra + PI, PI - dec)
        } else if dec < -FRAC_PI_2 {
            Self::new(ra + PI, -PI - dec)
        } else {
            Self::new(ra, dec)
        }
    }

    /// Create a new Equatorial coordinate with values in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(ra_deg * PI / 180.0, dec_deg * PI / 180.0)
    }

    /// Get right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        self.ra * 180.0 / PI
    }

    /// Get right ascension in hours
    pub fn ra_hours(&self) -> f64 {
        self.ra * 12.0 / PI
    }

    /// Get declination in degrees
    pub fn dec_degrees(&self) -> f64 {
        self.dec * 180.0 / PI
    }

    /// Calculate angular distance to another Equatorial coordinate in radians
    pub fn angular_distance(&self, other: &Equatorial) -> f64 {
        self.angle_between(other)
    }
}

/// Ecliptic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    pub lon: f64, // Ecliptic longitude in radians
    pub lat: f64, // Ecliptic latitude in radians
}

impl Ecliptic {
    pub fn new(lon: f64, lat: f64) -> Self {
        Ecliptic {
            lon: normalize_two_pi(lon),
            lat,
        }
    }

    /// Create a new Ecliptic coordinate with values in degrees
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Self {
        Self::new(lon_deg * PI / 180.0, lat_deg * PI / 180.0)
    }

    /// Get longitude in degrees
    pub fn lon_degrees(&self) -> f64 {
        self.lon * 180.0 / PI
    }

    /// Get latitude in degrees
    pub fn lat_degrees(&self) -> f64 {
        self.lat * 180.0 / PI
    }
}

impl InertialFrame for Equatorial {
    fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.ra, self.dec, 1.0)
    }

    fn from_cartesian(cart: Cartesian3) -> Self {
        let (ra, dec, _) = cart.to_spherical();
        Equatorial { ra, dec }
    }
}

impl InertialFrame for Ecliptic {
    fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.lon, self.lat, 1.0)
    }

    fn from_cartesian(cart: Cartesian3) -> Self {
        let (lon, lat, _) = cart.to_spherical();
        Ecliptic { lon, lat }
    }
}
