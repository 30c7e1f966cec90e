//! # Cartesian Coordinate Module
//!
//! Rectangular vectors used as the intermediate form for frame rotations and
//! for the space-motion correction of stellar positions.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: Toward the equinox (longitude/RA = 0, latitude/Dec = 0)
//! - **Y-axis**: Toward longitude/RA = 90°, latitude/Dec = 0
//! - **Z-axis**: Toward the pole of the frame
//!
//! The same convention serves both equatorial and ecliptic frames; only the
//! meaning of the fundamental plane changes.
//!
//! ## Examples
//!
//! ```rust
//! use starshift::coordinates::cartesian::Cartesian3;
//! use std::f64::consts::PI;
//!
//! let pole = Cartesian3::from_spherical(0.0, PI / 2.0, 1.0);
//! let (_, lat, r) = pole.to_spherical();
//! assert!((lat - PI / 2.0).abs() < 1e-15);
//! assert!((r - 1.0).abs() < 1e-15);
//! ```

use crate::coordinates::angle::normalize_two_pi;
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Three-dimensional Cartesian vector
///
/// Represents a direction (unit vector), a position scaled by distance, or a
/// velocity in distance units per year, depending on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian3 {
    /// X-component (toward the equinox)
    pub x: f64,
    /// Y-component (toward longitude 90°)
    pub y: f64,
    /// Z-component (toward the pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Creates a vector from spherical coordinates
    ///
    /// # Arguments
    ///
    /// * `lon` - Longitude or right ascension in radians
    /// * `lat` - Latitude or declination in radians
    /// * `distance` - Length of the resulting vector
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = distance * cos(lat) * cos(lon)`
    /// - `y = distance * cos(lat) * sin(lon)`
    /// - `z = distance * sin(lat)`
    pub fn from_spherical(lon: f64, lat: f64, distance: f64) -> Self {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        Cartesian3 {
            x: distance * cos_lat * cos_lon,
            y: distance * cos_lat * sin_lon,
            z: distance * sin_lat,
        }
    }

    /// Converts to spherical coordinates
    ///
    /// Returns `(lon, lat, distance)` with `lon` in [0, 2π) and `lat` in
    /// [−π/2, π/2]. The latitude comes from `atan2(z, ρ)` rather than
    /// `asin(z / r)` so it stays accurate within a few arcseconds of the pole.
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let distance = self.magnitude();

        if distance == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let rho = self.x.hypot(self.y);
        let lat = self.z.atan2(rho);
        let lon = if rho == 0.0 {
            0.0 // Arbitrary choice at poles
        } else {
            normalize_two_pi(self.y.atan2(self.x))
        };

        (lon, lat, distance)
    }

    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Angle between two vectors in radians, in [0, π]
    ///
    /// Uses the cross/dot `atan2` form, which keeps full precision for the
    /// sub-arcsecond separations that matter when comparing corrections.
    pub fn angular_distance(&self, other: &Cartesian3) -> f64 {
        let a = self.to_vector3();
        let b = other.to_vector3();
        let cross = a.cross(&b).norm();
        let dot = a.dot(&b);

        if cross == 0.0 && dot == 0.0 {
            return 0.0;
        }

        let angle = cross.atan2(dot);
        angle.clamp(0.0, PI)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}
