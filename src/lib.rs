//! Starshift: precession, proper motion and equinox/solstice calculations
//!
//! This crate moves catalogue positions between epochs (precession of the
//! reference frame plus the star's own motion) and finds the instants of the
//! equinoxes and solstices, following the methods of Meeus, "Astronomical
//! Algorithms".
//!
//! ```rust
//! use starshift::coordinates::angle::{dms_to_rad, hms_to_rad};
//! use starshift::coordinates::Equatorial;
//! use starshift::precession::Precessor;
//!
//! let polaris = Equatorial::new(hms_to_rad(2, 31, 48.704), dms_to_rad(false, 89, 15, 50.72));
//! let precessor = Precessor::new(2000.0, 2100.0);
//! let later = precessor.precess(&polaris);
//! assert!(later.dec > polaris.dec);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod framelib;
pub mod nutation;
pub mod planetlib;
pub mod precession;
pub mod proper_motion;
pub mod seasons;
pub mod solar;
pub mod time;

// Re-export commonly used types
pub use coordinates::{Ecliptic, Equatorial, OrbitalElements};
pub use planetlib::{EphemerisError, PlanetEphemeris, Vsop87};
pub use precession::{EclipticPrecessor, Precessor};
pub use seasons::{HighPrecision, LowPrecision, Season, SeasonEvent, SeasonFinder};
pub use time::Epoch;

/// Main error type for the starshift library
#[derive(Debug, Error)]
pub enum StarshiftError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error(
        "No convergence after {iterations} iterations (best estimate JDE {best_estimate}, residual {residual:e} rad)"
    )]
    ConvergenceError {
        best_estimate: f64,
        iterations: u32,
        residual: f64,
    },

    #[error("Ephemeris error: {0}")]
    EphemerisError(#[from] EphemerisError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

/// Result type for starshift operations
pub type Result<T> = std::result::Result<T, StarshiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StarshiftError::DomainError("distance must be positive".to_string());
        assert_eq!(err.to_string(), "Domain error: distance must be positive");

        let err: StarshiftError = EphemerisError::BodyUnavailable("Pluto").into();
        assert_eq!(err.to_string(), "Ephemeris error: No ephemeris data for Pluto");

        let err = StarshiftError::ConvergenceError {
            best_estimate: 2451545.0,
            iterations: 5,
            residual: 1e-3,
        };
        assert!(err.to_string().contains("5 iterations"));
    }
}
