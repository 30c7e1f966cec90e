//! Geocentric longitude of the Sun
//!
//! Derived from the heliocentric position of the Earth (Meeus, chapter 25,
//! higher accuracy method): the Sun lies opposite the Earth, the VSOP87
//! dynamical ecliptic is rotated onto the FK5 system, and for the apparent
//! longitude nutation and annual aberration are added.

use crate::constants::ASEC2RAD;
use crate::coordinates::angle::normalize_two_pi;
use crate::nutation::nutation_in_longitude;
use crate::planetlib::{Body, EphemerisError, PlanetEphemeris};
use std::f64::consts::PI;

/// Conversion from the VSOP87 dynamical equinox to FK5, arcseconds
const FK5_CORRECTION: f64 = -0.090_33;

/// Constant of aberration times the mean Earth distance, arcsecond·AU
const ABERRATION: f64 = -20.4898;

/// Geometric longitude of the Sun referred to the mean equinox of date
/// (FK5), in radians in [0, 2π)
pub fn true_longitude<E: PlanetEphemeris>(ephemeris: &E, jde: f64) -> Result<f64, EphemerisError> {
    let earth = ephemeris.heliocentric(Body::Earth, jde)?;
    Ok(normalize_two_pi(
        earth.longitude + PI + FK5_CORRECTION * ASEC2RAD,
    ))
}

/// Apparent longitude of the Sun referred to the true equinox of date, in
/// radians in [0, 2π)
pub fn apparent_longitude<E: PlanetEphemeris>(
    ephemeris: &E,
    jde: f64,
) -> Result<f64, EphemerisError> {
    let earth = ephemeris.heliocentric(Body::Earth, jde)?;
    let aberration = ABERRATION / earth.radius * ASEC2RAD;
    Ok(normalize_two_pi(
        earth.longitude + PI + FK5_CORRECTION * ASEC2RAD + nutation_in_longitude(jde) + aberration,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planetlib::{HeliocentricPosition, Vsop87};
    use approx::assert_abs_diff_eq;

    struct FixedEarth(HeliocentricPosition);

    impl PlanetEphemeris for FixedEarth {
        fn heliocentric(
            &self,
            body: Body,
            _jde: f64,
        ) -> Result<HeliocentricPosition, EphemerisError> {
            match body {
                Body::Earth => Ok(self.0),
                other => Err(EphemerisError::BodyUnavailable(other.name())),
            }
        }
    }

    #[test]
    fn test_sun_opposite_earth() {
        let earth = FixedEarth(HeliocentricPosition {
            longitude: 0.25,
            latitude: 0.0,
            radius: 1.0,
        });
        let lon = true_longitude(&earth, 2_451_545.0).unwrap();
        assert_abs_diff_eq!(lon, 0.25 + PI - 0.090_33 * ASEC2RAD, epsilon = 1e-15);
    }

    #[test]
    fn test_wraps_into_range() {
        let earth = FixedEarth(HeliocentricPosition {
            longitude: PI + 1e-9,
            latitude: 0.0,
            radius: 1.0,
        });
        let lon = apparent_longitude(&earth, 2_451_545.0).unwrap();
        assert!((0.0..2.0 * PI).contains(&lon));
    }

    #[test]
    fn test_1992_october_13() {
        // Meeus example 25.b: apparent longitude 199°54′21.818″
        let lon = apparent_longitude(&Vsop87, 2_448_908.5).unwrap();
        let expected = (199.0 + 54.0 / 60.0 + 21.818 / 3600.0_f64).to_radians();
        assert_abs_diff_eq!(lon, expected, epsilon = 0.5 * ASEC2RAD);
    }

    #[test]
    fn test_propagates_ephemeris_failure() {
        struct Broken;
        impl PlanetEphemeris for Broken {
            fn heliocentric(
                &self,
                _body: Body,
                _jde: f64,
            ) -> Result<HeliocentricPosition, EphemerisError> {
                Err(EphemerisError::DataUnavailable("offline".to_string()))
            }
        }
        assert_eq!(
            apparent_longitude(&Broken, 2_451_545.0),
            Err(EphemerisError::DataUnavailable("offline".to_string()))
        );
    }
}
