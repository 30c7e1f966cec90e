//! Proper motion of stars
//!
//! The linear correction adds the catalogue proper motions to the angular
//! coordinates, which is adequate for a few centuries. Over longer spans the
//! star's straight-line motion through space must be followed instead: the
//! 3-D correction builds the position vector from the distance, gives it a
//! constant velocity from the proper motions and the radial velocity, and
//! re-derives the direction at the target epoch (Meeus, chapter 21).
//!
//! Proper motions are radians per year; distance and radial rate may use any
//! length unit as long as the rate is that unit per year.

use crate::coordinates::cartesian::Cartesian3;
use crate::coordinates::Equatorial;
use crate::{Result, StarshiftError};

/// Adds proper motion linearly over `years`, folding a declination carried
/// past a pole back into range
pub fn linear_correction(eq: &Equatorial, mu_ra: f64, mu_dec: f64, years: f64) -> Equatorial {
    Equatorial::folded(eq.ra + mu_ra * years, eq.dec + mu_dec * years)
}

/// Moves a star along its space velocity from `epoch_from` to `epoch_to`
/// (Julian years), returning the new direction
///
/// The result refers to the same equator and equinox as the input; combine it
/// with a [`crate::precession::Precessor`] to change frames as well.
///
/// # Errors
///
/// [`StarshiftError::DomainError`] if the distance is not positive and
/// finite, or if the epochs or rates are not finite.
pub fn space_motion_3d(
    eq: &Equatorial,
    epoch_from: f64,
    epoch_to: f64,
    distance: f64,
    radial_rate: f64,
    mu_ra: f64,
    mu_dec: f64,
) -> Result<Equatorial> {
    space_motion_3d_with_distance(
        eq,
        epoch_from,
        epoch_to,
        distance,
        radial_rate,
        mu_ra,
        mu_dec,
    )
    .map(|(moved, _)| moved)
}

/// As [`space_motion_3d`], also returning the distance at `epoch_to`
pub fn space_motion_3d_with_distance(
    eq: &Equatorial,
    epoch_from: f64,
    epoch_to: f64,
    distance: f64,
    radial_rate: f64,
    mu_ra: f64,
    mu_dec: f64,
) -> Result<(Equatorial, f64)> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(StarshiftError::DomainError(format!(
            "distance must be positive and finite, got {distance}"
        )));
    }
    if !(epoch_from.is_finite() && epoch_to.is_finite()) {
        return Err(StarshiftError::DomainError(format!(
            "epochs must be finite, got {epoch_from} and {epoch_to}"
        )));
    }
    if !(radial_rate.is_finite() && mu_ra.is_finite() && mu_dec.is_finite()) {
        return Err(StarshiftError::DomainError(
            "proper motion and radial rate must be finite".to_string(),
        ));
    }

    let position = Cartesian3::from_spherical(eq.ra, eq.dec, distance);
    let (sin_ra, cos_ra) = eq.ra.sin_cos();
    let radial = radial_rate / distance;

    // Time derivative of r·(cosδ cosα, cosδ sinα, sinδ)
    let velocity = Cartesian3::new(
        position.x * radial - position.z * mu_dec * cos_ra - position.y * mu_ra,
        position.y * radial - position.z * mu_dec * sin_ra + position.x * mu_ra,
        position.z * radial + distance * mu_dec * eq.dec.cos(),
    );

    let moved = position + velocity * (epoch_to - epoch_from);
    let (ra, dec, r) = moved.to_spherical();
    Ok((Equatorial { ra, dec }, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::angle::{arcsec_to_rad, dms_to_rad, hms_to_rad, sec_of_time_to_rad};
    use approx::assert_abs_diff_eq;

    // Sirius, with distance in parsecs and radial velocity in parsecs per year
    fn sirius() -> (Equatorial, f64, f64, f64, f64) {
        (
            Equatorial::new(hms_to_rad(6, 45, 8.871), dms_to_rad(true, 16, 42, 57.99)),
            2.64,
            -7.6 / 977_792.0,
            sec_of_time_to_rad(-0.03847),
            arcsec_to_rad(-1.2053),
        )
    }

    #[test]
    fn test_sirius_space_motion() {
        let (eq, r, rate, mu_ra, mu_dec) = sirius();
        let expected = [
            (1000.0, hms_to_rad(6, 45, 47.1610), dms_to_rad(true, 16, 22, 56.0254)),
            (0.0, hms_to_rad(6, 46, 25.0939), dms_to_rad(true, 16, 3, 0.7672)),
            (-10000.0, hms_to_rad(6, 52, 25.7221), dms_to_rad(true, 12, 50, 6.7010)),
        ];
        for (epoch, ra, dec) in expected {
            let moved = space_motion_3d(&eq, 2000.0, epoch, r, rate, mu_ra, mu_dec).unwrap();
            assert_abs_diff_eq!(moved.ra, ra, epsilon = sec_of_time_to_rad(0.001));
            assert_abs_diff_eq!(moved.dec, dec, epsilon = arcsec_to_rad(0.001));
        }
    }

    #[test]
    fn test_distance_follows_radial_velocity() {
        let (eq, r, rate, mu_ra, mu_dec) = sirius();
        let (_, later) =
            space_motion_3d_with_distance(&eq, 2000.0, 0.0, r, rate, mu_ra, mu_dec).unwrap();
        // Approaching now, so it was further away in the past
        assert!(later > r);
        assert_abs_diff_eq!(later, 2.65576, epsilon = 1e-5);
    }

    #[test]
    fn test_rejects_bad_distance() {
        let (eq, _, rate, mu_ra, mu_dec) = sirius();
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = space_motion_3d(&eq, 2000.0, 1000.0, r, rate, mu_ra, mu_dec);
            assert!(matches!(result, Err(StarshiftError::DomainError(_))));
        }
        let result = space_motion_3d(&eq, 2000.0, f64::NAN, 2.64, rate, mu_ra, mu_dec);
        assert!(matches!(result, Err(StarshiftError::DomainError(_))));
    }

    #[test]
    fn test_zero_span_is_identity() {
        let (eq, r, rate, mu_ra, mu_dec) = sirius();
        let same = space_motion_3d(&eq, 1500.0, 1500.0, r, rate, mu_ra, mu_dec).unwrap();
        assert!(same.angular_distance(&eq) < 1e-12);
        assert_eq!(linear_correction(&eq, mu_ra, mu_dec, 0.0), eq);
    }

    #[test]
    fn test_linear_correction_near_pole_stays_in_range() {
        let eq = Equatorial::new(1.0, 89.99_f64.to_radians());
        let moved = linear_correction(&eq, 0.0, 1e-5, 30.0);
        assert!(moved.dec <= std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(
            moved.dec,
            std::f64::consts::PI - (eq.dec + 3e-4),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(moved.ra, 1.0 + std::f64::consts::PI, epsilon = 1e-15);
    }

    #[test]
    fn test_linear_and_3d_agree_for_short_spans_and_diverge_later() {
        let (eq, r, rate, mu_ra, mu_dec) = sirius();
        let divergence = |years: f64| {
            let linear = linear_correction(&eq, mu_ra, mu_dec, years);
            let full = space_motion_3d(&eq, 2000.0, 2000.0 + years, r, rate, mu_ra, mu_dec).unwrap();
            linear.angular_distance(&full)
        };

        assert!(divergence(1.0) < arcsec_to_rad(1e-5));

        let mut previous = 0.0;
        for years in [10.0, 100.0, 1000.0, 4000.0, 12000.0] {
            let d = divergence(-years);
            assert!(d > previous, "divergence at {years} years did not grow");
            previous = d;
        }
        assert!(previous > arcsec_to_rad(60.0));
    }
}
