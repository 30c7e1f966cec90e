pub mod angle;
pub mod cartesian;
pub mod elements;

// Re-export the spherical coordinate systems from framelib
pub use crate::framelib::inertial::{Ecliptic, Equatorial};
pub use elements::OrbitalElements;

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_equatorial_conversions() {
        let ra_rad = 1.5;
        let dec_rad = 0.5;

        let coord = Equatorial::new(ra_rad, dec_rad);

        assert_eq!(coord.ra, ra_rad);
        assert_eq!(coord.dec, dec_rad);

        assert!((coord.ra_degrees() - ra_rad * 180.0 / PI).abs() < 1e-10);
        assert!((coord.dec_degrees() - dec_rad * 180.0 / PI).abs() < 1e-10);
        assert!((coord.ra_hours() - ra_rad * 12.0 / PI).abs() < 1e-10);
    }

    #[test]
    fn test_elements_from_degrees() {
        let elements = OrbitalElements::from_degrees(47.122, 151.4486, 45.7481);
        assert!((elements.inclination.to_degrees() - 47.122).abs() < 1e-12);
        assert!((elements.perihelion.to_degrees() - 151.4486).abs() < 1e-12);
        assert!((elements.node.to_degrees() - 45.7481).abs() < 1e-12);
    }
}
