//! Nutation in longitude
//!
//! IAU 1980 theory as tabulated by Meeus (table 22.A). Only the longitude
//! component is evaluated; it is what the apparent solar longitude needs.

use crate::constants::{ASEC2RAD, DEG2RAD};
use crate::time::j2000_century;

/// One periodic term: integer multiples of (D, M, M′, F, Ω) and the sine
/// coefficient `a + b·T` in units of 0.0001″
#[derive(Debug, Clone, Copy)]
struct NutationTerm {
    multiples: [i8; 5],
    a: f64,
    b: f64,
}

impl NutationTerm {
    const fn new(multiples: [i8; 5], a: f64, b: f64) -> Self {
        NutationTerm { multiples, a, b }
    }
}

#[rustfmt::skip]
static TERMS: [NutationTerm; 63] = [
    NutationTerm::new([0, 0, 0, 0, 1], -171996.0, -174.2),
    NutationTerm::new([-2, 0, 0, 2, 2], -13187.0, -1.6),
    NutationTerm::new([0, 0, 0, 2, 2], -2274.0, -0.2),
    NutationTerm::new([0, 0, 0, 0, 2], 2062.0, 0.2),
    NutationTerm::new([0, 1, 0, 0, 0], 1426.0, -3.4),
    NutationTerm::new([0, 0, 1, 0, 0], 712.0, 0.1),
    NutationTerm::new([-2, 1, 0, 2, 2], -517.0, 1.2),
    NutationTerm::new([0, 0, 0, 2, 1], -386.0, 0.0),
    NutationTerm::new([0, 0, 1, 2, 2], -301.0, 0.0),
    NutationTerm::new([-2, -1, 0, 2, 2], 217.0, -0.5),
    NutationTerm::new([-2, 0, 1, 0, 0], -158.0, 0.0),
    NutationTerm::new([-2, 0, 0, 2, 1], 129.0, 0.1),
    NutationTerm::new([0, 0, -1, 2, 2], 123.0, 0.0),
    NutationTerm::new([2, 0, 0, 0, 0], 63.0, 0.0),
    NutationTerm::new([0, 0, 1, 0, 1], 63.0, 0.1),
    NutationTerm::new([2, 0, -1, 2, 2], -59.0, 0.0),
    NutationTerm::new([0, 0, -1, 0, 1], -58.0, -0.1),
    NutationTerm::new([0, 0, 1, 2, 1], -51.0, 0.0),
    NutationTerm::new([-2, 0, 2, 0, 0], 48.0, 0.0),
    NutationTerm::new([0, 0, -2, 2, 1], 46.0, 0.0),
    NutationTerm::new([2, 0, 0, 2, 2], -38.0, 0.0),
    NutationTerm::new([0, 0, 2, 2, 2], -31.0, 0.0),
    NutationTerm::new([0, 0, 2, 0, 0], 29.0, 0.0),
    NutationTerm::new([-2, 0, 1, 2, 2], 29.0, 0.0),
    NutationTerm::new([0, 0, 0, 2, 0], 26.0, 0.0),
    NutationTerm::new([-2, 0, 0, 2, 0], -22.0, 0.0),
    NutationTerm::new([0, 0, -1, 2, 1], 21.0, 0.0),
    NutationTerm::new([0, 2, 0, 0, 0], 17.0, -0.1),
    NutationTerm::new([2, 0, -1, 0, 1], 16.0, 0.0),
    NutationTerm::new([-2, 2, 0, 2, 2], -16.0, 0.1),
    NutationTerm::new([0, 1, 0, 0, 1], -15.0, 0.0),
    NutationTerm::new([-2, 0, 1, 0, 1], -13.0, 0.0),
    NutationTerm::new([0, -1, 0, 0, 1], -12.0, 0.0),
    NutationTerm::new([0, 0, 2, -2, 0], 11.0, 0.0),
    NutationTerm::new([2, 0, -1, 2, 1], -10.0, 0.0),
    NutationTerm::new([2, 0, 1, 2, 2], -8.0, 0.0),
    NutationTerm::new([0, 1, 0, 2, 2], 7.0, 0.0),
    NutationTerm::new([-2, 1, 1, 0, 0], -7.0, 0.0),
    NutationTerm::new([0, -1, 0, 2, 2], -7.0, 0.0),
    NutationTerm::new([2, 0, 0, 2, 1], -7.0, 0.0),
    NutationTerm::new([2, 0, 1, 0, 0], 6.0, 0.0),
    NutationTerm::new([-2, 0, 2, 2, 2], 6.0, 0.0),
    NutationTerm::new([-2, 0, 1, 2, 1], 6.0, 0.0),
    NutationTerm::new([2, 0, -2, 0, 1], -6.0, 0.0),
    NutationTerm::new([2, 0, 0, 0, 1], -6.0, 0.0),
    NutationTerm::new([0, -1, 1, 0, 0], 5.0, 0.0),
    NutationTerm::new([-2, -1, 0, 2, 1], -5.0, 0.0),
    NutationTerm::new([-2, 0, 0, 0, 1], -5.0, 0.0),
    NutationTerm::new([0, 0, 2, 2, 1], -5.0, 0.0),
    NutationTerm::new([-2, 0, 2, 0, 1], 4.0, 0.0),
    NutationTerm::new([-2, 1, 0, 2, 1], 4.0, 0.0),
    NutationTerm::new([0, 0, 1, -2, 0], 4.0, 0.0),
    NutationTerm::new([-1, 0, 1, 0, 0], -4.0, 0.0),
    NutationTerm::new([-2, 1, 0, 0, 0], -4.0, 0.0),
    NutationTerm::new([1, 0, 0, 0, 0], -4.0, 0.0),
    NutationTerm::new([0, 0, 1, 2, 0], 3.0, 0.0),
    NutationTerm::new([0, 0, -2, 2, 2], -3.0, 0.0),
    NutationTerm::new([-1, -1, 1, 0, 0], -3.0, 0.0),
    NutationTerm::new([0, 1, 1, 0, 0], -3.0, 0.0),
    NutationTerm::new([0, -1, 1, 2, 2], -3.0, 0.0),
    NutationTerm::new([2, -1, -1, 2, 2], -3.0, 0.0),
    NutationTerm::new([0, 0, 3, 2, 2], -3.0, 0.0),
    NutationTerm::new([2, -1, 0, 2, 2], -3.0, 0.0),
];

/// Fundamental arguments D, M, M′, F and Ω in radians for T Julian
/// centuries from J2000.0
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        297.85036 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0,
        357.52772 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0,
        134.96298 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0,
        93.27191 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0,
        125.04452 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0,
    ]
    .map(|deg| (deg % 360.0) * DEG2RAD)
}

/// Nutation in longitude Δψ at the given Julian Ephemeris Day, in radians
pub fn nutation_in_longitude(jde: f64) -> f64 {
    let t = j2000_century(jde);
    let args = fundamental_arguments(t);

    let sum: f64 = TERMS
        .iter()
        .map(|term| {
            let argument: f64 = term
                .multiples
                .iter()
                .zip(args.iter())
                .map(|(&k, &x)| f64::from(k) * x)
                .sum();
            (term.a + term.b * t) * argument.sin()
        })
        .sum();

    sum * 1e-4 * ASEC2RAD
}
