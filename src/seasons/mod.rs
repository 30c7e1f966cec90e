//! Equinoxes and solstices
//!
//! The instants at which the apparent geocentric longitude of the Sun is a
//! multiple of 90°. Two strategies are available behind [`SeasonFinder`]:
//!
//! - [`LowPrecision`]: the closed-form mean instant of Meeus chapter 27
//!   (tables 27.A and 27.B) corrected by the periodic terms of table 27.C.
//!   Good to about a minute for years 1951 to 2050.
//! - [`HighPrecision`]: starts from the low-precision instant and refines it
//!   against a planetary ephemeris until the solar longitude reaches the
//!   target to within [`SearchConfig::tolerance`].
//!
//! ```rust
//! use starshift::seasons::{LowPrecision, Season, SeasonFinder};
//!
//! let event = LowPrecision.find(Season::June, 1962).unwrap();
//! assert!((event.jde - 2437837.39245).abs() < 1e-5);
//! ```

use crate::constants::{DEG2RAD, J2000, JULIAN_CENTURY};
use crate::coordinates::angle::wrap_pi;
use crate::planetlib::PlanetEphemeris;
use crate::solar::apparent_longitude;
use crate::{Result, StarshiftError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Hard upper bound on refinement steps, whatever the configuration asks for
pub const MAX_ITERATIONS_LIMIT: u32 = 10;

/// Days per radian of solar longitude used to turn an angular miss into a
/// time step (Meeus, chapter 27)
const DAYS_PER_RADIAN: f64 = 58.0;

/// The four cardinal points of the Sun's apparent path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// March equinox, longitude 0°
    March,
    /// June solstice, longitude 90°
    June,
    /// September equinox, longitude 180°
    September,
    /// December solstice, longitude 270°
    December,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Season; 4] = [
        Season::March,
        Season::June,
        Season::September,
        Season::December,
    ];

    /// Apparent solar longitude at the event, in radians
    pub fn target_longitude(&self) -> f64 {
        match self {
            Season::March => 0.0,
            Season::June => FRAC_PI_2,
            Season::September => PI,
            Season::December => 3.0 * FRAC_PI_2,
        }
    }

    fn index(&self) -> usize {
        match self {
            Season::March => 0,
            Season::June => 1,
            Season::September => 2,
            Season::December => 3,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::March => "March equinox",
            Season::June => "June solstice",
            Season::September => "September equinox",
            Season::December => "December solstice",
        };
        f.write_str(name)
    }
}

/// Mean instants for years -1000 to +1000, in Y = year / 1000 (table 27.A)
#[rustfmt::skip]
static MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1_721_139.291_89, 365_242.137_40,  0.061_34,  0.001_11, -0.000_71],
    [1_721_233.254_01, 365_241.725_62, -0.053_23,  0.009_07,  0.000_25],
    [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97,  0.000_74],
    [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
];

/// Mean instants for years +1000 to +3000, in Y = (year - 2000) / 1000
/// (table 27.B)
#[rustfmt::skip]
static MEAN_FROM_1000: [[f64; 5]; 4] = [
    [2_451_623.809_84, 365_242.374_04,  0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03,  0.003_25,  0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75,  0.003_37,  0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23,  0.000_32],
];

/// Periodic terms A, B (degrees) and C (degrees per century) of table 27.C
#[rustfmt::skip]
static PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96,   1_934.136), (203.0, 337.23,  32_964.467),
    (199.0, 342.08,      20.186), (182.0,  27.85, 445_267.112),
    (156.0,  73.14,  45_036.886), (136.0, 171.52,  22_518.443),
    ( 77.0, 222.54,  65_928.934), ( 74.0, 296.72,   3_034.906),
    ( 70.0, 243.58,   9_037.513), ( 58.0, 119.81,  33_718.147),
    ( 52.0, 297.17,     150.678), ( 50.0,  21.02,   2_281.226),
    ( 45.0, 247.54,  29_929.562), ( 44.0, 325.15,  31_555.956),
    ( 29.0,  60.93,   4_443.417), ( 18.0, 155.12,  67_555.328),
    ( 17.0, 288.79,   4_562.452), ( 16.0, 198.04,  62_894.029),
    ( 14.0, 199.76,  31_436.921), ( 12.0,  95.39,  14_577.848),
    ( 12.0, 287.11,  31_931.756), ( 12.0, 320.81,  34_777.259),
    (  9.0, 227.73,   1_222.114), (  8.0,  15.45,  16_859.074),
];

/// Mean instant JDE0 of the event, before periodic corrections
fn mean_instant(season: Season, year: i32) -> f64 {
    let (coefficients, y) = if year < 1000 {
        (&MEAN_BEFORE_1000[season.index()], f64::from(year) / 1000.0)
    } else {
        (
            &MEAN_FROM_1000[season.index()],
            f64::from(year - 2000) / 1000.0,
        )
    };
    coefficients.iter().rev().fold(0.0, |acc, c| acc * y + c)
}

/// Instant of the event from the closed-form expressions, as a JDE
///
/// Years before 1000 use table 27.A and later years table 27.B, so there is
/// a small step at the boundary. Accuracy outside -1000 to +3000 is not
/// checked.
pub fn low_precision_estimate(season: Season, year: i32) -> f64 {
    let jde0 = mean_instant(season, year);
    let t = (jde0 - J2000) / JULIAN_CENTURY;
    let w = (35_999.373 * t - 2.47) * DEG2RAD;
    let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();

    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(a, b, c)| a * ((b + c * t) * DEG2RAD).cos())
        .sum();

    jde0 + 0.000_01 * s / delta_lambda
}

/// Stopping rule for the high-precision refinement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest accepted miss in solar longitude, radians
    pub tolerance: f64,
    /// Refinement steps allowed, at most [`MAX_ITERATIONS_LIMIT`]
    pub max_iterations: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            tolerance: 1e-7,
            max_iterations: 5,
        }
    }
}

impl SearchConfig {
    /// Sets the accepted miss in radians; it must be positive and finite
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        self.tolerance = tolerance;
        self.validated()
    }

    /// Sets the iteration cap, clamped to `1..=MAX_ITERATIONS_LIMIT`
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations.clamp(1, MAX_ITERATIONS_LIMIT);
        self
    }

    /// Reads a configuration from JSON; missing fields take their defaults
    ///
    /// ```rust
    /// use starshift::seasons::SearchConfig;
    ///
    /// let config = SearchConfig::from_json(r#"{ "max_iterations": 50 }"#).unwrap();
    /// assert_eq!(config.max_iterations, 10);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: SearchConfig = serde_json::from_str(json)?;
        raw.validated()
    }

    /// Checks the tolerance and clamps the iteration cap
    pub fn validated(self) -> Result<Self> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(StarshiftError::DomainError(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(self.with_max_iterations(self.max_iterations))
    }
}

/// How a [`SeasonEvent`] instant was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventState {
    /// Closed-form estimate only
    Estimated,
    /// Refined against an ephemeris; `iterations` longitude evaluations
    Converged { iterations: u32 },
}

/// An equinox or solstice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonEvent {
    pub season: Season,
    pub year: i32,
    /// Instant as a Julian Ephemeris Day
    pub jde: f64,
    pub state: EventState,
}

/// Refines the low-precision instant against `ephemeris`
///
/// Each step evaluates the apparent solar longitude and moves the instant by
/// 58·sin(target − λ) days.
///
/// # Errors
///
/// - [`StarshiftError::DomainError`] if the tolerance is not positive and
///   finite, before any ephemeris query.
/// - [`StarshiftError::EphemerisError`] if the ephemeris fails, unchanged.
/// - [`StarshiftError::ConvergenceError`] if the miss is still above the
///   tolerance after `config.max_iterations` evaluations. It carries the
///   last corrected instant and the miss measured before that correction.
pub fn high_precision_estimate<E: PlanetEphemeris>(
    season: Season,
    year: i32,
    ephemeris: &E,
    config: &SearchConfig,
) -> Result<SeasonEvent> {
    let config = config.validated()?;
    let target = season.target_longitude();
    let max_iterations = config.max_iterations;
    let mut jde = low_precision_estimate(season, year);
    let mut residual = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let longitude = apparent_longitude(ephemeris, jde)?;
        residual = wrap_pi(target - longitude);
        debug!(
            "{} {}: iteration {} at JDE {:.6}, miss {:e} rad",
            season, year, iteration, jde, residual
        );

        if residual.abs() < config.tolerance {
            return Ok(SeasonEvent {
                season,
                year,
                jde,
                state: EventState::Converged {
                    iterations: iteration,
                },
            });
        }
        jde += DAYS_PER_RADIAN * residual.sin();
    }

    warn!(
        "{} {} did not converge in {} iterations, miss {:e} rad",
        season, year, max_iterations, residual
    );
    Err(StarshiftError::ConvergenceError {
        best_estimate: jde,
        iterations: max_iterations,
        residual,
    })
}

/// A strategy for locating equinoxes and solstices
pub trait SeasonFinder {
    fn find(&self, season: Season, year: i32) -> Result<SeasonEvent>;
}

/// Closed-form estimate, no ephemeris needed
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPrecision;

impl SeasonFinder for LowPrecision {
    fn find(&self, season: Season, year: i32) -> Result<SeasonEvent> {
        Ok(SeasonEvent {
            season,
            year,
            jde: low_precision_estimate(season, year),
            state: EventState::Estimated,
        })
    }
}

/// Iterative refinement against a borrowed ephemeris
#[derive(Debug, Clone, Copy)]
pub struct HighPrecision<'e, E: PlanetEphemeris> {
    ephemeris: &'e E,
    config: SearchConfig,
}

impl<'e, E: PlanetEphemeris> HighPrecision<'e, E> {
    /// Refines against `ephemeris` with the default [`SearchConfig`]
    pub fn new(ephemeris: &'e E) -> Self {
        HighPrecision {
            ephemeris,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the stopping rule
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The stopping rule in use
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<E: PlanetEphemeris> SeasonFinder for HighPrecision<'_, E> {
    fn find(&self, season: Season, year: i32) -> Result<SeasonEvent> {
        high_precision_estimate(season, year, self.ephemeris, &self.config)
    }
}

/// All four events of `year` in calendar order
pub fn seasons_of_year<F: SeasonFinder>(finder: &F, year: i32) -> Result<Vec<SeasonEvent>> {
    Season::ALL
        .iter()
        .map(|&season| finder.find(season, year))
        .collect()
}
