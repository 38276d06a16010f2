//! Transform configuration and astronomical constants (internal).
//!
//! Policy
//! - Constants are fixed; only the source equinox and the precession switch
//!   are configurable.

/// Equinox of the IAU boundary definitions (Delporte 1930, CDS VI/49).
pub const B1875: f64 = 1875.0;
/// Reference equinox of the FK4 → FK5 matrix.
pub(crate) const B1950: f64 = 1950.0;

/// Julian date of J2000.0.
pub(crate) const JD_J2000: f64 = 2_451_545.0;
/// Julian date of B1900.0 and the tropical year length used for Besselian epochs.
pub(crate) const JD_B1900: f64 = 2_415_020.313_52;
pub(crate) const TROPICAL_YEAR_DAYS: f64 = 365.242_198_781;
pub(crate) const JULIAN_YEAR_DAYS: f64 = 365.25;
pub(crate) const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

/// Constant of aberration, degrees.
pub(crate) const ABERRATION_DEG: f64 = 0.005_693_2;

pub(crate) const DEG_PER_HOUR: f64 = 15.0;
pub(crate) const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Whether the frame transform should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precession {
    Enabled,
    Disabled,
}

/// Frame transform settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformCfg {
    pub precession: Precession,
    /// Besselian equinox of the input coordinates.
    pub equinox: f64,
}

impl Default for TransformCfg {
    fn default() -> Self {
        Self {
            precession: Precession::Enabled,
            equinox: B1875,
        }
    }
}

/// Besselian epoch → Julian date.
#[inline]
pub(crate) fn besselian_to_jd(epoch: f64) -> f64 {
    JD_B1900 + (epoch - 1900.0) * TROPICAL_YEAR_DAYS
}

/// Julian date → Julian epoch (years).
#[inline]
pub(crate) fn jd_to_julian_year(jd: f64) -> f64 {
    2000.0 + (jd - JD_J2000) / JULIAN_YEAR_DAYS
}
