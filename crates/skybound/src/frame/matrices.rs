//! Rotation matrices and E-terms for the FK4 → ICRS chain.
//!
//! Conventions
//! - `rot_x/rot_y/rot_z` rotate the coordinate frame (passive), i.e.
//!   `rot_z(a) = [[c, s, 0], [-s, c, 0], [0, 0, 1]]`.
//! - All matrices act on column unit vectors `(cosδ cosα, cosδ sinα, sinδ)`.
//!
//! References
//! - Newcomb precession as tabulated in Lieske (1979) for Besselian epochs.
//! - Standish (1982) B1950 → J2000 matrix with the FK4 equinox-motion term.
//! - FK5 → ICRS frame bias (Mignard & Froeschlé 2000).

use nalgebra::{Matrix3, Vector3};

use super::cfg::{
    besselian_to_jd, jd_to_julian_year, ABERRATION_DEG, ARCSEC_TO_RAD, JULIAN_CENTURY_DAYS,
    JD_J2000,
};

#[inline]
pub(crate) fn rot_x(a: f64) -> Matrix3<f64> {
    let (s, c) = a.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

#[inline]
pub(crate) fn rot_y(a: f64) -> Matrix3<f64> {
    let (s, c) = a.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

#[inline]
pub(crate) fn rot_z(a: f64) -> Matrix3<f64> {
    let (s, c) = a.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Newcomb precession between two Besselian equinoxes.
pub fn precession_besselian(from: f64, to: f64) -> Matrix3<f64> {
    // tropical millennia since B1850
    let t1 = (from - 1850.0) / 1000.0;
    let dt = (to - from) / 1000.0;
    let base = 23035.545 + 139.720 * t1 + 0.060 * t1 * t1;
    let zeta = base * dt + (30.240 - 0.27 * t1) * dt * dt + 17.995 * dt * dt * dt;
    let z = base * dt + (109.480 + 0.39 * t1) * dt * dt + 18.325 * dt * dt * dt;
    let theta = (20051.12 - 85.29 * t1 - 0.37 * t1 * t1) * dt
        + (-42.65 - 0.37 * t1) * dt * dt
        - 41.8 * dt * dt * dt;
    rot_z(-z * ARCSEC_TO_RAD) * rot_y(theta * ARCSEC_TO_RAD) * rot_z(-zeta * ARCSEC_TO_RAD)
}

#[rustfmt::skip]
const B1950_TO_J2000: [f64; 9] = [
    0.999_925_679_495_687_7, -0.011_181_483_220_466_2, -0.004_859_003_815_359_2,
    0.011_181_483_239_171_7,  0.999_937_484_893_313_5, -0.000_027_162_594_714_2,
    0.004_859_003_772_314_3, -0.000_027_170_293_744_0,  0.999_988_194_602_374_2,
];

/// Rotation of the FK4 system, in units of 1e-6 per Julian century.
#[rustfmt::skip]
const FK4_CORRECTION: [f64; 9] = [
    -0.002_645_526_2, -1.153_991_868_9,  2.111_134_619_0,
     1.154_062_816_1, -0.012_904_299_7,  0.023_602_147_8,
    -2.111_297_904_8, -0.005_602_444_8,  0.010_258_773_4,
];

/// FK4 (B1950, E-terms removed) → FK5 (J2000) for a given observation epoch.
pub fn fk4_b1950_to_fk5(obs_besselian: f64) -> Matrix3<f64> {
    let t = (jd_to_julian_year(besselian_to_jd(obs_besselian)) - 1950.0) / 100.0;
    let m = Matrix3::from_row_slice(&B1950_TO_J2000);
    let corr = Matrix3::from_row_slice(&FK4_CORRECTION);
    m + corr * (1e-6 * t)
}

/// FK5 (J2000) → ICRS frame bias.
pub fn fk5_to_icrs() -> Matrix3<f64> {
    let mas = ARCSEC_TO_RAD / 1000.0;
    let eta0 = -19.9 * mas;
    let xi0 = 9.1 * mas;
    let da0 = -22.9 * mas;
    (rot_x(-eta0) * rot_y(xi0) * rot_z(da0)).transpose()
}

/// E-terms of aberration vector for a Besselian equinox.
pub fn eterms(equinox_besselian: f64) -> Vector3<f64> {
    let t = (besselian_to_jd(equinox_besselian) - JD_J2000) / JULIAN_CENTURY_DAYS;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let g = (102.937_35 + 1.719_46 * t + 0.000_46 * t * t).to_radians();
    let obliquity =
        (84381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t) * ARCSEC_TO_RAD;
    let ek = e * ABERRATION_DEG.to_radians();
    Vector3::new(
        ek * g.sin(),
        -ek * g.cos() * obliquity.cos(),
        -ek * g.cos() * obliquity.sin(),
    )
}

/// Strip the E-terms from a unit vector and renormalize.
#[inline]
pub(crate) fn remove_eterms(r: Vector3<f64>, a: &Vector3<f64>) -> Vector3<f64> {
    let v = r - a + r * a.dot(&r);
    v.normalize()
}
