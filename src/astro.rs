//! Fundamental astronomical angles for tidal harmonic arguments.
//!
//! Low-precision mean-element polynomials after Meeus, "Astronomical
//! Algorithms" (2nd ed., ch. 25/47) and Schureman, "Manual of Harmonic
//! Analysis and Prediction of Tides" (S.P. 98). Arc-minute accuracy near the
//! J2000 epoch, well below the phase error that matters for harmonic tide
//! prediction; confidence degrades for dates many centuries away, but the
//! formulas remain total and are evaluated for any finite instant.

use chrono::{DateTime, Utc};

/// Julian date of the reference epoch J2000.0 (2000-01-01 12:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Mean angular rates in degrees per mean solar hour, derived from the
/// linear polynomial terms below. The tabulated speed of every catalog
/// constituent is an integer combination of these six rates.
pub const T_RATE: f64 = 15.0;
pub const S_RATE: f64 = 0.549_016_519_8;
pub const H_RATE: f64 = 0.041_068_640_2;
pub const P_RATE: f64 = 0.004_641_813_5;
pub const N_RATE: f64 = -0.002_206_406_9;
pub const P1_RATE: f64 = 0.000_001_961_5;

/// The six fundamental angles at one instant, degrees in `[0, 360)`.
///
/// A value object computed fresh for every instant and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalAngles {
    /// Hour angle of the mean sun (180° at 00:00 UT).
    pub t: f64,
    /// Mean longitude of the Moon.
    pub s: f64,
    /// Mean longitude of the Sun.
    pub h: f64,
    /// Mean longitude of the lunar perigee.
    pub p: f64,
    /// Mean longitude of the Moon's ascending node.
    pub n: f64,
    /// Mean longitude of the solar perigee.
    pub p1: f64,
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Julian date of a UTC instant, including the fractional day.
pub fn julian_date(instant: DateTime<Utc>) -> f64 {
    let seconds =
        instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    seconds / 86_400.0 + 2_440_587.5
}

/// Compute the six fundamental angles at `instant`.
///
/// s, h, p, N and p′ are polynomials in Julian centuries from J2000.0; T is
/// the UT day fraction expressed as the mean sun's hour angle. Pure and
/// total: any finite instant yields finite, normalized angles.
pub fn angles(instant: DateTime<Utc>) -> AstronomicalAngles {
    let jd = julian_date(instant);
    let tc = (jd - J2000_JD) / 36_525.0;
    let tc2 = tc * tc;
    let tc3 = tc2 * tc;

    // Julian days begin at noon; shifting by half a day puts the fraction's
    // zero at 00:00 UT, where the mean sun sits at lower transit (180°).
    let day_frac = (jd + 0.5).rem_euclid(1.0);
    let t = normalize_degrees(day_frac * 360.0 + 180.0);

    let s = normalize_degrees(
        218.316_447_7 + 481_267.881_234_21 * tc - 0.001_578_6 * tc2 + tc3 / 538_841.0,
    );
    let h = normalize_degrees(280.466_46 + 36_000.769_83 * tc + 0.000_303_2 * tc2);
    let p = normalize_degrees(
        83.353_246_5 + 4_069.013_728_7 * tc - 0.010_320_0 * tc2 - tc3 / 80_053.0,
    );
    let n = normalize_degrees(
        125.044_52 - 1_934.136_261_97 * tc + 0.002_070_8 * tc2 + tc3 / 450_000.0,
    );
    let p1 = normalize_degrees(282.937_35 + 1.719_46 * tc + 0.000_46 * tc2);

    AstronomicalAngles { t, s, h, p, n, p1 }
}
