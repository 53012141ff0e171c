//! Nodal corrections for the 18.6-year lunar node cycle.
//!
//! Closed-form trigonometric series after Schureman (S.P. 98, table 14) for
//! the node factor `f` (amplitude) and nodal angle `u` (phase, degrees), as
//! functions of the node longitude N and, for L2 and M1, the lunar perigee p.
//! Shallow-water compounds inherit powers and products of their parents'
//! corrections. Purely solar constituents, and any symbol without a modeled
//! formula, get the identity correction {f: 1, u: 0}; for minor constituents
//! this is a documented approximation, not an error.

use crate::astro::AstronomicalAngles;

/// Amplitude factor and phase correction for one constituent at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodalFactors {
    /// Amplitude factor, dimensionless, near 1.
    pub f: f64,
    /// Phase correction in degrees.
    pub u: f64,
}

impl NodalFactors {
    /// The identity correction applied to solar and unmodeled constituents.
    pub const IDENTITY: NodalFactors = NodalFactors { f: 1.0, u: 0.0 };

    fn pow(self, k: u32) -> NodalFactors {
        NodalFactors {
            f: self.f.powi(k as i32),
            u: self.u * f64::from(k),
        }
    }

    fn product(self, other: NodalFactors) -> NodalFactors {
        NodalFactors {
            f: self.f * other.f,
            u: self.u + other.u,
        }
    }
}

/// Correction for the lunar semidiurnal group (M2, N2, 2N2, MU2, NU2).
fn lunar_semidiurnal(n: f64) -> NodalFactors {
    NodalFactors {
        f: 1.0004 - 0.0373 * n.cos() + 0.0002 * (2.0 * n).cos(),
        u: -2.14 * n.sin(),
    }
}

fn k1(n: f64) -> NodalFactors {
    NodalFactors {
        f: 1.0060 + 0.1150 * n.cos() - 0.0088 * (2.0 * n).cos() + 0.0006 * (3.0 * n).cos(),
        u: -8.86 * n.sin() + 0.68 * (2.0 * n).sin() - 0.07 * (3.0 * n).sin(),
    }
}

fn k2(n: f64) -> NodalFactors {
    NodalFactors {
        f: 1.0241 + 0.2863 * n.cos() + 0.0083 * (2.0 * n).cos() - 0.0015 * (3.0 * n).cos(),
        u: -17.74 * n.sin() + 0.68 * (2.0 * n).sin() - 0.04 * (3.0 * n).sin(),
    }
}

fn o1(n: f64) -> NodalFactors {
    NodalFactors {
        f: 1.0089 + 0.1871 * n.cos() - 0.0147 * (2.0 * n).cos() + 0.0014 * (3.0 * n).cos(),
        u: 10.80 * n.sin() - 1.34 * (2.0 * n).sin() + 0.19 * (3.0 * n).sin(),
    }
}

fn j1(n: f64) -> NodalFactors {
    NodalFactors {
        f: 1.0129 + 0.1676 * n.cos() - 0.0170 * (2.0 * n).cos() + 0.0016 * (3.0 * n).cos(),
        u: -12.94 * n.sin() + 1.34 * (2.0 * n).sin() - 0.19 * (3.0 * n).sin(),
    }
}

fn mf(n: f64) -> NodalFactors {
    NodalFactors {
        f: 1.0429 + 0.4135 * n.cos() - 0.0040 * (2.0 * n).cos(),
        u: -23.74 * n.sin() + 2.68 * (2.0 * n).sin() - 0.38 * (3.0 * n).sin(),
    }
}

fn mm(n: f64) -> NodalFactors {
    NodalFactors {
        f: 1.0000 - 0.1300 * n.cos() + 0.0013 * (2.0 * n).cos(),
        u: 0.0,
    }
}

/// L2 combines the node with the perigee; Schureman folds both into one
/// complex factor, recovered here as magnitude and angle.
fn l2(n: f64, p: f64) -> NodalFactors {
    let re = 1.0
        - 0.2505 * (2.0 * p).cos()
        - 0.1102 * (2.0 * p - n).cos()
        - 0.0156 * (2.0 * p - 2.0 * n).cos()
        - 0.0370 * n.cos();
    let im = -0.2505 * (2.0 * p).sin()
        - 0.1102 * (2.0 * p - n).sin()
        - 0.0156 * (2.0 * p - 2.0 * n).sin()
        - 0.0370 * n.sin();
    NodalFactors {
        f: re.hypot(im),
        u: im.atan2(re).to_degrees(),
    }
}

/// M1 likewise depends on both node and perigee.
fn m1(n: f64, p: f64) -> NodalFactors {
    let re = 2.0 * p.cos() + 0.4 * (p - n).cos();
    let im = p.sin() + 0.2 * (p - n).sin();
    NodalFactors {
        f: re.hypot(im),
        u: im.atan2(re).to_degrees(),
    }
}

/// Node factor and nodal angle for `symbol` at the given astronomical angles.
///
/// Dispatch is a closed match on the constituent symbol. Unknown symbols and
/// the purely solar constituents fall through to [`NodalFactors::IDENTITY`].
pub fn factors(symbol: &str, angles: &AstronomicalAngles) -> NodalFactors {
    let n = angles.n.to_radians();
    let p = angles.p.to_radians();
    match symbol {
        "M2" | "N2" | "2N2" | "MU2" | "NU2" => lunar_semidiurnal(n),
        "K2" => k2(n),
        "K1" => k1(n),
        "O1" | "Q1" => o1(n),
        "J1" => j1(n),
        "M1" => m1(n, p),
        "L2" => l2(n, p),
        "Mf" => mf(n),
        "Mm" => mm(n),
        "M4" | "MN4" => lunar_semidiurnal(n).pow(2),
        "M6" => lunar_semidiurnal(n).pow(3),
        "M8" => lunar_semidiurnal(n).pow(4),
        "MS4" => lunar_semidiurnal(n),
        "MK3" => lunar_semidiurnal(n).product(k1(n)),
        // S2, S4, T2, P1, Sa, Ssa and anything unmodeled
        _ => NodalFactors::IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles_with(n: f64, p: f64) -> AstronomicalAngles {
        AstronomicalAngles {
            t: 0.0,
            s: 0.0,
            h: 0.0,
            p,
            n,
            p1: 0.0,
        }
    }

    const TOL: f64 = 1e-9;

    #[test]
    fn solar_constituents_are_identity() {
        let a = angles_with(123.4, 56.7);
        for sym in ["S2", "S4", "T2", "P1", "Sa", "Ssa"] {
            assert_eq!(factors(sym, &a), NodalFactors::IDENTITY, "{}", sym);
        }
    }

    #[test]
    fn unknown_symbol_falls_back_to_identity() {
        let a = angles_with(42.0, 0.0);
        assert_eq!(factors("XYZ99", &a), NodalFactors::IDENTITY);
    }

    #[test]
    fn corrections_vanish_at_zero_node() {
        // With N = 0 every u series is a sum of sines of zero.
        let a = angles_with(0.0, 0.0);
        for sym in ["M2", "K1", "K2", "O1", "J1", "Mf", "M4", "MK3"] {
            assert!(factors(sym, &a).u.abs() < TOL, "{}", sym);
        }
        // f collapses to the sum of the series coefficients.
        assert!((factors("M2", &a).f - 0.9633).abs() < TOL);
        assert!((factors("K1", &a).f - 1.1128).abs() < TOL);
        assert!((factors("O1", &a).f - 1.1827).abs() < TOL);
        assert!((factors("Mf", &a).f - 1.4524).abs() < TOL);
    }

    #[test]
    fn m2_factor_stays_in_published_band() {
        // f(M2) swings roughly ±3.7% over the nodal cycle.
        for deg in 0..360 {
            let a = angles_with(f64::from(deg), 0.0);
            let nf = factors("M2", &a);
            assert!((0.96..=1.04).contains(&nf.f), "f={} at N={}", nf.f, deg);
            assert!(nf.u.abs() <= 2.15, "u={} at N={}", nf.u, deg);
        }
    }

    #[test]
    fn shallow_water_compounds_follow_parents() {
        let a = angles_with(77.0, 31.0);
        let m2 = factors("M2", &a);
        let k1 = factors("K1", &a);

        let m4 = factors("M4", &a);
        assert!((m4.f - m2.f * m2.f).abs() < TOL);
        assert!((m4.u - 2.0 * m2.u).abs() < TOL);

        let m6 = factors("M6", &a);
        assert!((m6.f - m2.f.powi(3)).abs() < TOL);
        assert!((m6.u - 3.0 * m2.u).abs() < TOL);

        let mk3 = factors("MK3", &a);
        assert!((mk3.f - m2.f * k1.f).abs() < TOL);
        assert!((mk3.u - (m2.u + k1.u)).abs() < TOL);
    }

    #[test]
    fn perigee_dependent_factors_at_zero_angles() {
        let a = angles_with(0.0, 0.0);
        // L2: 1 − 0.2505 − 0.1102 − 0.0156 − 0.037, no imaginary part.
        let l2 = factors("L2", &a);
        assert!((l2.f - 0.5867).abs() < TOL);
        assert!(l2.u.abs() < TOL);
        // M1: 2 + 0.4, no imaginary part.
        let m1 = factors("M1", &a);
        assert!((m1.f - 2.4).abs() < TOL);
        assert!(m1.u.abs() < TOL);
    }
}
