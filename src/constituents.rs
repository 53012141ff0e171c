//! # Tidal Constituent Catalog
//!
//! The global, read-only catalog of harmonic constituents: for each symbol,
//! its Doodson coefficients, equilibrium-argument offset, angular speed, and
//! classification. Station records carry only `(symbol, amplitude, phase)`
//! triples and are resolved against this catalog at prediction time.
//!
//! ## Doodson coefficients
//!
//! Each constituent's frequency is an integer combination of the six
//! fundamental astronomical rates. The coefficients here are expressed
//! directly against the angle vector `{T, s, h, p, N, p′}` of
//! [`crate::astro::AstronomicalAngles`], so the principal lunar semidiurnal
//! constituent M2 reads `[2, -2, 2, 0, 0, 0]`:
//!
//! ```text
//! V0(M2) = 2T − 2s + 2h
//! ```
//!
//! Constant ±90°/180° terms of the equilibrium argument that a coefficient
//! tuple cannot express (K1, O1, L2, ...) are carried in `phase_offset`.
//!
//! Speeds are the conventionally published values in degrees per mean solar
//! hour; each equals the dot product of the coefficients with the rates in
//! [`crate::astro`] (verified in tests), so phase advances consistently with
//! the ephemeris over arbitrarily long spans.

/// Broad constituent classification.
///
/// The set is closed and small; nodal-correction dispatch keys on the
/// individual symbol, while the family is carried for grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Roughly twice-daily constituents (M2, S2, ...).
    Semidiurnal,
    /// Roughly once-daily constituents (K1, O1, ...).
    Diurnal,
    /// Fortnightly to annual constituents (Mf, Sa, ...).
    LongPeriod,
    /// Compound and overtide constituents generated in shallow water.
    ShallowWater,
}

/// Immutable definition of one harmonic constituent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstituentDefinition {
    /// Conventional symbol, e.g. "M2".
    pub symbol: &'static str,
    /// Descriptive name.
    pub name: &'static str,
    /// Broad classification.
    pub family: Family,
    /// Coefficients against `{T, s, h, p, N, p′}`.
    pub doodson: [i8; 6],
    /// Constant term of the equilibrium argument in degrees.
    pub phase_offset: f64,
    /// Angular speed in degrees per mean solar hour.
    pub speed: f64,
}

impl ConstituentDefinition {
    /// Period of one full cycle in hours.
    pub fn period_hours(&self) -> f64 {
        360.0 / self.speed
    }
}

/// The constituent catalog, ordered semidiurnal, diurnal, long-period,
/// shallow-water. Covers the constituents that dominate published station
/// harmonic constants; symbols outside this table are excluded from
/// synthesis with a data-integrity warning.
pub static CATALOG: [ConstituentDefinition; 26] = [
    // Semidiurnal
    ConstituentDefinition {
        symbol: "M2",
        name: "principal lunar semidiurnal",
        family: Family::Semidiurnal,
        doodson: [2, -2, 2, 0, 0, 0],
        phase_offset: 0.0,
        speed: 28.984_104_2,
    },
    ConstituentDefinition {
        symbol: "S2",
        name: "principal solar semidiurnal",
        family: Family::Semidiurnal,
        doodson: [2, 0, 0, 0, 0, 0],
        phase_offset: 0.0,
        speed: 30.0,
    },
    ConstituentDefinition {
        symbol: "N2",
        name: "larger lunar elliptic semidiurnal",
        family: Family::Semidiurnal,
        doodson: [2, -3, 2, 1, 0, 0],
        phase_offset: 0.0,
        speed: 28.439_729_5,
    },
    ConstituentDefinition {
        symbol: "K2",
        name: "lunisolar semidiurnal",
        family: Family::Semidiurnal,
        doodson: [2, 0, 2, 0, 0, 0],
        phase_offset: 0.0,
        speed: 30.082_137_3,
    },
    ConstituentDefinition {
        symbol: "NU2",
        name: "larger lunar evectional",
        family: Family::Semidiurnal,
        doodson: [2, -3, 4, -1, 0, 0],
        phase_offset: 0.0,
        speed: 28.512_583_1,
    },
    ConstituentDefinition {
        symbol: "MU2",
        name: "variational",
        family: Family::Semidiurnal,
        doodson: [2, -4, 4, 0, 0, 0],
        phase_offset: 0.0,
        speed: 27.968_208_4,
    },
    ConstituentDefinition {
        symbol: "2N2",
        name: "lunar elliptic semidiurnal, second order",
        family: Family::Semidiurnal,
        doodson: [2, -4, 2, 2, 0, 0],
        phase_offset: 0.0,
        speed: 27.895_354_8,
    },
    ConstituentDefinition {
        symbol: "L2",
        name: "smaller lunar elliptic semidiurnal",
        family: Family::Semidiurnal,
        doodson: [2, -1, 2, -1, 0, 0],
        phase_offset: 180.0,
        speed: 29.528_478_9,
    },
    ConstituentDefinition {
        symbol: "T2",
        name: "larger solar elliptic",
        family: Family::Semidiurnal,
        doodson: [2, 0, -1, 0, 0, 1],
        phase_offset: 0.0,
        speed: 29.958_933_3,
    },
    // Diurnal
    ConstituentDefinition {
        symbol: "K1",
        name: "lunisolar diurnal",
        family: Family::Diurnal,
        doodson: [1, 0, 1, 0, 0, 0],
        phase_offset: -90.0,
        speed: 15.041_068_6,
    },
    ConstituentDefinition {
        symbol: "O1",
        name: "principal lunar diurnal",
        family: Family::Diurnal,
        doodson: [1, -2, 1, 0, 0, 0],
        phase_offset: 90.0,
        speed: 13.943_035_6,
    },
    ConstituentDefinition {
        symbol: "P1",
        name: "principal solar diurnal",
        family: Family::Diurnal,
        doodson: [1, 0, -1, 0, 0, 0],
        phase_offset: 90.0,
        speed: 14.958_931_4,
    },
    ConstituentDefinition {
        symbol: "Q1",
        name: "larger lunar elliptic diurnal",
        family: Family::Diurnal,
        doodson: [1, -3, 1, 1, 0, 0],
        phase_offset: 90.0,
        speed: 13.398_660_9,
    },
    ConstituentDefinition {
        symbol: "J1",
        name: "smaller lunar elliptic diurnal",
        family: Family::Diurnal,
        doodson: [1, 1, 1, -1, 0, 0],
        phase_offset: -90.0,
        speed: 15.585_443_3,
    },
    ConstituentDefinition {
        symbol: "M1",
        name: "smaller lunar elliptic diurnal",
        family: Family::Diurnal,
        doodson: [1, -1, 1, 1, 0, 0],
        phase_offset: -90.0,
        speed: 14.496_693_9,
    },
    // Long period
    ConstituentDefinition {
        symbol: "Mf",
        name: "lunisolar fortnightly",
        family: Family::LongPeriod,
        doodson: [0, 2, 0, 0, 0, 0],
        phase_offset: 0.0,
        speed: 1.098_033_1,
    },
    ConstituentDefinition {
        symbol: "Mm",
        name: "lunar monthly",
        family: Family::LongPeriod,
        doodson: [0, 1, 0, -1, 0, 0],
        phase_offset: 0.0,
        speed: 0.544_374_7,
    },
    ConstituentDefinition {
        symbol: "Ssa",
        name: "solar semiannual",
        family: Family::LongPeriod,
        doodson: [0, 0, 2, 0, 0, 0],
        phase_offset: 0.0,
        speed: 0.082_137_3,
    },
    ConstituentDefinition {
        symbol: "Sa",
        name: "solar annual",
        family: Family::LongPeriod,
        doodson: [0, 0, 1, 0, 0, 0],
        phase_offset: 0.0,
        speed: 0.041_068_6,
    },
    // Shallow water
    ConstituentDefinition {
        symbol: "M4",
        name: "shallow water overtide of M2",
        family: Family::ShallowWater,
        doodson: [4, -4, 4, 0, 0, 0],
        phase_offset: 0.0,
        speed: 57.968_208_4,
    },
    ConstituentDefinition {
        symbol: "M6",
        name: "shallow water overtide of M2, third harmonic",
        family: Family::ShallowWater,
        doodson: [6, -6, 6, 0, 0, 0],
        phase_offset: 0.0,
        speed: 86.952_312_7,
    },
    ConstituentDefinition {
        symbol: "M8",
        name: "shallow water overtide of M2, fourth harmonic",
        family: Family::ShallowWater,
        doodson: [8, -8, 8, 0, 0, 0],
        phase_offset: 0.0,
        speed: 115.936_416_6,
    },
    ConstituentDefinition {
        symbol: "S4",
        name: "shallow water overtide of S2",
        family: Family::ShallowWater,
        doodson: [4, 0, 0, 0, 0, 0],
        phase_offset: 0.0,
        speed: 60.0,
    },
    ConstituentDefinition {
        symbol: "MS4",
        name: "shallow water quarter diurnal",
        family: Family::ShallowWater,
        doodson: [4, -2, 2, 0, 0, 0],
        phase_offset: 0.0,
        speed: 58.984_104_2,
    },
    ConstituentDefinition {
        symbol: "MN4",
        name: "shallow water quarter diurnal",
        family: Family::ShallowWater,
        doodson: [4, -5, 4, 1, 0, 0],
        phase_offset: 0.0,
        speed: 57.423_833_7,
    },
    ConstituentDefinition {
        symbol: "MK3",
        name: "shallow water terdiurnal",
        family: Family::ShallowWater,
        doodson: [3, -2, 3, 0, 0, 0],
        phase_offset: -90.0,
        speed: 44.025_172_9,
    },
];

/// Look up a constituent definition by symbol, case-insensitively.
pub fn lookup(symbol: &str) -> Option<&'static ConstituentDefinition> {
    CATALOG.iter().find(|c| c.symbol.eq_ignore_ascii_case(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::{H_RATE, N_RATE, P1_RATE, P_RATE, S_RATE, T_RATE};

    #[test]
    fn lookup_finds_known_symbols() {
        assert_eq!(lookup("M2").unwrap().symbol, "M2");
        assert_eq!(lookup("m2").unwrap().symbol, "M2");
        assert_eq!(lookup("mk3").unwrap().symbol, "MK3");
        assert!(lookup("ZZ9").is_none());
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn tabulated_speeds_match_doodson_dot_product() {
        // The catalog speed of every constituent must equal the integer
        // combination of the fundamental rates, or phase would drift against
        // the ephemeris over long prediction spans.
        for c in &CATALOG {
            let [dt, ds, dh, dp, dn, dp1] = c.doodson;
            let derived = f64::from(dt) * T_RATE
                + f64::from(ds) * S_RATE
                + f64::from(dh) * H_RATE
                + f64::from(dp) * P_RATE
                + f64::from(dn) * N_RATE
                + f64::from(dp1) * P1_RATE;
            assert!(
                (derived - c.speed).abs() < 1e-5,
                "{}: derived speed {} vs tabulated {}",
                c.symbol,
                derived,
                c.speed
            );
        }
    }

    #[test]
    fn m2_period_is_about_12_42_hours() {
        let m2 = lookup("M2").unwrap();
        assert!((m2.period_hours() - 12.4206).abs() < 1e-3);
    }

    #[test]
    fn phase_offsets_are_quarter_turns() {
        for c in &CATALOG {
            let quarter = c.phase_offset / 90.0;
            assert!(
                (quarter - quarter.round()).abs() < 1e-12,
                "{}: offset {} is not a multiple of 90°",
                c.symbol,
                c.phase_offset
            );
        }
    }

    #[test]
    fn families_cover_expected_speed_bands() {
        for c in &CATALOG {
            match c.family {
                Family::Semidiurnal => assert!((27.0..31.0).contains(&c.speed)),
                Family::Diurnal => assert!((13.0..16.0).contains(&c.speed)),
                Family::LongPeriod => assert!(c.speed < 2.0),
                Family::ShallowWater => assert!(c.speed > 40.0),
            }
        }
    }
}
