//! # Harmonic Tide Synthesis
//!
//! The synthesis engine for one station. Construction resolves the station's
//! harmonic constants against the constituent catalog once; every prediction
//! afterwards is a pure function of the instant:
//!
//! ```text
//! height(t) = Z0 + Σ f_i(t) · A_i · cos(V0_i(t) + u_i(t) − κ_i)
//! ```
//!
//! where `V0` is the equilibrium argument at Greenwich, `{f, u}` the nodal
//! corrections, `A` and `κ` the station's amplitude and phase lag, and `Z0`
//! the station's mean level above its datum.
//!
//! Station constituents whose symbol is absent from the catalog are excluded
//! from the sum and reported as a data-integrity warning. A partial
//! prediction from the remaining terms is still useful, so this degrades
//! rather than fails.

use chrono::{DateTime, Utc};

use crate::astro::{self, normalize_degrees, AstronomicalAngles};
use crate::constituents::{self, ConstituentDefinition};
use crate::nodal;
use crate::station::Station;

/// One constituent's independent contribution to the predicted height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Catalog symbol of the constituent.
    pub symbol: &'static str,
    /// Signed contribution in meters: `f · A · cos(V0 + u − κ)`.
    pub value: f64,
}

/// A station constituent resolved against the catalog.
#[derive(Debug, Clone, Copy)]
struct ResolvedTerm {
    def: &'static ConstituentDefinition,
    amplitude: f64,
    phase_lag: f64,
}

/// Harmonic prediction engine for a single station.
///
/// The predictor owns a resolved copy of the station constants, so it is
/// `Send + Sync` and can be shared freely across threads; all methods take
/// `&self` and hold no interior state.
#[derive(Debug, Clone)]
pub struct TidePredictor {
    station_name: String,
    datum: f64,
    terms: Vec<ResolvedTerm>,
    unresolved: Vec<String>,
}

/// Equilibrium argument `V0` of a constituent in degrees, `[0, 360)`:
/// the dot product of its Doodson coefficients with the six astronomical
/// angles, plus the constituent's constant offset.
pub fn equilibrium_argument(def: &ConstituentDefinition, a: &AstronomicalAngles) -> f64 {
    let [dt, ds, dh, dp, dn, dp1] = def.doodson;
    normalize_degrees(
        f64::from(dt) * a.t
            + f64::from(ds) * a.s
            + f64::from(dh) * a.h
            + f64::from(dp) * a.p
            + f64::from(dn) * a.n
            + f64::from(dp1) * a.p1
            + def.phase_offset,
    )
}

impl TidePredictor {
    /// Resolve `station`'s harmonic constants against the catalog.
    ///
    /// Symbols the catalog does not know are excluded from synthesis,
    /// recorded (see [`unresolved`](Self::unresolved)), and warned about on
    /// stderr. They never abort construction.
    pub fn new(station: &Station) -> TidePredictor {
        let mut terms = Vec::with_capacity(station.constituents.len());
        let mut unresolved = Vec::new();

        for c in &station.constituents {
            match constituents::lookup(&c.symbol) {
                Some(def) => terms.push(ResolvedTerm {
                    def,
                    amplitude: c.amplitude,
                    phase_lag: c.phase,
                }),
                None => {
                    eprintln!(
                        "Warning: station {} constituent '{}' is not in the catalog; \
                         excluding it from predictions",
                        station.id, c.symbol
                    );
                    unresolved.push(c.symbol.clone());
                }
            }
        }

        TidePredictor {
            station_name: station.name.clone(),
            datum: station.datum,
            terms,
            unresolved,
        }
    }

    /// Name of the station this predictor was built for.
    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    /// Mean level Z0 in meters above the station datum.
    pub fn datum(&self) -> f64 {
        self.datum
    }

    /// Number of constituents participating in the synthesis.
    pub fn constituent_count(&self) -> usize {
        self.terms.len()
    }

    /// Station symbols that could not be resolved against the catalog.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Predicted height in meters above the station datum at `instant`.
    ///
    /// Deterministic: identical inputs always produce an identical height.
    pub fn height(&self, instant: DateTime<Utc>) -> f64 {
        let angles = astro::angles(instant);
        let mut height = self.datum;
        for term in &self.terms {
            height += term_value(term, &angles);
        }
        height
    }

    /// Each constituent's independent contribution at `instant`, in the
    /// synthesis order. The values sum exactly to `height(instant) − Z0`;
    /// every term is recomputed fresh, nothing is cached.
    pub fn contributions(&self, instant: DateTime<Utc>) -> Vec<Contribution> {
        let angles = astro::angles(instant);
        self.terms
            .iter()
            .map(|term| Contribution {
                symbol: term.def.symbol,
                value: term_value(term, &angles),
            })
            .collect()
    }

    /// Upper bound on `|height(instant) − Z0|` at `instant`: the sum of the
    /// nodally corrected amplitudes `Σ f_i · A_i`.
    pub fn amplitude_bound(&self, instant: DateTime<Utc>) -> f64 {
        let angles = astro::angles(instant);
        self.terms
            .iter()
            .map(|term| nodal::factors(term.def.symbol, &angles).f * term.amplitude)
            .sum()
    }
}

/// Evaluate one resolved term at the given angles.
fn term_value(term: &ResolvedTerm, angles: &AstronomicalAngles) -> f64 {
    let v0 = equilibrium_argument(term.def, angles);
    let nf = nodal::factors(term.def.symbol, angles);
    let phase = normalize_degrees(v0 + nf.u - term.phase_lag);
    nf.f * term.amplitude * phase.to_radians().cos()
}
