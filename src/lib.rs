//! # Tide Predictor Core Library
//!
//! This library predicts the astronomical tide by summing harmonic
//! constituents: sinusoids whose frequencies are fixed integer combinations of
//! the fundamental astronomical cycles, corrected for the slow 18.6-year
//! regression of the lunar node. Given a station's published harmonic
//! constants it produces instantaneous heights, sampled series, high/low
//! water times, and per-constituent breakdowns.
//!
//! ## Design Philosophy
//!
//! ### Pure computation
//! Every prediction path is a pure, synchronous function of its inputs:
//! no shared mutable state, no I/O, no caches. Identical `(station, instant)`
//! arguments always yield an identical height, which is what makes series
//! generation, extrema refinement, and exports reproducible.
//!
//! ### Prediction pipeline
//! 1. **Ephemeris**: fundamental astronomical angles at the requested instant
//! 2. **Arguments**: each constituent's equilibrium argument from its Doodson
//!    coefficients
//! 3. **Nodal corrections**: amplitude factor `f` and phase correction `u`
//!    for the lunar-node cycle
//! 4. **Synthesis**: `Z0 + Σ f·A·cos(V0 + u − κ)` over the station constants
//! 5. **Sampling / extrema**: lazy series iteration and bisection-refined
//!    high/low water detection
//!
//! ### Scope
//! The engine predicts the astronomical tide only. Meteorological effects
//! (storm surge, barometric pressure) and observational corrections are out of
//! scope, as are the display layers that consume the predictions.
//!
//! ## Core Types
//!
//! - [`TidePoint`]: a single predicted height at an instant
//! - [`Extreme`]: a refined high or low water
//! - [`TidePredictor`]: the synthesis engine for one station

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod astro;
pub mod config;
pub mod constituents;
pub mod extrema;
pub mod nodal;
pub mod predictor;
pub mod renderer;
pub mod series;
pub mod station;

// Re-export the main prediction surface for convenience
pub use extrema::{find_extremes, find_extremes_between, Extreme, ExtremeKind};
pub use predictor::{Contribution, TidePredictor};
pub use series::{PredictError, SeriesIter};
pub use station::{Station, StationConstituent, StationError};

/// A single predicted tide height at a specific instant.
///
/// Heights are in meters relative to the station's reference datum. Points
/// are pure output values: they carry no identity and are never mutated
/// after creation.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use tide_predict_lib::TidePoint;
///
/// let point = TidePoint {
///     time: Utc.with_ymd_and_hms(2026, 3, 1, 6, 0, 0).unwrap(),
///     height: 1.82,
/// };
/// assert!(point.height > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TidePoint {
    /// Instant of the prediction (UTC)
    pub time: DateTime<Utc>,
    /// Predicted height in meters above the station datum
    pub height: f64,
}
