//! # High/Low Water Detection
//!
//! Turning points of a sampled tide series, refined by bisection against
//! fresh synthesizer evaluations. This is the single root-finding home for
//! the whole crate; anything that needs a turning time (high water, low
//! water, slack estimates derived from them) goes through here rather than
//! rolling its own search loop.
//!
//! ## Algorithm
//!
//! 1. Walk adjacent sample pairs computing the discrete slope. A sign change
//!    between consecutive non-flat intervals brackets a candidate extremum
//!    (flat intervals extend the bracket rather than counting as a change).
//! 2. Refine each bracket by bisection: probe the slope at the midpoint with
//!    a short centered difference of `height()`, keep the half that still
//!    contains the turning point, and stop once the bracket is under one
//!    minute wide or after 50 halvings. Hitting the iteration cap returns
//!    the best estimate rather than failing.
//! 3. Classify by the entering slope: rising into the bracket is a high,
//!    falling is a low.
//!
//! Candidates are only reported when fully bracketed by samples, so an
//! extremum lurking right at the series boundary is dropped. Within one
//! returned sequence the kinds strictly alternate; a duplicated kind (which
//! discrete sampling can produce near stationary stretches) keeps the more
//! extreme of the two entries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::predictor::TidePredictor;
use crate::series::PredictError;
use crate::TidePoint;

/// Bracket width below which refinement stops.
const REFINE_TOLERANCE_SECS: i64 = 60;
/// Hard cap on bisection steps per candidate.
const MAX_BISECTIONS: u32 = 50;
/// Half-width of the centered difference used to probe the slope sign.
const SLOPE_PROBE_SECS: i64 = 15;
/// Sampling interval used by [`find_extremes_between`].
const SCAN_INTERVAL_MINUTES: i64 = 6;

/// Kind of a tidal turning point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremeKind {
    /// High water: rising before, falling after.
    High,
    /// Low water: falling before, rising after.
    Low,
}

/// A refined high or low water.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Refined turning time (UTC).
    pub time: DateTime<Utc>,
    /// Height in meters above the station datum at the refined time.
    pub height: f64,
    /// High or low water.
    pub kind: ExtremeKind,
}

/// Locate and refine the turning points of `series`.
///
/// The series supplies the brackets; `predictor` supplies the fresh height
/// evaluations used during refinement, so the samples and the refined times
/// agree with the same synthesis. Series with fewer than three points have
/// no interior turning point and yield an empty result.
pub fn find_extremes(predictor: &TidePredictor, series: &[TidePoint]) -> Vec<Extreme> {
    if series.len() < 3 {
        return Vec::new();
    }

    let mut extremes = Vec::new();
    let mut prev_sign = 0i8;
    let mut prev_start = 0usize;

    for i in 0..series.len() - 1 {
        let dt = (series[i + 1].time - series[i].time).num_seconds();
        if dt <= 0 {
            continue;
        }
        let slope = (series[i + 1].height - series[i].height) / dt as f64;
        let sign = if slope > 0.0 {
            1
        } else if slope < 0.0 {
            -1
        } else {
            0
        };
        if sign == 0 {
            continue;
        }
        if prev_sign != 0 && sign != prev_sign {
            // Turning point between the start of the last non-flat interval
            // and the end of this one.
            let bracket = (series[prev_start].time, series[i + 1].time);
            extremes.push(refine(predictor, bracket.0, bracket.1, prev_sign));
        }
        prev_sign = sign;
        prev_start = i;
    }

    enforce_alternation(extremes)
}

/// Sample `predictor` over `[start, end)` at a fine interval and return the
/// refined turning points. Convenience entry point for callers that do not
/// already hold a sampled series.
pub fn find_extremes_between(
    predictor: &TidePredictor,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Extreme>, PredictError> {
    let series = predictor.collect_series(start, end, SCAN_INTERVAL_MINUTES)?;
    Ok(find_extremes(predictor, &series))
}

/// Bisect a bracketing interval down to the refinement tolerance.
fn refine(
    predictor: &TidePredictor,
    mut a: DateTime<Utc>,
    mut b: DateTime<Utc>,
    entering_sign: i8,
) -> Extreme {
    let mut steps = 0;
    while (b - a).num_seconds() > REFINE_TOLERANCE_SECS && steps < MAX_BISECTIONS {
        let mid = a + (b - a) / 2;
        let sign = probe_slope_sign(predictor, mid);
        if sign == 0 {
            // Landed on the turning point itself.
            a = mid;
            b = mid;
            break;
        }
        if sign == entering_sign {
            a = mid;
        } else {
            b = mid;
        }
        steps += 1;
    }

    let time = a + (b - a) / 2;
    Extreme {
        time,
        height: predictor.height(time),
        kind: if entering_sign > 0 {
            ExtremeKind::High
        } else {
            ExtremeKind::Low
        },
    }
}

/// Sign of the tide's slope at `t`, probed by a short centered difference.
fn probe_slope_sign(predictor: &TidePredictor, t: DateTime<Utc>) -> i8 {
    let probe = Duration::seconds(SLOPE_PROBE_SECS);
    let delta = predictor.height(t + probe) - predictor.height(t - probe);
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

/// Collapse consecutive same-kind entries, keeping the more extreme one.
fn enforce_alternation(extremes: Vec<Extreme>) -> Vec<Extreme> {
    let mut out: Vec<Extreme> = Vec::with_capacity(extremes.len());
    for e in extremes {
        if let Some(last) = out.last_mut() {
            if last.kind == e.kind {
                let replace = match e.kind {
                    ExtremeKind::High => e.height > last.height,
                    ExtremeKind::Low => e.height < last.height,
                };
                if replace {
                    *last = e;
                }
                continue;
            }
        }
        out.push(e);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::{Station, StationConstituent};
    use chrono::TimeZone;

    fn predictor_with(constants: &[(&str, f64, f64)]) -> TidePredictor {
        TidePredictor::new(&Station {
            id: "test".to_string(),
            name: "Test Harbor".to_string(),
            lat: 0.0,
            lon: 0.0,
            datum: 0.0,
            constituents: constants
                .iter()
                .map(|&(symbol, amplitude, phase)| StationConstituent {
                    symbol: symbol.to_string(),
                    amplitude,
                    phase,
                })
                .collect(),
        })
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn short_series_has_no_extremes() {
        let predictor = predictor_with(&[("M2", 1.0, 0.0)]);
        assert!(find_extremes(&predictor, &[]).is_empty());
        let two = predictor
            .collect_series(start(), start() + Duration::minutes(20), 10)
            .unwrap();
        assert_eq!(two.len(), 2);
        assert!(find_extremes(&predictor, &two).is_empty());
    }

    #[test]
    fn constant_series_has_no_extremes() {
        let predictor = predictor_with(&[]);
        let series = predictor
            .collect_series(start(), start() + Duration::hours(12), 10)
            .unwrap();
        assert!(find_extremes(&predictor, &series).is_empty());
    }

    #[test]
    fn m2_turning_points_alternate_and_match_period() {
        let predictor = predictor_with(&[("M2", 1.0, 0.0)]);
        let extremes = find_extremes_between(&predictor, start(), start() + Duration::days(2))
            .unwrap();

        // Two highs and two lows per M2 day, two days sampled.
        assert!(extremes.len() >= 6, "got {} extremes", extremes.len());
        for pair in extremes.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "kinds must alternate");
            let spacing_hours = (pair[1].time - pair[0].time).num_minutes() as f64 / 60.0;
            // Half the M2 period, within the refinement tolerance.
            assert!(
                (spacing_hours - 6.2103).abs() < 0.1,
                "spacing {} h",
                spacing_hours
            );
        }
    }

    #[test]
    fn highs_reach_plus_f_lows_reach_minus_f() {
        let predictor = predictor_with(&[("M2", 1.0, 0.0)]);
        let extremes = find_extremes_between(&predictor, start(), start() + Duration::days(1))
            .unwrap();
        assert!(!extremes.is_empty());
        for e in &extremes {
            let f = crate::nodal::factors("M2", &crate::astro::angles(e.time)).f;
            match e.kind {
                ExtremeKind::High => assert!((e.height - f).abs() < 1e-3, "high {}", e.height),
                ExtremeKind::Low => assert!((e.height + f).abs() < 1e-3, "low {}", e.height),
            }
        }
    }

    #[test]
    fn refined_times_beat_the_sampling_grid() {
        let predictor = predictor_with(&[("M2", 1.0, 0.0)]);
        let series = predictor
            .collect_series(start(), start() + Duration::days(1), 30)
            .unwrap();
        let extremes = find_extremes(&predictor, &series);
        assert!(!extremes.is_empty());

        for e in &extremes {
            // The refined height must be at least as extreme as any nearby
            // 30-minute sample.
            let nearby = series
                .iter()
                .filter(|p| (p.time - e.time).num_minutes().abs() <= 30)
                .map(|p| p.height);
            for h in nearby {
                match e.kind {
                    ExtremeKind::High => assert!(e.height >= h - 1e-4),
                    ExtremeKind::Low => assert!(e.height <= h + 1e-4),
                }
            }
        }
    }

    #[test]
    fn alternation_cleanup_keeps_the_more_extreme_entry() {
        let t = start();
        let mk = |mins: i64, height: f64, kind: ExtremeKind| Extreme {
            time: t + Duration::minutes(mins),
            height,
            kind,
        };
        let cleaned = enforce_alternation(vec![
            mk(0, 1.0, ExtremeKind::High),
            mk(60, 1.4, ExtremeKind::High),
            mk(120, -1.1, ExtremeKind::Low),
            mk(180, -0.9, ExtremeKind::Low),
        ]);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].height, 1.4);
        assert_eq!(cleaned[1].height, -1.1);
    }
}
