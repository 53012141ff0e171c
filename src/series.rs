//! # Series Sampling
//!
//! Fixed-interval sampling of a predictor over a time window. The iterator is
//! lazy: each `next()` evaluates one height, so a caller asking for a year at
//! one-minute resolution pays only for the points it actually consumes and
//! cancels simply by ceasing iteration. Cloning the iterator restarts the
//! remaining walk from its current cursor, and samples are independent of one
//! another, so partial results are always internally consistent.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::predictor::TidePredictor;
use crate::TidePoint;

/// Errors raised by series sampling.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PredictError {
    /// The sampling interval must be strictly positive. This is a caller
    /// contract violation, not a degradable condition.
    #[error("sampling interval must be positive, got {0} minutes")]
    InvalidInterval(i64),
}

/// Lazy iterator over predicted tide points at a fixed interval.
///
/// Yields points from the start instant (inclusive) while the cursor is
/// before the end instant, so all times fall in `[start, end)` and are
/// strictly increasing.
#[derive(Debug, Clone)]
pub struct SeriesIter<'a> {
    predictor: &'a TidePredictor,
    cursor: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

impl Iterator for SeriesIter<'_> {
    type Item = TidePoint;

    fn next(&mut self) -> Option<TidePoint> {
        if self.cursor >= self.end {
            return None;
        }
        let point = TidePoint {
            time: self.cursor,
            height: self.predictor.height(self.cursor),
        };
        self.cursor += self.step;
        Some(point)
    }
}

impl TidePredictor {
    /// Sample this predictor from `start` (inclusive) to `end` (exclusive)
    /// every `interval_minutes`.
    ///
    /// `end < start` yields an empty series; a non-positive interval is a
    /// caller error and fails immediately.
    pub fn predict_series(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval_minutes: i64,
    ) -> Result<SeriesIter<'_>, PredictError> {
        if interval_minutes <= 0 {
            return Err(PredictError::InvalidInterval(interval_minutes));
        }
        Ok(SeriesIter {
            predictor: self,
            cursor: start,
            end,
            step: Duration::minutes(interval_minutes),
        })
    }

    /// Sample eagerly into a `Vec`. Convenience wrapper over
    /// [`predict_series`](Self::predict_series) for callers that need the
    /// whole window at once (chart rendering, extrema detection).
    pub fn collect_series(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval_minutes: i64,
    ) -> Result<Vec<TidePoint>, PredictError> {
        Ok(self.predict_series(start, end, interval_minutes)?.collect())
    }
}
