//! # Station Harmonic Constants
//!
//! A station record bundles the site metadata with its published harmonic
//! constants: one `(symbol, amplitude, phase)` triple per constituent, plus
//! the mean level `datum` above the station's reference datum. Records are
//! loaded once from JSON and treated as immutable reference data; the engine
//! itself never writes them.
//!
//! Validation happens at load time so the prediction paths can stay total:
//! amplitudes must be finite and non-negative, phases finite (they are
//! wrapped into `[0, 360)` on load), coordinates and datum finite.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::astro::normalize_degrees;

/// Errors raised while loading or validating a station record.
#[derive(Error, Debug)]
pub enum StationError {
    /// Reading the station file failed (missing file, permissions).
    #[error("station file IO: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid station JSON.
    #[error("station file parse: {0}")]
    Parse(#[from] serde_json::Error),

    /// A harmonic constant fails validation.
    #[error("constituent {symbol}: {reason}")]
    BadConstituent { symbol: String, reason: String },

    /// A station-level field is not a finite number.
    #[error("station field '{field}' is not finite")]
    BadField { field: &'static str },
}

/// One published harmonic constant of a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConstituent {
    /// Catalog symbol, e.g. "M2".
    pub symbol: String,
    /// Amplitude in meters, non-negative. Zero is a valid identity term.
    pub amplitude: f64,
    /// Greenwich phase lag κ in degrees, wrapped to `[0, 360)` on load.
    pub phase: f64,
}

/// A tide station with its harmonic constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier, e.g. a NOAA station number.
    pub id: String,
    /// Human-readable station name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Mean level Z0 in meters above the station's reference datum.
    /// Defaults to 0, which makes predicted heights relative to that datum.
    #[serde(default)]
    pub datum: f64,
    /// Harmonic constants, one entry per constituent.
    pub constituents: Vec<StationConstituent>,
}

impl Station {
    /// Load and validate a station record from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Station, StationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a station record from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Station, StationError> {
        let mut station: Station = serde_json::from_str(json)?;
        station.validate()?;
        for c in &mut station.constituents {
            c.phase = normalize_degrees(c.phase);
        }
        Ok(station)
    }

    /// Check invariants the prediction engine relies on.
    pub fn validate(&self) -> Result<(), StationError> {
        for (field, value) in [("lat", self.lat), ("lon", self.lon), ("datum", self.datum)] {
            if !value.is_finite() {
                return Err(StationError::BadField { field });
            }
        }
        for c in &self.constituents {
            if !c.amplitude.is_finite() || c.amplitude < 0.0 {
                return Err(StationError::BadConstituent {
                    symbol: c.symbol.clone(),
                    reason: format!("amplitude {} must be finite and >= 0", c.amplitude),
                });
            }
            if !c.phase.is_finite() {
                return Err(StationError::BadConstituent {
                    symbol: c.symbol.clone(),
                    reason: "phase must be finite".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Built-in demonstration station: Portland, ME (NOAA 8418150) harmonic
    /// constants in meters. Used by tests and as the CLI fallback when no
    /// station file is configured.
    pub fn example() -> Station {
        fn c(symbol: &str, amplitude: f64, phase: f64) -> StationConstituent {
            StationConstituent {
                symbol: symbol.to_string(),
                amplitude,
                phase,
            }
        }

        Station {
            id: "8418150".to_string(),
            name: "Portland, ME".to_string(),
            lat: 43.6561,
            lon: -70.2461,
            datum: 0.0,
            constituents: vec![
                c("M2", 1.356, 102.7),
                c("N2", 0.304, 76.4),
                c("S2", 0.206, 135.5),
                c("K1", 0.142, 195.2),
                c("O1", 0.109, 173.5),
                c("L2", 0.095, 130.1),
                c("NU2", 0.061, 81.2),
                c("Sa", 0.061, 131.8),
                c("K2", 0.057, 131.9),
                c("MU2", 0.049, 116.2),
                c("P1", 0.046, 190.5),
                c("2N2", 0.040, 50.1),
                c("Q1", 0.021, 166.1),
                c("Mm", 0.020, 221.0),
                c("M4", 0.017, 51.2),
                c("Ssa", 0.012, 65.0),
                c("T2", 0.012, 134.8),
                c("MS4", 0.008, 99.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_station_is_valid() {
        let station = Station::example();
        assert!(station.validate().is_ok());
        assert_eq!(station.id, "8418150");
        assert!(!station.constituents.is_empty());
    }

    #[test]
    fn json_roundtrip_preserves_constants() {
        let station = Station::example();
        let json = serde_json::to_string(&station).unwrap();
        let parsed = Station::from_json_str(&json).unwrap();
        assert_eq!(station, parsed);
    }

    #[test]
    fn datum_defaults_to_zero() {
        let json = r#"{
            "id": "0001", "name": "Test Harbor", "lat": 50.0, "lon": -4.0,
            "constituents": [{"symbol": "M2", "amplitude": 1.0, "phase": 0.0}]
        }"#;
        let station = Station::from_json_str(json).unwrap();
        assert_eq!(station.datum, 0.0);
    }

    #[test]
    fn phases_are_wrapped_on_load() {
        let json = r#"{
            "id": "0001", "name": "Test Harbor", "lat": 50.0, "lon": -4.0,
            "constituents": [
                {"symbol": "M2", "amplitude": 1.0, "phase": 370.0},
                {"symbol": "S2", "amplitude": 0.5, "phase": -90.0}
            ]
        }"#;
        let station = Station::from_json_str(json).unwrap();
        assert!((station.constituents[0].phase - 10.0).abs() < 1e-12);
        assert!((station.constituents[1].phase - 270.0).abs() < 1e-12);
    }

    #[test]
    fn negative_amplitude_is_rejected() {
        let json = r#"{
            "id": "0001", "name": "Test Harbor", "lat": 50.0, "lon": -4.0,
            "constituents": [{"symbol": "M2", "amplitude": -0.5, "phase": 0.0}]
        }"#;
        let err = Station::from_json_str(json).unwrap_err();
        assert!(matches!(err, StationError::BadConstituent { .. }));
    }

    #[test]
    fn zero_amplitude_is_accepted() {
        let json = r#"{
            "id": "0001", "name": "Test Harbor", "lat": 50.0, "lon": -4.0,
            "constituents": [{"symbol": "M2", "amplitude": 0.0, "phase": 0.0}]
        }"#;
        assert!(Station::from_json_str(json).is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Station::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StationError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Station::from_json_file("/nonexistent/station.json").unwrap_err();
        assert!(matches!(err, StationError::Io(_)));
    }
}
