//! Cross-module test suite for the prediction engine.
