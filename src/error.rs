//! Error types
//!
//! Scoring and feature extraction are infallible. Errors only arise when
//! loading tables/configuration from disk or when a tensor model misbehaves.

use thiserror::Error;

/// Disease table invariant violations
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("crop '{crop}' has no disease records")]
    EmptyCrop { crop: String },

    #[error("crop '{crop}' has {count} healthy records (expected exactly 1)")]
    HealthyCount { crop: String, count: usize },

    #[error("record '{id}' has severity {severity} outside 0-10")]
    SeverityOutOfRange { id: String, severity: u8 },

    #[error("healthy record '{id}' in crop '{crop}' has severity {severity}, expected 0")]
    HealthySeverity { crop: String, id: String, severity: u8 },

    #[error("duplicate record id '{id}' in crop '{crop}'")]
    DuplicateId { crop: String, id: String },

    #[error("unknown crop id '{0}' in table")]
    UnknownCrop(String),
}

/// Failures on the tensor-model inference path
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model expects input shape {expected:?}, got {found:?}")]
    InputShape { expected: Vec<usize>, found: Vec<usize> },

    #[error("model produced {found} probabilities, expected {expected}")]
    OutputLength { expected: usize, found: usize },

    #[error("model inference failed: {0}")]
    Inference(String),
}

/// Invalid tunable values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tunable '{name}' must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("leafPenalty must be at most 1, got {0}")]
    PenaltyAboveOne(f64),

    #[error("analysis resolution must be at least 1x1")]
    ZeroResolution,
}
