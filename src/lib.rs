//! Crop Leaf Disease Scorer
//!
//! Heuristic diagnosis of crop leaf photos against a fixed disease table.
//!
//! - `features/`: color-bucket feature extraction from a downsampled frame
//! - `database/`: per-crop disease records (8 crops, one healthy record each)
//! - `scorer`: weighted pattern match, leaf penalty, jitter, stable ranking
//! - `matcher`: threshold-based alternative matcher
//! - `inference/`: `Smart` (heuristic) and `Lite` (tensor model) diagnosers
//! - `scan`: periodic live scanning with latest-wins results
//! - `advisory/`: treatment plan and untreated progression timeline
//!
//! Confidence values are similarity percentages, not calibrated probabilities.

pub mod advisory;
pub mod config;
pub mod crops;
pub mod database;
pub mod error;
pub mod features;
pub mod inference;
pub mod jitter;
pub mod matcher;
pub mod scan;
pub mod scorer;

// Re-export commonly used types
pub use advisory::{Advisory, AdvisoryOptions, ProgressionTimeline, TreatmentKind, TreatmentPlan};
pub use config::{ExtractorTunables, ScorerConfig, ScoringTunables};
pub use crops::Crop;
pub use database::{DiseaseRecord, DiseaseTable, SeverityLevel, VisualPattern};
pub use error::{ConfigError, ModelError, TableError};
pub use features::{extract_features, FeatureVector};
pub use inference::{Diagnoser, Diagnosis, HeuristicDiagnoser, LiteDiagnoser, ModelKind};
pub use jitter::{JitterSource, NoJitter, SeededJitter};
pub use matcher::find_matching_diseases;
pub use scan::{FrameSource, PredictionSlot, ScanSession};
pub use scorer::{score_diseases, DiseaseScorer, ScoredCandidate};
