//! Inference strategies
//!
//! Two independent implementations of one contract, `(image, crop) → ranked
//! candidates`, selected by [`ModelKind`]:
//!
//! - `Smart`: color-bucket features + rule-based scorer over the crop's table
//! - `Lite`: a tensor model's softmax over the tomato classes

pub mod smart;
pub mod tensor;

pub use smart::HeuristicDiagnoser;
pub use tensor::{preprocess, softmax, DemoModel, LiteDiagnoser, ProbabilityModel, LITE_CLASSES};

use crate::crops::Crop;
use crate::error::ModelError;
use crate::scorer::ScoredCandidate;
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Smart,
    Lite,
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smart" => Ok(ModelKind::Smart),
            "lite" => Ok(ModelKind::Lite),
            other => Err(format!("unknown model '{}' (expected smart or lite)", other)),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModelKind::Smart => "smart",
            ModelKind::Lite => "lite",
        })
    }
}

/// Outcome of one inference call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub model: ModelKind,
    pub crop: Crop,
    /// Ranked, highest confidence first
    pub candidates: Vec<ScoredCandidate>,
    pub elapsed_ms: f64,
}

impl Diagnosis {
    pub fn top(&self) -> Option<&ScoredCandidate> {
        self.candidates.first()
    }

    pub fn top_n(&self, n: usize) -> &[ScoredCandidate] {
        &self.candidates[..n.min(self.candidates.len())]
    }
}

/// One inference strategy
pub trait Diagnoser: Send + Sync {
    fn kind(&self) -> ModelKind;

    fn diagnose(&self, image: &RgbImage, crop: Crop) -> Result<Diagnosis, ModelError>;
}

impl<D: Diagnoser + ?Sized> Diagnoser for Box<D> {
    fn kind(&self) -> ModelKind {
        (**self).kind()
    }

    fn diagnose(&self, image: &RgbImage, crop: Crop) -> Result<Diagnosis, ModelError> {
        (**self).diagnose(image, crop)
    }
}

impl<D: Diagnoser + ?Sized> Diagnoser for std::sync::Arc<D> {
    fn kind(&self) -> ModelKind {
        (**self).kind()
    }

    fn diagnose(&self, image: &RgbImage, crop: Crop) -> Result<Diagnosis, ModelError> {
        (**self).diagnose(image, crop)
    }
}
