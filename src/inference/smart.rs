//! Heuristic ("Smart") diagnoser: feature extraction + rule-based scoring

use super::{Diagnoser, Diagnosis, ModelKind};
use crate::config::ExtractorTunables;
use crate::crops::Crop;
use crate::error::ModelError;
use crate::features::extract_features_with;
use crate::jitter::{JitterSource, SeededJitter};
use crate::scorer::DiseaseScorer;
use image::RgbImage;
use parking_lot::Mutex;
use std::time::Instant;

pub struct HeuristicDiagnoser {
    scorer: DiseaseScorer,
    extractor: ExtractorTunables,
    jitter: Mutex<Box<dyn JitterSource + Send>>,
}

impl HeuristicDiagnoser {
    /// Diagnoser with entropy-seeded jitter
    pub fn new(scorer: DiseaseScorer, extractor: ExtractorTunables) -> Self {
        Self::with_jitter(scorer, extractor, SeededJitter::from_entropy())
    }

    pub fn with_jitter<J>(scorer: DiseaseScorer, extractor: ExtractorTunables, jitter: J) -> Self
    where
        J: JitterSource + Send + 'static,
    {
        Self {
            scorer,
            extractor,
            jitter: Mutex::new(Box::new(jitter)),
        }
    }

    pub fn scorer(&self) -> &DiseaseScorer {
        &self.scorer
    }
}

impl Diagnoser for HeuristicDiagnoser {
    fn kind(&self) -> ModelKind {
        ModelKind::Smart
    }

    fn diagnose(&self, image: &RgbImage, crop: Crop) -> Result<Diagnosis, ModelError> {
        let start = Instant::now();
        let features = extract_features_with(image, self.extractor.resolution, &self.extractor);
        let candidates = {
            let mut jitter = self.jitter.lock();
            self.scorer.score(crop, &features, &mut **jitter)
        };

        Ok(Diagnosis {
            model: ModelKind::Smart,
            crop,
            candidates,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
