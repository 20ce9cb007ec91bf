//! Tensor-model ("Lite") path
//!
//! Frames are resized to 224×224, scaled to [-1, 1] (MobileNetV2 convention)
//! and handed to a [`ProbabilityModel`]. The model's internals are not this
//! crate's concern; it only has to return one probability per lite class.
//!
//! The lite classes are the tomato table in order, so the probability vector
//! maps straight onto tomato disease records.

use super::{Diagnoser, Diagnosis, ModelKind};
use crate::crops::Crop;
use crate::database::DiseaseTable;
use crate::error::ModelError;
use crate::scorer::ScoredCandidate;
use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::{s, Array1, Array2, Array4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Instant;

pub const INPUT_SIZE: usize = 224;

/// Class order of the lite model output (tomato record ids)
pub const LITE_CLASSES: [&str; 10] = [
    "tomato_healthy",
    "tomato_early_blight",
    "tomato_late_blight",
    "tomato_leaf_mold",
    "tomato_septoria",
    "tomato_spider_mites",
    "tomato_target_spot",
    "tomato_mosaic_virus",
    "tomato_yellow_leaf_curl",
    "tomato_bacterial_spot",
];

/// NHWC input tensor `[1, 224, 224, 3]` in [-1, 1]
pub fn preprocess(image: &RgbImage) -> Array4<f32> {
    let mut tensor = Array4::<f32>::zeros((1, INPUT_SIZE, INPUT_SIZE, 3));
    if image.width() == 0 || image.height() == 0 {
        return tensor;
    }

    let size = INPUT_SIZE as u32;
    let resized = imageops::resize(image, size, size, FilterType::Triangle);
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, y as usize, x as usize, c]] = pixel.0[c] as f32 / 127.5 - 1.0;
        }
    }
    tensor
}

/// Numerically stable softmax
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// `(image tensor) → probability vector`
pub trait ProbabilityModel: Send + Sync {
    fn num_classes(&self) -> usize;

    fn predict(&self, input: &Array4<f32>) -> Result<Vec<f32>, ModelError>;
}

/// Untrained stand-in: per-channel global average pool → dense → softmax
///
/// Weights are drawn from a seeded RNG, so output is deterministic per seed
/// but carries no agronomic meaning.
#[derive(Debug, Clone)]
pub struct DemoModel {
    weights: Array2<f32>,
    bias: Array1<f32>,
}

impl DemoModel {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let classes = LITE_CLASSES.len();
        let weights = Array2::from_shape_fn((3, classes), |_| rng.gen_range(-1.0..1.0));
        let bias = Array1::from_shape_fn(classes, |_| rng.gen_range(-0.1..0.1));
        Self { weights, bias }
    }
}

impl ProbabilityModel for DemoModel {
    fn num_classes(&self) -> usize {
        self.bias.len()
    }

    fn predict(&self, input: &Array4<f32>) -> Result<Vec<f32>, ModelError> {
        let shape = input.shape();
        if shape.len() != 4 || shape[0] != 1 || shape[3] != 3 {
            return Err(ModelError::InputShape {
                expected: vec![1, INPUT_SIZE, INPUT_SIZE, 3],
                found: shape.to_vec(),
            });
        }

        let pooled = Array1::from_shape_fn(3, |c| {
            input.slice(s![0, .., .., c]).mean().unwrap_or(0.0)
        });
        let logits = pooled.dot(&self.weights) + &self.bias;
        let logits = logits
            .as_slice()
            .ok_or_else(|| ModelError::Inference("logits are not contiguous".to_string()))?;
        Ok(softmax(logits))
    }
}

/// Lite diagnoser: raw softmax output mapped onto tomato records
pub struct LiteDiagnoser<M> {
    model: M,
    table: Arc<DiseaseTable>,
}

impl<M: ProbabilityModel> LiteDiagnoser<M> {
    pub fn new(model: M, table: Arc<DiseaseTable>) -> Self {
        Self { model, table }
    }

    /// Map a probability vector onto ranked candidates
    pub fn rank(&self, probabilities: &[f32]) -> Result<Vec<ScoredCandidate>, ModelError> {
        if probabilities.len() != LITE_CLASSES.len() {
            return Err(ModelError::OutputLength {
                expected: LITE_CLASSES.len(),
                found: probabilities.len(),
            });
        }

        let mut ranked: Vec<ScoredCandidate> = LITE_CLASSES
            .iter()
            .zip(probabilities)
            .filter_map(|(id, &p)| {
                let (_, record) = self.table.disease_by_id(id)?;
                let confidence = if p.is_finite() {
                    (p as f64 * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                };
                Some(ScoredCandidate::new(record, confidence))
            })
            .collect();

        ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Ok(ranked)
    }
}

impl<M: ProbabilityModel> Diagnoser for LiteDiagnoser<M> {
    fn kind(&self) -> ModelKind {
        ModelKind::Lite
    }

    /// Always reports tomato classes, whatever crop was requested
    fn diagnose(&self, image: &RgbImage, crop: Crop) -> Result<Diagnosis, ModelError> {
        if crop != Crop::Tomato {
            tracing::debug!(%crop, "Lite model only knows tomato classes");
        }

        let classes = self.model.num_classes();
        if classes != LITE_CLASSES.len() {
            return Err(ModelError::OutputLength {
                expected: LITE_CLASSES.len(),
                found: classes,
            });
        }

        let start = Instant::now();
        let input = preprocess(image);
        let probabilities = self.model.predict(&input)?;
        let candidates = self.rank(&probabilities)?;

        Ok(Diagnosis {
            model: ModelKind::Lite,
            crop: Crop::Tomato,
            candidates,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use image::Rgb;

    struct FixedModel(Vec<f32>);

    impl ProbabilityModel for FixedModel {
        fn num_classes(&self) -> usize {
            self.0.len()
        }

        fn predict(&self, _input: &Array4<f32>) -> Result<Vec<f32>, ModelError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_preprocess_range_and_shape() {
        let image = RgbImage::from_pixel(50, 80, Rgb([255, 0, 128]));
        let tensor = preprocess(&image);
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        assert_abs_diff_eq!(tensor[[0, 10, 10, 0]], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(tensor[[0, 10, 10, 1]], -1.0, epsilon = 1e-6);
        assert!(tensor.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let p = softmax(&[1.0, 2.0, 3.0, 1000.0]);
        assert_abs_diff_eq!(p.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        assert!(p[3] > 0.99);
    }

    #[test]
    fn test_demo_model_is_deterministic_per_seed() {
        let image = RgbImage::from_pixel(64, 64, Rgb([90, 140, 60]));
        let input = preprocess(&image);
        let a = DemoModel::new(5).predict(&input).unwrap();
        let b = DemoModel::new(5).predict(&input).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), LITE_CLASSES.len());
        assert_abs_diff_eq!(a.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_demo_model_rejects_bad_shape() {
        let input = Array4::<f32>::zeros((2, 8, 8, 1));
        assert!(matches!(
            DemoModel::new(1).predict(&input),
            Err(ModelError::InputShape { .. })
        ));
    }

    #[test]
    fn test_lite_diagnoser_ranks_by_probability() {
        let mut probs = vec![0.02; 10];
        probs[2] = 0.7;
        probs[9] = 0.14;
        let diagnoser = LiteDiagnoser::new(FixedModel(probs), Arc::new(DiseaseTable::builtin()));
        let diagnosis = diagnoser
            .diagnose(&RgbImage::new(10, 10), Crop::Potato)
            .unwrap();
        assert_eq!(diagnosis.crop, Crop::Tomato);
        assert_eq!(diagnosis.candidates.len(), 10);
        assert_eq!(diagnosis.candidates[0].record.id, "tomato_late_blight");
        assert_abs_diff_eq!(diagnosis.candidates[0].confidence, 70.0, epsilon = 1e-4);
        assert_eq!(diagnosis.candidates[1].record.id, "tomato_bacterial_spot");
        // equal probabilities keep class order
        assert_eq!(diagnosis.candidates[2].record.id, "tomato_healthy");
    }

    #[test]
    fn test_lite_diagnoser_rejects_wrong_output_length() {
        let diagnoser = LiteDiagnoser::new(FixedModel(vec![0.5, 0.5]), Arc::new(DiseaseTable::builtin()));
        assert!(matches!(
            diagnoser.diagnose(&RgbImage::new(4, 4), Crop::Tomato),
            Err(ModelError::OutputLength { expected: 10, found: 2 })
        ));
    }

    /// Declares one head size, emits another
    struct MislabeledModel {
        classes: usize,
    }

    impl ProbabilityModel for MislabeledModel {
        fn num_classes(&self) -> usize {
            self.classes
        }

        fn predict(&self, _input: &Array4<f32>) -> Result<Vec<f32>, ModelError> {
            Ok(vec![0.1; LITE_CLASSES.len()])
        }
    }

    #[test]
    fn test_lite_diagnoser_checks_declared_class_count() {
        let table = Arc::new(DiseaseTable::builtin());
        let diagnoser = LiteDiagnoser::new(MislabeledModel { classes: 3 }, Arc::clone(&table));
        assert!(matches!(
            diagnoser.diagnose(&RgbImage::new(4, 4), Crop::Tomato),
            Err(ModelError::OutputLength { expected: 10, found: 3 })
        ));

        let diagnoser = LiteDiagnoser::new(MislabeledModel { classes: 10 }, table);
        assert!(diagnoser.diagnose(&RgbImage::new(4, 4), Crop::Tomato).is_ok());
        assert_eq!(DemoModel::new(0).num_classes(), LITE_CLASSES.len());
    }
}
