//! Disease Scorer - ranks a crop's candidate diseases against a feature vector
//!
//! The arithmetic is split in two so it can be tested without noise:
//!
//! 1. [`match_score`]: deterministic raw/max score and anatomical penalty
//! 2. [`finalize_confidence`]: scale to a percentage, add jitter, clamp
//!
//! This is a similarity heuristic, not a calibrated classifier.

use crate::config::ScoringTunables;
use crate::crops::Crop;
use crate::database::{DiseaseRecord, DiseaseTable, SeverityLevel};
use crate::features::FeatureVector;
use crate::jitter::JitterSource;
use serde::Serialize;
use std::sync::Arc;

/// A disease record annotated with its confidence for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub record: DiseaseRecord,
    pub severity_level: SeverityLevel,
    /// Heuristic match in [0, confidence cap]
    pub confidence: f64,
}

impl ScoredCandidate {
    pub fn new(record: &DiseaseRecord, confidence: f64) -> Self {
        Self {
            record: record.clone(),
            severity_level: record.severity_level(),
            confidence,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.record.is_healthy()
    }
}

/// Deterministic part of a candidate's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    pub raw: f64,
    /// Maximum attainable raw score
    pub max: f64,
    /// 1.0, or the leaf penalty for below-ground diseases on a leaf frame
    pub penalty: f64,
}

impl MatchScore {
    pub fn adjusted(&self) -> f64 {
        self.raw * self.penalty
    }

    /// Percentage before jitter and clamping
    pub fn percent(&self) -> Option<f64> {
        (self.max > 0.0).then(|| self.adjusted() / self.max * 100.0)
    }
}

/// Raw score of one record against the features
///
/// Healthy: `green·100 − brown·80 − black·50` out of 100.
/// Otherwise: sum of `feature·100` over the record's patterns, out of
/// `patterns·100`.
pub fn match_score(
    record: &DiseaseRecord,
    features: &FeatureVector,
    tunables: &ScoringTunables,
) -> MatchScore {
    let penalty = if record.anatomical_site.is_below_ground() && features.is_leaf_disease {
        tunables.leaf_penalty
    } else {
        1.0
    };

    let (raw, max) = if record.visual_patterns.is_empty() {
        let raw = features.healthy_green * tunables.healthy_green_weight
            - features.brown_spots * tunables.healthy_brown_weight
            - features.black_spots * tunables.healthy_black_weight;
        (raw, 100.0)
    } else {
        let raw = record
            .visual_patterns
            .iter()
            .map(|&p| features.get(p) * 100.0)
            .sum();
        (raw, record.visual_patterns.len() as f64 * 100.0)
    };

    MatchScore { raw, max, penalty }
}

/// Scale, jitter and clamp to `[0, confidence_cap]`
pub fn finalize_confidence(
    score: &MatchScore,
    tunables: &ScoringTunables,
    jitter: &mut dyn JitterSource,
) -> f64 {
    let confidence = match score.percent() {
        Some(percent) => percent + jitter.sample(tunables.jitter_range),
        None => jitter.sample(tunables.fallback_jitter_range),
    };
    confidence.min(tunables.confidence_cap).max(0.0)
}

/// Score and rank `records`, highest confidence first
///
/// Ties keep table order.
pub fn score_records(
    records: &[DiseaseRecord],
    features: &FeatureVector,
    tunables: &ScoringTunables,
    jitter: &mut dyn JitterSource,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = records
        .iter()
        .map(|record| {
            let score = match_score(record, features, tunables);
            let confidence = finalize_confidence(&score, tunables, jitter);
            ScoredCandidate::new(record, confidence)
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    scored
}

/// Score every disease of `crop_id`; unknown crops yield an empty list
pub fn score_diseases(
    crop_id: &str,
    features: &FeatureVector,
    table: &DiseaseTable,
    tunables: &ScoringTunables,
    jitter: &mut dyn JitterSource,
) -> Vec<ScoredCandidate> {
    score_records(table.diseases_for(crop_id), features, tunables, jitter)
}

/// Table + tunables, shared read-only across inference calls
#[derive(Debug, Clone)]
pub struct DiseaseScorer {
    table: Arc<DiseaseTable>,
    tunables: ScoringTunables,
}

impl DiseaseScorer {
    pub fn new(table: Arc<DiseaseTable>, tunables: ScoringTunables) -> Self {
        Self { table, tunables }
    }

    pub fn table(&self) -> &DiseaseTable {
        &self.table
    }

    pub fn tunables(&self) -> &ScoringTunables {
        &self.tunables
    }

    pub fn score(
        &self,
        crop: Crop,
        features: &FeatureVector,
        jitter: &mut dyn JitterSource,
    ) -> Vec<ScoredCandidate> {
        let ranked = score_records(self.table.for_crop(crop), features, &self.tunables, jitter);
        if let Some(top) = ranked.first() {
            tracing::debug!(
                %crop,
                top = %top.record.name,
                confidence = top.confidence,
                candidates = ranked.len(),
                "Scored frame"
            );
        }
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::VisualPattern::*;
    use crate::jitter::{NoJitter, SeededJitter};
    use approx::assert_relative_eq;

    fn late_blight_features() -> FeatureVector {
        FeatureVector::default()
            .with(BrownSpots, 0.8)
            .with(YellowEdges, 0.1)
            .with(HealthyGreen, 0.1)
            .with(WaterSoaked, 0.7)
            .with(BlackSpots, 0.1)
    }

    #[test]
    fn test_healthy_match_score() {
        let table = DiseaseTable::builtin();
        let healthy = table.healthy_record(Crop::Tomato).unwrap();
        let features = FeatureVector::default().with(HealthyGreen, 0.9);
        let score = match_score(healthy, &features, &ScoringTunables::default());
        assert_relative_eq!(score.raw, 90.0, epsilon = 1e-9);
        assert_eq!(score.max, 100.0);
        assert_eq!(score.penalty, 1.0);
    }

    #[test]
    fn test_pattern_match_score() {
        let table = DiseaseTable::builtin();
        let (_, early) = table.disease_by_id("tomato_early_blight").unwrap();
        let score = match_score(early, &late_blight_features(), &ScoringTunables::default());
        // (0.8 + 0.1) * 100 over 200
        assert_relative_eq!(score.raw, 90.0, epsilon = 1e-9);
        assert_eq!(score.max, 200.0);
        assert_relative_eq!(score.percent().unwrap(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_below_ground_penalty_only_on_leaf_frames() {
        let table = DiseaseTable::builtin();
        let (_, root_rot) = table.disease_by_id("cotton_root_rot").unwrap();
        let tunables = ScoringTunables::default();

        let mut features = FeatureVector::default().with(Wilting, 0.4).with(YellowEdges, 0.6);
        assert_eq!(match_score(root_rot, &features, &tunables).penalty, 1.0);

        features.is_leaf_disease = true;
        let score = match_score(root_rot, &features, &tunables);
        assert_eq!(score.penalty, 0.3);
        assert_relative_eq!(score.adjusted(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_raw_clamps_to_zero() {
        let score = MatchScore { raw: -59.0, max: 100.0, penalty: 1.0 };
        let confidence = finalize_confidence(&score, &ScoringTunables::default(), &mut NoJitter);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_confidence_capped() {
        let score = MatchScore { raw: 300.0, max: 100.0, penalty: 1.0 };
        let mut jitter = SeededJitter::new(3);
        let confidence = finalize_confidence(&score, &ScoringTunables::default(), &mut jitter);
        assert_eq!(confidence, 95.0);
    }

    #[test]
    fn test_zero_max_uses_fallback_jitter() {
        let score = MatchScore { raw: 0.0, max: 0.0, penalty: 1.0 };
        let tunables = ScoringTunables::default();
        assert_eq!(finalize_confidence(&score, &tunables, &mut NoJitter), 0.0);

        let mut jitter = SeededJitter::new(11);
        for _ in 0..50 {
            let c = finalize_confidence(&score, &tunables, &mut jitter);
            assert!((0.0..20.0).contains(&c));
        }
    }

    #[test]
    fn test_ties_keep_table_order() {
        let table = DiseaseTable::builtin();
        let ranked = score_diseases(
            "rice",
            &FeatureVector::default(),
            &table,
            &ScoringTunables::without_jitter(),
            &mut NoJitter,
        );
        // every candidate scores 0 on an empty frame
        let ids: Vec<&str> = ranked.iter().map(|c| c.record.id.as_str()).collect();
        let table_ids: Vec<&str> = table.for_crop(Crop::Rice).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, table_ids);
    }

    #[test]
    fn test_unknown_crop_scores_nothing() {
        let table = DiseaseTable::builtin();
        let ranked = score_diseases(
            "banana",
            &late_blight_features(),
            &table,
            &ScoringTunables::default(),
            &mut SeededJitter::new(1),
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_disease_scorer_wraps_table() {
        let scorer = DiseaseScorer::new(Arc::new(DiseaseTable::builtin()), ScoringTunables::without_jitter());
        let ranked = scorer.score(Crop::Tomato, &late_blight_features(), &mut NoJitter);
        assert_eq!(ranked.len(), 10);
        // single-pattern brownSpots match outranks the two-pattern blight match
        assert_eq!(ranked[0].record.id, "tomato_target_spot");
        assert_relative_eq!(ranked[0].confidence, 80.0, epsilon = 1e-9);
        assert_eq!(ranked[1].record.id, "tomato_late_blight");
        assert_relative_eq!(ranked[1].confidence, 75.0, epsilon = 1e-9);
        assert_eq!(ranked[1].severity_level, SeverityLevel::High);
    }
}
