//! Threshold Pattern Matcher
//!
//! A simpler, noise-free alternative to the scorer used for quick lookups:
//! a pattern only contributes when its feature value clears a fixed
//! threshold, and the healthy record is all-or-nothing.

use crate::database::{DiseaseRecord, DiseaseTable, VisualPattern};
use crate::features::FeatureVector;
use crate::scorer::ScoredCandidate;

/// Feature values at or below this are treated as absent
pub const PATTERN_THRESHOLD: f64 = 0.3;

const HEALTHY_MATCH: f64 = 0.9;
const HEALTHY_MISMATCH: f64 = 0.1;

/// Match fraction of one record
///
/// Healthy record: 0.9 unless any feature exceeds the threshold or either
/// lesion flag is set, then 0.1.
/// Otherwise: sum of the above-threshold pattern values over the pattern count.
pub fn calculate_disease_match(features: &FeatureVector, record: &DiseaseRecord) -> f64 {
    if record.visual_patterns.is_empty() {
        let has_issues = features.is_leaf_disease
            || features.is_severe
            || VisualPattern::ALL
                .iter()
                .any(|&p| features.get(p) > PATTERN_THRESHOLD);
        return if has_issues { HEALTHY_MISMATCH } else { HEALTHY_MATCH };
    }

    let matched: f64 = record
        .visual_patterns
        .iter()
        .map(|&p| features.get(p))
        .filter(|&v| v > PATTERN_THRESHOLD)
        .sum();

    matched / record.visual_patterns.len() as f64
}

/// Best `top_n` matches for a crop, confidence = round(match × 100)
pub fn find_matching_diseases(
    table: &DiseaseTable,
    crop_id: &str,
    features: &FeatureVector,
    top_n: usize,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<(f64, &DiseaseRecord)> = table
        .diseases_for(crop_id)
        .iter()
        .map(|d| (calculate_disease_match(features, d), d))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(top_n)
        .map(|(m, d)| ScoredCandidate::new(d, (m * 100.0).round()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::VisualPattern::*;

    #[test]
    fn test_healthy_all_or_nothing() {
        let table = DiseaseTable::builtin();
        let healthy = &table.diseases_for("apple")[0];

        let clean = FeatureVector::default().with(BrownSpots, 0.2);
        assert_eq!(calculate_disease_match(&clean, healthy), 0.9);

        let spotted = FeatureVector::default().with(BrownSpots, 0.31);
        assert_eq!(calculate_disease_match(&spotted, healthy), 0.1);
    }

    #[test]
    fn test_healthy_mismatch_on_lesion_flags() {
        let table = DiseaseTable::builtin();
        let healthy = &table.diseases_for("tomato")[0];
        let quiet = FeatureVector::default().with(BrownSpots, 0.1).with(HealthyGreen, 0.25);
        assert_eq!(calculate_disease_match(&quiet, healthy), 0.9);

        let leaf = FeatureVector { is_leaf_disease: true, ..quiet };
        assert_eq!(calculate_disease_match(&leaf, healthy), 0.1);

        let severe = FeatureVector { is_severe: true, ..quiet };
        assert_eq!(calculate_disease_match(&severe, healthy), 0.1);
    }

    #[test]
    fn test_below_threshold_patterns_ignored() {
        let table = DiseaseTable::builtin();
        let (_, scab) = table.disease_by_id("apple_scab").unwrap();
        let features = FeatureVector::default().with(BrownSpots, 0.6).with(BlackSpots, 0.3);
        // black spots sits exactly on the threshold and is dropped
        assert_eq!(calculate_disease_match(&features, scab), 0.3);
    }

    #[test]
    fn test_find_matching_diseases_top_n() {
        let table = DiseaseTable::builtin();
        let features = FeatureVector::default().with(WhiteMold, 0.8);
        let top = find_matching_diseases(&table, "grape", &features, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].record.id, "grape_powdery_mildew");
        assert_eq!(top[0].confidence, 80.0);
        assert_eq!(top[1].record.id, "grape_downy_mildew");
        assert_eq!(top[1].confidence, 40.0);
    }

    #[test]
    fn test_find_matching_diseases_unknown_crop() {
        let table = DiseaseTable::builtin();
        assert!(find_matching_diseases(&table, "banana", &FeatureVector::default(), 3).is_empty());
    }
}
