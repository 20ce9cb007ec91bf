//! Tunables
//!
//! The reference constants (leaf penalty 0.3, blight amplifier ×1.5, jitter
//! ranges, ...) were picked for demo plausibility rather than fitted to any
//! labelled dataset, so every one of them is exposed here. Defaults equal the
//! reference values; a JSON file may override any subset.

use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Thresholds and amplifiers used when deriving named features from bucket ratios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorTunables {
    /// Side length of the square analysis grid
    pub resolution: u32,
    /// brown or dark-brown ratio above which a lesion counts as significant
    pub lesion_ratio: f64,
    /// green ratio above which the frame is taken to show a leaf
    pub leaf_green_ratio: f64,
    /// dark-brown ratio above which the frame is severe
    pub severe_dark_ratio: f64,
    /// brown or dark-brown ratio above which blight is suspected
    pub blight_ratio: f64,
    /// green ratio below which blight is suspected
    pub blight_max_green: f64,
    pub blight_amplifier: f64,
    pub rust_factor: f64,
    pub black_spot_factor: f64,
    pub wilting_factor: f64,
    pub water_soaked_factor: f64,
}

impl Default for ExtractorTunables {
    fn default() -> Self {
        Self {
            resolution: 64,
            lesion_ratio: 0.05,
            leaf_green_ratio: 0.2,
            severe_dark_ratio: 0.15,
            blight_ratio: 0.1,
            blight_max_green: 0.7,
            blight_amplifier: 1.5,
            rust_factor: 0.9,
            black_spot_factor: 1.2,
            wilting_factor: 0.6,
            water_soaked_factor: 1.3,
        }
    }
}

/// Constants of the rule-based scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringTunables {
    /// Multiplier for below-ground diseases when the frame shows a leaf
    pub leaf_penalty: f64,
    pub healthy_green_weight: f64,
    pub healthy_brown_weight: f64,
    pub healthy_black_weight: f64,
    /// Upper clamp applied after jitter
    pub confidence_cap: f64,
    /// Jitter upper bound (exclusive) for normal candidates
    pub jitter_range: f64,
    /// Jitter upper bound (exclusive) when a candidate has no attainable score
    pub fallback_jitter_range: f64,
}

impl Default for ScoringTunables {
    fn default() -> Self {
        Self {
            leaf_penalty: 0.3,
            healthy_green_weight: 100.0,
            healthy_brown_weight: 80.0,
            healthy_black_weight: 50.0,
            confidence_cap: 95.0,
            jitter_range: 10.0,
            fallback_jitter_range: 20.0,
        }
    }
}

impl ScoringTunables {
    /// Same arithmetic, no noise
    pub fn without_jitter() -> Self {
        Self {
            jitter_range: 0.0,
            fallback_jitter_range: 0.0,
            ..Self::default()
        }
    }
}

/// Full configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScorerConfig {
    pub extractor: ExtractorTunables,
    pub scoring: ScoringTunables,
}

impl ScorerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scorer config: {:?}", path))?;

        let config: ScorerConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse scorer config JSON")?;

        config.validate()?;
        tracing::info!("Loaded scorer config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extractor.resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }

        let e = &self.extractor;
        let s = &self.scoring;
        let values: [(&'static str, f64); 17] = [
            ("lesionRatio", e.lesion_ratio),
            ("leafGreenRatio", e.leaf_green_ratio),
            ("severeDarkRatio", e.severe_dark_ratio),
            ("blightRatio", e.blight_ratio),
            ("blightMaxGreen", e.blight_max_green),
            ("blightAmplifier", e.blight_amplifier),
            ("rustFactor", e.rust_factor),
            ("blackSpotFactor", e.black_spot_factor),
            ("wiltingFactor", e.wilting_factor),
            ("waterSoakedFactor", e.water_soaked_factor),
            ("leafPenalty", s.leaf_penalty),
            ("healthyGreenWeight", s.healthy_green_weight),
            ("healthyBrownWeight", s.healthy_brown_weight),
            ("healthyBlackWeight", s.healthy_black_weight),
            ("confidenceCap", s.confidence_cap),
            ("jitterRange", s.jitter_range),
            ("fallbackJitterRange", s.fallback_jitter_range),
        ];

        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        // a penalty above 1 would boost below-ground diseases on leaf frames
        if s.leaf_penalty > 1.0 {
            return Err(ConfigError::PenaltyAboveOne(s.leaf_penalty));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = ScorerConfig::default();
        assert_eq!(config.extractor.resolution, 64);
        assert_eq!(config.scoring.leaf_penalty, 0.3);
        assert_eq!(config.scoring.confidence_cap, 95.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{ "scoring": { "jitterRange": 0.0, "leafPenalty": 0.5 } }"#;
        let config: ScorerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scoring.jitter_range, 0.0);
        assert_eq!(config.scoring.leaf_penalty, 0.5);
        assert_eq!(config.scoring.fallback_jitter_range, 20.0);
        assert_eq!(config.extractor, ExtractorTunables::default());
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let mut config = ScorerConfig::default();
        config.scoring.jitter_range = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative { name: "jitterRange", value: -1.0 })
        );

        let mut config = ScorerConfig::default();
        config.extractor.resolution = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroResolution));
    }

    #[test]
    fn test_validate_rejects_boosting_leaf_penalty() {
        let json = r#"{ "scoring": { "leafPenalty": 3.0 } }"#;
        let config: ScorerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::PenaltyAboveOne(3.0)));

        let mut config = ScorerConfig::default();
        config.scoring.leaf_penalty = 1.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = ScorerConfig::load(Path::new("/nonexistent/scorer.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read scorer config"));
    }
}
