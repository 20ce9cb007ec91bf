//! Visual Feature Extractor
//!
//! Downsamples a frame to a small square grid, counts pixels per color bucket
//! and turns the ratios into the named features the scorer matches against.
//!
//! Pure computation with no error path: empty or degenerate frames produce an
//! all-zero vector rather than a failure.

pub mod buckets;

pub use buckets::{BucketCounts, BucketRatios, ColorBucket};

use crate::config::ExtractorTunables;
use crate::database::VisualPattern;
use image::imageops::{self, FilterType};
use image::RgbImage;
use serde::Serialize;

/// Named feature values for one analyzed frame
///
/// Ratios are in [0, 1] before amplification; `brown_spots`, `black_spots` and
/// `water_soaked` can exceed 1 once their amplifiers apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub brown_spots: f64,
    pub yellow_edges: f64,
    pub white_mold: f64,
    pub healthy_green: f64,
    pub rust_color: f64,
    pub black_spots: f64,
    pub wilting: f64,
    pub water_soaked: f64,
    /// Lesions present on tissue that is still mostly green
    pub is_leaf_disease: bool,
    pub is_severe: bool,
}

impl FeatureVector {
    pub fn get(&self, pattern: VisualPattern) -> f64 {
        match pattern {
            VisualPattern::BrownSpots => self.brown_spots,
            VisualPattern::YellowEdges => self.yellow_edges,
            VisualPattern::WhiteMold => self.white_mold,
            VisualPattern::HealthyGreen => self.healthy_green,
            VisualPattern::RustColor => self.rust_color,
            VisualPattern::BlackSpots => self.black_spots,
            VisualPattern::Wilting => self.wilting,
            VisualPattern::WaterSoaked => self.water_soaked,
        }
    }

    /// Builder-style setter, mostly for fixtures
    pub fn with(mut self, pattern: VisualPattern, value: f64) -> Self {
        let slot = match pattern {
            VisualPattern::BrownSpots => &mut self.brown_spots,
            VisualPattern::YellowEdges => &mut self.yellow_edges,
            VisualPattern::WhiteMold => &mut self.white_mold,
            VisualPattern::HealthyGreen => &mut self.healthy_green,
            VisualPattern::RustColor => &mut self.rust_color,
            VisualPattern::BlackSpots => &mut self.black_spots,
            VisualPattern::Wilting => &mut self.wilting,
            VisualPattern::WaterSoaked => &mut self.water_soaked,
        };
        *slot = value;
        self
    }

    /// Derive named features from bucket ratios
    pub fn from_ratios(ratios: &BucketRatios, tunables: &ExtractorTunables) -> Self {
        let has_significant_lesion =
            ratios.brown > tunables.lesion_ratio || ratios.dark_brown > tunables.lesion_ratio;
        let has_blight = (ratios.brown > tunables.blight_ratio
            || ratios.dark_brown > tunables.blight_ratio)
            && ratios.green < tunables.blight_max_green;
        let blight_amp = if has_blight { tunables.blight_amplifier } else { 1.0 };

        Self {
            brown_spots: ratios.brown.max(ratios.dark_brown) * blight_amp,
            yellow_edges: ratios.yellow,
            white_mold: ratios.white,
            healthy_green: ratios.green,
            rust_color: ratios.brown * tunables.rust_factor,
            black_spots: ratios.dark_brown * tunables.black_spot_factor,
            wilting: ratios.yellow * tunables.wilting_factor,
            water_soaked: ratios.water_soaked.max(ratios.dark_brown) * tunables.water_soaked_factor,
            is_leaf_disease: has_significant_lesion && ratios.green > tunables.leaf_green_ratio,
            is_severe: ratios.dark_brown > tunables.severe_dark_ratio,
        }
    }
}

/// Bucket ratios of `image` after bilinear resize to `resolution`×`resolution`
pub fn bucket_ratios(image: &RgbImage, resolution: u32) -> BucketRatios {
    if image.width() == 0 || image.height() == 0 || resolution == 0 {
        return BucketRatios::default();
    }

    let mut counts = BucketCounts::default();
    if image.dimensions() == (resolution, resolution) {
        image.pixels().for_each(|p| counts.add_pixel(p.0));
    } else {
        let grid = imageops::resize(image, resolution, resolution, FilterType::Triangle);
        grid.pixels().for_each(|p| counts.add_pixel(p.0));
    }
    counts.ratios()
}

/// Feature vector with the reference tunables
pub fn extract_features(image: &RgbImage, resolution: u32) -> FeatureVector {
    extract_features_with(image, resolution, &ExtractorTunables::default())
}

pub fn extract_features_with(
    image: &RgbImage,
    resolution: u32,
    tunables: &ExtractorTunables,
) -> FeatureVector {
    let ratios = bucket_ratios(image, resolution);
    let features = FeatureVector::from_ratios(&ratios, tunables);
    tracing::trace!(?ratios, "Extracted bucket ratios");
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::Rgb;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb(rgb))
    }

    /// Left `green_cols` columns green, rest brown
    fn split(green_cols: u32) -> RgbImage {
        RgbImage::from_fn(64, 64, |x, _| {
            if x < green_cols {
                Rgb([30, 160, 40])
            } else {
                Rgb([150, 90, 40])
            }
        })
    }

    #[test]
    fn test_solid_green_leaf() {
        let features = extract_features(&solid(128, 96, [30, 160, 40]), 64);
        assert_relative_eq!(features.healthy_green, 1.0);
        assert_eq!(features.brown_spots, 0.0);
        assert!(!features.is_leaf_disease);
        assert!(!features.is_severe);
    }

    #[test]
    fn test_empty_image_is_degenerate_not_error() {
        let features = extract_features(&RgbImage::new(0, 0), 64);
        assert_eq!(features, FeatureVector::default());
    }

    #[test]
    fn test_black_frame() {
        let features = extract_features(&solid(64, 64, [0, 0, 0]), 64);
        assert_eq!(features, FeatureVector::default());
    }

    #[test]
    fn test_zero_resolution() {
        let features = extract_features(&solid(10, 10, [30, 160, 40]), 0);
        assert_eq!(features, FeatureVector::default());
    }

    #[test]
    fn test_blight_amplifies_brown_spots() {
        // 25% brown, 75% green: blight (brown > 0.1, green < 0.7 fails) → no amplifier
        let features = extract_features(&split(48), 64);
        assert_relative_eq!(features.brown_spots, 0.25, epsilon = 1e-9);
        assert!(features.is_leaf_disease);

        // 50% brown, 50% green: green < 0.7 → ×1.5
        let features = extract_features(&split(32), 64);
        assert_relative_eq!(features.brown_spots, 0.75, epsilon = 1e-9);
        assert_relative_eq!(features.rust_color, 0.45, epsilon = 1e-9);
        assert!(features.is_leaf_disease);
    }

    #[test]
    fn test_from_ratios_derivations() {
        let ratios = BucketRatios {
            dark_brown: 0.2,
            brown: 0.1,
            yellow: 0.5,
            green: 0.1,
            white: 0.3,
            water_soaked: 0.05,
        };
        let f = FeatureVector::from_ratios(&ratios, &ExtractorTunables::default());
        assert_relative_eq!(f.brown_spots, 0.2 * 1.5, epsilon = 1e-12);
        assert_relative_eq!(f.black_spots, 0.2 * 1.2, epsilon = 1e-12);
        assert_relative_eq!(f.wilting, 0.5 * 0.6, epsilon = 1e-12);
        assert_relative_eq!(f.water_soaked, 0.2 * 1.3, epsilon = 1e-12);
        assert_relative_eq!(f.white_mold, 0.3);
        // not enough green to call it a leaf
        assert!(!f.is_leaf_disease);
        assert!(f.is_severe);
    }

    #[test]
    fn test_get_and_with_agree() {
        for (i, pattern) in VisualPattern::ALL.into_iter().enumerate() {
            let value = i as f64 / 10.0;
            assert_eq!(FeatureVector::default().with(pattern, value).get(pattern), value);
        }
    }
}
