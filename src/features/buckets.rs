//! Color bucket classification
//!
//! Each pixel lands in zero or more of six buckets by fixed RGB range tests.
//! Bounds are exclusive on both sides. Buckets overlap on purpose: a mid
//! brown pixel can count as brown, dark-brown and water-soaked at once.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    /// Severe / late-stage lesions
    DarkBrown,
    /// Blight and rust-type spotting
    Brown,
    /// Chlorosis
    Yellow,
    /// Healthy tissue
    Green,
    /// Powdery mildew / mold
    White,
    /// Wet, soggy lesions
    WaterSoaked,
}

impl ColorBucket {
    pub const ALL: [ColorBucket; 6] = [
        ColorBucket::DarkBrown,
        ColorBucket::Brown,
        ColorBucket::Yellow,
        ColorBucket::Green,
        ColorBucket::White,
        ColorBucket::WaterSoaked,
    ];

    #[inline]
    pub fn contains(&self, [r, g, b]: [u8; 3]) -> bool {
        match self {
            ColorBucket::DarkBrown => r > 40 && r < 120 && g > 30 && g < 90 && b < 70,
            ColorBucket::Brown => r > 100 && r < 180 && g > 50 && g < 130 && b < 90,
            ColorBucket::Yellow => r > 160 && g > 160 && b < 120,
            ColorBucket::Green => g > r && g > b && g > 80,
            ColorBucket::White => r > 200 && g > 200 && b > 200,
            ColorBucket::WaterSoaked => {
                r > 50 && r < 130 && g > 60 && g < 120 && b > 40 && b < 100
            }
        }
    }
}

/// Per-bucket pixel counts over one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub dark_brown: u32,
    pub brown: u32,
    pub yellow: u32,
    pub green: u32,
    pub white: u32,
    pub water_soaked: u32,
    pub total: u32,
}

impl BucketCounts {
    #[inline]
    pub fn add_pixel(&mut self, rgb: [u8; 3]) {
        self.total += 1;
        self.dark_brown += ColorBucket::DarkBrown.contains(rgb) as u32;
        self.brown += ColorBucket::Brown.contains(rgb) as u32;
        self.yellow += ColorBucket::Yellow.contains(rgb) as u32;
        self.green += ColorBucket::Green.contains(rgb) as u32;
        self.white += ColorBucket::White.contains(rgb) as u32;
        self.water_soaked += ColorBucket::WaterSoaked.contains(rgb) as u32;
    }

    /// Divide by total pixel count; an empty frame gives all-zero ratios
    pub fn ratios(&self) -> BucketRatios {
        if self.total == 0 {
            return BucketRatios::default();
        }
        let total = self.total as f64;
        BucketRatios {
            dark_brown: self.dark_brown as f64 / total,
            brown: self.brown as f64 / total,
            yellow: self.yellow as f64 / total,
            green: self.green as f64 / total,
            white: self.white as f64 / total,
            water_soaked: self.water_soaked as f64 / total,
        }
    }
}

/// Normalized bucket ratios, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRatios {
    pub dark_brown: f64,
    pub brown: f64,
    pub yellow: f64,
    pub green: f64,
    pub white: f64,
    pub water_soaked: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_colors() {
        assert!(ColorBucket::Green.contains([30, 160, 40]));
        assert!(ColorBucket::White.contains([230, 230, 230]));
        assert!(ColorBucket::Yellow.contains([220, 210, 60]));
        assert!(!ColorBucket::Green.contains([0, 0, 0]));
        assert!(ColorBucket::ALL.iter().all(|b| !b.contains([0, 0, 0])));
    }

    #[test]
    fn test_bounds_are_exclusive() {
        // r == 40 sits on the dark-brown lower bound
        assert!(!ColorBucket::DarkBrown.contains([40, 60, 20]));
        assert!(ColorBucket::DarkBrown.contains([41, 60, 20]));
        // g must strictly exceed both other channels
        assert!(!ColorBucket::Green.contains([100, 100, 50]));
    }

    #[test]
    fn test_buckets_overlap() {
        // Mid brown hits brown, dark-brown and water-soaked together
        let rgb = [110, 70, 50];
        assert!(ColorBucket::Brown.contains(rgb));
        assert!(ColorBucket::DarkBrown.contains(rgb));
        assert!(ColorBucket::WaterSoaked.contains(rgb));
    }

    #[test]
    fn test_counts_to_ratios() {
        let mut counts = BucketCounts::default();
        counts.add_pixel([30, 160, 40]);
        counts.add_pixel([30, 160, 40]);
        counts.add_pixel([230, 230, 230]);
        counts.add_pixel([0, 0, 0]);
        let ratios = counts.ratios();
        assert_eq!(ratios.green, 0.5);
        assert_eq!(ratios.white, 0.25);
        assert_eq!(ratios.brown, 0.0);
    }

    #[test]
    fn test_empty_counts() {
        assert_eq!(BucketCounts::default().ratios(), BucketRatios::default());
    }
}
