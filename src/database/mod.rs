//! Disease Candidate Database
//!
//! Per-crop tables of disease records (one healthy record plus the diseases
//! each crop is scanned for). The table is an explicitly constructed,
//! immutable value: build it once with [`DiseaseTable::builtin`] (or load a
//! fixture with [`DiseaseTable::load`]) and pass it by reference to the scorer.

mod builtin;

use crate::crops::Crop;
use crate::error::TableError;
use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Fixed vocabulary of visual feature names a disease can correlate with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualPattern {
    BrownSpots,
    YellowEdges,
    WhiteMold,
    HealthyGreen,
    RustColor,
    BlackSpots,
    Wilting,
    WaterSoaked,
}

impl VisualPattern {
    pub const ALL: [VisualPattern; 8] = [
        VisualPattern::BrownSpots,
        VisualPattern::YellowEdges,
        VisualPattern::WhiteMold,
        VisualPattern::HealthyGreen,
        VisualPattern::RustColor,
        VisualPattern::BlackSpots,
        VisualPattern::Wilting,
        VisualPattern::WaterSoaked,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VisualPattern::BrownSpots => "brownSpots",
            VisualPattern::YellowEdges => "yellowEdges",
            VisualPattern::WhiteMold => "whiteMold",
            VisualPattern::HealthyGreen => "healthyGreen",
            VisualPattern::RustColor => "rustColor",
            VisualPattern::BlackSpots => "blackSpots",
            VisualPattern::Wilting => "wilting",
            VisualPattern::WaterSoaked => "waterSoaked",
        }
    }
}

/// Coarse severity bucket derived from the numeric 0-10 severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    None,
    Low,
    Medium,
    High,
}

impl SeverityLevel {
    /// none (0), low (1-3), medium (4-7), high (8-10)
    pub fn from_severity(severity: u8) -> Self {
        match severity {
            0 => SeverityLevel::None,
            1..=3 => SeverityLevel::Low,
            4..=7 => SeverityLevel::Medium,
            _ => SeverityLevel::High,
        }
    }
}

/// Plant part a disease primarily shows on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnatomicalSite {
    #[default]
    Leaf,
    Root,
    Tuber,
    Stem,
    Fruit,
}

impl AnatomicalSite {
    /// Root and tuber diseases are implausible when the frame clearly shows a leaf
    pub fn is_below_ground(&self) -> bool {
        matches!(self, AnatomicalSite::Root | AnatomicalSite::Tuber)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub organic: String,
    pub chemical: String,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// Expected progression if left untreated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub days: u32,
    pub description: String,
}

/// One disease (or the healthy state) for one crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRecord {
    pub id: String,
    pub name: String,
    /// 0-10, 0 reserved for healthy
    pub severity: u8,
    #[serde(default)]
    pub anatomical_site: AnatomicalSite,
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Empty only for the healthy record
    #[serde(default)]
    pub visual_patterns: SmallVec<[VisualPattern; 4]>,
    pub treatment: Treatment,
    #[serde(default)]
    pub progression: Option<Progression>,
    #[serde(default)]
    pub prevention_tips: Vec<String>,
}

impl DiseaseRecord {
    pub fn severity_level(&self) -> SeverityLevel {
        SeverityLevel::from_severity(self.severity)
    }

    pub fn is_healthy(&self) -> bool {
        self.visual_patterns.is_empty()
    }
}

/// Immutable crop → disease records table
#[derive(Debug, Clone, Default)]
pub struct DiseaseTable {
    crops: FxHashMap<Crop, Vec<DiseaseRecord>>,
}

impl DiseaseTable {
    /// The embedded 8-crop table
    pub fn builtin() -> Self {
        Self::from_records(builtin::records())
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (Crop, Vec<DiseaseRecord>)>,
    {
        Self {
            crops: records.into_iter().collect(),
        }
    }

    /// Parse a JSON object keyed by crop id and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<DiseaseRecord>> =
            serde_json::from_str(json).with_context(|| "Failed to parse disease table JSON")?;

        let mut crops = FxHashMap::default();
        for (key, records) in raw {
            let crop = Crop::from_id(&key).ok_or(TableError::UnknownCrop(key))?;
            crops.insert(crop, records);
        }

        let table = Self { crops };
        table.validate()?;
        Ok(table)
    }

    /// Load a fixture table from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read disease table: {:?}", path))?;
        let table = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid disease table: {:?}", path))?;
        tracing::info!(
            crops = table.crops.len(),
            records = table.record_count(),
            "Loaded disease table from {:?}",
            path
        );
        Ok(table)
    }

    /// Records for a crop, in table order
    pub fn for_crop(&self, crop: Crop) -> &[DiseaseRecord] {
        self.crops.get(&crop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records for a crop id; unknown ids yield an empty slice
    pub fn diseases_for(&self, crop_id: &str) -> &[DiseaseRecord] {
        Crop::from_id(crop_id)
            .map(|crop| self.for_crop(crop))
            .unwrap_or(&[])
    }

    pub fn disease_by_id(&self, disease_id: &str) -> Option<(Crop, &DiseaseRecord)> {
        Crop::ALL.iter().find_map(|&crop| {
            self.for_crop(crop)
                .iter()
                .find(|d| d.id == disease_id)
                .map(|d| (crop, d))
        })
    }

    pub fn healthy_record(&self, crop: Crop) -> Option<&DiseaseRecord> {
        self.for_crop(crop).iter().find(|d| d.is_healthy())
    }

    /// Crops present in this table, in canonical order
    pub fn crops(&self) -> impl Iterator<Item = Crop> + '_ {
        Crop::ALL.into_iter().filter(|c| self.crops.contains_key(c))
    }

    /// Crops of the fixed enum with no entry in this table
    pub fn missing_crops(&self) -> Vec<Crop> {
        Crop::ALL
            .into_iter()
            .filter(|c| !self.crops.contains_key(c))
            .collect()
    }

    pub fn record_count(&self) -> usize {
        self.crops.values().map(Vec::len).sum()
    }

    /// Check per-crop invariants for every crop present
    ///
    /// - at least one record
    /// - exactly one healthy record (empty visual patterns), with severity 0
    /// - every severity within 0-10
    /// - ids unique within the crop
    pub fn validate(&self) -> Result<(), TableError> {
        for crop in self.crops() {
            let records = self.for_crop(crop);
            let crop_id = crop.id().to_string();

            if records.is_empty() {
                return Err(TableError::EmptyCrop { crop: crop_id });
            }

            let healthy: Vec<&DiseaseRecord> = records.iter().filter(|d| d.is_healthy()).collect();
            if healthy.len() != 1 {
                return Err(TableError::HealthyCount {
                    crop: crop_id,
                    count: healthy.len(),
                });
            }
            if healthy[0].severity != 0 {
                return Err(TableError::HealthySeverity {
                    crop: crop_id,
                    id: healthy[0].id.clone(),
                    severity: healthy[0].severity,
                });
            }

            let mut seen = FxHashSet::default();
            for record in records {
                if record.severity > 10 {
                    return Err(TableError::SeverityOutOfRange {
                        id: record.id.clone(),
                        severity: record.severity,
                    });
                }
                if !seen.insert(record.id.as_str()) {
                    return Err(TableError::DuplicateId {
                        crop: crop_id,
                        id: record.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
