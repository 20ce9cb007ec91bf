//! Advice derived from the top candidate of a diagnosis
//!
//! - `timeline`: what happens if the disease is left untreated
//! - `treatment`: what to spray, how much, how often

pub mod timeline;
pub mod treatment;

pub use timeline::{ProgressionTimeline, StageStatus, TimelineStage, Urgency};
pub use treatment::{spray_volume_litres, TreatmentKind, TreatmentPlan};

use crate::database::SeverityLevel;
use crate::scorer::ScoredCandidate;
use chrono::NaiveDate;
use serde::Serialize;

/// Field-level options for building advice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryOptions {
    pub treatment: TreatmentKind,
    pub field_acres: f64,
    /// Date the frame was taken; stages get calendar dates when set
    pub detected_on: Option<NaiveDate>,
}

impl Default for AdvisoryOptions {
    fn default() -> Self {
        Self {
            treatment: TreatmentKind::default(),
            field_acres: 1.0,
            detected_on: None,
        }
    }
}

/// Everything shown next to a diagnosis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub disease_id: String,
    pub disease_name: String,
    pub severity_level: SeverityLevel,
    pub confidence: f64,
    pub symptoms: Vec<String>,
    pub treatment: TreatmentPlan,
    pub timeline: Option<ProgressionTimeline>,
}

impl Advisory {
    pub fn for_candidate(candidate: &ScoredCandidate, options: &AdvisoryOptions) -> Self {
        let record = &candidate.record;
        let timeline = match options.detected_on {
            Some(date) => ProgressionTimeline::dated(record, date),
            None => ProgressionTimeline::for_record(record),
        };

        Self {
            disease_id: record.id.clone(),
            disease_name: record.name.clone(),
            severity_level: candidate.severity_level,
            confidence: candidate.confidence,
            symptoms: record.symptoms.clone(),
            treatment: TreatmentPlan::for_record(record, options.treatment, options.field_acres),
            timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DiseaseTable;

    #[test]
    fn test_advisory_for_disease() {
        let table = DiseaseTable::builtin();
        let (_, rust) = table.disease_by_id("wheat_rust").unwrap();
        let candidate = ScoredCandidate::new(rust, 72.0);
        let advisory = Advisory::for_candidate(&candidate, &AdvisoryOptions::default());

        assert_eq!(advisory.disease_id, "wheat_rust");
        assert!(advisory.treatment.needs_treatment());
        assert_eq!(advisory.timeline.as_ref().map(|t| t.urgency), Some(Urgency::Moderate));
    }

    #[test]
    fn test_advisory_for_healthy() {
        let table = DiseaseTable::builtin();
        let healthy = table.healthy_record(crate::crops::Crop::Cotton).unwrap();
        let advisory = Advisory::for_candidate(&ScoredCandidate::new(healthy, 90.0), &AdvisoryOptions::default());

        assert_eq!(advisory.severity_level, SeverityLevel::None);
        assert!(!advisory.treatment.needs_treatment());
        assert!(advisory.timeline.is_none());

        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["treatment"]["status"], "noTreatmentNeeded");
    }
}
