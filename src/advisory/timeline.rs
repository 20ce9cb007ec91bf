//! Untreated progression timeline for a diagnosed disease

use crate::database::DiseaseRecord;
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Spreads in 3 days or less
    Urgent,
    /// 4-7 days
    Moderate,
    Slow,
}

impl Urgency {
    pub fn from_days(days: u32) -> Self {
        match days {
            0..=3 => Urgency::Urgent,
            4..=7 => Urgency::Moderate,
            _ => Urgency::Slow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Current,
    Warning,
    Danger,
    Critical,
}

impl StageStatus {
    pub fn description(&self) -> &'static str {
        match self {
            StageStatus::Current => "Disease detected - Treatment possible",
            StageStatus::Warning => "Early spread to adjacent leaves",
            StageStatus::Danger => "Significant damage, spread accelerating",
            StageStatus::Critical => "Critical damage, may affect yield",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStage {
    /// Days from detection
    pub day: u32,
    pub status: StageStatus,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionTimeline {
    pub disease_id: String,
    pub days: u32,
    pub urgency: Urgency,
    pub summary: String,
    pub stages: [TimelineStage; 4],
}

impl ProgressionTimeline {
    /// `None` when the record has no progression (healthy)
    pub fn for_record(record: &DiseaseRecord) -> Option<Self> {
        Self::build(record, None)
    }

    /// Same as [`for_record`](Self::for_record), with calendar dates from `detected`
    pub fn dated(record: &DiseaseRecord, detected: NaiveDate) -> Option<Self> {
        Self::build(record, Some(detected))
    }

    fn build(record: &DiseaseRecord, detected: Option<NaiveDate>) -> Option<Self> {
        let progression = record.progression.as_ref()?;
        let days = progression.days;

        let stage = |day: u32, status: StageStatus| TimelineStage {
            day,
            status,
            description: status.description(),
            date: detected.and_then(|d| d.checked_add_days(Days::new(u64::from(day)))),
        };

        Some(Self {
            disease_id: record.id.clone(),
            days,
            urgency: Urgency::from_days(days),
            summary: progression.description.clone(),
            stages: [
                stage(0, StageStatus::Current),
                stage(days.div_ceil(3), StageStatus::Warning),
                stage(ceil_div_1_5(days), StageStatus::Danger),
                stage(days, StageStatus::Critical),
            ],
        })
    }

    pub fn is_urgent(&self) -> bool {
        self.urgency == Urgency::Urgent
    }
}

/// ceil(days / 1.5) in integer arithmetic
fn ceil_div_1_5(days: u32) -> u32 {
    days - days / 3
}
