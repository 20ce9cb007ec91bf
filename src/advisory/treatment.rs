//! Treatment plan for a diagnosed disease

use crate::database::DiseaseRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Litres of spray mix per acre
pub const SPRAY_LITRES_PER_ACRE: f64 = 200.0;

pub const MIN_FIELD_ACRES: f64 = 0.1;

/// Used when the field size is missing (zero or NaN)
pub const DEFAULT_FIELD_ACRES: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentKind {
    Organic,
    #[default]
    Chemical,
}

impl FromStr for TreatmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "organic" => Ok(TreatmentKind::Organic),
            "chemical" => Ok(TreatmentKind::Chemical),
            other => Err(format!("unknown treatment '{}' (expected organic or chemical)", other)),
        }
    }
}

impl fmt::Display for TreatmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TreatmentKind::Organic => "organic",
            TreatmentKind::Chemical => "chemical",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "status")]
pub enum TreatmentPlan {
    /// Healthy crop: maintenance advice only
    NoTreatmentNeeded {
        advice: String,
        prevention_tips: Vec<String>,
    },
    Treat {
        disease_id: String,
        kind: TreatmentKind,
        instructions: String,
        dosage: Option<String>,
        frequency: Option<String>,
        field_acres: f64,
        /// Rounded to whole litres
        spray_litres: f64,
        prevention_tips: Vec<String>,
    },
}

impl TreatmentPlan {
    pub fn for_record(record: &DiseaseRecord, kind: TreatmentKind, field_acres: f64) -> Self {
        if record.is_healthy() {
            return TreatmentPlan::NoTreatmentNeeded {
                advice: record.treatment.organic.clone(),
                prevention_tips: record.prevention_tips.clone(),
            };
        }

        let field_acres = clamp_acres(field_acres);
        let instructions = match kind {
            TreatmentKind::Organic => &record.treatment.organic,
            TreatmentKind::Chemical => &record.treatment.chemical,
        };

        TreatmentPlan::Treat {
            disease_id: record.id.clone(),
            kind,
            instructions: instructions.clone(),
            dosage: record.treatment.dosage.clone(),
            frequency: record.treatment.frequency.clone(),
            field_acres,
            spray_litres: spray_volume_litres(field_acres),
            prevention_tips: record.prevention_tips.clone(),
        }
    }

    pub fn needs_treatment(&self) -> bool {
        matches!(self, TreatmentPlan::Treat { .. })
    }
}

/// Zero or NaN means "not given" and becomes one acre; anything else is
/// raised to the minimum
pub fn clamp_acres(acres: f64) -> f64 {
    if acres.is_nan() || acres == 0.0 {
        DEFAULT_FIELD_ACRES
    } else {
        acres.max(MIN_FIELD_ACRES)
    }
}

pub fn spray_volume_litres(acres: f64) -> f64 {
    (clamp_acres(acres) * SPRAY_LITRES_PER_ACRE).round()
}
