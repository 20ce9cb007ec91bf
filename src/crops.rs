//! Supported Crops
//!
//! Closed set of crop identifiers matching the keys of the disease table.
//! Unknown identifiers are not an error anywhere in the crate: lookups simply
//! return `None` and callers fall through to an empty candidate list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Crop identifier (string enum in the public API)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Tomato,
    Potato,
    Corn,
    Apple,
    Grape,
    Rice,
    Wheat,
    Cotton,
}

impl Crop {
    /// All crops in table order
    pub const ALL: [Crop; 8] = [
        Crop::Tomato,
        Crop::Potato,
        Crop::Corn,
        Crop::Apple,
        Crop::Grape,
        Crop::Rice,
        Crop::Wheat,
        Crop::Cotton,
    ];

    /// Parse a crop id ("tomato", "corn", ...). Exact match only.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "tomato" => Some(Crop::Tomato),
            "potato" => Some(Crop::Potato),
            "corn" => Some(Crop::Corn),
            "apple" => Some(Crop::Apple),
            "grape" => Some(Crop::Grape),
            "rice" => Some(Crop::Rice),
            "wheat" => Some(Crop::Wheat),
            "cotton" => Some(Crop::Cotton),
            _ => None,
        }
    }

    /// Stable identifier used as the table key
    pub fn id(&self) -> &'static str {
        match self {
            Crop::Tomato => "tomato",
            Crop::Potato => "potato",
            Crop::Corn => "corn",
            Crop::Apple => "apple",
            Crop::Grape => "grape",
            Crop::Rice => "rice",
            Crop::Wheat => "wheat",
            Crop::Cotton => "cotton",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Crop::Tomato => "Tomato",
            Crop::Potato => "Potato",
            Crop::Corn => "Corn/Maize",
            Crop::Apple => "Apple",
            Crop::Grape => "Grape",
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Cotton => "Cotton",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
