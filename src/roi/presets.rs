//! Industry presets for home-service businesses.
//!
//! A preset is a suggestion, not a mutation: looking one up and merging it
//! into an input snapshot are separate steps, and the merge is one-way.
//! Edits to lead value or conversion rate are never synced back here.

use crate::core::RoiInputs;
use serde::{Deserialize, Serialize};

/// Default lead value and conversion rate for one industry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryPreset {
    pub avg_lead_value: f64,
    pub conversion_rate: f64,
}

/// All known industry tags, in display order
pub const INDUSTRY_TAGS: &[&str] = &[
    "plumbing",
    "hvac",
    "electrician",
    "landscaping",
    "cleaning",
    "roofing",
    "painting",
    "carpentry",
    "flooring",
    "pest_control",
    "other",
];

/// Look up the preset for an industry tag.
///
/// Unknown tags return `None`; callers treat that as a no-op rather than
/// guessing a fallback.
pub fn lookup_preset(tag: &str) -> Option<IndustryPreset> {
    let preset = |avg_lead_value, conversion_rate| IndustryPreset {
        avg_lead_value,
        conversion_rate,
    };

    match tag {
        "plumbing" => Some(preset(450.0, 18.0)),
        "hvac" => Some(preset(600.0, 15.0)),
        "electrician" => Some(preset(350.0, 20.0)),
        "landscaping" => Some(preset(300.0, 22.0)),
        "cleaning" => Some(preset(250.0, 25.0)),
        "roofing" => Some(preset(1200.0, 12.0)),
        "painting" => Some(preset(800.0, 15.0)),
        "carpentry" => Some(preset(650.0, 18.0)),
        "flooring" => Some(preset(900.0, 15.0)),
        "pest_control" => Some(preset(200.0, 30.0)),
        "other" => Some(preset(500.0, 15.0)),
        _ => None,
    }
}

/// Tag/preset pairs for every known industry
pub fn all_presets() -> Vec<(&'static str, IndustryPreset)> {
    INDUSTRY_TAGS
        .iter()
        .filter_map(|tag| lookup_preset(tag).map(|p| (*tag, p)))
        .collect()
}

impl RoiInputs {
    /// Overwrite lead value and conversion rate with the preset for `tag`.
    ///
    /// Returns whether a preset was applied. An unknown tag leaves the
    /// snapshot untouched.
    pub fn apply_preset(&mut self, tag: &str) -> bool {
        match lookup_preset(tag) {
            Some(preset) => {
                self.avg_lead_value = preset.avg_lead_value;
                self.conversion_rate = preset.conversion_rate;
                true
            }
            None => false,
        }
    }
}
