//! The questionnaire intake as submitted by the front end.
//!
//! Every field is optional on the wire; absent answers deserialize to their
//! defaults and are rendered as placeholders when the prompt is built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The full set of questionnaire answers for one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthIntake {
    pub personal_info: PersonalInfo,
    pub lifestyle: Lifestyle,
    /// Selected symptom labels; unique and order-insignificant.
    pub symptoms: BTreeSet<String>,
    pub medical_history: MedicalHistory,
}

/// Step 1. Numeric answers arrive as strings and are never range-checked
/// here; interpretation is the analysis model's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
}

/// Step 2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lifestyle {
    pub activity_level: String,
    /// Hours per night from the 4..=12 slider.
    pub sleep_hours: Option<u8>,
    pub stress_level: String,
    pub smoking_status: String,
    pub alcohol_status: String,
}

/// Step 4.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalHistory {
    pub blood_pressure: String,
    pub diabetes: String,
    pub heart_disease: String,
    pub medications: String,
}
