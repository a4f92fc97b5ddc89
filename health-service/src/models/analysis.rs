//! The wellness report produced by the model.
//!
//! This is the trust boundary for provider output: the decoded JSON is
//! accepted into these types with every field defaultable and unknown enum
//! strings captured instead of rejected. Only a body that is not valid JSON
//! at all fails the decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed disclaimer attached to every report.
pub const DISCLAIMER: &str = "Analisis AI Gemini. Tetap konsultasi ke dokter asli.";

/// A finished analysis: the decoded provider output plus the fields stamped
/// by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub analysis: HealthAnalysis,
    /// When this service received the analysis (ISO-8601).
    pub analyzed_at: DateTime<Utc>,
    pub disclaimer: String,
}

/// The provider-controlled report body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthAnalysis {
    /// 0-100.
    pub overall_score: u8,
    pub risk_level: RiskLevel,
    pub categories: Categories,
    pub bmi: BmiReport,
    pub immediate_concerns: Vec<String>,
    pub lifestyle_recommendations: Vec<String>,
    pub when_to_see_doctor: Vec<String>,
    pub summary: String,
    pub next_steps: Vec<String>,
}

/// The four fixed report categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Categories {
    pub cardiovascular: CategoryReport,
    pub metabolic: CategoryReport,
    pub lifestyle: CategoryReport,
    pub mental: CategoryReport,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryReport {
    /// 0-100.
    pub score: u8,
    pub status: CategoryStatus,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BmiReport {
    pub value: f64,
    pub category: BmiCategory,
    pub recommendation: String,
}

/// Coarse ordinal classification of overall risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    /// Anything outside the declared set; presented neutrally.
    #[serde(untagged)]
    Other(String),
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Other(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(untagged)]
    Other(String),
}

impl Default for CategoryStatus {
    fn default() -> Self {
        CategoryStatus::Other(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    #[serde(untagged)]
    Other(String),
}

impl Default for BmiCategory {
    fn default() -> Self {
        BmiCategory::Other(String::new())
    }
}
