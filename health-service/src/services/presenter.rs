//! Pure display mapping for a finished report.
//!
//! Scores map to severity bands via fixed thresholds; enum values map to
//! the labels and color classes the results view renders. Anything the
//! provider sends outside the declared sets presents neutrally instead of
//! failing.

use crate::models::analysis::{
    AnalysisReport, BmiCategory, CategoryReport, CategoryStatus, RiskLevel,
};

/// Severity band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else if score >= 40 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// Text color class for the rendered score.
    pub fn text_class(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "text-emerald-600",
            ScoreBand::Good => "text-yellow-600",
            ScoreBand::Fair => "text-orange-600",
            ScoreBand::Poor => "text-red-600",
        }
    }
}

pub fn risk_label(risk: &RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "Rendah",
        RiskLevel::Medium => "Sedang",
        RiskLevel::High => "Tinggi",
        RiskLevel::Critical => "Kritis",
        RiskLevel::Other(_) => "Tidak diketahui",
    }
}

pub fn risk_badge_class(risk: &RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "bg-emerald-100 text-emerald-800",
        RiskLevel::Medium => "bg-yellow-100 text-yellow-800",
        RiskLevel::High => "bg-orange-100 text-orange-800",
        RiskLevel::Critical => "bg-red-100 text-red-800",
        RiskLevel::Other(_) => "bg-gray-100 text-gray-800",
    }
}

pub fn status_label(status: &CategoryStatus) -> &'static str {
    match status {
        CategoryStatus::Excellent => "Sangat Baik",
        CategoryStatus::Good => "Baik",
        CategoryStatus::Fair => "Cukup",
        CategoryStatus::Poor => "Kurang",
        CategoryStatus::Other(_) => "Tidak diketahui",
    }
}

pub fn status_badge_class(status: &CategoryStatus) -> &'static str {
    match status {
        CategoryStatus::Excellent | CategoryStatus::Good => "bg-emerald-100 text-emerald-800",
        CategoryStatus::Fair => "bg-yellow-100 text-yellow-800",
        CategoryStatus::Poor => "bg-red-100 text-red-800",
        CategoryStatus::Other(_) => "bg-gray-100 text-gray-800",
    }
}

pub fn bmi_label(category: &BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "Kurus",
        BmiCategory::Normal => "Normal",
        BmiCategory::Overweight => "Gemuk",
        BmiCategory::Obese => "Obesitas",
        BmiCategory::Other(_) => "Tidak diketahui",
    }
}

pub fn bmi_text_class(category: &BmiCategory) -> &'static str {
    match category {
        BmiCategory::Normal => "text-emerald-600",
        BmiCategory::Overweight => "text-yellow-600",
        BmiCategory::Obese => "text-red-600",
        BmiCategory::Underweight => "text-blue-600",
        BmiCategory::Other(_) => "text-gray-600",
    }
}

/// One category card on the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub title: &'static str,
    pub score: u8,
    pub score_class: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BmiView {
    pub value: f64,
    pub label: &'static str,
    pub text_class: &'static str,
    pub recommendation: String,
}

/// Everything the results screen renders, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub overall_score: u8,
    pub overall_score_class: &'static str,
    pub risk_label: &'static str,
    pub risk_class: &'static str,
    pub summary: String,
    pub disclaimer: String,
    pub categories: Vec<CategoryView>,
    pub bmi: BmiView,
    pub immediate_concerns: Vec<String>,
    pub when_to_see_doctor: Vec<String>,
    pub lifestyle_recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

fn category_view(title: &'static str, report: &CategoryReport) -> CategoryView {
    CategoryView {
        title,
        score: report.score,
        score_class: ScoreBand::for_score(report.score).text_class(),
        status_label: status_label(&report.status),
        status_class: status_badge_class(&report.status),
        findings: report.findings.clone(),
        recommendations: report.recommendations.clone(),
    }
}

/// Map a report to its display form.
pub fn present(report: &AnalysisReport) -> ResultView {
    let analysis = &report.analysis;
    let categories = &analysis.categories;

    ResultView {
        overall_score: analysis.overall_score,
        overall_score_class: ScoreBand::for_score(analysis.overall_score).text_class(),
        risk_label: risk_label(&analysis.risk_level),
        risk_class: risk_badge_class(&analysis.risk_level),
        summary: analysis.summary.clone(),
        disclaimer: report.disclaimer.clone(),
        categories: vec![
            category_view("Kardiovaskular", &categories.cardiovascular),
            category_view("Metabolik", &categories.metabolic),
            category_view("Gaya Hidup", &categories.lifestyle),
            category_view("Kesehatan Mental", &categories.mental),
        ],
        bmi: BmiView {
            value: analysis.bmi.value,
            label: bmi_label(&analysis.bmi.category),
            text_class: bmi_text_class(&analysis.bmi.category),
            recommendation: analysis.bmi.recommendation.clone(),
        },
        immediate_concerns: analysis.immediate_concerns.clone(),
        when_to_see_doctor: analysis.when_to_see_doctor.clone(),
        lifestyle_recommendations: analysis.lifestyle_recommendations.clone(),
        next_steps: analysis.next_steps.clone(),
    }
}
