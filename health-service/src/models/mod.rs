//! Domain models for the health assessment service.

pub mod analysis;
pub mod intake;

pub use analysis::{AnalysisReport, BmiReport, CategoryReport, HealthAnalysis, DISCLAIMER};
pub use intake::{HealthIntake, Lifestyle, MedicalHistory, PersonalInfo};
