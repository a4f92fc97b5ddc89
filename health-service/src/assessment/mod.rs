//! One assessment session: form state, step navigation, and the view flow
//! that gates submission.

pub mod flow;
pub mod navigator;
pub mod store;

pub use flow::{AssessmentFlow, ViewState};
pub use navigator::{StepNavigator, TOTAL_STEPS};
pub use store::{IntakeStore, LifestyleField, MedicalField, PersonalField, TextField};
