//! In-progress questionnaire state.
//!
//! The store accepts anything: values are kept verbatim as strings and only
//! interpreted once the analysis prompt is built. Catalog constants mirror
//! the option sets the form presents.

use crate::models::HealthIntake;

/// Selectable symptoms offered on step 3.
pub const SYMPTOM_OPTIONS: &[&str] = &[
    "Sakit kepala",
    "Lelah berlebihan",
    "Nyeri dada",
    "Sesak napas",
    "Pusing",
    "Mual",
    "Demam",
    "Batuk",
    "Nyeri sendi",
    "Gangguan tidur",
    "Cemas",
    "Mood swings",
];

pub const ACTIVITY_LEVELS: &[&str] = &["sedentary", "light", "moderate", "active", "very-active"];
pub const STRESS_LEVELS: &[&str] = &["low", "moderate", "high", "very-high"];
pub const SMOKING_STATUSES: &[&str] = &["never", "former", "occasional", "regular"];
pub const ALCOHOL_STATUSES: &[&str] = &["never", "occasional", "moderate", "regular"];
pub const BLOOD_PRESSURE_BANDS: &[&str] =
    &["normal", "prehypertension", "stage1", "stage2", "unknown"];
pub const DIABETES_STATUSES: &[&str] =
    &["none", "prediabetes", "type1", "type2", "gestational", "unknown"];
pub const HEART_DISEASE_STATUSES: &[&str] = &["none", "family", "personal", "current"];

/// Sleep slider bounds, in hours.
pub const SLEEP_HOURS_RANGE: std::ops::RangeInclusive<u8> = 4..=12;
/// Slider position when the form opens.
pub const DEFAULT_SLEEP_HOURS: u8 = 7;

/// A text-valued answer, keyed by (category, field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Personal(PersonalField),
    Lifestyle(LifestyleField),
    Medical(MedicalField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Age,
    Gender,
    Height,
    Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifestyleField {
    ActivityLevel,
    StressLevel,
    SmokingStatus,
    AlcoholStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicalField {
    BloodPressure,
    Diabetes,
    HeartDisease,
    Medications,
}

/// Holds the one [`HealthIntake`] being filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeStore {
    intake: HealthIntake,
}

impl IntakeStore {
    pub fn new() -> Self {
        let mut intake = HealthIntake::default();
        intake.lifestyle.sleep_hours = Some(DEFAULT_SLEEP_HOURS);
        Self { intake }
    }

    /// Overwrite one answer. No rejection at this layer.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        use LifestyleField as L;
        use MedicalField as M;
        use PersonalField as P;

        let slot = match field {
            TextField::Personal(P::Name) => &mut self.intake.personal_info.name,
            TextField::Personal(P::Age) => &mut self.intake.personal_info.age,
            TextField::Personal(P::Gender) => &mut self.intake.personal_info.gender,
            TextField::Personal(P::Height) => &mut self.intake.personal_info.height,
            TextField::Personal(P::Weight) => &mut self.intake.personal_info.weight,
            TextField::Lifestyle(L::ActivityLevel) => &mut self.intake.lifestyle.activity_level,
            TextField::Lifestyle(L::StressLevel) => &mut self.intake.lifestyle.stress_level,
            TextField::Lifestyle(L::SmokingStatus) => &mut self.intake.lifestyle.smoking_status,
            TextField::Lifestyle(L::AlcoholStatus) => &mut self.intake.lifestyle.alcohol_status,
            TextField::Medical(M::BloodPressure) => &mut self.intake.medical_history.blood_pressure,
            TextField::Medical(M::Diabetes) => &mut self.intake.medical_history.diabetes,
            TextField::Medical(M::HeartDisease) => &mut self.intake.medical_history.heart_disease,
            TextField::Medical(M::Medications) => &mut self.intake.medical_history.medications,
        };
        *slot = value.into();
    }

    /// The one numeric answer (step 2 slider).
    pub fn set_sleep_hours(&mut self, hours: u8) {
        self.intake.lifestyle.sleep_hours = Some(hours);
    }

    /// Set semantics: adds the symptom if absent, removes it if present.
    pub fn toggle_symptom(&mut self, symptom: &str) {
        if !self.intake.symptoms.remove(symptom) {
            self.intake.symptoms.insert(symptom.to_string());
        }
    }

    pub fn intake(&self) -> &HealthIntake {
        &self.intake
    }

    pub fn into_intake(self) -> HealthIntake {
        self.intake
    }
}

impl Default for IntakeStore {
    fn default() -> Self {
        Self::new()
    }
}
