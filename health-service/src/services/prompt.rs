//! Prompt construction for the analysis request.
//!
//! A pure function of the intake: unanswered fields render as placeholders
//! so the prompt is always well formed, and the target JSON shape is spelled
//! out so the schema-constrained model knows what to return.

use crate::models::HealthIntake;

/// Placeholder for an unanswered name.
const ANONYMOUS: &str = "Anonim";
/// Placeholder for every other unanswered field.
const BLANK: &str = "-";

/// Target JSON shape embedded in the prompt, with placeholder values.
const RESPONSE_SHAPE: &str = r#"{
  "overallScore": 85,
  "riskLevel": "low|medium|high|critical",
  "categories": {
     "cardiovascular": {"score": 0, "status": "-", "findings": ["-"], "recommendations": ["-"]},
     "metabolic": {"score": 0, "status": "-", "findings": ["-"], "recommendations": ["-"]},
     "lifestyle": {"score": 0, "status": "-", "findings": ["-"], "recommendations": ["-"]},
     "mental": {"score": 0, "status": "-", "findings": ["-"], "recommendations": ["-"]}
  },
  "bmi": {"value": 0, "category": "-", "recommendation": "-"},
  "immediateConcerns": ["-"],
  "lifestyleRecommendations": ["-"],
  "whenToSeeDoctor": ["-"],
  "summary": "-",
  "nextSteps": ["-"]
}"#;

fn or_blank(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        BLANK
    } else {
        trimmed
    }
}

/// Render the analysis prompt for one intake.
pub fn build_analysis_prompt(intake: &HealthIntake) -> String {
    let personal = &intake.personal_info;
    let lifestyle = &intake.lifestyle;
    let medical = &intake.medical_history;

    let name = {
        let trimmed = personal.name.trim();
        if trimmed.is_empty() {
            ANONYMOUS
        } else {
            trimmed
        }
    };
    let sleep = lifestyle
        .sleep_hours
        .map(|hours| hours.to_string())
        .unwrap_or_else(|| BLANK.to_string());
    let symptoms = if intake.symptoms.is_empty() {
        BLANK.to_string()
    } else {
        intake
            .symptoms
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Kamu adalah dokter spesialis. Analisis data kesehatan ini.\n\
         DATA PASIEN:\n\
         Nama: {name}\n\
         Usia: {age} tahun\n\
         Jenis Kelamin: {gender}\n\
         Tinggi/Berat: {height}cm / {weight}kg\n\
         Gaya Hidup: {activity}, Tidur {sleep} jam, Stres {stress}\n\
         Merokok: {smoking}, Alkohol: {alcohol}\n\
         Gejala: {symptoms}\n\
         Medis: Tensi {blood_pressure}, Gula {diabetes}, Jantung {heart_disease}, Obat: {medications}\n\
         \n\
         Hasilkan output JSON sesuai skema ini:\n\
         {shape}\n",
        name = name,
        age = or_blank(&personal.age),
        gender = or_blank(&personal.gender),
        height = or_blank(&personal.height),
        weight = or_blank(&personal.weight),
        activity = or_blank(&lifestyle.activity_level),
        sleep = sleep,
        stress = or_blank(&lifestyle.stress_level),
        smoking = or_blank(&lifestyle.smoking_status),
        alcohol = or_blank(&lifestyle.alcohol_status),
        symptoms = symptoms,
        blood_pressure = or_blank(&medical.blood_pressure),
        diabetes = or_blank(&medical.diabetes),
        heart_disease = or_blank(&medical.heart_disease),
        medications = or_blank(&medical.medications),
        shape = RESPONSE_SHAPE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_intake_renders_placeholders() {
        let prompt = build_analysis_prompt(&HealthIntake::default());

        assert!(prompt.contains("Nama: Anonim"));
        assert!(prompt.contains("Usia: - tahun"));
        assert!(prompt.contains("Tinggi/Berat: -cm / -kg"));
        assert!(prompt.contains("Tidur - jam"));
        assert!(prompt.contains("Gejala: -"));
        assert!(prompt.contains("Tensi -"));
    }

    #[test]
    fn test_filled_intake_embeds_answers() {
        let mut intake = HealthIntake::default();
        intake.personal_info.name = "Budi Santoso".to_string();
        intake.personal_info.age = "35".to_string();
        intake.personal_info.height = "170".to_string();
        intake.personal_info.weight = "65".to_string();
        intake.lifestyle.activity_level = "moderate".to_string();
        intake.lifestyle.sleep_hours = Some(7);
        intake.symptoms.insert("Pusing".to_string());
        intake.symptoms.insert("Batuk".to_string());
        intake.medical_history.blood_pressure = "normal".to_string();

        let prompt = build_analysis_prompt(&intake);

        assert!(prompt.contains("Nama: Budi Santoso"));
        assert!(prompt.contains("Usia: 35 tahun"));
        assert!(prompt.contains("Tinggi/Berat: 170cm / 65kg"));
        assert!(prompt.contains("Tidur 7 jam"));
        assert!(prompt.contains("Gejala: Batuk, Pusing"));
        assert!(prompt.contains("Tensi normal"));
    }

    #[test]
    fn test_prompt_spells_out_the_target_shape() {
        let prompt = build_analysis_prompt(&HealthIntake::default());

        assert!(prompt.contains("Hasilkan output JSON"));
        assert!(prompt.contains("\"overallScore\""));
        assert!(prompt.contains("\"cardiovascular\""));
        assert!(prompt.contains("\"nextSteps\""));
    }

    #[test]
    fn test_whitespace_only_answers_count_as_absent() {
        let mut intake = HealthIntake::default();
        intake.personal_info.name = "   ".to_string();
        intake.personal_info.age = " \t".to_string();

        let prompt = build_analysis_prompt(&intake);
        assert!(prompt.contains("Nama: Anonim"));
        assert!(prompt.contains("Usia: - tahun"));
    }
}
