//! The assessment-to-analysis pipeline: credential gate, prompt, provider
//! call, strict decode, stamp.

use crate::models::{AnalysisReport, HealthAnalysis, HealthIntake, DISCLAIMER};
use crate::services::prompt::build_analysis_prompt;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

/// Failure modes of one analysis attempt.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Credential missing; not retryable without operator intervention.
    #[error("API Key Google Gemini belum dipasang di .env")]
    Configuration,

    /// The provider returned non-JSON despite structured output mode.
    #[error("Failed to decode analysis response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network-layer or provider-reported failure; message passed through.
    #[error("{0}")]
    Upstream(String),
}

impl From<ProviderError> for AnalysisError {
    fn from(err: ProviderError) -> Self {
        AnalysisError::Upstream(err.to_string())
    }
}

/// Runs one intake through the model and stamps the result.
pub struct AnalysisService {
    api_key: Option<String>,
    provider: Arc<dyn TextProvider>,
}

impl AnalysisService {
    pub fn new(api_key: Option<String>, provider: Arc<dyn TextProvider>) -> Self {
        Self { api_key, provider }
    }

    /// Single attempt, no retry; the caller decides whether the user may
    /// resubmit.
    #[tracing::instrument(skip_all, fields(symptom_count = intake.symptoms.len()))]
    pub async fn analyze(&self, intake: &HealthIntake) -> Result<AnalysisReport, AnalysisError> {
        // The credential gate comes before any network traffic.
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(AnalysisError::Configuration);
        }

        let prompt = build_analysis_prompt(intake);
        let params = GenerationParams {
            json_output: true,
            ..Default::default()
        };

        let response = self.provider.generate(&prompt, &params).await?;

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Received analysis from provider"
        );

        let body = response.text.unwrap_or_default();
        let analysis: HealthAnalysis = serde_json::from_str(&body)?;

        Ok(AnalysisReport {
            analysis,
            analyzed_at: Utc::now(),
            disclaimer: DISCLAIMER.to_string(),
        })
    }
}
