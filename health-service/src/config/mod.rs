use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for the structured-JSON analysis (e.g., gemini-1.5-flash)
    pub text_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// A missing key does not fail startup: the analysis endpoint reports
    /// it as a configuration failure on each request instead.
    pub api_key: Option<String>,
}

impl HealthConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(HealthConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("HEALTH_TEXT_MODEL", Some("gemini-1.5-flash"), is_prod)?,
            },
            google: GoogleConfig {
                api_key: env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
