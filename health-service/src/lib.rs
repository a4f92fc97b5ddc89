//! health-service: multi-step health questionnaire analyzed by Google Gemini.
pub mod assessment;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
