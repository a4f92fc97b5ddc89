use health_service::config::HealthConfig;
use health_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = HealthConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing("health-service", &config.common.log_level);

    if config.google.api_key.is_none() {
        tracing::warn!(
            "GOOGLE_API_KEY is not set; analysis requests will fail until it is configured"
        );
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Health service listening on port {}", app.port());

    app.run_until_stopped().await
}
