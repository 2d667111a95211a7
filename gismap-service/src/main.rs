use gismap_service::config::GisMapConfig;
use gismap_service::services::init_metrics;
use gismap_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GisMapConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "gismap-service",
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    );

    init_metrics()?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await?;

    tracing::info!("gismap-service stopped");
    Ok(())
}
