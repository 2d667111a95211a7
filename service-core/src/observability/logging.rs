use opentelemetry::KeyValue;
use opentelemetry::trace::TraceError;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn otlp_tracer(service_name: &str, otlp_endpoint: &str) -> Result<sdktrace::Tracer, TraceError> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
}

/// Installs the global subscriber: env-filtered JSON logs, plus OTLP span
/// export when an endpoint is given. Must be called from within a tokio
/// runtime when exporting.
pub fn init_tracing(service_name: &str, log_level: &str, otlp_endpoint: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let (tracer, otlp_error) = match otlp_endpoint.map(|ep| otlp_tracer(service_name, ep)) {
        Some(Ok(tracer)) => (Some(tracer), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let telemetry = tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .init();

    match (otlp_endpoint, otlp_error) {
        (Some(endpoint), Some(e)) => tracing::warn!(
            service = %service_name,
            endpoint = %endpoint,
            error = %e,
            "OTLP exporter unavailable, logging locally only"
        ),
        (Some(endpoint), None) => {
            tracing::info!(service = %service_name, endpoint = %endpoint, "OTLP trace export enabled")
        }
        _ => {}
    }
}
