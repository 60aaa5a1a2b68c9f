//! Telemetry initialization for applications embedding fresco.

#[cfg(feature = "observability")]
use opentelemetry::trace::TracerProvider as _;
#[cfg(feature = "observability")]
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, TracerProvider},
};
#[cfg(feature = "observability")]
use opentelemetry_stdout::SpanExporter;
#[cfg(feature = "observability")]
use tracing_subscriber::Layer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console-only telemetry (no span export).
///
/// This is useful for testing or when running without an observability
/// backend. The subscriber respects the RUST_LOG environment variable.
pub fn init_console_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,fresco=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

/// Initialize OpenTelemetry with stdout exporter for development.
///
/// This sets up tracing with OpenTelemetry integration, exporting spans to
/// stdout. The tracing subscriber will respect RUST_LOG.
///
/// # Errors
///
/// Returns error if subscriber initialization fails.
#[cfg(feature = "observability")]
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    // Create stdout exporter for development
    let exporter = SpanExporter::default();

    // Build tracer provider with resource attributes
    let provider = TracerProvider::builder()
        .with_simple_exporter(exporter)
        .with_id_generator(RandomIdGenerator::default())
        .with_sampler(Sampler::AlwaysOn)
        .with_resource(Resource::default())
        .build();

    // Get a tracer
    let tracer = provider.tracer("fresco");

    // Create OpenTelemetry tracing layer
    let telemetry_layer = tracing_opentelemetry::layer()
        .with_tracer(tracer)
        .with_filter(EnvFilter::from_default_env());

    // Create fmt layer for human-readable logs
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::from_default_env());

    // Initialize subscriber with both layers
    tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Shutdown OpenTelemetry and flush pending spans.
///
/// Call this before application exit to ensure all spans are exported.
#[cfg(feature = "observability")]
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
