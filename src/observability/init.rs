//! Tracing subscriber setup.
//!
//! Installs a `tracing` registry with an [`EnvFilter`] and an OpenTelemetry
//! layer backed by the file exporter. Observability is optional: if the data
//! directory cannot be created, or a global subscriber is already installed,
//! initialization quietly does nothing.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "warranty-ratings";
const TRACE_FILE_NAME: &str = "warranty-ratings-otlp.json";
const DEFAULT_LEVEL: &str = "info";

/// Initializes tracing from `config.trace_level`, defaulting to `info`.
///
/// Spans are written to `<data dir>/warranty-ratings-otlp.json`.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(config.trace_level.as_deref()))
        .with(OpenTelemetryLayer::new(tracer));

    if subscriber.try_init().is_ok() {
        tracing::info!(trace_level = ?config.trace_level, "tracing initialized");
    }
}

/// Builds the filter, falling back to `info` when the directive is invalid.
fn env_filter(level: Option<&str>) -> EnvFilter {
    let directive = level.map_or(DEFAULT_LEVEL, str::trim);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(env_filter(None).to_string(), "info");
    }

    #[test]
    fn filter_uses_configured_directive() {
        assert_eq!(env_filter(Some(" debug ")).to_string(), "debug");
    }
}
