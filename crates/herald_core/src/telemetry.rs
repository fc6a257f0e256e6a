//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` for verbose runs
/// and `info` otherwise.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(level_filter(verbose))
        .with_target(false)
        .try_init()
}

/// Level used when `RUST_LOG` is unset.
fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// `RUST_LOG` when set, otherwise [`default_level`].
fn level_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

#[cfg(feature = "observability")]
mod otel {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_sdk::{
        Resource,
        trace::{RandomIdGenerator, Sampler, TracerProvider},
    };
    use opentelemetry_stdout::SpanExporter;
    use super::level_filter;
    use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

    /// Initialize OpenTelemetry with a stdout span exporter.
    ///
    /// Pipeline runs are short-lived, so spans are exported synchronously.
    /// Both layers honor `RUST_LOG`, falling back to the same levels as
    /// [`init_tracing`](super::init_tracing).
    ///
    /// # Errors
    ///
    /// Returns error if subscriber initialization fails.
    pub fn init_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
        let provider = TracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_id_generator(RandomIdGenerator::default())
            .with_sampler(Sampler::AlwaysOn)
            .with_resource(Resource::default())
            .build();

        let tracer = provider.tracer("herald");

        let telemetry_layer = tracing_opentelemetry::layer()
            .with_tracer(tracer)
            .with_filter(level_filter(verbose));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(level_filter(verbose));

        tracing_subscriber::registry()
            .with(telemetry_layer)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }

    /// Shutdown OpenTelemetry and flush pending spans.
    pub fn shutdown_telemetry() {
        opentelemetry::global::shutdown_tracer_provider();
    }
}

#[cfg(feature = "observability")]
pub use otel::{init_telemetry, shutdown_telemetry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "info");
    }
}
