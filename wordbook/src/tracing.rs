use miette::{IntoDiagnostic, WrapErr};
use opentelemetry::InstrumentationScope;
use opentelemetry::trace::TracerProvider;
use opentelemetry_resource_detectors::{
    HostResourceDetector, K8sResourceDetector, OsResourceDetector,
};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::resource::{EnvResourceDetector, ResourceDetector};
use tracing::info;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, Format};

/// The filter directives used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "wordbook=debug,cambridge=debug,tower_http=debug";

/// Returns a list of resource detectors to use to enrich OTel attributes.
fn otel_resource_detectors() -> Vec<Box<dyn ResourceDetector>> {
    vec![
        Box::new(EnvResourceDetector::default()),
        Box::new(OsResourceDetector),
        Box::new(HostResourceDetector::default()),
        Box::new(K8sResourceDetector),
    ]
}

/// Initializes the global tracing subscriber.
///
/// Log lines are written to stdout in the configured format. When tracing is enabled, spans
/// are additionally exported over OTLP/HTTP using the standard `OTEL_EXPORTER_OTLP_*`
/// environment variables.
///
/// # Errors
///
/// Returns an error if the exporter cannot be built or a global subscriber is already set.
pub fn try_init(tracing: &config::TracingConfig) -> miette::Result<()> {
    // Create a tracing layer with the configured tracer
    let telemetry_layer = if tracing.enabled {
        // Set up the OTLP exporter
        let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_http()
            .build()
            .into_diagnostic()
            .wrap_err("building otlp http exporter failed")?;
        // Set up resource detectors to enrich otel attributes
        let res_detectors = otel_resource_detectors();
        let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_batch_exporter(otlp_exporter)
            .with_resource(
                Resource::builder_empty()
                    .with_service_name(env!("CARGO_PKG_NAME"))
                    .with_detectors(&res_detectors)
                    .build(),
            )
            .build();
        let scope = InstrumentationScope::builder(env!("CARGO_PKG_NAME"))
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_schema_url("https://opentelemetry.io/schema/1.0.0")
            .build();
        let tracer = provider.tracer_with_scope(scope);
        let layer = tracing_opentelemetry::layer().with_tracer(tracer);

        Some(layer)
    } else {
        None
    };

    let stdout_layer = match tracing.format {
        Format::Json => tracing_subscriber::fmt::layer().json().boxed(),
        Format::Pretty => tracing_subscriber::fmt::layer().pretty().boxed(),
        Format::Compact => tracing_subscriber::fmt::layer().compact().boxed(),
    };

    // initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(telemetry_layer)
        .with(stdout_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("could not init registry")?;

    info!(format = ?tracing.format, otlp = tracing.enabled, "tracing initialized");

    Ok(())
}
