use axum::{
    body::Body,
    http::{HeaderMap, Request},
};
use opentelemetry::{
    Context, global,
    propagation::Extractor,
    trace::TracerProvider as _,
};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::{Span, Subscriber};
use tracing_opentelemetry::OpenTelemetrySpanExt;
use tracing_subscriber::{Layer, registry::LookupSpan};

use crate::{config::TelemetryConfig, http::server::ApiError};

const TRACER_NAME: &str = env!("CARGO_PKG_NAME");

/// OTLP trace export, alive for the whole process.
///
/// Spans are batched and sent over gRPC; [`Telemetry::shutdown`] flushes
/// whatever is still buffered.
pub struct Telemetry {
    provider: SdkTracerProvider,
}

impl Telemetry {
    /// Returns `None` when no collector endpoint is configured.
    pub fn init(config: &TelemetryConfig) -> Result<Option<Self>, ApiError> {
        let Some(endpoint) = config.otlp_endpoint.as_deref() else {
            return Ok(None);
        };

        let exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .map_err(|e| ApiError::Startup(format!("cannot build OTLP exporter: {e}")))?;

        let provider = SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(
                Resource::builder()
                    .with_service_name(config.service_name.clone())
                    .build(),
            )
            .build();

        global::set_tracer_provider(provider.clone());
        global::set_text_map_propagator(TraceContextPropagator::new());

        Ok(Some(Self { provider }))
    }

    /// Bridges `tracing` spans into OpenTelemetry spans.
    pub fn layer<S>(&self) -> impl Layer<S> + Send + Sync + 'static
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        tracing_opentelemetry::layer().with_tracer(self.provider.tracer(TRACER_NAME))
    }

    pub fn shutdown(self) {
        tracing::info!("shutting down tracer provider");
        if let Err(e) = self.provider.shutdown() {
            tracing::warn!(error = %e, "tracer provider shutdown failed");
        }
    }
}

struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|key| key.as_str()).collect()
    }
}

/// Remote parent carried by W3C `traceparent`/`tracestate` headers, if any.
pub fn parent_context(headers: &HeaderMap) -> Context {
    global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(headers)))
}

/// Request span for `TraceLayer`, attached to the caller's trace when one is propagated.
pub fn request_span(request: &Request<Body>) -> Span {
    let span = tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
    );
    let _ = span.set_parent(parent_context(request.headers()));
    span
}
