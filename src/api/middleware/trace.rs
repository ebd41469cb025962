//! Per-request spans for the shortener routes.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Request span layer applied to the whole router.
///
/// Each request gets an `INFO` span carrying method, path and version. Arrival is
/// logged at `DEBUG` so production logs hold one line per request: the response
/// status and latency at `INFO`, or an `ERROR` line when a handler answers 5xx
/// (for example a storage failure while resolving a code).
///
/// ```text
/// INFO request{method=GET uri=/go/aB3dE5fG version=HTTP/2.0}: finished processing request latency=3 ms status=302
/// ERROR request{method=POST uri=/shorten version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=41 ms
/// ```
pub fn request_spans() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
