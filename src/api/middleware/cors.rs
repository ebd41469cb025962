//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Permissive CORS layer.
///
/// The JSON endpoints are read by a dashboard served from a different origin, and
/// no endpoint relies on cookies or credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
