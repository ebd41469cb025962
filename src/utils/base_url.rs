//! Public base URL resolution for building short links.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

/// Resolves the base URL used to build `shortUrl` values.
///
/// A configured base URL wins. Otherwise the request `Host` header is used, and
/// requests without one (HTTP/2 sends `:authority` instead) fall back to the
/// authority of the request URI. The scheme comes from `X-Forwarded-Proto`, then
/// the URI, then defaults to `http`. Trailing slashes are trimmed so callers can
/// append `/{code}`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and neither the
/// `Host` header nor the URI carries an authority, or the `Host` header is not
/// valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let uri: Uri = "https://links.example.com/shorten".parse().unwrap();
///
/// let base = resolve_base_url(None, &HeaderMap::new(), &uri).unwrap();
/// assert_eq!(base, "https://links.example.com");
/// ```
pub fn resolve_base_url(
    configured: Option<&str>,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?,
        None => uri
            .authority()
            .map(|authority| authority.as_str())
            .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?,
    };

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.scheme_str())
        .filter(|proto| *proto == "https" || *proto == "http")
        .unwrap_or("http");

    Ok(format!("{}://{}", scheme, host.trim_end_matches('/')))
}

/// Joins a base URL and a short code.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}
