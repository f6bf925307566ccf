//! Upstream relay.
//!
//! # Responsibilities
//! - Build exactly one upstream request per forwarded inbound request
//! - Pass the inbound path and query string through byte-for-byte
//! - Rebuild the upstream header map from scratch: `Host` forced to the
//!   configured upstream, `User-Agent` preserved or defaulted
//! - Pipe both body streams without full buffering
//! - Convert pre-response upstream failures into a 500 exactly once
//!
//! # Design Decisions
//! - No retries: a failed attempt terminates the request's handling
//! - Status and headers are copied verbatim; the CORS layers sit outside
//!   this module and override on conflict
//! - A failure after response headers were committed cannot become a status
//!   code; the propagated stream error truncates the outbound body instead

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, uri::Scheme, HeaderValue, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::server::AppState;

/// User-Agent sent upstream when the inbound request carries none.
pub const FALLBACK_USER_AGENT: &str = "Analytics Visualizer Proxy";

/// Failure on the upstream side of a forwarded request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// DNS, TCP, TLS or request failure before any upstream response arrived.
    #[error("upstream request failed: {0}")]
    Connect(#[source] hyper_util::client::legacy::Error),

    /// The upstream produced no response headers within the bound.
    #[error("upstream response timed out after {0:?}")]
    Timeout(Duration),

    /// The configured upstream target could not form a valid URI.
    #[error("invalid upstream target: {0}")]
    Target(#[source] axum::http::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Proxy error: {self}"),
        )
            .into_response()
    }
}

/// Relay one inbound request to the configured upstream.
///
/// The returned response carries the upstream status and headers verbatim
/// and a body that streams straight from the upstream connection.
pub async fn forward(state: &AppState, request: Request<Body>) -> Result<Response, RelayError> {
    let upstream = &state.config.upstream;
    let (parts, body) = request.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let scheme = if upstream.tls {
        Scheme::HTTPS
    } else {
        Scheme::HTTP
    };

    let uri = Uri::builder()
        .scheme(scheme)
        .authority(upstream.authority())
        .path_and_query(path_and_query)
        .build()
        .map_err(RelayError::Target)?;

    let user_agent = parts
        .headers
        .get(header::USER_AGENT)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_USER_AGENT));

    tracing::info!(target = %uri, "Proxying request");

    // Upstream headers are rebuilt, not copied: only Host and User-Agent go
    // out. The body is the inbound stream itself, piped through.
    let upstream_request = Request::builder()
        .method(parts.method)
        .uri(uri)
        .header(header::HOST, upstream.host.as_str())
        .header(header::USER_AGENT, user_agent)
        .body(body)
        .map_err(RelayError::Target)?;

    let wait = Duration::from_secs(state.config.timeouts.upstream_response_secs);
    let upstream_response = tokio::time::timeout(wait, state.client.request(upstream_request))
        .await
        .map_err(|_| RelayError::Timeout(wait))?
        .map_err(RelayError::Connect)?;

    // Status and headers verbatim; the body stays a live stream so large or
    // unbounded upstream responses never materialize in memory.
    let (parts, upstream_body) = upstream_response.into_parts();
    Ok(Response::from_parts(parts, Body::new(upstream_body)))
}
