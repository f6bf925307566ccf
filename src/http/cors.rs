//! Cross-origin response headers.
//!
//! # Responsibilities
//! - Set the three fixed CORS headers on every response: preflight,
//!   forwarded, static, not-found, and error paths alike
//! - Win over any conflicting CORS header the upstream happens to send
//!
//! # Design Decisions
//! - Implemented as overriding response-header layers placed at the
//!   outermost position of the middleware stack, so responses generated
//!   inside the stack (e.g. timeouts) carry the headers too

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// `Access-Control-Allow-Origin: *`
pub fn allow_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    )
}

/// `Access-Control-Allow-Methods: GET, OPTIONS`
pub fn allow_methods() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    )
}

/// `Access-Control-Allow-Headers: Content-Type`
pub fn allow_headers() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    )
}
