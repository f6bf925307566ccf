//! Request classification.
//!
//! # Responsibilities
//! - Assign each inbound request exactly one disposition
//! - Run before any upstream or filesystem I/O is initiated, so misrouted
//!   requests never trigger an outbound connection
//!
//! # Design Decisions
//! - Pure function of (method, path, prefix); no side effects
//! - Prefix matching is byte-wise, no normalization (matches the upstream's
//!   own expectations for encoded query strings)
//! - The root document answers any method, mirroring the fallthrough of the
//!   reference behavior

use axum::http::Method;

/// Classification outcome for an inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// CORS preflight; answered locally with 204.
    Preflight,
    /// Relayed to the upstream.
    Forward,
    /// Served from the static document store.
    StaticAsset,
    /// No route matched; answered with 404.
    NotFound,
}

impl Disposition {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Preflight => "preflight",
            Disposition::Forward => "forward",
            Disposition::StaticAsset => "static_asset",
            Disposition::NotFound => "not_found",
        }
    }
}

/// Decide how an inbound request is handled.
pub fn classify(method: &Method, path: &str, api_prefix: &str) -> Disposition {
    if method == Method::OPTIONS {
        Disposition::Preflight
    } else if method == Method::GET && path.starts_with(api_prefix) {
        Disposition::Forward
    } else if path == "/" || path == "/index.html" {
        Disposition::StaticAsset
    } else {
        Disposition::NotFound
    }
}
