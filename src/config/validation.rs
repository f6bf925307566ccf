//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Reject upstream hosts that smuggle a scheme, port, or path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.host must not be empty")]
    EmptyUpstreamHost,

    #[error("upstream.host {0:?} must be a bare hostname, without scheme, port or path")]
    MalformedUpstreamHost(String),

    #[error("upstream.port must not be zero")]
    ZeroUpstreamPort,

    #[error("upstream.path_prefix {0:?} must start with '/'")]
    PathPrefix(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("static_assets.document must not be empty")]
    EmptyDocument,
}

/// Check the semantic constraints of a parsed configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.upstream.host.is_empty() {
        errors.push(ValidationError::EmptyUpstreamHost);
    } else if config.upstream.host.contains(['/', ':', '@', ' ']) {
        errors.push(ValidationError::MalformedUpstreamHost(
            config.upstream.host.clone(),
        ));
    }

    if config.upstream.port == 0 {
        errors.push(ValidationError::ZeroUpstreamPort);
    }

    if !config.upstream.path_prefix.starts_with('/') {
        errors.push(ValidationError::PathPrefix(
            config.upstream.path_prefix.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if config.timeouts.upstream_response_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream_response_secs"));
    }

    if config.static_assets.document.is_empty() {
        errors.push(ValidationError::EmptyDocument);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
