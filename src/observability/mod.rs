//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     logging.rs (tracing subscriber, env-filter)
//!     metrics.rs (optional Prometheus endpoint)
//!
//! per request:
//!     server.rs → metrics::record_request (counter + latency histogram)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; RUST_LOG overrides the configured level
//! - Metrics are opt-in and never on the request's critical error path

pub mod logging;
pub mod metrics;
