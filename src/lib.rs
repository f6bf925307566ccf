//! Analytics CORS Gateway
//!
//! A small forwarding gateway built with Tokio and Axum. It relays read-only
//! `/api` traffic from a local listener to a single fixed upstream host over
//! TLS, injecting permissive cross-origin headers so browser clients on other
//! origins can consume the upstream analytics API.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │               FORWARDING GATEWAY             │
//!  Client Request   │  ┌─────────┐   ┌──────────┐   ┌──────────┐  │
//!  ─────────────────┼─▶│  http   │──▶│ classify │──▶│  relay   │──┼──▶ Upstream
//!                   │  │ server  │   │          │   │ (TLS)    │  │    (443)
//!                   │  └─────────┘   └────┬─────┘   └──────────┘  │
//!                   │                     │                       │
//!                   │        ┌────────────┼────────────┐          │
//!                   │        ▼            ▼            ▼          │
//!                   │   204 preflight  static doc     404         │
//!                   │                                              │
//!  Client Response  │  ┌──────────────────────────────────────┐   │
//!  ◀────────────────┼──│ cors injector (outermost, overriding)│   │
//!                   │  └──────────────────────────────────────┘   │
//!                   └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod static_assets;

// Cross-cutting concerns
pub mod observability;

pub use config::GatewayConfig;
pub use http::GatewayServer;
