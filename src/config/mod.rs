//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → passed explicitly to GatewayServer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload mechanism
//! - All fields have defaults so the binary runs with no config file at all
//! - Config is an explicit value, never ambient state, so several gateway
//!   instances (e.g. tests pointed at mock upstreams) coexist in one process
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::StaticAssetConfig;
pub use schema::TimeoutConfig;
pub use schema::UpstreamConfig;
