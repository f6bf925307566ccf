//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → classify.rs (assign a disposition, before any I/O)
//!     → relay.rs (upstream proxying)          [Forward]
//!       static document / 204 / 404           [others]
//!     → cors.rs (response headers, outermost layer)
//!     → send to client
//! ```

pub mod classify;
pub mod cors;
pub mod relay;
pub mod request_id;
pub mod server;

pub use classify::Disposition;
pub use server::GatewayServer;
