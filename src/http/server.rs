//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum Router and middleware stack
//! - Classify each request before any I/O
//! - Dispatch to the preflight, relay, static-asset or not-found path
//! - Hold the shared upstream client and immutable configuration

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper_tls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::classify::{classify, Disposition};
use crate::http::cors;
use crate::http::relay;
use crate::http::request_id::{propagate_request_id_layer, set_request_id_layer};
use crate::observability::metrics;
use crate::static_assets::AssetStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub client: Client<HttpsConnector<HttpConnector>, Body>,
    pub assets: Arc<AssetStore>,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl GatewayServer {
    /// Create a new gateway with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let config = Arc::new(config);

        // One TLS-capable client shared by all requests. Plain-HTTP targets
        // (mock upstreams in tests) pass through the same connector.
        let client = Client::builder(TokioExecutor::new()).build(HttpsConnector::new());
        let assets = Arc::new(AssetStore::new(config.static_assets.clone()));

        let state = AppState {
            config: config.clone(),
            client,
            assets,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(gateway_handler))
            .route("/{*path}", any(gateway_handler))
            .with_state(state)
            .layer(
                // Top of the builder is the outermost layer. CORS must wrap
                // everything: responses generated inside the stack, timeouts
                // included, still carry the three headers.
                ServiceBuilder::new()
                    .layer(cors::allow_origin())
                    .layer(cors::allow_methods())
                    .layer(cors::allow_headers())
                    .layer(set_request_id_layer())
                    .layer(propagate_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.host,
            "Gateway listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Main gateway handler: classify, then dispatch.
async fn gateway_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let disposition = classify(&method, &path, &state.config.upstream.path_prefix);

    tracing::debug!(
        method = %method,
        path = %path,
        disposition = disposition.as_str(),
        "Classified request"
    );

    let response = match disposition {
        Disposition::Preflight => StatusCode::NO_CONTENT.into_response(),
        Disposition::Forward => match relay::forward(&state, request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Upstream relay failed");
                e.into_response()
            }
        },
        Disposition::StaticAsset => serve_document(&state).await,
        Disposition::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };

    metrics::record_request(
        method.as_str(),
        response.status().as_u16(),
        disposition.as_str(),
        start,
    );

    response
}

/// Serve the configured root document.
async fn serve_document(state: &AppState) -> Response {
    let document = &state.config.static_assets.document;
    match state.assets.fetch_document(document).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "text/html")], bytes).into_response(),
        Err(e) => {
            tracing::error!(document = %document, error = %e, "Failed to read static document");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error loading {document}"),
            )
                .into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
