//! Shared utilities for gateway integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    http::{header, Request},
    response::{IntoResponse, Response},
    Router,
};
use futures_util::stream;
use tokio::net::TcpListener;

use analytics_gateway::config::GatewayConfig;
use analytics_gateway::GatewayServer;

/// Number of chunks the `/api/stream` route emits.
pub const STREAM_CHUNKS: u32 = 1024;

/// Handle to a mock upstream recording how often it was hit.
pub struct MockUpstream {
    pub addr: SocketAddr,
    pub hits: Arc<AtomicU32>,
}

impl MockUpstream {
    pub fn hit_count(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }
}

/// One kilobyte chunk with a recognizable, position-dependent payload.
pub fn stream_chunk(i: u32) -> Bytes {
    let mut chunk = format!("chunk-{i:08}-").into_bytes();
    chunk.resize(1024, b'x');
    Bytes::from(chunk)
}

/// The concatenation the `/api/stream` route produces.
#[allow(dead_code)]
pub fn expected_stream_body() -> Vec<u8> {
    let mut body = Vec::with_capacity(STREAM_CHUNKS as usize * 1024);
    for i in 0..STREAM_CHUNKS {
        body.extend_from_slice(&stream_chunk(i));
    }
    body
}

/// Start a mock upstream on an ephemeral port.
///
/// Routes:
/// - `/api/stream`: a chunked response larger than any single buffer
/// - `/api/echo-body`: echoes the request body back
/// - `/api/slow`: stalls before responding
/// - anything else: 200 `upstream response`, with the request's path+query,
///   Host and User-Agent echoed in `x-echo-*` headers
pub async fn start_mock_upstream() -> MockUpstream {
    let hits = Arc::new(AtomicU32::new(0));
    let hits_handle = hits.clone();

    let app = Router::new().fallback(move |request: Request<Body>| {
        let hits = hits_handle.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            let path = request.uri().path().to_string();
            match path.as_str() {
                "/api/stream" => {
                    let chunks =
                        (0..STREAM_CHUNKS).map(|i| Ok::<Bytes, std::io::Error>(stream_chunk(i)));
                    Body::from_stream(stream::iter(chunks)).into_response()
                }
                "/api/echo-body" => {
                    let body = axum::body::to_bytes(request.into_body(), 64 * 1024 * 1024)
                        .await
                        .unwrap();
                    body.into_response()
                }
                "/api/slow" => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late".into_response()
                }
                _ => echo_response(&request),
            }
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, hits }
}

fn echo_response(request: &Request<Body>) -> Response {
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let user_agent = header_str(request, header::USER_AGENT.as_str());
    let host = header_str(request, header::HOST.as_str());

    Response::builder()
        .header("x-echo-path", path)
        .header("x-echo-user-agent", user_agent)
        .header("x-echo-host", host)
        .body(Body::from("upstream response"))
        .unwrap()
}

fn header_str(request: &Request<Body>, name: &str) -> String {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Start a gateway on an ephemeral port, pointed at the given upstream.
pub async fn start_gateway(upstream: SocketAddr) -> SocketAddr {
    start_gateway_with(upstream, |_| {}).await
}

/// As [`start_gateway`], with a hook to adjust the configuration.
pub async fn start_gateway_with(
    upstream: SocketAddr,
    mutate: impl FnOnce(&mut GatewayConfig),
) -> SocketAddr {
    let mut config = GatewayConfig::default();
    config.upstream.host = upstream.ip().to_string();
    config.upstream.port = upstream.port();
    config.upstream.tls = false;
    mutate(&mut config);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = GatewayServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Test client that never picks up a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
