//! Stand-in for the analytics API, for local runs without the real upstream:
//!
//! ```sh
//! cargo run --example mock_upstream
//! cargo run -- --port 3000 --upstream-host 127.0.0.1   # plus tls=false, port=8443 in config
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{extract::Query, routing::get, Json, Router};
use serde_json::json;

#[tokio::main]
async fn main() {
    let app = Router::new().route(
        "/api",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let service = params
                .get("service")
                .cloned()
                .unwrap_or_else(|| "demo".to_string());
            Json(json!([
                { "service": service, "event": "page_view", "path": "/", "count": 42 },
                { "service": service, "event": "page_view", "path": "/docs", "count": 7 }
            ]))
        }),
    );

    let addr = SocketAddr::from(([127, 0, 0, 1], 8443));
    println!("Mock analytics upstream listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
