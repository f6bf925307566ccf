//! Failure injection tests for the gateway.

use reqwest::Method;

mod common;

#[tokio::test]
async fn unreachable_upstream_returns_500_and_gateway_survives() {
    // Reserve an ephemeral port, then free it so connections are refused.
    let reserved = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = reserved.local_addr().unwrap();
    drop(reserved);

    let gateway = common::start_gateway(dead_addr).await;
    let client = common::client();

    let res = client
        .get(format!("http://{gateway}/api/events"))
        .send()
        .await
        .expect("gateway itself must stay reachable");
    assert_eq!(res.status(), 500);
    let body = res.text().await.unwrap();
    assert!(body.starts_with("Proxy error:"), "body was: {body}");

    // The listener keeps serving unrelated requests afterwards.
    let res = client
        .get(format!("http://{gateway}/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = client
        .request(Method::OPTIONS, format!("http://{gateway}/api/events"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);

    // A second forwarded request fails independently, with no stuck state.
    let res = client
        .get(format!("http://{gateway}/api/events"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
}

#[tokio::test]
async fn dns_failure_returns_500_with_diagnostic() {
    let upstream = common::start_mock_upstream().await;
    let gateway = common::start_gateway_with(upstream.addr, |config| {
        // .invalid never resolves (RFC 2606).
        config.upstream.host = "gateway-test.invalid".to_string();
        config.upstream.port = 443;
    })
    .await;

    let res = common::client()
        .get(format!("http://{gateway}/api/events"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    assert!(res.text().await.unwrap().starts_with("Proxy error:"));
    assert_eq!(upstream.hit_count(), 0);
}

#[tokio::test]
async fn failed_gateway_does_not_affect_healthy_one() {
    let reserved = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = reserved.local_addr().unwrap();
    drop(reserved);

    let upstream = common::start_mock_upstream().await;
    let broken = common::start_gateway(dead_addr).await;
    let healthy = common::start_gateway(upstream.addr).await;
    let client = common::client();

    let res = client
        .get(format!("http://{broken}/api/events"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let res = client
        .get(format!("http://{healthy}/api/events"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn stalled_upstream_times_out_as_500() {
    let upstream = common::start_mock_upstream().await;
    let gateway = common::start_gateway_with(upstream.addr, |config| {
        config.timeouts.upstream_response_secs = 1;
    })
    .await;

    let res = common::client()
        .get(format!("http://{gateway}/api/slow"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body = res.text().await.unwrap();
    assert!(body.contains("timed out"), "body was: {body}");
}

#[tokio::test]
async fn missing_document_returns_500_with_fixed_body() {
    let upstream = common::start_mock_upstream().await;
    let gateway = common::start_gateway_with(upstream.addr, |config| {
        config.static_assets.root = "/definitely/not/a/real/dir".to_string();
    })
    .await;

    let res = common::client()
        .get(format!("http://{gateway}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    assert_eq!(res.text().await.unwrap(), "Error loading visualizer.html");
}

#[tokio::test]
async fn error_responses_carry_cors_headers() {
    let reserved = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = reserved.local_addr().unwrap();
    drop(reserved);

    let gateway = common::start_gateway(dead_addr).await;
    let res = common::client()
        .get(format!("http://{gateway}/api/events"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert_eq!(res.headers()["access-control-allow-methods"], "GET, OPTIONS");
    assert_eq!(res.headers()["access-control-allow-headers"], "Content-Type");
}
