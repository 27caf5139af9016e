use super::*;
use crate::state::test_helpers::{spawn_router, test_app_state};

// =============================================================================
// api_routes
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_router(api_routes(test_app_state("http://127.0.0.1:9", None))).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let base = spawn_router(api_routes(test_app_state("http://127.0.0.1:9", None))).await;
    let resp = reqwest::get(format!("{base}/api/unknown")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_allows_any_origin() {
    let base = spawn_router(api_routes(test_app_state("http://127.0.0.1:9", None))).await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/healthz"))
        .header("origin", "https://status.example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}
