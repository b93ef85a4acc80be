use axum::http::StatusCode;

mod support;

use support::{body_json, make_test_app};

/// ヘルスチェックが ok を返すことを確認する
#[tokio::test]
async fn e2e_health_returns_ok() {
    let app = make_test_app();

    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({ "status": "ok" }));
}

/// OpenAPI ドキュメントが API エンドポイントを含むことを確認する
#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let app = make_test_app();

    let resp = app.get("/api-docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(v["info"]["title"], "Knowledge Articles");
    assert!(v["paths"]["/api/revalidate"]["post"].is_object());
    assert!(v["paths"]["/api/draft"]["get"].is_object());
}
