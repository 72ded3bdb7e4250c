use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use ses_backend::docs;
use tower::ServiceExt;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn swagger_router() -> Router {
    let openapi = docs::ApiDoc::openapi();
    Router::new().merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
}

#[test]
fn openapi_covers_every_mounted_route() {
    let openapi = docs::ApiDoc::openapi();
    let json = serde_json::to_value(&openapi).expect("serialize openapi");

    let paths = json
        .get("paths")
        .and_then(|v| v.as_object())
        .expect("paths object");
    for path in [
        "/api/auth/login",
        "/api/auth/me",
        "/api/axes",
        "/api/domains",
        "/api/standards",
        "/api/indicators",
        "/api/evidence",
        "/api/evidence/upload-url",
        "/api/evidence/upload",
        "/api/evidence/{id}/review",
        "/api/evidence/{id}",
        "/api/evidence/{id}/download",
        "/api/reports/stats",
        "/api/reports/recent",
        "/api/reports/export",
    ] {
        assert!(paths.contains_key(path), "missing path {path}");
    }
}

#[test]
fn openapi_registers_the_bearer_scheme() {
    let openapi = docs::ApiDoc::openapi();
    let json = serde_json::to_value(&openapi).expect("serialize openapi");

    let bearer = json
        .pointer("/components/securitySchemes/BearerAuth")
        .expect("BearerAuth scheme");
    assert_eq!(bearer.get("type").and_then(Value::as_str), Some("http"));
    assert_eq!(bearer.get("scheme").and_then(Value::as_str), Some("bearer"));
}

#[tokio::test]
async fn swagger_ui_routes_respond() {
    let app = swagger_router();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/docs")
                .body(Body::empty())
                .expect("build docs request"),
        )
        .await
        .expect("call swagger ui");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/api/docs/");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .expect("build openapi request"),
        )
        .await
        .expect("call openapi json");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read openapi body");
    let json: Value = serde_json::from_slice(&bytes).expect("openapi json parses");
    assert!(json.get("paths").is_some());
}
