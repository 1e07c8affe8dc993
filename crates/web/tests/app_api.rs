mod common;

use axum::http::StatusCode;
use common::{app, empty_request, joao, json_request, seed_references, send};

#[tokio::test]
async fn health_reports_backend() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn openapi_document_lists_resource_paths() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/categorias",
        "/categorias/{id}",
        "/centros-treinamento",
        "/centros-treinamento/{id}",
        "/atletas",
        "/atletas/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn resources_are_isolated_per_router() {
    let first = app();
    seed_references(&first).await;
    let (status, _) = send(&first, json_request("POST", "/atletas", joao())).await;
    assert_eq!(status, StatusCode::CREATED);

    let second = app();
    let (_, body) = send(&second, empty_request("GET", "/atletas")).await;
    assert_eq!(body, serde_json::json!([]));
}
