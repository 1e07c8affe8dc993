//! Shared helpers for router-level tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use storage::store::memory::MemoryStore;
use tower::ServiceExt;
use web::app::{AppState, build_router};

pub fn app() -> Router {
    build_router(AppState::new(Arc::new(MemoryStore::new())))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Sends `request` and returns the status together with the decoded JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub async fn seed_references(app: &Router) {
    let (status, _) = send(
        app,
        json_request("POST", "/categorias", serde_json::json!({ "nome": "Scale" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        app,
        json_request(
            "POST",
            "/centros-treinamento",
            serde_json::json!({
                "nome": "CT King",
                "endereco": "Rua X, 100",
                "proprietario": "Marcos"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

pub fn joao() -> Value {
    serde_json::json!({
        "nome": "João",
        "cpf": "12345678900",
        "idade": 20,
        "peso": 70.5,
        "altura": 1.70,
        "sexo": "M",
        "categoria": { "nome": "Scale" },
        "centro_treinamento": { "nome": "CT King" }
    })
}
