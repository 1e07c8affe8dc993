mod common;

use axum::http::StatusCode;
use common::{app, empty_request, joao, json_request, seed_references, send};
use serde_json::json;

#[tokio::test]
async fn categoria_crud_round() {
    let app = app();

    let (status, created) = send(
        &app,
        json_request("POST", "/categorias", json!({ "nome": "Scale" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["nome"], "Scale");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, empty_request("GET", &format!("/categorias/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        json_request("PATCH", &format!("/categorias/{id}"), json!({ "nome": "RX" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nome"], "RX");
    assert_eq!(updated["id"], created["id"]);

    let (status, body) = send(&app, empty_request("DELETE", &format!("/categorias/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(&app, empty_request("GET", &format!("/categorias/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_categoria_conflicts_without_second_row() {
    let app = app();

    let (status, _) = send(
        &app,
        json_request("POST", "/categorias", json!({ "nome": "Scale" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        json_request("POST", "/categorias", json!({ "nome": "Scale" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("Scale"));

    let (_, list) = send(&app, empty_request("GET", "/categorias")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn rename_onto_taken_name_conflicts() {
    let app = app();
    send(&app, json_request("POST", "/categorias", json!({ "nome": "Scale" }))).await;
    let (_, rx) = send(&app, json_request("POST", "/categorias", json!({ "nome": "RX" }))).await;
    let id = rx["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        json_request("PATCH", &format!("/categorias/{id}"), json!({ "nome": "Scale" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn missing_categoria_is_not_found() {
    let app = app();
    let id = uuid::Uuid::new_v4();

    let (status, _) = send(&app, empty_request("GET", &format!("/categorias/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        json_request("PATCH", &format!("/categorias/{id}"), json!({ "nome": "RX" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("DELETE", &format!("/categorias/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn referenced_categoria_cannot_be_deleted() {
    let app = app();
    seed_references(&app).await;
    send(&app, json_request("POST", "/atletas", joao())).await;

    let (_, list) = send(&app, empty_request("GET", "/categorias")).await;
    let id = list[0]["id"].as_str().unwrap();

    let (status, _) = send(&app, empty_request("DELETE", &format!("/categorias/{id}"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn overlong_nome_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/categorias", json!({ "nome": "Intermediate" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}
