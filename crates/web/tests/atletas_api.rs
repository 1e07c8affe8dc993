mod common;

use axum::http::StatusCode;
use common::{app, empty_request, joao, json_request, seed_references, send};
use serde_json::json;

#[tokio::test]
async fn create_atleta_returns_nested_names_then_conflicts_on_cpf() {
    let app = app();
    seed_references(&app).await;

    let (status, body) = send(&app, json_request("POST", "/atletas", joao())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["nome"], "João");
    assert_eq!(body["cpf"], "12345678900");
    assert_eq!(body["idade"], 20);
    assert_eq!(body["peso"], 70.5);
    assert_eq!(body["sexo"], "M");
    assert_eq!(body["categoria"], json!({ "nome": "Scale" }));
    assert_eq!(body["centro_treinamento"], json!({ "nome": "CT King" }));
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());

    let (status, body) = send(&app, json_request("POST", "/atletas", joao())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("12345678900"));

    let (status, body) = send(&app, empty_request("GET", "/atletas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_categoria_is_a_client_error() {
    let app = app();
    seed_references(&app).await;

    let mut payload = joao();
    payload["categoria"] = json!({ "nome": "RX" });

    let (status, body) = send(&app, json_request("POST", "/atletas", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("RX"));

    let (_, body) = send(&app, empty_request("GET", "/atletas")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_lookup() {
    let app = app();
    seed_references(&app).await;

    let mut payload = joao();
    payload["peso"] = json!(-70.5);
    payload["cpf"] = json!("123");

    let (status, body) = send(&app, json_request("POST", "/atletas", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("cpf")));
    assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("peso")));
}

#[tokio::test]
async fn patch_changes_only_supplied_fields() {
    let app = app();
    seed_references(&app).await;

    let (_, created) = send(&app, json_request("POST", "/atletas", joao())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        json_request("PATCH", &format!("/atletas/{id}"), json!({ "idade": 31 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["idade"], 31);

    let mut expected = created.clone();
    expected["idade"] = json!(31);
    assert_eq!(updated, expected);
}

#[tokio::test]
async fn patch_onto_taken_cpf_conflicts() {
    let app = app();
    seed_references(&app).await;

    send(&app, json_request("POST", "/atletas", joao())).await;
    let mut maria = joao();
    maria["nome"] = json!("Maria");
    maria["cpf"] = json!("00000000002");
    let (_, maria) = send(&app, json_request("POST", "/atletas", maria)).await;
    let id = maria["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/atletas/{id}"),
            json!({ "cpf": "12345678900", "idade": 40 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("12345678900"));

    let (status, unchanged) = send(&app, empty_request("GET", &format!("/atletas/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, maria);
}

#[tokio::test]
async fn patch_missing_atleta_is_not_found() {
    let app = app();
    let id = uuid::Uuid::new_v4();

    let (status, body) = send(
        &app,
        json_request("PATCH", &format!("/atletas/{id}"), json!({ "idade": 31 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id.to_string()));
}

#[tokio::test]
async fn delete_returns_snapshot_and_then_not_found() {
    let app = app();
    seed_references(&app).await;

    let (_, created) = send(&app, json_request("POST", "/atletas", joao())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, deleted) = send(&app, empty_request("DELETE", &format!("/atletas/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, body) = send(&app, empty_request("GET", &format!("/atletas/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id));

    let (status, _) = send(&app, empty_request("DELETE", &format!("/atletas/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_is_ordered_by_name_regardless_of_creation_order() {
    let app = app();
    seed_references(&app).await;

    for (nome, cpf) in [("Maria", "00000000002"), ("Ana", "00000000003"), ("Carlos", "00000000001")] {
        let mut payload = joao();
        payload["nome"] = json!(nome);
        payload["cpf"] = json!(cpf);
        let (status, _) = send(&app, json_request("POST", "/atletas", payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, empty_request("GET", "/atletas")).await;
    let nomes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["nome"].as_str().unwrap())
        .collect();
    assert_eq!(nomes, vec!["Ana", "Carlos", "Maria"]);
}
