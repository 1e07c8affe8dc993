use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::categoria::{CategoriaResponse, CreateCategoriaRequest, UpdateCategoriaRequest};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/categorias",
    responses(
        (status = 200, description = "List all categorias successfully", body = Vec<CategoriaResponse>)
    ),
    tag = "categorias"
)]
pub async fn list_categorias(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoriaResponse>>, WebError> {
    let categorias = services::list_categorias(state.store()).await?;

    let response: Vec<CategoriaResponse> = categorias
        .into_iter()
        .map(CategoriaResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/categorias/{id}",
    params(
        ("id" = Uuid, Path, description = "Categoria id")
    ),
    responses(
        (status = 200, description = "Categoria found", body = CategoriaResponse),
        (status = 404, description = "Categoria not found")
    ),
    tag = "categorias"
)]
pub async fn get_categoria(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let categoria = services::get_categoria(state.store(), id).await?;

    Ok(Json(CategoriaResponse::from(categoria)).into_response())
}

#[utoipa::path(
    post,
    path = "/categorias",
    request_body = CreateCategoriaRequest,
    responses(
        (status = 201, description = "Categoria created successfully", body = CategoriaResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Nome already exists")
    ),
    tag = "categorias"
)]
pub async fn create_categoria(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoriaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let categoria = services::create_categoria(state.store(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoriaResponse::from(categoria))).into_response())
}

#[utoipa::path(
    patch,
    path = "/categorias/{id}",
    params(
        ("id" = Uuid, Path, description = "Categoria id")
    ),
    request_body = UpdateCategoriaRequest,
    responses(
        (status = 200, description = "Categoria updated successfully", body = CategoriaResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Categoria not found"),
        (status = 409, description = "Nome already exists")
    ),
    tag = "categorias"
)]
pub async fn update_categoria(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateCategoriaRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_categoria(state.store(), id, &update_req).await?;

    Ok(Json(CategoriaResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/categorias/{id}",
    params(
        ("id" = Uuid, Path, description = "Categoria id")
    ),
    responses(
        (status = 204, description = "Categoria deleted successfully"),
        (status = 404, description = "Categoria not found"),
        (status = 409, description = "Categoria still referenced by atletas")
    ),
    tag = "categorias"
)]
pub async fn delete_categoria(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_categoria(state.store(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
