use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::atleta::{AtletaResponse, CreateAtletaRequest, UpdateAtletaRequest};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/atletas",
    responses(
        (status = 200, description = "List all atletas with their categoria and centro", body = Vec<AtletaResponse>)
    ),
    tag = "atletas"
)]
pub async fn list_atletas(State(state): State<AppState>) -> Result<Response, WebError> {
    let atletas = services::list_atletas(state.store()).await?;

    let response: Vec<AtletaResponse> = atletas.into_iter().map(AtletaResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Atleta id")
    ),
    responses(
        (status = 200, description = "Atleta found", body = AtletaResponse),
        (status = 404, description = "Atleta not found")
    ),
    tag = "atletas"
)]
pub async fn get_atleta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let atleta = services::get_atleta(state.store(), id).await?;

    Ok(Json(AtletaResponse::from(atleta)).into_response())
}

#[utoipa::path(
    post,
    path = "/atletas",
    request_body = CreateAtletaRequest,
    responses(
        (status = 201, description = "Atleta created successfully", body = AtletaResponse),
        (status = 400, description = "Validation error or unknown categoria/centro"),
        (status = 409, description = "Cpf already exists")
    ),
    tag = "atletas"
)]
pub async fn create_atleta(
    State(state): State<AppState>,
    Json(req): Json<CreateAtletaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let atleta = services::create_atleta(state.store(), &req).await?;

    Ok((StatusCode::CREATED, Json(AtletaResponse::from(atleta))).into_response())
}

#[utoipa::path(
    patch,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Atleta id")
    ),
    request_body = UpdateAtletaRequest,
    responses(
        (status = 200, description = "Atleta updated successfully", body = AtletaResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Atleta not found"),
        (status = 409, description = "Cpf already exists")
    ),
    tag = "atletas"
)]
pub async fn update_atleta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateAtletaRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_atleta(state.store(), id, &update_req).await?;

    Ok(Json(AtletaResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Atleta id")
    ),
    responses(
        (status = 200, description = "Atleta deleted, body holds the removed atleta", body = AtletaResponse),
        (status = 404, description = "Atleta not found")
    ),
    tag = "atletas"
)]
pub async fn delete_atleta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let deleted = services::delete_atleta(state.store(), id).await?;

    Ok(Json(AtletaResponse::from(deleted)).into_response())
}
