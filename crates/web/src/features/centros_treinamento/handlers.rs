use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::centro_treinamento::{
    CentroTreinamentoResponse, CreateCentroTreinamentoRequest, UpdateCentroTreinamentoRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/centros-treinamento",
    responses(
        (status = 200, description = "List all centros de treinamento successfully", body = Vec<CentroTreinamentoResponse>)
    ),
    tag = "centros-treinamento"
)]
pub async fn list_centros_treinamento(
    State(state): State<AppState>,
) -> Result<Json<Vec<CentroTreinamentoResponse>>, WebError> {
    let centros = services::list_centros_treinamento(state.store()).await?;

    let response: Vec<CentroTreinamentoResponse> = centros
        .into_iter()
        .map(CentroTreinamentoResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/centros-treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Centro de treinamento id")
    ),
    responses(
        (status = 200, description = "Centro de treinamento found", body = CentroTreinamentoResponse),
        (status = 404, description = "Centro de treinamento not found")
    ),
    tag = "centros-treinamento"
)]
pub async fn get_centro_treinamento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let centro = services::get_centro_treinamento(state.store(), id).await?;

    Ok(Json(CentroTreinamentoResponse::from(centro)).into_response())
}

#[utoipa::path(
    post,
    path = "/centros-treinamento",
    request_body = CreateCentroTreinamentoRequest,
    responses(
        (status = 201, description = "Centro de treinamento created successfully", body = CentroTreinamentoResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Nome already exists")
    ),
    tag = "centros-treinamento"
)]
pub async fn create_centro_treinamento(
    State(state): State<AppState>,
    Json(req): Json<CreateCentroTreinamentoRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let centro = services::create_centro_treinamento(state.store(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CentroTreinamentoResponse::from(centro)),
    )
        .into_response())
}

#[utoipa::path(
    patch,
    path = "/centros-treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Centro de treinamento id")
    ),
    request_body = UpdateCentroTreinamentoRequest,
    responses(
        (status = 200, description = "Centro de treinamento updated successfully", body = CentroTreinamentoResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Centro de treinamento not found"),
        (status = 409, description = "Nome already exists")
    ),
    tag = "centros-treinamento"
)]
pub async fn update_centro_treinamento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateCentroTreinamentoRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_centro_treinamento(state.store(), id, &update_req).await?;

    Ok(Json(CentroTreinamentoResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/centros-treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Centro de treinamento id")
    ),
    responses(
        (status = 204, description = "Centro de treinamento deleted successfully"),
        (status = 404, description = "Centro de treinamento not found"),
        (status = 409, description = "Centro de treinamento still referenced by atletas")
    ),
    tag = "centros-treinamento"
)]
pub async fn delete_centro_treinamento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_centro_treinamento(state.store(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
