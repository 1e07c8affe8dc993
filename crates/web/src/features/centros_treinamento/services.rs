use storage::{
    dto::centro_treinamento::{CreateCentroTreinamentoRequest, UpdateCentroTreinamentoRequest},
    models::CentroTreinamento,
    store::WorkoutStore,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

const ENTITY: &str = "Centro de treinamento";

pub async fn list_centros_treinamento(
    store: &dyn WorkoutStore,
) -> WebResult<Vec<CentroTreinamento>> {
    Ok(store.list_centros().await?)
}

pub async fn get_centro_treinamento(
    store: &dyn WorkoutStore,
    id: Uuid,
) -> WebResult<CentroTreinamento> {
    store
        .get_centro(id)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))
}

pub async fn create_centro_treinamento(
    store: &dyn WorkoutStore,
    request: &CreateCentroTreinamentoRequest,
) -> WebResult<CentroTreinamento> {
    let centro = store.create_centro(request).await?;
    tracing::info!(id = %centro.id, nome = %centro.nome, "Centro de treinamento created");
    Ok(centro)
}

pub async fn update_centro_treinamento(
    store: &dyn WorkoutStore,
    id: Uuid,
    request: &UpdateCentroTreinamentoRequest,
) -> WebResult<CentroTreinamento> {
    store
        .update_centro(id, request)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))
}

pub async fn delete_centro_treinamento(store: &dyn WorkoutStore, id: Uuid) -> WebResult<()> {
    store
        .delete_centro(id)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))?;
    tracing::info!(%id, "Centro de treinamento deleted");
    Ok(())
}
