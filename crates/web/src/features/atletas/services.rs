use storage::{
    dto::atleta::{CreateAtletaRequest, UpdateAtletaRequest},
    error::{Reference, StorageError},
    models::AtletaDetalhado,
    store::WorkoutStore,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

const ENTITY: &str = "Atleta";

pub async fn list_atletas(store: &dyn WorkoutStore) -> WebResult<Vec<AtletaDetalhado>> {
    Ok(store.list_atletas().await?)
}

pub async fn get_atleta(store: &dyn WorkoutStore, id: Uuid) -> WebResult<AtletaDetalhado> {
    store
        .get_atleta(id)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))
}

/// Create an atleta after resolving its categoria and centro by name.
///
/// An unknown categoria or centro is a client error (400), not a 404: the
/// request refers to them by name, not by resource id.
pub async fn create_atleta(
    store: &dyn WorkoutStore,
    request: &CreateAtletaRequest,
) -> WebResult<AtletaDetalhado> {
    let (categoria, centro) = tokio::try_join!(
        store.find_categoria_by_nome(&request.categoria.nome),
        store.find_centro_by_nome(&request.centro_treinamento.nome),
    )?;

    let categoria = categoria.ok_or_else(|| unresolved(Reference::Categoria, request))?;
    let centro = centro.ok_or_else(|| unresolved(Reference::CentroTreinamento, request))?;

    let atleta = store
        .create_atleta(request, &categoria, &centro)
        .await
        .map_err(|e| reference_error(e, request))?;
    tracing::info!(id = %atleta.atleta.id, cpf = %atleta.atleta.cpf, "Atleta created");

    Ok(atleta)
}

/// A categoria or centro removed between lookup and insert is reported like
/// one that never existed.
fn reference_error(error: StorageError, request: &CreateAtletaRequest) -> WebError {
    match error {
        StorageError::MissingReference(reference) => unresolved(reference, request),
        other => WebError::Storage(other),
    }
}

fn unresolved(reference: Reference, request: &CreateAtletaRequest) -> WebError {
    match reference {
        Reference::Categoria => {
            WebError::BadRequest(format!("Categoria '{}' not found", request.categoria.nome))
        }
        Reference::CentroTreinamento => WebError::BadRequest(format!(
            "Centro de treinamento '{}' not found",
            request.centro_treinamento.nome
        )),
    }
}

/// Update the scalar fields present in the request. Categoria and centro
/// are not re-resolved here.
pub async fn update_atleta(
    store: &dyn WorkoutStore,
    id: Uuid,
    request: &UpdateAtletaRequest,
) -> WebResult<AtletaDetalhado> {
    store
        .update_atleta(id, request)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))
}

/// Delete an atleta, returning the representation captured before removal
pub async fn delete_atleta(store: &dyn WorkoutStore, id: Uuid) -> WebResult<AtletaDetalhado> {
    let snapshot = store
        .delete_atleta(id)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))?;
    tracing::info!(%id, "Atleta deleted");

    Ok(snapshot)
}
