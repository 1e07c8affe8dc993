use storage::{
    dto::categoria::{CreateCategoriaRequest, UpdateCategoriaRequest},
    models::Categoria,
    store::WorkoutStore,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

const ENTITY: &str = "Categoria";

/// List all categorias
pub async fn list_categorias(store: &dyn WorkoutStore) -> WebResult<Vec<Categoria>> {
    Ok(store.list_categorias().await?)
}

/// Get categoria by id
pub async fn get_categoria(store: &dyn WorkoutStore, id: Uuid) -> WebResult<Categoria> {
    store
        .get_categoria(id)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))
}

/// Create a new categoria
pub async fn create_categoria(
    store: &dyn WorkoutStore,
    request: &CreateCategoriaRequest,
) -> WebResult<Categoria> {
    let categoria = store.create_categoria(request).await?;
    tracing::info!(id = %categoria.id, nome = %categoria.nome, "Categoria created");
    Ok(categoria)
}

/// Update a categoria with the fields present in the request
pub async fn update_categoria(
    store: &dyn WorkoutStore,
    id: Uuid,
    request: &UpdateCategoriaRequest,
) -> WebResult<Categoria> {
    store
        .update_categoria(id, request)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))
}

/// Delete a categoria
pub async fn delete_categoria(store: &dyn WorkoutStore, id: Uuid) -> WebResult<()> {
    store
        .delete_categoria(id)
        .await
        .map_err(|e| WebError::from_lookup(e, ENTITY, id))?;
    tracing::info!(%id, "Categoria deleted");
    Ok(())
}
