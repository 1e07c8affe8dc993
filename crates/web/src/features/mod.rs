use axum::Router;

use crate::app::AppState;

pub mod atletas;
pub mod categorias;
pub mod centros_treinamento;
pub mod health;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/atletas", atletas::routes::routes())
        .nest("/categorias", categorias::routes::routes())
        .nest("/centros-treinamento", centros_treinamento::routes::routes())
        .merge(health::routes::routes())
}
