use axum::{Router, routing::get};

use super::handlers::{
    create_centro_treinamento, delete_centro_treinamento, get_centro_treinamento,
    list_centros_treinamento, update_centro_treinamento,
};
use crate::app::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_centros_treinamento).post(create_centro_treinamento),
        )
        .route(
            "/:id",
            get(get_centro_treinamento)
                .patch(update_centro_treinamento)
                .delete(delete_centro_treinamento),
        )
}
