use axum::{Router, routing::get};

use super::handlers::{create_atleta, delete_atleta, get_atleta, list_atletas, update_atleta};
use crate::app::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_atletas).post(create_atleta))
        .route(
            "/:id",
            get(get_atleta).patch(update_atleta).delete(delete_atleta),
        )
}
