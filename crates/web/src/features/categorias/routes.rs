use axum::{Router, routing::get};

use super::handlers::{
    create_categoria, delete_categoria, get_categoria, list_categorias, update_categoria,
};
use crate::app::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categorias).post(create_categoria))
        .route(
            "/:id",
            get(get_categoria)
                .patch(update_categoria)
                .delete(delete_categoria),
        )
}
