use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use storage::store::WorkoutStore;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::categorias::handlers::list_categorias,
        features::categorias::handlers::get_categoria,
        features::categorias::handlers::create_categoria,
        features::categorias::handlers::update_categoria,
        features::categorias::handlers::delete_categoria,
        features::centros_treinamento::handlers::list_centros_treinamento,
        features::centros_treinamento::handlers::get_centro_treinamento,
        features::centros_treinamento::handlers::create_centro_treinamento,
        features::centros_treinamento::handlers::update_centro_treinamento,
        features::centros_treinamento::handlers::delete_centro_treinamento,
        features::atletas::handlers::list_atletas,
        features::atletas::handlers::get_atleta,
        features::atletas::handlers::create_atleta,
        features::atletas::handlers::update_atleta,
        features::atletas::handlers::delete_atleta,
        features::health::handlers::health,
    ),
    components(
        schemas(
            storage::dto::categoria::CreateCategoriaRequest,
            storage::dto::categoria::UpdateCategoriaRequest,
            storage::dto::categoria::CategoriaResponse,
            storage::dto::centro_treinamento::CreateCentroTreinamentoRequest,
            storage::dto::centro_treinamento::UpdateCentroTreinamentoRequest,
            storage::dto::centro_treinamento::CentroTreinamentoResponse,
            storage::dto::atleta::CreateAtletaRequest,
            storage::dto::atleta::UpdateAtletaRequest,
            storage::dto::atleta::AtletaResponse,
            storage::dto::atleta::CategoriaRef,
            storage::dto::atleta::CentroTreinamentoRef,
            features::health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "categorias", description = "Categoria endpoints"),
        (name = "centros-treinamento", description = "Centro de treinamento endpoints"),
        (name = "atletas", description = "Atleta endpoints"),
        (name = "health", description = "Service health"),
    ),
    info(title = "Workout API", description = "Atletas, categorias and centros de treinamento")
)]
pub struct ApiDoc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn WorkoutStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn WorkoutStore {
        self.store.as_ref()
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(features::routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(cors))
}
