//! Persistence seam used by the HTTP layer.
//!
//! Handlers never talk to a pool directly; they go through [`WorkoutStore`],
//! which has a Postgres backend ([`postgres::PgStore`]) and an in-memory one
//! ([`memory::MemoryStore`]) that enforces the same uniqueness, ordering and
//! restrict-on-delete rules.

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::atleta::{CreateAtletaRequest, UpdateAtletaRequest};
use crate::dto::categoria::{CreateCategoriaRequest, UpdateCategoriaRequest};
use crate::dto::centro_treinamento::{
    CreateCentroTreinamentoRequest, UpdateCentroTreinamentoRequest,
};
use crate::error::Result;
use crate::models::{AtletaDetalhado, Categoria, CentroTreinamento};

pub mod memory;
pub mod postgres;

#[async_trait]
pub trait WorkoutStore: Send + Sync {
    async fn list_categorias(&self) -> Result<Vec<Categoria>>;
    async fn get_categoria(&self, id: Uuid) -> Result<Categoria>;
    async fn find_categoria_by_nome(&self, nome: &str) -> Result<Option<Categoria>>;
    async fn create_categoria(&self, req: &CreateCategoriaRequest) -> Result<Categoria>;
    async fn update_categoria(&self, id: Uuid, req: &UpdateCategoriaRequest) -> Result<Categoria>;
    async fn delete_categoria(&self, id: Uuid) -> Result<()>;

    async fn list_centros(&self) -> Result<Vec<CentroTreinamento>>;
    async fn get_centro(&self, id: Uuid) -> Result<CentroTreinamento>;
    async fn find_centro_by_nome(&self, nome: &str) -> Result<Option<CentroTreinamento>>;
    async fn create_centro(
        &self,
        req: &CreateCentroTreinamentoRequest,
    ) -> Result<CentroTreinamento>;
    async fn update_centro(
        &self,
        id: Uuid,
        req: &UpdateCentroTreinamentoRequest,
    ) -> Result<CentroTreinamento>;
    async fn delete_centro(&self, id: Uuid) -> Result<()>;

    async fn list_atletas(&self) -> Result<Vec<AtletaDetalhado>>;
    async fn get_atleta(&self, id: Uuid) -> Result<AtletaDetalhado>;
    async fn create_atleta(
        &self,
        req: &CreateAtletaRequest,
        categoria: &Categoria,
        centro: &CentroTreinamento,
    ) -> Result<AtletaDetalhado>;
    async fn update_atleta(&self, id: Uuid, req: &UpdateAtletaRequest) -> Result<AtletaDetalhado>;
    /// Removes the atleta and returns its representation from before the delete.
    async fn delete_atleta(&self, id: Uuid) -> Result<AtletaDetalhado>;

    async fn health_check(&self) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}
