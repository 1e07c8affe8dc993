use async_trait::async_trait;
use uuid::Uuid;

use super::WorkoutStore;
use crate::Database;
use crate::dto::atleta::{CreateAtletaRequest, UpdateAtletaRequest};
use crate::dto::categoria::{CreateCategoriaRequest, UpdateCategoriaRequest};
use crate::dto::centro_treinamento::{
    CreateCentroTreinamentoRequest, UpdateCentroTreinamentoRequest,
};
use crate::error::Result;
use crate::models::{AtletaDetalhado, Categoria, CentroTreinamento};
use crate::repository::{
    atleta::AtletaRepository, categoria::CategoriaRepository,
    centro_treinamento::CentroTreinamentoRepository,
};

/// Postgres-backed store delegating to the per-entity repositories
#[derive(Clone)]
pub struct PgStore {
    db: Database,
}

impl PgStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl WorkoutStore for PgStore {
    async fn list_categorias(&self) -> Result<Vec<Categoria>> {
        CategoriaRepository::new(self.db.pool()).list().await
    }

    async fn get_categoria(&self, id: Uuid) -> Result<Categoria> {
        CategoriaRepository::new(self.db.pool()).find_by_id(id).await
    }

    async fn find_categoria_by_nome(&self, nome: &str) -> Result<Option<Categoria>> {
        CategoriaRepository::new(self.db.pool()).find_by_nome(nome).await
    }

    async fn create_categoria(&self, req: &CreateCategoriaRequest) -> Result<Categoria> {
        CategoriaRepository::new(self.db.pool()).create(req).await
    }

    async fn update_categoria(&self, id: Uuid, req: &UpdateCategoriaRequest) -> Result<Categoria> {
        CategoriaRepository::new(self.db.pool()).update(id, req).await
    }

    async fn delete_categoria(&self, id: Uuid) -> Result<()> {
        CategoriaRepository::new(self.db.pool()).delete(id).await
    }

    async fn list_centros(&self) -> Result<Vec<CentroTreinamento>> {
        CentroTreinamentoRepository::new(self.db.pool()).list().await
    }

    async fn get_centro(&self, id: Uuid) -> Result<CentroTreinamento> {
        CentroTreinamentoRepository::new(self.db.pool())
            .find_by_id(id)
            .await
    }

    async fn find_centro_by_nome(&self, nome: &str) -> Result<Option<CentroTreinamento>> {
        CentroTreinamentoRepository::new(self.db.pool())
            .find_by_nome(nome)
            .await
    }

    async fn create_centro(
        &self,
        req: &CreateCentroTreinamentoRequest,
    ) -> Result<CentroTreinamento> {
        CentroTreinamentoRepository::new(self.db.pool())
            .create(req)
            .await
    }

    async fn update_centro(
        &self,
        id: Uuid,
        req: &UpdateCentroTreinamentoRequest,
    ) -> Result<CentroTreinamento> {
        CentroTreinamentoRepository::new(self.db.pool())
            .update(id, req)
            .await
    }

    async fn delete_centro(&self, id: Uuid) -> Result<()> {
        CentroTreinamentoRepository::new(self.db.pool())
            .delete(id)
            .await
    }

    async fn list_atletas(&self) -> Result<Vec<AtletaDetalhado>> {
        AtletaRepository::new(self.db.pool()).list().await
    }

    async fn get_atleta(&self, id: Uuid) -> Result<AtletaDetalhado> {
        AtletaRepository::new(self.db.pool()).find_by_id(id).await
    }

    async fn create_atleta(
        &self,
        req: &CreateAtletaRequest,
        categoria: &Categoria,
        centro: &CentroTreinamento,
    ) -> Result<AtletaDetalhado> {
        AtletaRepository::new(self.db.pool())
            .create(req, categoria, centro)
            .await
    }

    async fn update_atleta(&self, id: Uuid, req: &UpdateAtletaRequest) -> Result<AtletaDetalhado> {
        AtletaRepository::new(self.db.pool()).update(id, req).await
    }

    async fn delete_atleta(&self, id: Uuid) -> Result<AtletaDetalhado> {
        AtletaRepository::new(self.db.pool()).delete(id).await
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(self.db.pool()).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
