use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::centro_treinamento::{
    CreateCentroTreinamentoRequest, UpdateCentroTreinamentoRequest,
};
use crate::error::{Result, StorageError};
use crate::models::CentroTreinamento;

/// Repository for CentroTreinamento database operations
pub struct CentroTreinamentoRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CentroTreinamentoRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all centros de treinamento ordered by name
    pub async fn list(&self) -> Result<Vec<CentroTreinamento>> {
        let centros = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            SELECT id, nome, endereco, proprietario, created_at
            FROM centros_treinamento
            ORDER BY nome
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centros)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<CentroTreinamento> {
        let centro = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            SELECT id, nome, endereco, proprietario, created_at
            FROM centros_treinamento
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(centro)
    }

    pub async fn find_by_nome(&self, nome: &str) -> Result<Option<CentroTreinamento>> {
        let centro = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            SELECT id, nome, endereco, proprietario, created_at
            FROM centros_treinamento
            WHERE nome = $1
            "#,
        )
        .bind(nome)
        .fetch_optional(self.pool)
        .await?;

        Ok(centro)
    }

    pub async fn create(&self, req: &CreateCentroTreinamentoRequest) -> Result<CentroTreinamento> {
        let centro = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            INSERT INTO centros_treinamento (id, nome, endereco, proprietario)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, endereco, proprietario, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .bind(&req.endereco)
        .bind(&req.proprietario)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation(|| duplicate_nome(&req.nome))
        })?;

        Ok(centro)
    }

    /// Apply the fields present in `req`, leaving the others untouched
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateCentroTreinamentoRequest,
    ) -> Result<CentroTreinamento> {
        let centro = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            UPDATE centros_treinamento
            SET nome = COALESCE($2, nome),
                endereco = COALESCE($3, endereco),
                proprietario = COALESCE($4, proprietario)
            WHERE id = $1
            RETURNING id, nome, endereco, proprietario, created_at
            "#,
        )
        .bind(id)
        .bind(req.nome.as_deref())
        .bind(req.endereco.as_deref())
        .bind(req.proprietario.as_deref())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique_violation(|| duplicate_nome(req.nome.as_deref().unwrap_or_default()))
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(centro)
    }

    /// Delete a centro de treinamento by ID. Fails while atletas still reference it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM centros_treinamento WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).on_foreign_key_violation(|| {
                    format!("Centro de treinamento {} is still referenced by atletas", id)
                })
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

pub(crate) fn duplicate_nome(nome: &str) -> String {
    format!("Centro de treinamento with nome '{}' already exists", nome)
}
