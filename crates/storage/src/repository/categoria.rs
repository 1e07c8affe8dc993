use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::categoria::{CreateCategoriaRequest, UpdateCategoriaRequest};
use crate::error::{Result, StorageError};
use crate::models::Categoria;

/// Repository for Categoria database operations
pub struct CategoriaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoriaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categorias ordered by name
    pub async fn list(&self) -> Result<Vec<Categoria>> {
        let categorias = sqlx::query_as::<_, Categoria>(
            r#"
            SELECT id, nome
            FROM categorias
            ORDER BY nome
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categorias)
    }

    /// Find categoria by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Categoria> {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            SELECT id, nome
            FROM categorias
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(categoria)
    }

    /// Find categoria by its unique name
    pub async fn find_by_nome(&self, nome: &str) -> Result<Option<Categoria>> {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            SELECT id, nome
            FROM categorias
            WHERE nome = $1
            "#,
        )
        .bind(nome)
        .fetch_optional(self.pool)
        .await?;

        Ok(categoria)
    }

    pub async fn create(&self, req: &CreateCategoriaRequest) -> Result<Categoria> {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            INSERT INTO categorias (id, nome)
            VALUES ($1, $2)
            RETURNING id, nome
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation(|| duplicate_nome(&req.nome))
        })?;

        Ok(categoria)
    }

    /// Apply the fields present in `req`, leaving the others untouched
    pub async fn update(&self, id: Uuid, req: &UpdateCategoriaRequest) -> Result<Categoria> {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            UPDATE categorias
            SET nome = COALESCE($2, nome)
            WHERE id = $1
            RETURNING id, nome
            "#,
        )
        .bind(id)
        .bind(req.nome.as_deref())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique_violation(|| duplicate_nome(req.nome.as_deref().unwrap_or_default()))
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(categoria)
    }

    /// Delete a categoria by ID. Fails while atletas still reference it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categorias WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).on_foreign_key_violation(|| {
                    format!("Categoria {} is still referenced by atletas", id)
                })
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

pub(crate) fn duplicate_nome(nome: &str) -> String {
    format!("Categoria with nome '{}' already exists", nome)
}
