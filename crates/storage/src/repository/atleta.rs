use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::dto::atleta::{CreateAtletaRequest, UpdateAtletaRequest};
use crate::error::{Reference, Result, StorageError};
use crate::models::{Atleta, AtletaDetalhado, Categoria, CentroTreinamento};

const SELECT_DETALHADO: &str = r#"
    SELECT a.id, a.nome, a.cpf, a.idade, a.peso, a.altura, a.sexo, a.created_at,
           a.categoria_id, a.centro_treinamento_id,
           c.nome AS categoria_nome,
           ct.nome AS centro_treinamento_nome
    FROM atletas a
    JOIN categorias c ON c.id = a.categoria_id
    JOIN centros_treinamento ct ON ct.id = a.centro_treinamento_id
"#;

const CATEGORIA_FK: &str = "atletas_categoria_id_fkey";
const CENTRO_TREINAMENTO_FK: &str = "atletas_centro_treinamento_id_fkey";

/// Repository for Atleta database operations.
///
/// Every write runs in its own transaction and is rolled back explicitly
/// before an error is returned.
pub struct AtletaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AtletaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all atletas with their categoria and centro names
    pub async fn list(&self) -> Result<Vec<AtletaDetalhado>> {
        let atletas =
            sqlx::query_as::<_, AtletaDetalhado>(&format!("{SELECT_DETALHADO} ORDER BY a.nome, a.cpf"))
                .fetch_all(self.pool)
                .await?;

        Ok(atletas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<AtletaDetalhado> {
        let atleta =
            sqlx::query_as::<_, AtletaDetalhado>(&format!("{SELECT_DETALHADO} WHERE a.id = $1"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound)?;

        Ok(atleta)
    }

    /// Insert an atleta bound to an already resolved categoria and centro
    pub async fn create(
        &self,
        req: &CreateAtletaRequest,
        categoria: &Categoria,
        centro: &CentroTreinamento,
    ) -> Result<AtletaDetalhado> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, Atleta>(
            r#"
            INSERT INTO atletas (id, nome, cpf, idade, peso, altura, sexo,
                                 categoria_id, centro_treinamento_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, nome, cpf, idade, peso, altura, sexo, created_at,
                      categoria_id, centro_treinamento_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .bind(&req.cpf)
        .bind(req.idade)
        .bind(req.peso)
        .bind(req.altura)
        .bind(&req.sexo)
        .bind(categoria.id)
        .bind(centro.id)
        .fetch_one(&mut *tx)
        .await;

        let atleta = match inserted {
            Ok(atleta) => atleta,
            Err(e) => {
                rollback(tx).await;
                let err = on_missing_reference(StorageError::from(e));
                return Err(err.on_unique_violation(|| duplicate_cpf(&req.cpf)));
            }
        };

        tx.commit().await?;

        Ok(AtletaDetalhado {
            atleta,
            categoria_nome: categoria.nome.clone(),
            centro_treinamento_nome: centro.nome.clone(),
        })
    }

    /// Apply the scalar fields present in `req`, leaving the others untouched
    pub async fn update(&self, id: Uuid, req: &UpdateAtletaRequest) -> Result<AtletaDetalhado> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE atletas
            SET nome = COALESCE($2, nome),
                cpf = COALESCE($3, cpf),
                idade = COALESCE($4, idade),
                peso = COALESCE($5, peso),
                altura = COALESCE($6, altura),
                sexo = COALESCE($7, sexo)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(req.nome.as_deref())
        .bind(req.cpf.as_deref())
        .bind(req.idade)
        .bind(req.peso)
        .bind(req.altura)
        .bind(req.sexo.as_deref())
        .execute(&mut *tx)
        .await;

        match updated {
            Ok(result) if result.rows_affected() == 0 => {
                rollback(tx).await;
                return Err(StorageError::NotFound);
            }
            Ok(_) => {}
            Err(e) => {
                rollback(tx).await;
                return Err(StorageError::from(e).on_unique_violation(|| {
                    duplicate_cpf(req.cpf.as_deref().unwrap_or_default())
                }));
            }
        }

        let atleta = fetch_detalhado(&mut tx, id, false).await?;
        tx.commit().await?;

        Ok(atleta)
    }

    /// Delete an atleta and return the row as it was before removal
    pub async fn delete(&self, id: Uuid) -> Result<AtletaDetalhado> {
        let mut tx = self.pool.begin().await?;

        let snapshot = match fetch_detalhado(&mut tx, id, true).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                rollback(tx).await;
                return Err(e);
            }
        };

        if let Err(e) = sqlx::query("DELETE FROM atletas WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
        {
            rollback(tx).await;
            return Err(e.into());
        }

        tx.commit().await?;

        Ok(snapshot)
    }
}

/// Roll back `tx`, logging a failed rollback so the caller still reports the
/// error that caused it.
async fn rollback(tx: Transaction<'_, Postgres>) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!("Failed to roll back atleta transaction: {}", e);
    }
}

/// Rewrites a foreign key violation on insert into the reference that vanished
/// after it was resolved by name.
fn on_missing_reference(err: StorageError) -> StorageError {
    if !err.is_foreign_key_violation() {
        return err;
    }

    let reference = match err.violated_constraint() {
        Some(CATEGORIA_FK) => Some(Reference::Categoria),
        Some(CENTRO_TREINAMENTO_FK) => Some(Reference::CentroTreinamento),
        _ => None,
    };

    match reference {
        Some(reference) => StorageError::MissingReference(reference),
        None => err,
    }
}

async fn fetch_detalhado(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
    lock: bool,
) -> Result<AtletaDetalhado> {
    let sql = if lock {
        format!("{SELECT_DETALHADO} WHERE a.id = $1 FOR UPDATE OF a")
    } else {
        format!("{SELECT_DETALHADO} WHERE a.id = $1")
    };

    sqlx::query_as::<_, AtletaDetalhado>(&sql)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or(StorageError::NotFound)
}

pub(crate) fn duplicate_cpf(cpf: &str) -> String {
    format!("Atleta with cpf '{}' already exists", cpf)
}
