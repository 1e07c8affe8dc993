use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Atleta {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub created_at: chrono::NaiveDateTime,
    pub categoria_id: Uuid,
    pub centro_treinamento_id: Uuid,
}

/// An athlete row joined with the names of its category and training center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AtletaDetalhado {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub atleta: Atleta,
    pub categoria_nome: String,
    pub centro_treinamento_nome: String,
}
