use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CentroTreinamento {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
    pub created_at: chrono::NaiveDateTime,
}
