use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new centro de treinamento
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCentroTreinamentoRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Nome must be between 1 and 20 characters"
    ))]
    #[schema(example = "CT King")]
    pub nome: String,

    #[validate(length(
        min = 1,
        max = 60,
        message = "Endereco must be between 1 and 60 characters"
    ))]
    #[schema(example = "Rua X, 100")]
    pub endereco: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Proprietario must be between 1 and 30 characters"
    ))]
    #[schema(example = "Marcos")]
    pub proprietario: String,
}

/// Request payload for partially updating a centro de treinamento
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCentroTreinamentoRequest {
    #[validate(length(min = 1, max = 20))]
    pub nome: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub endereco: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub proprietario: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CentroTreinamentoResponse {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::CentroTreinamento> for CentroTreinamentoResponse {
    fn from(centro: crate::models::CentroTreinamento) -> Self {
        Self {
            id: centro.id,
            nome: centro.nome,
            endereco: centro.endereco,
            proprietario: centro.proprietario,
            created_at: centro.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_enforces_field_limits() {
        let req = CreateCentroTreinamentoRequest {
            nome: "CT King".to_string(),
            endereco: "Rua X, 100".to_string(),
            proprietario: "Marcos".to_string(),
        };
        assert!(req.validate().is_ok());

        let too_long_owner = CreateCentroTreinamentoRequest {
            proprietario: "M".repeat(31),
            ..req.clone()
        };
        let errors = too_long_owner.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("proprietario"));
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        let req = UpdateCentroTreinamentoRequest {
            endereco: Some("Rua Y, 200".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let req = UpdateCentroTreinamentoRequest {
            nome: Some(String::new()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
