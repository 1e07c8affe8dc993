use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::AtletaDetalhado;

/// Reference to a categoria by its unique name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoriaRef {
    #[validate(length(min = 1, max = 10))]
    #[schema(example = "Scale")]
    pub nome: String,
}

/// Reference to a centro de treinamento by its unique name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CentroTreinamentoRef {
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "CT King")]
    pub nome: String,
}

/// Request payload for creating a new atleta.
///
/// The categoria and centro de treinamento are referenced by name and must
/// already exist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAtletaRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Nome must be between 1 and 50 characters"
    ))]
    #[schema(example = "João")]
    pub nome: String,

    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "12345678900")]
    pub cpf: String,

    #[validate(range(min = 0, max = 150, message = "Idade must be between 0 and 150"))]
    #[schema(example = 20)]
    pub idade: i32,

    #[validate(range(exclusive_min = 0.0, message = "Peso must be positive"))]
    #[schema(example = 70.5)]
    pub peso: f64,

    #[validate(range(exclusive_min = 0.0, message = "Altura must be positive"))]
    #[schema(example = 1.70)]
    pub altura: f64,

    #[validate(custom(function = "validate_sexo"))]
    #[schema(example = "M")]
    pub sexo: String,

    #[validate(nested)]
    pub categoria: CategoriaRef,

    #[validate(nested)]
    pub centro_treinamento: CentroTreinamentoRef,
}

/// Request payload for partially updating an atleta.
///
/// Only scalar fields can change here; categoria and centro de treinamento
/// are fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAtletaRequest {
    #[validate(length(min = 1, max = 50))]
    pub nome: Option<String>,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<String>,

    #[validate(range(min = 0, max = 150))]
    pub idade: Option<i32>,

    #[validate(range(exclusive_min = 0.0))]
    pub peso: Option<f64>,

    #[validate(range(exclusive_min = 0.0))]
    pub altura: Option<f64>,

    #[validate(custom(function = "validate_sexo"))]
    pub sexo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AtletaResponse {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub created_at: NaiveDateTime,
    pub categoria: CategoriaRef,
    pub centro_treinamento: CentroTreinamentoRef,
}

// Validation helpers
fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_cpf");
        error.message = Some("Cpf must be exactly 11 digits".into());
        Err(error)
    }
}

fn validate_sexo(sexo: &str) -> Result<(), validator::ValidationError> {
    if sexo.chars().count() == 1 {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_sexo");
        error.message = Some("Sexo must be a single character".into());
        Err(error)
    }
}

impl From<AtletaDetalhado> for AtletaResponse {
    fn from(detalhado: AtletaDetalhado) -> Self {
        let atleta = detalhado.atleta;
        Self {
            id: atleta.id,
            nome: atleta.nome,
            cpf: atleta.cpf,
            idade: atleta.idade,
            peso: atleta.peso,
            altura: atleta.altura,
            sexo: atleta.sexo,
            created_at: atleta.created_at,
            categoria: CategoriaRef {
                nome: detalhado.categoria_nome,
            },
            centro_treinamento: CentroTreinamentoRef {
                nome: detalhado.centro_treinamento_nome,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joao() -> CreateAtletaRequest {
        CreateAtletaRequest {
            nome: "João".to_string(),
            cpf: "12345678900".to_string(),
            idade: 20,
            peso: 70.5,
            altura: 1.70,
            sexo: "M".to_string(),
            categoria: CategoriaRef {
                nome: "Scale".to_string(),
            },
            centro_treinamento: CentroTreinamentoRef {
                nome: "CT King".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(joao().validate().is_ok());
    }

    #[test]
    fn test_cpf_must_be_eleven_digits() {
        assert!(validate_cpf("12345678900").is_ok());
        assert!(validate_cpf("1234567890").is_err());
        assert!(validate_cpf("123.456.789").is_err());
        assert!(validate_cpf("1234567890a").is_err());

        let req = CreateAtletaRequest {
            cpf: "123".to_string(),
            ..joao()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cpf"));
    }

    #[test]
    fn test_weight_and_height_must_be_positive() {
        let req = CreateAtletaRequest {
            peso: 0.0,
            altura: -1.0,
            ..joao()
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("peso"));
        assert!(fields.contains_key("altura"));
    }

    #[test]
    fn test_sexo_is_a_single_character() {
        assert!(validate_sexo("F").is_ok());
        assert!(validate_sexo("").is_err());
        assert!(validate_sexo("MF").is_err());
    }

    #[test]
    fn test_nested_reference_is_validated() {
        let req = CreateAtletaRequest {
            categoria: CategoriaRef {
                nome: String::new(),
            },
            ..joao()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_partial_update_accepts_single_field() {
        let req = UpdateAtletaRequest {
            idade: Some(31),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let req = UpdateAtletaRequest {
            peso: Some(-2.0),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_nests_reference_names() {
        let now = chrono::Utc::now().naive_utc();
        let detalhado = AtletaDetalhado {
            atleta: crate::models::Atleta {
                id: Uuid::new_v4(),
                nome: "João".to_string(),
                cpf: "12345678900".to_string(),
                idade: 20,
                peso: 70.5,
                altura: 1.70,
                sexo: "M".to_string(),
                created_at: now,
                categoria_id: Uuid::new_v4(),
                centro_treinamento_id: Uuid::new_v4(),
            },
            categoria_nome: "Scale".to_string(),
            centro_treinamento_nome: "CT King".to_string(),
        };

        let response = AtletaResponse::from(detalhado);
        assert_eq!(response.categoria.nome, "Scale");
        assert_eq!(response.centro_treinamento.nome, "CT King");
        assert_eq!(response.cpf, "12345678900");
    }
}
