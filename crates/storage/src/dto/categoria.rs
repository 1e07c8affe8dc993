use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new categoria
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoriaRequest {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Nome must be between 1 and 10 characters"
    ))]
    #[schema(example = "Scale")]
    pub nome: String,
}

/// Request payload for partially updating a categoria
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoriaRequest {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Nome must be between 1 and 10 characters"
    ))]
    pub nome: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriaResponse {
    pub id: Uuid,
    pub nome: String,
}

impl From<crate::models::Categoria> for CategoriaResponse {
    fn from(categoria: crate::models::Categoria) -> Self {
        Self {
            id: categoria.id,
            nome: categoria.nome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_empty_and_long_names() {
        let empty = CreateCategoriaRequest {
            nome: String::new(),
        };
        assert!(empty.validate().is_err());

        let long = CreateCategoriaRequest {
            nome: "Heavyweight".to_string(),
        };
        assert!(long.validate().is_err());

        let ok = CreateCategoriaRequest {
            nome: "Scale".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateCategoriaRequest::default().validate().is_ok());
    }
}
