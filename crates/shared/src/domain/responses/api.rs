use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform body for every endpoint: exactly one of `dados`/`erros` is set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub dados: Option<T>,
    pub erros: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn sucesso(dados: T) -> Self {
        Self {
            dados: Some(dados),
            erros: None,
        }
    }

    pub fn falha(erros: impl Into<String>) -> Self {
        Self {
            dados: None,
            erros: Some(erros.into()),
        }
    }
}
