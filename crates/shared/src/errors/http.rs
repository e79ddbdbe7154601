use crate::{
    domain::responses::ApiResponse,
    errors::{repository::RepositoryError, service::ServiceError},
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for AppErrorHttp {
    fn from(rejection: JsonRejection) -> Self {
        Self(ServiceError::Validation(format!(
            "Requisição inválida: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for AppErrorHttp {
    fn from(rejection: PathRejection) -> Self {
        Self(ServiceError::Validation(format!(
            "Parâmetro inválido: {}",
            rejection.body_text()
        )))
    }
}

impl AppErrorHttp {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            ServiceError::Consistencia(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (
                    StatusCode::BAD_REQUEST,
                    "Transação não encontrada.".to_string(),
                ),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno ao acessar o banco de dados.".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            },

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        let body = Json(ApiResponse::<()>::falha(msg));

        (status, body).into_response()
    }
}
